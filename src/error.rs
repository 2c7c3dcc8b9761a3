use thiserror::Error;

// Unified error type for vekit

#[derive(Error, Debug)]
pub enum KitError {
    #[error("integer division by zero at element {index}")]
    DivisionByZero { index: usize },
    #[error("batch length mismatch: {left} vs {right} vectors")]
    LengthMismatch { left: usize, right: usize },
    #[error("debug sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}
