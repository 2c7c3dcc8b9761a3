//! Configuration types for vekit operations.

pub mod options;
pub use options::NormalizeOptions;
