//! Core numeric building blocks: the `Scalar` trait, its seven scalar classes, and the
//! type-level dimension marker.

pub mod extended;
pub mod ordering;
pub mod scalar;
pub mod traits;

pub use extended::Extended;
pub use ordering::{max_of, min_of};
pub use traits::{Dim, Scalar, SupportedDim};
