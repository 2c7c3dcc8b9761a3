//! vekit: fixed-size generic vectors over seven scalar classes
//!
//! This crate provides 2-, 3- and 4-element vectors over `f32`, `f64`, an extended float class,
//! `i32`, `i64`, `u32` and `u64`, with one uniform operation set (arithmetic, min/max, power,
//! interpolation, clamping, dot product, length, normalization, reflection, debug rendering)
//! defined once and instantiated for all 21 (scalar, dimension) pairs.

pub mod config;
pub mod core;
pub mod error;
pub mod parallel;
pub mod vector;

// Re-exports for convenience
pub use self::config::*;
pub use self::core::*;
pub use self::error::*;
pub use self::vector::*;
