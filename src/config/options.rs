//! Caller-supplied options for vector operations.
//!
//! This module provides the `NormalizeOptions` struct, which bundles the two guard values of
//! [`Vector::normalize`] so they can be configured once and reused, for example by the batch
//! helpers in [`crate::parallel`]. There is deliberately no `Default`: the near-zero threshold
//! and the fallback vector are always chosen by the caller.

use crate::core::traits::{Dim, Scalar, SupportedDim};
use crate::vector::Vector;

/// Guard values for normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions<T: Scalar, const N: usize>
where
    Dim<N>: SupportedDim,
{
    /// Lengths with `|len| <= eps` are treated as zero
    pub eps: T,

    /// Returned unchanged for zero-length inputs
    pub fallback: Vector<T, N>,
}

impl<T: Scalar, const N: usize> NormalizeOptions<T, N>
where
    Dim<N>: SupportedDim,
{
    pub fn new(eps: T, fallback: Vector<T, N>) -> Self {
        Self { eps, fallback }
    }
}
