//! Core scalar and dimension traits for vekit.

use num_traits::{One, Zero};
use std::fmt;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Element type of a [`Vector`](crate::vector::Vector).
///
/// Implemented for exactly seven scalar classes: `f32`, `f64`, [`Extended`](crate::core::Extended),
/// `i32`, `i64`, `u32` and `u64`. The trait is sealed.
///
/// The `*_elem` methods carry the per-class numeric semantics every vector operation is built on:
/// integer `add_elem`/`sub_elem`/`mul_elem` wrap on overflow, integer `div_elem` truncates toward
/// zero and panics on a zero divisor, and `pow_elem` goes through the single-precision float power
/// routine for every class.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + PartialOrd
    + fmt::Debug
    + Zero
    + One
    + Send
    + Sync
    + 'static
{
    /// Type tag used in debug rendering (`f`, `d`, `ld`, `i`, `li`, `u`, `lu`).
    const SUFFIX: &'static str;

    fn add_elem(self, rhs: Self) -> Self;
    fn sub_elem(self, rhs: Self) -> Self;
    fn mul_elem(self, rhs: Self) -> Self;
    /// Native division. Panics on an integer zero divisor.
    fn div_elem(self, rhs: Self) -> Self;
    /// Division that reports an integer zero divisor as `None`. Floats always succeed.
    fn checked_div_elem(self, rhs: Self) -> Option<Self>;
    /// `self ** exp` computed with `f32::powf`, converted back to `Self`.
    fn pow_elem(self, exp: Self) -> Self;
    /// Square root, truncated back to `Self` for integer classes.
    fn sqrt_elem(self) -> Self;
    fn abs_elem(self) -> Self;
    /// Writes the element in its class-specific debug format.
    fn fmt_elem(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Type-level vector dimension.
#[derive(Debug, Clone, Copy)]
pub struct Dim<const N: usize>;

/// Marker for the supported dimensions 2, 3 and 4. Sealed.
pub trait SupportedDim: sealed::Sealed {}

impl sealed::Sealed for Dim<2> {}
impl sealed::Sealed for Dim<3> {}
impl sealed::Sealed for Dim<4> {}
impl SupportedDim for Dim<2> {}
impl SupportedDim for Dim<3> {}
impl SupportedDim for Dim<4> {}
