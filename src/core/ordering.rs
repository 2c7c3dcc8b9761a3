//! Comparison-based minimum and maximum.
//!
//! Both helpers return the second argument whenever the comparison is false. That covers ties
//! and any comparison involving a NaN, so `min_of(NaN, x) == x` and `min_of(x, NaN)` is NaN.

/// `a` if `a < b`, otherwise `b`.
#[inline]
pub fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// `a` if `a > b`, otherwise `b`.
#[inline]
pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}
