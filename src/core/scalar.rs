//! `Scalar` implementations for the built-in float and integer classes.
//!
//! Each family is generated by one macro so the per-class semantics stay in one place:
//! - floats follow IEEE-754 for arithmetic and format with two decimals;
//! - integers wrap on `+`, `-`, `*`, truncate on `/` (trapping on zero), and take
//!   square roots through `f64`.
//!
//! `pow_elem` uses `f32::powf` for every class, including `f64` and the integers. Integer results
//! are truncated toward zero and saturate at the type bounds.

use crate::core::traits::{Scalar, sealed::Sealed};
use std::fmt;

macro_rules! float_scalar {
    ($($t:ty => $suffix:literal),+ $(,)?) => {
        $(
            impl Sealed for $t {}

            impl Scalar for $t {
                const SUFFIX: &'static str = $suffix;

                #[inline]
                fn add_elem(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_elem(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul_elem(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div_elem(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn checked_div_elem(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn pow_elem(self, exp: Self) -> Self {
                    (self as f32).powf(exp as f32) as $t
                }

                #[inline]
                fn sqrt_elem(self) -> Self {
                    self.sqrt()
                }

                #[inline]
                fn abs_elem(self) -> Self {
                    self.abs()
                }

                fn fmt_elem(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{:.2}", self)
                }
            }
        )+
    };
}

macro_rules! int_scalar {
    (@abs Signed, $v:expr) => {
        $v.wrapping_abs()
    };
    (@abs Unsigned, $v:expr) => {
        $v
    };
    ($class:ident: $($t:ty => $suffix:literal),+ $(,)?) => {
        $(
            impl Sealed for $t {}

            impl Scalar for $t {
                const SUFFIX: &'static str = $suffix;

                #[inline]
                fn add_elem(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub_elem(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul_elem(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn div_elem(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn checked_div_elem(self, rhs: Self) -> Option<Self> {
                    if rhs == 0 {
                        None
                    } else {
                        Some(self.wrapping_div(rhs))
                    }
                }

                #[inline]
                fn pow_elem(self, exp: Self) -> Self {
                    (self as f32).powf(exp as f32) as $t
                }

                #[inline]
                fn sqrt_elem(self) -> Self {
                    (self as f64).sqrt() as $t
                }

                #[inline]
                fn abs_elem(self) -> Self {
                    int_scalar!(@abs $class, self)
                }

                fn fmt_elem(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )+
    };
}

float_scalar!(f32 => "f", f64 => "d");
int_scalar!(Signed: i32 => "i", i64 => "li");
int_scalar!(Unsigned: u32 => "u", u64 => "lu");
