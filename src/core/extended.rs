//! The extended-precision float class.
//!
//! Rust has no stable extended-precision float type, so [`Extended`] stores an `f64` and every
//! operation runs in double precision. It exists as a distinct type so that `Vector<Extended, N>`
//! keeps its own identity (suffix `ld` in debug output) and cannot be mixed with `f64` vectors.
//! Numeric results are identical to the `f64` class.

use crate::core::traits::{Scalar, sealed::Sealed};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Extended-precision float, collapsed to `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Extended(pub f64);

impl Extended {
    /// Returns the underlying double-precision value.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

macro_rules! forward_binop {
    ($($trait:ident :: $method:ident),+) => {
        $(
            impl $trait for Extended {
                type Output = Extended;

                #[inline]
                fn $method(self, rhs: Extended) -> Extended {
                    Extended($trait::$method(self.0, rhs.0))
                }
            }
        )+
    };
}

forward_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Extended {
    type Output = Extended;

    #[inline]
    fn neg(self) -> Extended {
        Extended(-self.0)
    }
}

impl From<f64> for Extended {
    #[inline]
    fn from(value: f64) -> Self {
        Extended(value)
    }
}

impl From<Extended> for f64 {
    #[inline]
    fn from(value: Extended) -> Self {
        value.0
    }
}

impl Zero for Extended {
    fn zero() -> Self {
        Extended(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Extended {
    fn one() -> Self {
        Extended(1.0)
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AbsDiffEq for Extended {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Extended {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl UlpsEq for Extended {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

impl Sealed for Extended {}

impl Scalar for Extended {
    const SUFFIX: &'static str = "ld";

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
    fn pow_elem(self, exp: Self) -> Self {
        Extended((self.0 as f32).powf(exp.0 as f32) as f64)
    }

    #[inline]
    fn sqrt_elem(self) -> Self {
        Extended(self.0.sqrt())
    }

    #[inline]
    fn abs_elem(self) -> Self {
        Extended(self.0.abs())
    }

    fn fmt_elem(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
