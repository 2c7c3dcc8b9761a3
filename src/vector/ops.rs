//! The per-element and reduction operations on [`Vector`].
//!
//! Every operation is defined once here and instantiated for all 21 (scalar, dimension) pairs by
//! monomorphization. Element arithmetic goes through the [`Scalar`] `*_elem` methods, so the
//! numeric semantics of each class (IEEE floats, wrapping integers, trapping integer division)
//! apply uniformly.
//!
//! The arithmetic operators `+`, `-`, `*`, `/` delegate to [`Vector::add`], [`Vector::sub`],
//! [`Vector::mul`] and [`Vector::div`].

use std::ops::{Add, Div, Mul, Sub};

use crate::config::NormalizeOptions;
use crate::core::ordering::{max_of, min_of};
use crate::core::traits::{Dim, Scalar, SupportedDim};
use crate::error::KitError;

use super::Vector;

#[allow(clippy::should_implement_trait, clippy::len_without_is_empty)]
impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self::from_fn(|i| f(self.data[i], other.data[i]))
    }

    /// Element-wise `self[i] + rhs[i]`. Integer classes wrap on overflow.
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::add_elem)
    }

    /// Element-wise `self[i] - rhs[i]`. Integer classes wrap, so `0u32 - 1 == u32::MAX`.
    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::sub_elem)
    }

    /// Element-wise `self[i] * rhs[i]`. Integer classes wrap on overflow.
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::mul_elem)
    }

    /// Element-wise `self[i] / rhs[i]`.
    ///
    /// Integer classes truncate toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` has a zero element and `T` is an integer class, exactly like the native
    /// `/` operator. Use [`Vector::checked_div`] to get an error instead.
    #[inline]
    pub fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::div_elem)
    }

    /// Element-wise division reporting integer division by zero as an error.
    ///
    /// Returns [`KitError::DivisionByZero`] with the index of the first zero divisor. Float
    /// classes never fail and follow IEEE-754 (`x / 0.0` is infinite or NaN).
    pub fn checked_div(self, rhs: Self) -> Result<Self, KitError> {
        let mut out = self.data;
        for (index, (elem, &divisor)) in out.iter_mut().zip(rhs.data.iter()).enumerate() {
            *elem = elem
                .checked_div_elem(divisor)
                .ok_or(KitError::DivisionByZero { index })?;
        }
        Ok(Self::new(out))
    }

    /// Element-wise minimum: `self[i]` if `self[i] < rhs[i]`, otherwise `rhs[i]`.
    ///
    /// Ties and NaN comparisons select `rhs[i]`.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_with(rhs, min_of)
    }

    /// Element-wise maximum: `self[i]` if `self[i] > rhs[i]`, otherwise `rhs[i]`.
    ///
    /// Ties and NaN comparisons select `rhs[i]`.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_with(rhs, max_of)
    }

    /// Element-wise `self[i] ** exponent[i]`.
    ///
    /// The power is always evaluated with the single-precision `f32::powf`, whatever `T` is, and
    /// converted back. For integer classes this truncates toward zero and saturates at the type
    /// bounds instead of computing an exact integer power: `vec2(2, 2).pow(vec2(-1, 40))` is
    /// `(0, i32::MAX)` for `i32`. Large `i64`/`u64` and `f64` inputs lose precision.
    #[inline]
    pub fn pow(self, exponent: Self) -> Self {
        self.zip_with(exponent, T::pow_elem)
    }

    /// Linear interpolation `self[i] + t[i] * (b[i] - self[i])`, one factor per element.
    ///
    /// `t` is not clamped, so factors outside `[0, 1]` extrapolate.
    pub fn lerp(self, b: Self, t: Self) -> Self {
        Self::from_fn(|i| {
            let a = self.data[i];
            a.add_elem(t.data[i].mul_elem(b.data[i].sub_elem(a)))
        })
    }

    /// Clamps each element as `max(lo[i], min(self[i], hi[i]))`.
    ///
    /// `min` is applied first, so when `lo[i] > hi[i]` the result is `lo[i]`.
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        Self::from_fn(|i| max_of(lo.data[i], min_of(self.data[i], hi.data[i])))
    }

    /// Dot product, accumulated left to right from zero in index order.
    pub fn dot(self, rhs: Self) -> T {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.add_elem(a.mul_elem(b)))
    }

    /// Squared length, `self.dot(self)`.
    #[inline]
    pub fn len_squared(self) -> T {
        self.dot(self)
    }

    /// Length, the square root of [`Vector::len_squared`].
    ///
    /// Integer classes take the root in `f64` and truncate back, so `vec3(1, -2, 3).len() == 3`.
    #[inline]
    pub fn len(self) -> T {
        self.len_squared().sqrt_elem()
    }

    /// Divides `self` by its length, or returns `fallback` when `|len| <= eps`.
    ///
    /// Both guard values are supplied by the caller; there is no implicit default.
    ///
    /// # Panics
    ///
    /// Integer classes divide with the trapping [`Vector::div`]. A zero vector only reaches that
    /// division when `eps` is negative, which is possible for signed classes, so
    /// `Vec3i::fill(0).normalize(-1, fallback)` panics.
    pub fn normalize(self, eps: T, fallback: Self) -> Self {
        let l = self.len();
        if l.abs_elem() <= eps {
            log::trace!("normalize: length {l:?} within eps {eps:?}, using fallback");
            return fallback;
        }
        self.div(Self::fill(l))
    }

    /// [`Vector::normalize`] with its guard values taken from `opts`.
    #[inline]
    pub fn normalize_with(self, opts: &NormalizeOptions<T, N>) -> Self {
        self.normalize(opts.eps, opts.fallback)
    }

    /// Reflects `self` about the normal `n`: `self - 2 * dot(n, self) * n`.
    ///
    /// The dot product is computed once, `n` is scaled by it and then by two, and the result is
    /// subtracted from `self`.
    pub fn reflect(self, n: Self) -> Self {
        let two = T::one().add_elem(T::one());
        let r = n.mul(Self::fill(n.dot(self)));
        let r = r.mul(Self::fill(two));
        self.sub(r)
    }
}

macro_rules! forward_operator {
    ($($trait:ident :: $method:ident),+) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Vector<T, N>
            where
                Dim<N>: SupportedDim,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Vector::$method(self, rhs)
                }
            }
        )+
    };
}

forward_operator!(Add::add, Sub::sub, Mul::mul, Div::div);

#[cfg(test)]
mod tests {
    use crate::KitError;
    use crate::core::Extended;
    use crate::vector::*;

    #[test]
    fn arithmetic_on_floats() {
        let a = vec3(1.0f32, -2.0, 3.0);
        let b = Vec3f::fill(2.0);
        assert_eq!(a.add(b), vec3(3.0, 0.0, 5.0));
        assert_eq!(a.sub(b), vec3(-1.0, -4.0, 1.0));
        assert_eq!(a.mul(b), vec3(2.0, -4.0, 6.0));
        assert_eq!(a.div(b), vec3(0.5, -1.0, 1.5));
        assert_eq!(a.dot(b), 4.0);
        assert_eq!(a.len_squared(), 14.0);
    }

    #[test]
    fn operators_match_methods() {
        let a = vec4(5i64, -6, 7, 8);
        let b = vec4(2i64, 3, -4, 5);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * b, a.mul(b));
        assert_eq!(a / b, vec4(2, -2, -1, 1));
    }

    #[test]
    fn unsigned_sub_wraps() {
        let a = vec2(1u32, 0);
        let b = vec2(2u32, 1);
        assert_eq!(a.sub(b), vec2(u32::MAX, u32::MAX));
        assert_eq!(vec2(0u64, 5).sub(vec2(1, 5)), vec2(u64::MAX, 0));
    }

    #[test]
    fn unsigned_div_min_max() {
        let ua = vec4(8u32, 4, 2, 1);
        let ub = Vec4u::fill(2);
        assert_eq!(ua.div(ub), vec4(4, 2, 1, 0));
        assert_eq!(ua.min(ub), vec4(2, 2, 2, 1));
        assert_eq!(ua.max(ub), vec4(8, 4, 2, 2));
    }

    #[test]
    #[should_panic]
    fn integer_div_by_zero_panics() {
        let _ = vec3(1i32, 2, 3).div(vec3(1, 0, 1));
    }

    #[test]
    fn checked_div_reports_first_zero() {
        let err = vec4(1u64, 2, 3, 4)
            .checked_div(vec4(1, 1, 0, 0))
            .unwrap_err();
        assert!(matches!(err, KitError::DivisionByZero { index: 2 }));
        assert_eq!(vec2(9i32, -9).checked_div(vec2(2, 2)).unwrap(), vec2(4, -4));
        let q = vec2(1.0f64, -1.0).checked_div(Vec2d::fill(0.0)).unwrap();
        assert_eq!(q, vec2(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn float_min_max_with_nan_returns_second() {
        let a = vec2(f32::NAN, 1.0);
        let b = vec2(0.5f32, f32::NAN);
        let m = a.min(b);
        assert_eq!(m.x(), 0.5);
        assert!(m.y().is_nan());
        let m = a.max(b);
        assert_eq!(m.x(), 0.5);
        assert!(m.y().is_nan());
    }

    #[test]
    fn pow_uses_float_routine() {
        let p = vec3(2.0f32, 9.0, 4.0).pow(vec3(2.0, 0.5, -1.0));
        assert_eq!(p, vec3(4.0, 3.0, 0.25));
        assert_eq!(vec2(2i32, 2).pow(vec2(-1, 40)), vec2(0, i32::MAX));
        let p = vec4(3u32, 2, 10, 0).pow(vec4(3, 10, 2, 0));
        assert_eq!(p, vec4(27, 1024, 100, 1));
    }

    #[test]
    fn lerp_per_element_factor() {
        let a = vec3(0.0f64, 10.0, -4.0);
        let b = vec3(10.0f64, 20.0, 4.0);
        let t = vec3(0.5f64, 0.0, 2.0);
        assert_eq!(a.lerp(b, t), vec3(5.0, 10.0, 12.0));
        // integer classes use integer arithmetic throughout
        assert_eq!(vec2(2u32, 8).lerp(vec2(8, 2), vec2(1, 1)), vec2(8, 2));
        assert_eq!(vec2(2i32, 8).lerp(vec2(8, 2), vec2(2, -1)), vec2(14, 14));
    }

    #[test]
    fn clamp_bounds_and_tie_break() {
        let x = vec4(-5i32, 0, 5, 10);
        let lo = Vec4i::fill(-1);
        let hi = Vec4i::fill(6);
        assert_eq!(x.clamp(lo, hi), vec4(-1, 0, 5, 6));
        let (lo, hi) = (Vec3f::fill(4.0), Vec3f::fill(2.0));
        let crossed = vec3(0.0f32, 5.0, 10.0).clamp(lo, hi);
        assert_eq!(crossed, Vec3f::fill(4.0));
    }

    #[test]
    fn length_family() {
        assert_eq!(vec2(3.0f64, 4.0).len(), 5.0);
        assert_eq!(vec3(1i32, -2, 3).len_squared(), 14);
        assert_eq!(vec3(1i32, -2, 3).len(), 3);
        assert_eq!(vec2(3u64, 4).len(), 5);
        assert_eq!(vec2(Extended(3.0), Extended(4.0)).len(), Extended(5.0));
    }

    #[test]
    fn normalize_and_fallback() {
        let fallback = vec3(0.0f32, 0.0, 1.0);
        let n = vec3(3.0f32, 0.0, 4.0).normalize(1e-6, fallback);
        assert_eq!(n, vec3(0.6, 0.0, 0.8));
        assert_eq!(Vec3f::fill(0.0).normalize(1e-6, fallback), fallback);

        let opts = crate::NormalizeOptions::new(0u32, vec2(1u32, 0));
        assert_eq!(vec2(0u32, 0).normalize_with(&opts), vec2(1, 0));
        assert_eq!(vec2(0u32, 7).normalize_with(&opts), vec2(0, 1));
    }

    #[test]
    fn reflect_about_axis() {
        let a = vec3(1.0f64, -2.0, 3.0);
        assert_eq!(a.reflect(vec3(0.0, 1.0, 0.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(vec2(4i32, -3).reflect(vec2(1, 0)), vec2(-4, -3));
    }
}
