//! `approx` trait impls, comparing vectors element by element with the scalar's tolerance.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::core::traits::{Dim, Scalar, SupportedDim};

use super::Vector;

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
    Dim<N>: SupportedDim,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
    Dim<N>: SupportedDim,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
    Dim<N>: SupportedDim,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
