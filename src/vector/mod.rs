//! Fixed-size vectors over the seven scalar classes.
//!
//! [`Vector<T, N>`] is defined once, generically, and monomorphized for every supported
//! (scalar, dimension) pair. The dimension is restricted to 2, 3 and 4 through the
//! [`SupportedDim`] bound on [`Dim<N>`], so `Vector<f32, 5>` is rejected at compile time, and
//! binary operations only accept operands of the exact same type.
//!
//! # Construction
//!
//! - [`vec2`], [`vec3`] and [`vec4`] build a vector from its elements.
//! - [`Vector::new`] and the [`From`] impl build one from an array.
//! - [`Vector::fill`] copies one value into every element.
//! - [`Default`] yields an all-zero vector.
//!
//! Vectors are `Copy` values: every operation takes its inputs by value and returns a new vector
//! (or scalar), never touching the inputs.

use crate::core::Extended;
use crate::core::traits::{Dim, Scalar, SupportedDim};
use std::{array, fmt, ops::Index};

mod debug;
mod ops;
mod tolerance;

/// A 2-element vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-element vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-element vector.
pub type Vec4<T> = Vector<T, 4>;

macro_rules! vector_aliases {
    ($($t:ty => $v2:ident, $v3:ident, $v4:ident);+ $(;)?) => {
        $(
            #[doc = concat!("A 2-element vector of `", stringify!($t), "`.")]
            pub type $v2 = Vec2<$t>;
            #[doc = concat!("A 3-element vector of `", stringify!($t), "`.")]
            pub type $v3 = Vec3<$t>;
            #[doc = concat!("A 4-element vector of `", stringify!($t), "`.")]
            pub type $v4 = Vec4<$t>;
        )+
    };
}

vector_aliases! {
    f32 => Vec2f, Vec3f, Vec4f;
    f64 => Vec2d, Vec3d, Vec4d;
    Extended => Vec2ld, Vec3ld, Vec4ld;
    i32 => Vec2i, Vec3i, Vec4i;
    i64 => Vec2li, Vec3li, Vec4li;
    u32 => Vec2u, Vec3u, Vec4u;
    u64 => Vec2lu, Vec3lu, Vec4lu;
}

/// An `N`-element vector of scalar `T`.
///
/// Only dimensions 2, 3 and 4 exist:
///
/// ```compile_fail
/// # use vekit::*;
/// let v: Vector<f32, 5> = Vector::fill(1.0);
/// ```
///
/// and operands must share scalar class and dimension:
///
/// ```compile_fail
/// # use vekit::*;
/// let v = vec3(1.0f32, 2.0, 3.0).add(vec3(1.0f64, 2.0, 3.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Scalar, const N: usize>
where
    Dim<N>: SupportedDim,
{
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    /// Number of elements.
    pub const DIM: usize = N;

    /// Creates a vector from its elements.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Creates a vector with every element equal to `value`.
    ///
    /// ```
    /// # use vekit::*;
    /// assert_eq!(Vec3i::fill(7), vec3(7, 7, 7));
    /// ```
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Creates a vector by calling `cb` with the index of each element, in order.
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self { data: array::from_fn(cb) }
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.data[3]
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    fn default() -> Self {
        Self::fill(T::zero())
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N]
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar, const N: usize> fmt::Debug for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.data {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> {
    Vector::new([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::new([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::new([x, y, z, w])
}
