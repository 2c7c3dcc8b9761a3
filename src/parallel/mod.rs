//! Batch helpers applying vector operations across slices of vectors.
//!
//! Every vector operation is pure, so batches can be split freely across threads. With the
//! `rayon` feature (enabled by default) the helpers run on Rayon's parallel iterators; without it
//! they fall back to sequential iterators. Results are in input order either way and are
//! bit-identical between the two builds, since each element is computed independently.

use crate::config::NormalizeOptions;
use crate::core::traits::{Dim, Scalar, SupportedDim};
use crate::error::KitError;
use crate::vector::Vector;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

fn check_lengths<A, B>(left: &[A], right: &[B]) -> Result<(), KitError> {
    if left.len() != right.len() {
        log::debug!("batch length mismatch: {} vs {}", left.len(), right.len());
        return Err(KitError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

/// Applies `f` to each pair `(a[i], b[i])`.
///
/// Returns [`KitError::LengthMismatch`] when the slices differ in length.
///
/// ```
/// # use vekit::*;
/// let a = [vec2(1u32, 2), vec2(3, 4)];
/// let b = [Vec2u::fill(1); 2];
/// let sums = parallel::zip_map(&a, &b, Vector::add).unwrap();
/// assert_eq!(sums, [vec2(2, 3), vec2(4, 5)]);
/// ```
pub fn zip_map<T, const N: usize, F>(
    a: &[Vector<T, N>],
    b: &[Vector<T, N>],
    f: F,
) -> Result<Vec<Vector<T, N>>, KitError>
where
    T: Scalar,
    Dim<N>: SupportedDim,
    F: Fn(Vector<T, N>, Vector<T, N>) -> Vector<T, N> + Send + Sync,
{
    check_lengths(a, b)?;
    #[cfg(feature = "rayon")]
    {
        Ok(a.par_iter()
            .zip(b.par_iter())
            .map(|(&x, &y)| f(x, y))
            .collect())
    }
    #[cfg(not(feature = "rayon"))]
    {
        Ok(a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect())
    }
}

/// Dot product of each pair `(a[i], b[i])`.
pub fn dot_all<T, const N: usize>(
    a: &[Vector<T, N>],
    b: &[Vector<T, N>],
) -> Result<Vec<T>, KitError>
where
    T: Scalar,
    Dim<N>: SupportedDim,
{
    check_lengths(a, b)?;
    #[cfg(feature = "rayon")]
    {
        Ok(a.par_iter()
            .zip(b.par_iter())
            .map(|(&x, &y)| x.dot(y))
            .collect())
    }
    #[cfg(not(feature = "rayon"))]
    {
        Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x.dot(y)).collect())
    }
}

/// Normalizes every vector with the guard values in `opts`.
pub fn normalize_all<T, const N: usize>(
    vs: &[Vector<T, N>],
    opts: &NormalizeOptions<T, N>,
) -> Vec<Vector<T, N>>
where
    T: Scalar,
    Dim<N>: SupportedDim,
{
    #[cfg(feature = "rayon")]
    {
        vs.par_iter().map(|v| v.normalize_with(opts)).collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        vs.iter().map(|v| v.normalize_with(opts)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::*;

    #[test]
    fn zip_map_preserves_order() {
        let a: Vec<Vec3i> = (0..64).map(|i| vec3(i, -i, 2 * i)).collect();
        let b: Vec<Vec3i> = (0..64).map(Vec3i::fill).collect();
        let out = zip_map(&a, &b, Vector::sub).unwrap();
        for (i, v) in out.iter().enumerate() {
            let i = i as i32;
            assert_eq!(*v, vec3(0, -2 * i, i));
        }
    }

    #[test]
    fn dot_all_matches_sequential() {
        let a: Vec<Vec2d> = (0..32).map(|i| vec2(i as f64, 0.5)).collect();
        let b: Vec<Vec2d> = (0..32).map(|i| vec2(1.0, i as f64)).collect();
        let dots = dot_all(&a, &b).unwrap();
        let expected: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x.dot(*y)).collect();
        assert_eq!(dots, expected);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let a = [Vec4u::fill(1); 3];
        let b = [Vec4u::fill(1); 2];
        let err = dot_all(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            KitError::LengthMismatch { left: 3, right: 2 }
        ));
        assert!(zip_map(&a, &b, Vector::max).is_err());
    }

    #[test]
    fn normalize_all_uses_fallback() {
        let opts = NormalizeOptions::new(1e-9f32, vec2(1.0, 0.0));
        let out = normalize_all(&[vec2(0.0f32, 0.0), vec2(0.0, 2.0)], &opts);
        assert_eq!(out, vec![vec2(1.0, 0.0), vec2(0.0, 1.0)]);
    }
}
