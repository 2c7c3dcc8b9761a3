//! Tests for the batch helpers in `vekit::parallel`.
//!
//! These tests check that the batch helpers agree with the per-vector operations on random
//! inputs, keep input order, and report mismatched slice lengths.

use approx::assert_abs_diff_eq;
use rand::Rng;
use vekit::parallel::{dot_all, normalize_all, zip_map};
use vekit::*;

fn random_batch(n: usize) -> Vec<Vec3d> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Vector::from_fn(|_| rng.gen_range(-10.0..10.0)))
        .collect()
}

/// Batched lerp, reflect and dot match the element-by-element results exactly.
#[test]
fn batch_matches_per_vector_ops() {
    let n = 1000;
    let a = random_batch(n);
    let b = random_batch(n);

    let t = Vec3d::fill(0.25);
    let lerped = zip_map(&a, &b, |x, y| x.lerp(y, t)).unwrap();
    let reflected = zip_map(&a, &b, Vector::reflect).unwrap();
    let dots = dot_all(&a, &b).unwrap();

    for i in 0..n {
        assert_eq!(lerped[i], a[i].lerp(b[i], t));
        assert_eq!(reflected[i], a[i].reflect(b[i]));
        assert_eq!(dots[i], a[i].dot(b[i]));
    }
}

/// Batched normalization yields unit vectors and the fallback for zero vectors.
#[test]
fn batch_normalize() {
    let mut vs = random_batch(256);
    vs[17] = Vec3d::fill(0.0);
    let opts = NormalizeOptions::new(1e-9, vec3(0.0, 0.0, 1.0));
    let out = normalize_all(&vs, &opts);
    assert_eq!(out.len(), vs.len());
    assert_eq!(out[17], opts.fallback);
    for (i, v) in out.iter().enumerate() {
        if i != 17 {
            assert_abs_diff_eq!(v.len(), 1.0, epsilon = 1e-12);
        }
    }
}

/// Slices of different lengths are rejected.
#[test]
fn batch_length_mismatch() {
    let a = random_batch(4);
    let b = random_batch(5);
    let err = zip_map(&a, &b, Vector::add).unwrap_err();
    assert!(matches!(
        err,
        KitError::LengthMismatch { left: 4, right: 5 }
    ));
    assert_eq!(err.to_string(), "batch length mismatch: 4 vs 5 vectors");
}
