// src/utils/linalg.rs

use nalgebra::{Matrix3, Vector3};

/// Row-major 3x3 tensor as an nalgebra matrix (`m[(k, l)] == t[k][l]`).
pub fn tensor_to_matrix(t: &[[f64; 3]; 3]) -> Matrix3<f64> {
  Matrix3::from_row_slice(&[
    t[0][0], t[0][1], t[0][2],
    t[1][0], t[1][1], t[1][2],
    t[2][0], t[2][1], t[2][2],
  ])
}

/// Matrix-vector product `m × d`.
///
/// # Formula
/// ```text
/// v[k] = Σ_l m[k][l] · d[l]
/// ```
pub fn mat_vec(m: &Matrix3<f64>, d: [f64; 3]) -> [f64; 3] {
  let v = m * Vector3::from(d);
  [v.x, v.y, v.z]
}

/// Euclidean length of a 3-vector.
///
/// Chained `hypot`: squaring components near 1e-170 or 1e160 would
/// underflow to zero or overflow to infinity.
pub fn norm(v: [f64; 3]) -> f64 {
  v[0].hypot(v[1]).hypot(v[2])
}
