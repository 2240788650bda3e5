// src/physics/contraction.rs
use super::grid::DirectionGrid;
use crate::model::{Rank2Tensor, Rank3Tensor, ResponseTensor};
use crate::utils::linalg;

/// One induced response vector per grid direction, plus their magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseField {
    vectors: Vec<[f64; 3]>,
    norms: Vec<f64>,
    maximum: f64,
}

impl ResponseField {
    pub fn new(vectors: Vec<[f64; 3]>) -> Self {
        let norms: Vec<f64> = vectors.iter().map(|v| linalg::norm(*v)).collect();
        let maximum = norms.iter().copied().fold(0.0, f64::max);
        Self { vectors, norms, maximum }
    }

    pub fn vectors(&self) -> &[[f64; 3]] {
        &self.vectors
    }

    pub fn norms(&self) -> &[f64] {
        &self.norms
    }

    /// Largest magnitude over the whole field.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Linear response: `v[k] = Σ_l T[k][l] · d[l]`.
pub fn contract_rank2(tensor: &Rank2Tensor, grid: &DirectionGrid) -> Vec<[f64; 3]> {
    let m = linalg::tensor_to_matrix(tensor);
    grid.points().iter().map(|d| linalg::mat_vec(&m, *d)).collect()
}

/// Quadratic response: `v[k] = Σ_l Σ_m T[k][l][m] · d[l] · d[m]`.
pub fn contract_rank3_single(tensor: &Rank3Tensor, d: [f64; 3]) -> [f64; 3] {
    let mut v = [0.0; 3];
    for (k, out) in v.iter_mut().enumerate() {
        for l in 0..3 {
            for m in 0..3 {
                *out += tensor[k][l][m] * d[l] * d[m];
            }
        }
    }
    v
}

pub fn contract_rank3(tensor: &Rank3Tensor, grid: &DirectionGrid) -> Vec<[f64; 3]> {
    grid.points().iter().map(|d| contract_rank3_single(tensor, *d)).collect()
}

/// Contracts `tensor` against every unit direction of `grid`.
pub fn contract(tensor: &ResponseTensor, grid: &DirectionGrid) -> ResponseField {
    let vectors = match tensor {
        ResponseTensor::Rank2(t) => contract_rank2(t, grid),
        ResponseTensor::Rank3(t) => contract_rank3(t, grid),
    };
    ResponseField::new(vectors)
}
