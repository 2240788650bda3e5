// src/io/mod.rs
pub mod json;
pub mod text;

use crate::error::{Result, SphereError};
use crate::model::{CalcResult, Rank2Tensor, Rank3Tensor};
use std::path::Path;

pub fn load_result(path: &Path) -> Result<CalcResult> {
    let p = path.to_string_lossy().to_lowercase();

    if p.ends_with(".txt") || p.ends_with(".tensor") || p.ends_with(".dat") {
        text::parse(path)
    } else {
        // JSON for .json and anything unknown
        json::parse(path)
    }
}

fn check_finite(name: &str, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(SphereError::InputShape(format!("{} contains non-finite value {}", name, v))),
        None => Ok(()),
    }
}

/// Validates a nested 3x3 block.
pub fn to_rank2(name: &str, rows: &[Vec<f64>]) -> Result<Rank2Tensor> {
    if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
        let shape: Vec<usize> = rows.iter().map(Vec::len).collect();
        return Err(SphereError::InputShape(format!(
            "{} must be 3x3, got {} rows with lengths {:?}",
            name,
            rows.len(),
            shape
        )));
    }

    let mut t = [[0.0; 3]; 3];
    for (k, row) in rows.iter().enumerate() {
        check_finite(name, row)?;
        t[k].copy_from_slice(row);
    }
    Ok(t)
}

/// Validates a nested 3x3x3 block.
pub fn to_rank3(name: &str, planes: &[Vec<Vec<f64>>]) -> Result<Rank3Tensor> {
    if planes.len() != 3 {
        return Err(SphereError::InputShape(format!(
            "{} must be 3x3x3, got {} planes",
            name,
            planes.len()
        )));
    }

    let mut t = [[[0.0; 3]; 3]; 3];
    for (k, plane) in planes.iter().enumerate() {
        t[k] = to_rank2(&format!("{}[{}]", name, k), plane)?;
    }
    Ok(t)
}
