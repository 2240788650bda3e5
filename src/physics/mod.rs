// src/physics/mod.rs
pub mod contraction;
pub mod grid;
pub mod quantize;

pub use contraction::{contract, ResponseField};
pub use grid::{anchor_grid, direction_grid, AnchorGrid};
pub use quantize::{quantize, ColorBucket};
