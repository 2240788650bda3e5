//! Unit-sphere representation of molecular response tensors.
//!
//! A polarizability (rank 2) or hyperpolarizability (rank 3) is contracted
//! with 648 directions on the unit sphere; the induced vectors are colored
//! by relative magnitude and written as a VMD Tcl script.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod utils;

pub use error::{Result, SphereError};
