// src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SphereError {
    /// Tensor dimensions or contents are not usable for contraction.
    #[error("invalid tensor input: {0}")]
    InputShape(String),

    #[error("sphere radius must be a finite number, got {0}")]
    InvalidRadius(f64),

    #[error("no polarizability or hyperpolarizability tag found in calculation types {0:?}")]
    MissingClassification(Vec<String>),

    /// Every response vector has zero length, so nothing can be normalized.
    #[error("degenerate response field for {label}: maximum magnitude is {maximum}")]
    DegenerateMaximum { label: String, maximum: f64 },

    #[error("could not write scene file {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SphereError>;
