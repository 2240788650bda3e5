// src/model/tensor.rs

use std::fmt;

/// Linear response (polarizability), indexed `[k][l]` over {x, y, z}.
pub type Rank2Tensor = [[f64; 3]; 3];

/// Quadratic response (hyperpolarizability), indexed `[k][l][m]`.
pub type Rank3Tensor = [[[f64; 3]; 3]; 3];

/// A response tensor as handed over by the parser.
///
/// The variant alone selects the contraction rule; everything downstream
/// of contraction is rank agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseTensor {
    Rank2(Rank2Tensor),
    Rank3(Rank3Tensor),
}

impl ResponseTensor {
    pub fn rank(&self) -> usize {
        match self {
            ResponseTensor::Rank2(_) => 2,
            ResponseTensor::Rank3(_) => 3,
        }
    }
}

/// Hyperpolarizability flavours, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HyperType {
    Shg,
    Eope,
    Or,
    Static,
}

impl HyperType {
    pub const ALL: [HyperType; 4] = [HyperType::Shg, HyperType::Eope, HyperType::Or, HyperType::Static];

    pub fn label(&self) -> &'static str {
        match self {
            HyperType::Shg => "SHG",
            HyperType::Eope => "EOPE",
            HyperType::Or => "OR",
            HyperType::Static => "STATIC",
        }
    }

    /// Lower-case label used inside output file names.
    pub fn file_tag(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for HyperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
