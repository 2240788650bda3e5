//src/model/mod.rs
pub mod calc;
pub mod tensor;

// Re-exports for cleaner imports
pub use calc::{CalcResult, HyperpolarizabilitySet, Job};
pub use tensor::{HyperType, Rank2Tensor, Rank3Tensor, ResponseTensor};
