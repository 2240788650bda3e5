// src/model/calc.rs

use super::tensor::{HyperType, Rank2Tensor, Rank3Tensor, ResponseTensor};
use crate::error::{Result, SphereError};
use std::collections::BTreeMap;

/// Rank-3 tensors keyed by flavour; iteration follows `HyperType` order.
pub type HyperpolarizabilitySet = BTreeMap<HyperType, Rank3Tensor>;

pub const POLARIZABILITY_TAG: &str = "POLARIZABILITY";
pub const HYPERPOLARIZABILITY_TAG: &str = "HYPERPOLARIZABILITY";

/// One tensor to be turned into one scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub subtype: Option<HyperType>,
    pub tensor: ResponseTensor,
}

impl Job {
    pub fn label(&self) -> String {
        match self.subtype {
            Some(t) => format!("{} hyperpolarizability", t),
            None => "polarizability".to_string(),
        }
    }
}

/// Structured result of a polarizability or hyperpolarizability calculation.
#[derive(Debug, Clone, Default)]
pub struct CalcResult {
    /// Classification tags, upper case.
    pub calctype: Vec<String>,
    /// Frequency-dependent polarizabilities; the first one is visualized.
    pub polarizability: Vec<Rank2Tensor>,
    pub hyperpolarizability: HyperpolarizabilitySet,
}

impl CalcResult {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.calctype.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Work items in processing order.
    ///
    /// Polarizability wins when both top-level tags are present. Only
    /// sub-types that are both tagged and carry a tensor are returned.
    pub fn jobs(&self) -> Result<Vec<Job>> {
        if self.has_tag(POLARIZABILITY_TAG) {
            let first = self.polarizability.first().ok_or_else(|| {
                SphereError::InputShape("POLARIZABILITY is tagged but no polarizability tensor was given".into())
            })?;
            if self.polarizability.len() > 1 {
                log::info!(
                    "{} polarizabilities present; visualizing the first one",
                    self.polarizability.len()
                );
            }
            return Ok(vec![Job { subtype: None, tensor: ResponseTensor::Rank2(*first) }]);
        }

        if self.has_tag(HYPERPOLARIZABILITY_TAG) {
            let mut jobs = Vec::new();
            for htype in HyperType::ALL {
                let tagged = self.has_tag(htype.label());
                match (tagged, self.hyperpolarizability.get(&htype)) {
                    (true, Some(t)) => jobs.push(Job { subtype: Some(htype), tensor: ResponseTensor::Rank3(*t) }),
                    (true, None) => log::warn!("{} is tagged but has no tensor; skipping", htype),
                    (false, Some(_)) => log::warn!("{} tensor present without its tag; skipping", htype),
                    (false, None) => {}
                }
            }
            if jobs.is_empty() {
                return Err(SphereError::InputShape(
                    "HYPERPOLARIZABILITY is tagged but no SHG/EOPE/OR/STATIC tensor is usable".into(),
                ));
            }
            return Ok(jobs);
        }

        Err(SphereError::MissingClassification(self.calctype.clone()))
    }
}
