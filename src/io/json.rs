// src/io/json.rs
use super::{to_rank2, to_rank3};
use crate::error::{Result, SphereError};
use crate::model::{CalcResult, HyperType, HyperpolarizabilitySet};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawCalc {
    #[serde(default)]
    calctype: Vec<String>,
    #[serde(default)]
    polarizability: Option<RawPolarizability>,
    #[serde(default)]
    hyperpolarizability: BTreeMap<String, Vec<Vec<Vec<f64>>>>,
}

/// A single 3x3 block, or one block per frequency.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPolarizability {
    Single(Vec<Vec<f64>>),
    Series(Vec<Vec<Vec<f64>>>),
}

pub fn parse(path: &Path) -> Result<CalcResult> {
    let content = fs::read_to_string(path)?;
    from_content(&content, path)
}

fn from_content(content: &str, path: &Path) -> Result<CalcResult> {
    let raw: RawCalc = serde_json::from_str(content).map_err(|source| SphereError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    build(raw)
}

fn build(raw: RawCalc) -> Result<CalcResult> {
    let polarizability = match raw.polarizability {
        None => Vec::new(),
        Some(RawPolarizability::Single(t)) => vec![to_rank2("polarizability", &t)?],
        Some(RawPolarizability::Series(series)) => series
            .iter()
            .enumerate()
            .map(|(i, t)| to_rank2(&format!("polarizability[{}]", i), t))
            .collect::<Result<Vec<_>>>()?,
    };

    let mut hyperpolarizability = HyperpolarizabilitySet::new();
    for (key, t) in &raw.hyperpolarizability {
        match HyperType::from_label(key) {
            Some(htype) => {
                let name = format!("{} hyperpolarizability", htype);
                if hyperpolarizability.insert(htype, to_rank3(&name, t)?).is_some() {
                    return Err(SphereError::InputShape(format!("{} given more than once", name)));
                }
            }
            None => log::warn!("Unknown hyperpolarizability type '{}' ignored", key),
        }
    }

    Ok(CalcResult {
        calctype: raw.calctype.iter().map(|t| t.trim().to_uppercase()).collect(),
        polarizability,
        hyperpolarizability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(content: &str) -> Result<CalcResult> {
        from_content(content, Path::new("test.json"))
    }

    #[test]
    fn test_single_polarizability() {
        let calc = parse_str(
            r#"{ "calctype": ["polarizability"],
                 "polarizability": [[1, 0, 0], [0, 2, 0], [0, 0, 3]] }"#,
        )
        .unwrap();
        assert_eq!(calc.calctype, vec!["POLARIZABILITY"]);
        assert_eq!(calc.polarizability.len(), 1);
        assert_eq!(calc.polarizability[0][2][2], 3.0);
    }

    #[test]
    fn test_polarizability_series() {
        let calc = parse_str(
            r#"{ "calctype": ["POLARIZABILITY"],
                 "polarizability": [
                    [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
                    [[2, 0, 0], [0, 2, 0], [0, 0, 2]] ] }"#,
        )
        .unwrap();
        assert_eq!(calc.polarizability.len(), 2);
        assert_eq!(calc.polarizability[1][0][0], 2.0);
    }

    #[test]
    fn test_hyperpolarizability() {
        let block = "[[[1,0,0],[0,0,0],[0,0,0]],[[0,0,0],[0,1,0],[0,0,0]],[[0,0,0],[0,0,0],[0,0,1]]]";
        let doc = format!(
            r#"{{ "calctype": ["HYPERPOLARIZABILITY", "SHG", "STATIC"],
                 "hyperpolarizability": {{ "static": {b}, "SHG": {b}, "THG": {b} }} }}"#,
            b = block
        );
        let calc = parse_str(&doc).unwrap();
        let kinds: Vec<_> = calc.hyperpolarizability.keys().copied().collect();
        assert_eq!(kinds, vec![HyperType::Shg, HyperType::Static]);
        assert_eq!(calc.hyperpolarizability[&HyperType::Shg][1][1][1], 1.0);
    }

    #[test]
    fn test_case_variant_keys_collide() {
        let block = "[[[1,0,0],[0,0,0],[0,0,0]],[[0,0,0],[0,1,0],[0,0,0]],[[0,0,0],[0,0,0],[0,0,1]]]";
        let doc = format!(
            r#"{{ "calctype": ["HYPERPOLARIZABILITY", "SHG"],
                 "hyperpolarizability": {{ "SHG": {b}, "shg": {b} }} }}"#,
            b = block
        );
        match parse_str(&doc) {
            Err(SphereError::InputShape(msg)) => assert!(msg.contains("SHG")),
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        match parse_str("[") {
            Err(SphereError::Parse { path, .. }) => assert_eq!(path, Path::new("test.json")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_bad_shape() {
        let err = parse_str(r#"{ "calctype": ["POLARIZABILITY"], "polarizability": [[1, 0], [0, 1]] }"#)
            .unwrap_err();
        match err {
            SphereError::InputShape(msg) => assert!(msg.contains("polarizability")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_str("{ calctype: "), Err(SphereError::Parse { .. })));
    }
}
