use super::{to_rank2, to_rank3};
use crate::error::{Result, SphereError};
use crate::model::calc::{HYPERPOLARIZABILITY_TAG, POLARIZABILITY_TAG};
use crate::model::{CalcResult, HyperType};
use std::fs;
use std::path::Path;

// Plain tensor blocks, one per section:
//
//   POLARIZABILITY
//   xx xy xz
//   yx yy yz
//   zx zy zz
//   HYPERPOLARIZABILITY SHG
//   xxx xxy xxz
//   ... (27 numbers, k-major then l then m)
//
// Numbers may be spread over lines freely. '#' and '!' start comments.

pub fn parse(path: &Path) -> Result<CalcResult> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

enum Section {
    Polarizability,
    Hyper(HyperType),
}

impl Section {
    fn expected(&self) -> usize {
        match self {
            Section::Polarizability => 9,
            Section::Hyper(_) => 27,
        }
    }

    fn name(&self) -> String {
        match self {
            Section::Polarizability => "polarizability".to_string(),
            Section::Hyper(t) => format!("{} hyperpolarizability", t),
        }
    }
}

pub fn parse_str(content: &str) -> Result<CalcResult> {
    let mut calc = CalcResult::default();
    let mut current: Option<(Section, Vec<f64>)> = None;

    for (lineno, raw_line) in content.lines().enumerate() {
        let line = raw_line.split(['#', '!']).next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let upper = line.to_uppercase();
        let mut words = upper.split_whitespace();
        let head = words.next().unwrap_or("");

        if head == POLARIZABILITY_TAG || head == HYPERPOLARIZABILITY_TAG {
            if let Some((section, values)) = current.take() {
                finish(&mut calc, section, values)?;
            }
            let section = if head == POLARIZABILITY_TAG {
                Section::Polarizability
            } else {
                let label = words.next().ok_or_else(|| {
                    SphereError::InputShape(format!("line {}: HYPERPOLARIZABILITY needs a type", lineno + 1))
                })?;
                let htype = HyperType::from_label(label).ok_or_else(|| {
                    SphereError::InputShape(format!("line {}: unknown hyperpolarizability type {}", lineno + 1, label))
                })?;
                Section::Hyper(htype)
            };
            current = Some((section, Vec::new()));
            continue;
        }

        let (_, values) = current.as_mut().ok_or_else(|| {
            SphereError::InputShape(format!("line {}: numbers before any section header", lineno + 1))
        })?;
        for word in line.split_whitespace() {
            // Fortran-style exponents show up in chemistry output
            let v: f64 = word.replace(['D', 'd'], "E").parse().map_err(|_| {
                SphereError::InputShape(format!("line {}: invalid number '{}'", lineno + 1, word))
            })?;
            values.push(v);
        }
    }

    if let Some((section, values)) = current.take() {
        finish(&mut calc, section, values)?;
    }
    Ok(calc)
}

fn finish(calc: &mut CalcResult, section: Section, values: Vec<f64>) -> Result<()> {
    if values.len() != section.expected() {
        return Err(SphereError::InputShape(format!(
            "{} has {} values, expected {}",
            section.name(),
            values.len(),
            section.expected()
        )));
    }

    let mut tag = |t: &str| {
        if !calc.has_tag(t) {
            calc.calctype.push(t.to_string());
        }
    };

    match section {
        Section::Polarizability => {
            tag(POLARIZABILITY_TAG);
            let rows: Vec<Vec<f64>> = values.chunks(3).map(<[f64]>::to_vec).collect();
            let t = to_rank2("polarizability", &rows)?;
            calc.polarizability.push(t);
        }
        Section::Hyper(htype) => {
            tag(HYPERPOLARIZABILITY_TAG);
            tag(htype.label());
            let planes: Vec<Vec<Vec<f64>>> = values
                .chunks(9)
                .map(|plane| plane.chunks(3).map(<[f64]>::to_vec).collect())
                .collect();
            let t = to_rank3(&section.name(), &planes)?;
            if calc.hyperpolarizability.insert(htype, t).is_some() {
                return Err(SphereError::InputShape(format!("{} given more than once", section.name())));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarizability_block() {
        let calc = parse_str(
            "# water, 589 nm\n\
             POLARIZABILITY\n\
             8.51 0.0 0.0\n\
             0.0 9.62 0.0\n\
             0.0 0.0 9.06D+00\n",
        )
        .unwrap();
        assert_eq!(calc.calctype, vec!["POLARIZABILITY"]);
        assert_eq!(calc.polarizability[0][1][1], 9.62);
        assert_eq!(calc.polarizability[0][2][2], 9.06);
    }

    #[test]
    fn test_hyper_blocks() {
        let mut text = String::from("hyperpolarizability static\n");
        for i in 0..27 {
            text.push_str(&format!("{} ", i));
            if i % 3 == 2 {
                text.push('\n');
            }
        }
        text.push_str("HYPERPOLARIZABILITY SHG\n");
        text.push_str(&"1.0 ".repeat(27));

        let calc = parse_str(&text).unwrap();
        assert!(calc.has_tag("HYPERPOLARIZABILITY"));
        assert!(calc.has_tag("STATIC"));
        assert!(calc.has_tag("SHG"));
        let s = calc.hyperpolarizability[&HyperType::Static];
        assert_eq!(s[1][2][0], 15.0);
        assert_eq!(calc.jobs().unwrap().len(), 2);
    }

    #[test]
    fn test_short_block() {
        let err = parse_str("POLARIZABILITY\n1 2 3\n4 5 6\n").unwrap_err();
        assert!(matches!(err, SphereError::InputShape(_)));
    }

    #[test]
    fn test_numbers_without_header() {
        assert!(parse_str("1 2 3\n").is_err());
    }

    #[test]
    fn test_repeated_hyper_section() {
        let text = format!(
            "HYPERPOLARIZABILITY SHG\n{}\nhyperpolarizability shg\n{}\n",
            "1.0 ".repeat(27),
            "2.0 ".repeat(27)
        );
        match parse_str(&text) {
            Err(SphereError::InputShape(msg)) => assert!(msg.contains("SHG")),
            other => panic!("expected duplicate section error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type() {
        assert!(parse_str("HYPERPOLARIZABILITY THG\n").is_err());
    }
}
