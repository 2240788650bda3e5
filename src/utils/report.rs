// src/utils/report.rs

use crate::model::{CalcResult, HyperType, Rank2Tensor};

const AXES: [&str; 3] = ["x", "y", "z"];

fn push_block(out: &mut String, prefix: &str, t: &Rank2Tensor) {
    out.push_str(&format!("{:<6} {:>14} {:>14} {:>14}\n", prefix, "x", "y", "z"));
    for (k, row) in t.iter().enumerate() {
        out.push_str(&format!(
            "{:<6} {:>14.6e} {:>14.6e} {:>14.6e}\n",
            format!("{}{}", prefix, AXES[k]),
            row[0],
            row[1],
            row[2]
        ));
    }
}

/// Generates the text printed by `inspect` for a loaded calculation
pub fn calc_summary(calc: &CalcResult, filename: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("File: {}\n", filename));
    out.push_str(&format!("Calculation types: {}\n", calc.calctype.join(" ")));
    out.push_str("--------------------------------------------------\n");

    if let Some(first) = calc.polarizability.first() {
        out.push_str(&format!(
            "Polarizability ({} frequenc{}):\n",
            calc.polarizability.len(),
            if calc.polarizability.len() == 1 { "y" } else { "ies" }
        ));
        push_block(&mut out, "", first);
        out.push('\n');
    }

    for htype in HyperType::ALL {
        if let Some(t) = calc.hyperpolarizability.get(&htype) {
            out.push_str(&format!("{} hyperpolarizability:\n", htype));
            for (k, plane) in t.iter().enumerate() {
                push_block(&mut out, AXES[k], plane);
            }
            out.push('\n');
        }
    }

    out.push_str("--------------------------------------------------\n");
    match calc.jobs() {
        Ok(jobs) => {
            out.push_str(&format!("Scenes to render: {}\n", jobs.len()));
            for job in &jobs {
                out.push_str(&format!("  - {}\n", job.label()));
            }
        }
        Err(e) => out.push_str(&format!("Nothing to render: {}\n", e)),
    }
    out
}
