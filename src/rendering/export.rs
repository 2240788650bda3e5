// src/rendering/export.rs
use super::scene;
use crate::error::{Result, SphereError};
use crate::model::{CalcResult, HyperType, Job};
use crate::physics::quantize::histogram;
use crate::physics::{anchor_grid, contract, direction_grid, quantize};
use log::{debug, error, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const OUTPUT_SUFFIX: &str = "_unitsphere.tcl";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Radius of the sphere the arrows start on.
    pub radius: f64,
    /// Explicit output file name.
    pub output: Option<PathBuf>,
    /// Directory for derived names; defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { radius: 1.0, output: None, output_dir: None }
    }
}

/// Outcome of processing every job of one calculation.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, SphereError)>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Derives the scene file name for one job.
///
/// `input` is cut at the first '.' of its file name and `_unitsphere.tcl`
/// is appended, with `_<subtype>` in between for hyperpolarizabilities.
/// An override is taken verbatim unless several sub-types share it, in
/// which case the sub-type goes in front of its extension.
pub fn output_path(
    input: &Path,
    options: &ExportOptions,
    subtype: Option<HyperType>,
    multiple: bool,
) -> PathBuf {
    if let Some(explicit) = &options.output {
        return match subtype {
            Some(t) if multiple => insert_tag(explicit, &t.file_tag()),
            _ => explicit.clone(),
        };
    }

    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().filter(|s| !s.is_empty()).unwrap_or(name.as_str());
    let file_name = match subtype {
        Some(t) => format!("{}_{}{}", stem, t.file_tag(), OUTPUT_SUFFIX),
        None => format!("{}{}", stem, OUTPUT_SUFFIX),
    };

    let dir = options
        .output_dir
        .clone()
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(file_name)
}

fn insert_tag(path: &Path, tag: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, tag, ext.to_string_lossy()),
        None => format!("{}_{}", stem, tag),
    };
    path.with_file_name(file_name)
}

/// Writes through a hidden sibling file and renames it into place, so the
/// final name only ever holds a complete scene.
fn write_atomically<F>(path: &Path, emit: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut tmp_name = OsString::from(".");
    tmp_name.push(path.file_name().unwrap_or_default());
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let result = File::create(&tmp)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            emit(&mut writer)?;
            writer.flush()
        })
        .and_then(|_| fs::rename(&tmp, path));

    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(SphereError::Output { path: path.to_path_buf(), source });
    }
    Ok(())
}

/// Full pipeline for one tensor: contract, normalize, color, write.
pub fn render_job(job: &Job, radius: f64, path: &Path) -> Result<()> {
    let label = job.label();

    // Contraction always runs on the unit sphere
    debug!("{}: contracting rank-{} tensor", label, job.tensor.rank());
    let directions = direction_grid();
    let field = contract(&job.tensor, &directions);
    info!("{}: maximum response magnitude {:.6e}", label, field.maximum());

    let buckets = quantize(&field, &label)?;
    debug!("{}: bucket histogram {:?}", label, histogram(&buckets));

    let anchors = anchor_grid(radius);
    write_atomically(path, |w| scene::write_scene(w, &anchors, &field, &buckets))?;
    info!("{}: wrote {}", label, path.display());
    Ok(())
}

/// Renders every job of `calc`. A failing sub-type does not stop the
/// others, and files already written are left alone.
pub fn export_all(calc: &CalcResult, input: &Path, options: &ExportOptions) -> Result<ExportReport> {
    if !options.radius.is_finite() {
        return Err(SphereError::InvalidRadius(options.radius));
    }
    let jobs = calc.jobs()?;
    let multiple = jobs.len() > 1;
    let mut report = ExportReport::default();

    for job in &jobs {
        let path = output_path(input, options, job.subtype, multiple);
        match render_job(job, options.radius, &path) {
            Ok(()) => report.written.push(path),
            Err(e) => {
                error!("{}: {}", job.label(), e);
                report.failed.push((job.label(), e));
            }
        }
    }
    Ok(report)
}
