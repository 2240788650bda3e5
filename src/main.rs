//! unitsphere: draw a polarizability or hyperpolarizability tensor as
//! colored arrows on a sphere.
//!
//! ```sh
//! unitsphere sphere water.json -r 2.0
//! unitsphere inspect pna.tensor
//! unitsphere config --save
//! ```

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unitsphere::config::Config;
use unitsphere::rendering::{self, ExportOptions};
use unitsphere::{io, utils};

#[derive(Parser)]
#[command(name = "unitsphere")]
#[command(about = "Unit-sphere representation of (hyper)polarizability tensors for VMD")]
#[command(version)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only print warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Contract the tensor(s) over the sphere and write VMD scene scripts.
    Sphere {
        /// Calculation result (.json, or .tensor/.txt/.dat tensor blocks).
        input: PathBuf,
        /// Radius of the sphere the arrows start on.
        #[arg(short, long, allow_hyphen_values = true)]
        radius: Option<f64>,
        /// Name of the output file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load and validate an input file without writing anything.
    Inspect {
        input: PathBuf,
    },
    /// Show the effective configuration.
    Config {
        /// Write the current configuration to the settings file.
        #[arg(long)]
        save: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    utils::logger::init(utils::logger::level_for(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!("logger already installed: {}", e))?;

    let (cfg, msg) = Config::load();
    log::debug!("{}", msg);

    match cli.command {
        Commands::Sphere { input, radius, output } => {
            let calc = io::load_result(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;

            let options = ExportOptions {
                radius: radius.unwrap_or(cfg.default_radius),
                output,
                output_dir: cfg.output_dir.clone(),
            };
            let report = rendering::export_all(&calc, &input, &options)?;

            for path in &report.written {
                println!("{}", path.display());
            }
            if !report.is_success() {
                let failed: Vec<String> = report.failed.iter().map(|(label, e)| format!("{}: {}", label, e)).collect();
                bail!("{} of {} scene(s) failed:\n  {}", failed.len(), failed.len() + report.written.len(), failed.join("\n  "));
            }
            Ok(())
        }
        Commands::Inspect { input } => {
            let calc = io::load_result(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            print!("{}", utils::report::calc_summary(&calc, &input.display().to_string()));
            Ok(())
        }
        Commands::Config { save } => {
            println!("Settings file: {}", Config::path().display());
            println!("{}", serde_json::to_string_pretty(&cfg)?);
            if save {
                println!("{}", cfg.save());
            }
            Ok(())
        }
    }
}
