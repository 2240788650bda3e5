// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Sphere radius used when `--radius` is not given.
  #[serde(default = "default_radius")]
  pub default_radius: f64,

  /// Where derived scene names go; next to the input when unset.
  #[serde(default)]
  pub output_dir: Option<PathBuf>,
}

fn default_radius() -> f64 {
  1.0
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_radius: default_radius(),
      output_dir: None,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/unitsphere/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  pub fn path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "unitsphere") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
