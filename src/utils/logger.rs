// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Installs the stderr logger. Can only succeed once per process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Maps `-q` / `-v` counts onto a level filter (default: info).
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
  if quiet {
    return LevelFilter::Warn;
  }
  match verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

fn tag(level: Level) -> &'static str {
  match level {
    Level::Error => "error",
    Level::Warn => "warn ",
    Level::Info => "info ",
    Level::Debug => "debug",
    Level::Trace => "trace",
  }
}

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "[warn ] STATIC is tagged but has no tensor; skipping"
      let mut err = std::io::stderr().lock();
      let _ = writeln!(err, "[{}] {}", tag(record.level()), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
