//! The settings artifact handed to the builder.
//!
//! One `KEY=value` line per option, in key order, sourced by the builder's
//! shell stages.

use std::fs;
use std::io;
use std::path::Path;

use crate::options::Options;

/// Render `options` as shell assignments.
pub fn render_settings(options: &Options) -> String {
  options
    .iter()
    .map(|(key, value)| format!("{}={}\n", key, value))
    .collect()
}

/// Write the settings artifact to `path`, replacing any existing file.
pub fn write_settings(path: &Path, options: &Options) -> io::Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, render_settings(options))
}
