use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{RUBY_FALLBACK_BINDIR, RUBY_INSTALL_NAME};
use crate::env::{Environment, vars};

/// The interpreter the builder should use inside the image.
///
/// Mirrors how the host describes its own interpreter: a binary directory and
/// an install name, joined to get the executable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInterpreter {
  bindir: PathBuf,
  install_name: String,
}

impl HostInterpreter {
  pub fn new(bindir: impl Into<PathBuf>, install_name: impl Into<String>) -> Self {
    Self {
      bindir: bindir.into(),
      install_name: install_name.into(),
    }
  }

  /// Find the interpreter on the injected `PATH`.
  ///
  /// Falls back to the conventional system location when it cannot be found,
  /// so a value is always available.
  pub fn detect(env: &Environment) -> Self {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let found = which::which_in(RUBY_INSTALL_NAME, env.get(vars::PATH), cwd);

    match found {
      Ok(path) => {
        let bindir = path.parent().map(Path::to_path_buf);
        let install_name = path.file_name().and_then(|n| n.to_str()).map(str::to_string);
        match (bindir, install_name) {
          (Some(bindir), Some(install_name)) => Self::new(bindir, install_name),
          _ => Self::fallback(),
        }
      }
      Err(e) => {
        debug!(error = %e, "interpreter not found on PATH, using fallback");
        Self::fallback()
      }
    }
  }

  fn fallback() -> Self {
    Self::new(RUBY_FALLBACK_BINDIR, RUBY_INSTALL_NAME)
  }

  pub fn bindir(&self) -> &Path {
    &self.bindir
  }

  pub fn install_name(&self) -> &str {
    &self.install_name
  }

  /// Full path of the interpreter executable
  pub fn binary(&self) -> PathBuf {
    self.bindir.join(&self.install_name)
  }
}
