use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::build::workspace::BuildWorkspace;
use crate::execute::{CommandLine, CopyError, RunError};

/// Errors that can occur during a build.
///
/// Collaborator failures are passed through untouched.
#[derive(Debug, Error)]
pub enum BuildError {
  /// `env` would take a program path containing `=` for an assignment.
  #[error("refusing to run {program}: '=' in the program path is read by env as an assignment")]
  AmbiguousProgram { program: String },

  #[error("failed to create directory {path}: {source}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to list builder files in {path}: {source}")]
  ListSources {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Stage(#[from] CopyError),

  #[error("failed to write settings {path}: {source}")]
  WriteSettings {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Run(#[from] RunError),
}

/// Where a build will happen and what will be run, computed without touching disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
  pub workspace: BuildWorkspace,
  pub command: CommandLine,
}
