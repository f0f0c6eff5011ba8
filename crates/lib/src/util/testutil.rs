//! Test doubles for the execution collaborators.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::execute::{CommandLine, CommandRunner, CopyError, FileCopier, RunError};

/// Records every command instead of running it.
#[derive(Debug, Default)]
pub struct RecordingRunner {
  commands: Mutex<Vec<CommandLine>>,
}

impl RecordingRunner {
  pub fn commands(&self) -> Vec<CommandLine> {
    self.commands.lock().unwrap().clone()
  }

  /// Recorded commands rendered as shell lines.
  pub fn rendered(&self) -> Vec<String> {
    self.commands().iter().map(ToString::to_string).collect()
  }
}

impl CommandRunner for RecordingRunner {
  fn run(&self, command: &CommandLine) -> Result<(), RunError> {
    self.commands.lock().unwrap().push(command.clone());
    Ok(())
  }
}

/// Fails every command with exit code 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRunner;

impl CommandRunner for FailingRunner {
  fn run(&self, command: &CommandLine) -> Result<(), RunError> {
    Err(RunError::Failed {
      cmd: command.to_string(),
      code: Some(1),
    })
  }
}

/// One recorded copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCall {
  pub sources: Vec<PathBuf>,
  pub dest: PathBuf,
  pub preserve: bool,
}

/// Records copy requests without touching the filesystem.
#[derive(Debug, Default)]
pub struct StubCopier {
  calls: Mutex<Vec<CopyCall>>,
}

impl StubCopier {
  pub fn calls(&self) -> Vec<CopyCall> {
    self.calls.lock().unwrap().clone()
  }
}

impl FileCopier for StubCopier {
  fn copy_recursive(&self, sources: &[PathBuf], dest: &Path, preserve: bool) -> Result<(), CopyError> {
    self.calls.lock().unwrap().push(CopyCall {
      sources: sources.to_vec(),
      dest: dest.to_path_buf(),
      preserve,
    });
    Ok(())
  }
}

/// Fails every copy with a permission error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingCopier;

impl FileCopier for FailingCopier {
  fn copy_recursive(&self, _sources: &[PathBuf], dest: &Path, _preserve: bool) -> Result<(), CopyError> {
    Err(CopyError::Copy {
      from: PathBuf::from("stemcell_builder"),
      to: dest.to_path_buf(),
      source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    })
  }
}
