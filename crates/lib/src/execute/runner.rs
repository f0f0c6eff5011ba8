//! Command runners.

use tracing::{debug, info};

use crate::execute::types::{CommandLine, RunError};

/// Runs a command to completion.
///
/// Implementations block until the process exits and report a non-zero exit
/// status as [`RunError::Failed`].
pub trait CommandRunner {
  fn run(&self, command: &CommandLine) -> Result<(), RunError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
  fn run(&self, command: &CommandLine) -> Result<(), RunError> {
    (**self).run(command)
  }
}

/// Spawns commands on the host, inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, command: &CommandLine) -> Result<(), RunError> {
    info!(cmd = %command, "executing command");

    let mut process = command.to_command();
    debug!(program = ?process.get_program(), "spawning process");

    let status = process.status().map_err(|source| RunError::Spawn {
      program: command.program().to_string(),
      source,
    })?;

    if !status.success() {
      return Err(RunError::Failed {
        cmd: command.to_string(),
        code: status.code(),
      });
    }

    Ok(())
  }
}

/// Logs commands instead of running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
  fn run(&self, command: &CommandLine) -> Result<(), RunError> {
    info!(cmd = %command, "dry run, not executing command");
    Ok(())
  }
}
