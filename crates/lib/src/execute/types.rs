//! Types shared by the execution collaborators.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Program used to elevate the builder invocation.
pub const ELEVATE_PROGRAM: &str = "sudo";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum RunError {
  /// The program could not be started.
  #[error("failed to spawn {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  /// The program ran but exited unsuccessfully.
  #[error("command failed with exit code {code:?}: {cmd}")]
  Failed { cmd: String, code: Option<i32> },
}

/// Errors that can occur while copying files.
#[derive(Debug, Error)]
pub enum CopyError {
  /// Walking a source tree failed.
  #[error("failed to walk {path}: {source}")]
  Walk {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  /// Copying a single entry failed.
  #[error("failed to copy {from} to {to}: {source}")]
  Copy {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// A fully structured command invocation.
///
/// Arguments are kept as a list and never re-parsed by a shell. When the
/// command is elevated it runs as `sudo env NAME=value... program args...`,
/// so the environment overlay is the only caller state that crosses the
/// privilege boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
  program: String,
  args: Vec<String>,
  env: Vec<(String, String)>,
  elevated: bool,
}

impl CommandLine {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      env: Vec::new(),
      elevated: false,
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  /// Add an environment assignment. Order is preserved.
  pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.env.push((name.into(), value.into()));
    self
  }

  /// Run the command with elevated permissions.
  pub fn elevated(mut self) -> Self {
    self.elevated = true;
    self
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }

  pub fn env_overlay(&self) -> &[(String, String)] {
    &self.env
  }

  pub fn is_elevated(&self) -> bool {
    self.elevated
  }

  /// Build the process to spawn.
  pub fn to_command(&self) -> Command {
    if self.elevated {
      let mut command = Command::new(ELEVATE_PROGRAM);
      command.arg("env");
      for (name, value) in &self.env {
        command.arg(format!("{}={}", name, value));
      }
      command.arg(&self.program).args(&self.args);
      command
    } else {
      let mut command = Command::new(&self.program);
      command.args(&self.args).envs(self.env.iter().map(|(k, v)| (k, v)));
      command
    }
  }
}

/// Renders the equivalent shell line, with assignments as `NAME='value'`.
///
/// An elevated command with no assignments keeps the empty slot, e.g.
/// `sudo env  /build/bin/script arg`.
impl fmt::Display for CommandLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let assignments: Vec<String> = self
      .env
      .iter()
      .map(|(name, value)| format!("{}='{}'", name, value))
      .collect();

    if self.elevated {
      write!(f, "{} env {} {}", ELEVATE_PROGRAM, assignments.join(" "), self.program)?;
    } else {
      for assignment in &assignments {
        write!(f, "{} ", assignment)?;
      }
      write!(f, "{}", self.program)?;
    }

    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}
