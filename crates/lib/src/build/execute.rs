//! Stemcell build orchestration.
//!
//! A build runs strictly in sequence:
//! 1. create the workspace root and `build` directory
//! 2. stage the builder support files into `build`
//! 3. write the settings artifact
//! 4. create the work directory
//! 5. run the build script with elevated permissions
//!
//! Nothing is retried and nothing is cleaned up on failure; the workspace is
//! left as it was when the failing step stopped.

use std::path::Path;

use tracing::{debug, info};

use crate::build::command::builder_command;
use crate::build::settings::write_settings;
use crate::build::types::{BuildError, BuildPlan};
use crate::build::workspace::{BuildWorkspace, WorkspaceToken};
use crate::env::Environment;
use crate::execute::{CommandRunner, FileCopier, list_dir};
use crate::options::Options;
use crate::platform::SourceTree;

/// Runs stemcell builds through injected collaborators.
#[derive(Debug, Clone)]
pub struct StemcellBuilder<R, C> {
  env: Environment,
  sources: SourceTree,
  token: WorkspaceToken,
  runner: R,
  copier: C,
}

impl<R: CommandRunner, C: FileCopier> StemcellBuilder<R, C> {
  /// Create a builder using the source tree discovered from `env` and a
  /// workspace token no other builder in this process shares.
  pub fn new(env: Environment, runner: R, copier: C) -> Self {
    let sources = SourceTree::discover(&env);
    Self {
      env,
      sources,
      token: WorkspaceToken::unique(),
      runner,
      copier,
    }
  }

  pub fn with_token(mut self, token: WorkspaceToken) -> Self {
    self.token = token;
    self
  }

  pub fn with_sources(mut self, sources: SourceTree) -> Self {
    self.sources = sources;
    self
  }

  /// Compute the workspace and builder command for `spec_name`.
  pub fn plan(&self, spec_name: &str) -> BuildPlan {
    let workspace = BuildWorkspace::resolve(&self.env, &self.token);
    let command = builder_command(&workspace, spec_name, &self.env);
    BuildPlan { workspace, command }
  }

  /// Build the stemcell described by `spec_name` with `options` as settings.
  pub fn build(&self, spec_name: &str, options: &Options) -> Result<(), BuildError> {
    let BuildPlan { workspace, command } = self.plan(spec_name);
    if command.is_elevated() && command.program().contains('=') {
      return Err(BuildError::AmbiguousProgram {
        program: command.program().to_string(),
      });
    }
    info!(spec = %spec_name, root = %workspace.root().display(), "starting stemcell build");

    let build_dir = workspace.create_build_dir().map_err(|source| BuildError::CreateDir {
      path: workspace.build_dir(),
      source,
    })?;

    self.stage_builder(&build_dir)?;

    let settings_path = workspace.settings_path();
    write_settings(&settings_path, options).map_err(|source| BuildError::WriteSettings {
      path: settings_path.clone(),
      source,
    })?;
    debug!(path = %settings_path.display(), count = options.len(), "wrote settings");

    workspace.create_work_dir().map_err(|source| BuildError::CreateDir {
      path: workspace.work_dir().to_path_buf(),
      source,
    })?;

    self.runner.run(&command)?;

    info!(spec = %spec_name, "stemcell build finished");
    Ok(())
  }

  fn stage_builder(&self, build_dir: &Path) -> Result<(), BuildError> {
    let builder_dir = self.sources.stemcell_builder_dir();
    let sources = list_dir(&builder_dir).map_err(|source| BuildError::ListSources {
      path: builder_dir.clone(),
      source,
    })?;

    info!(from = %builder_dir.display(), entries = sources.len(), "staging builder files");
    self.copier.copy_recursive(&sources, build_dir, true)?;
    Ok(())
  }
}
