use crate::build::workspace::BuildWorkspace;
use crate::env::{Environment, vars};
use crate::execute::CommandLine;

/// Variables forwarded into the elevated builder, in this order.
///
/// Nothing else from the caller's environment reaches the builder.
pub const PASSTHROUGH_VARS: [&str; 2] = [vars::HTTP_PROXY, vars::NO_PROXY];

/// The passthrough variables set in `env`, in checking order.
///
/// A variable set to the empty string counts as unset and is not forwarded.
pub fn passthrough_env(env: &Environment) -> Vec<(String, String)> {
  PASSTHROUGH_VARS
    .iter()
    .filter_map(|name| env.get(name).map(|value| (name.to_string(), value.to_string())))
    .collect()
}

/// The elevated invocation of the build script for `spec_name`.
///
/// Positional arguments are the work directory, the spec file and the
/// settings artifact.
pub fn builder_command(workspace: &BuildWorkspace, spec_name: &str, env: &Environment) -> CommandLine {
  let command = CommandLine::new(workspace.build_script().to_string_lossy())
    .arg(workspace.work_dir().to_string_lossy())
    .arg(workspace.spec_path(spec_name).to_string_lossy())
    .arg(workspace.settings_path().to_string_lossy());

  passthrough_env(env)
    .into_iter()
    .fold(command, |command, (name, value)| command.env(name, value))
    .elevated()
}
