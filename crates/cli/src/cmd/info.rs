use anyhow::Result;

use stemcell_lib::build::{BuildWorkspace, WorkspaceToken};
use stemcell_lib::consts::{AGENT_VERSION, BOSH_PROTOCOL_VERSION};
use stemcell_lib::platform::{HostInterpreter, SourceTree};
use stemcell_lib::Environment;

use crate::output::{print_heading, print_stat};

pub fn cmd_info() -> Result<()> {
  let env = Environment::from_process();
  let sources = SourceTree::discover(&env);
  let workspace = BuildWorkspace::resolve(&env, &WorkspaceToken::unique());

  print_heading(&format!("stemcell {}", AGENT_VERSION));
  print_stat("Protocol version", BOSH_PROTOCOL_VERSION);
  print_stat("Source tree", &sources.root().display().to_string());
  print_stat("Builder files", &sources.stemcell_builder_dir().display().to_string());
  print_stat("Ruby", &HostInterpreter::detect(&env).binary().display().to_string());
  print_stat("Workspace root", &workspace.root().display().to_string());
  Ok(())
}
