//! Implementation of the `stemcell options` command.

use anyhow::Result;

use stemcell_lib::Environment;

use crate::cmd::{ResolveArgs, resolve_options};
use crate::output::{print_json, print_options};

/// Print the options the builder would receive, one `KEY=value` per line.
pub fn cmd_options(args: &ResolveArgs, json: bool) -> Result<()> {
  let options = resolve_options(&Environment::from_process(), args)?;

  if json {
    return print_json(&options);
  }

  print_options(&options);
  Ok(())
}
