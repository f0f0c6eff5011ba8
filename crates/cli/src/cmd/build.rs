//! Implementation of the `stemcell build` command.
//!
//! Resolves the builder options, then stages the workspace and runs the
//! builder. With `--dry-run` the builder command is only logged.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use stemcell_lib::build::{BuildPlan, StemcellBuilder};
use stemcell_lib::execute::{CommandRunner, DryRunRunner, FsCopier, SystemRunner};
use stemcell_lib::{Environment, Options};

use crate::cmd::{ResolveArgs, resolve_options};
use crate::output::{print_stat, print_success};

pub fn cmd_build(spec: &str, args: &ResolveArgs, dry_run: bool) -> Result<()> {
  let env = Environment::from_process();
  let options = resolve_options(&env, args)?;

  let start = Instant::now();
  let plan = if dry_run {
    run_build(StemcellBuilder::new(env, DryRunRunner, FsCopier), spec, &options)?
  } else {
    run_build(StemcellBuilder::new(env, SystemRunner, FsCopier), spec, &options)?
  };
  let elapsed = Duration::from_millis(start.elapsed().as_millis() as u64);

  if dry_run {
    print_success(&format!("Dry run of '{}' complete", spec));
  } else {
    print_success(&format!("Built stemcell '{}'", spec));
  }
  print_stat("Workspace", &plan.workspace.root().display().to_string());
  print_stat("Settings", &plan.workspace.settings_path().display().to_string());
  print_stat("Command", &plan.command.to_string());
  print_stat("Elapsed", &humantime::format_duration(elapsed).to_string());

  Ok(())
}

fn run_build<R: CommandRunner>(builder: StemcellBuilder<R, FsCopier>, spec: &str, options: &Options) -> Result<BuildPlan> {
  let plan = builder.plan(spec);
  builder
    .build(spec, options)
    .with_context(|| format!("Build of '{}' failed", spec))?;
  Ok(plan)
}
