mod build;
mod info;
mod options;
mod upload;

pub use build::cmd_build;
pub use info::cmd_info;
pub use options::cmd_options;
pub use upload::cmd_upload;

use anyhow::Result;
use clap::Args;

use stemcell_lib::options::OptionsResolver;
use stemcell_lib::{Environment, Options, Overrides};

/// Flags shared by every command that resolves builder options.
#[derive(Debug, Args)]
pub struct ResolveArgs {
  /// Target infrastructure (aws, vsphere, openstack)
  #[arg(short, long)]
  pub infrastructure: Option<String>,

  /// Image disk size in megabytes, overriding the infrastructure default
  #[arg(long)]
  pub disk_size: Option<u64>,

  /// Extra option merged over the resolved ones (repeatable)
  #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
  pub set: Vec<(String, String)>,

  /// Micro BOSH manifest; enables a micro stemcell build
  #[arg(long, requires = "micro_tarball")]
  pub micro_manifest: Option<String>,

  /// Micro BOSH release tarball
  #[arg(long, requires = "micro_manifest")]
  pub micro_tarball: Option<String>,
}

impl ResolveArgs {
  fn overrides(&self) -> Overrides {
    let mut overrides = Overrides::default();
    if let Some(disk_size) = self.disk_size {
      overrides = overrides.with_disk_size(disk_size);
    }
    for (key, value) in &self.set {
      overrides = overrides.with_extra(key.as_str(), value.as_str());
    }
    overrides
  }
}

/// Resolve options for `args`, adding the micro stemcell options when requested.
///
/// Resolution errors are returned unwrapped so the caller can recognize them.
pub(crate) fn resolve_options(env: &Environment, args: &ResolveArgs) -> Result<Options> {
  let resolver = OptionsResolver::from_env(env.clone());
  let options = resolver.resolve(args.infrastructure.as_deref(), &args.overrides())?;

  Ok(match (&args.micro_manifest, &args.micro_tarball) {
    (Some(manifest), Some(tarball)) => options.merged(&resolver.micro_options(manifest, tarball)),
    _ => options,
  })
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
  match s.split_once('=') {
    Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
    _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
  }
}
