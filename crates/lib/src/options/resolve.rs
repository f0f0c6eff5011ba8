use tracing::debug;

use crate::consts::BOSH_PROTOCOL_VERSION;
use crate::env::{Environment, vars};
use crate::infrastructure::Infrastructure;
use crate::options::keys;
use crate::options::micro::micro_options;
use crate::options::types::{Options, Overrides, ResolveError};
use crate::platform::{HostInterpreter, SourceTree};

/// Environment variables copied into the options verbatim when present.
const PASSTHROUGH: [(&str, &str); 5] = [
  (vars::STEMCELL_NAME, keys::STEMCELL_NAME),
  (vars::UBUNTU_ISO, keys::UBUNTU_ISO),
  (vars::UBUNTU_MIRROR, keys::UBUNTU_MIRROR),
  (vars::TW_LOCAL_PASSPHRASE, keys::TW_LOCAL_PASSPHRASE),
  (vars::TW_SITE_PASSPHRASE, keys::TW_SITE_PASSPHRASE),
];

/// Resolves the options handed to the stemcell builder.
///
/// Holds everything resolution depends on, so [`resolve`](Self::resolve) is a
/// pure function of its arguments.
#[derive(Debug, Clone)]
pub struct OptionsResolver {
  env: Environment,
  sources: SourceTree,
  interpreter: HostInterpreter,
}

impl OptionsResolver {
  pub fn new(env: Environment, sources: SourceTree, interpreter: HostInterpreter) -> Self {
    Self {
      env,
      sources,
      interpreter,
    }
  }

  /// Build a resolver, discovering the source tree and host interpreter from `env`.
  pub fn from_env(env: Environment) -> Self {
    let sources = SourceTree::discover(&env);
    let interpreter = HostInterpreter::detect(&env);
    Self::new(env, sources, interpreter)
  }

  /// Resolve the options for `infrastructure`.
  ///
  /// # Errors
  ///
  /// - [`ResolveError::MissingInfrastructure`] when `infrastructure` is absent or empty
  /// - [`ResolveError::UnknownInfrastructure`] when it is not a supported target
  pub fn resolve(&self, infrastructure: Option<&str>, overrides: &Overrides) -> Result<Options, ResolveError> {
    let infrastructure: Infrastructure = infrastructure.unwrap_or_default().parse()?;

    let mut options = Options::new();

    for (var, key) in PASSTHROUGH {
      options.insert_opt(key, self.env.get(var));
    }

    options.insert(keys::SYSTEM_PARAMETERS_INFRASTRUCTURE, infrastructure.as_str());
    options.insert(keys::STEMCELL_INFRASTRUCTURE, infrastructure.as_str());
    options.insert(
      keys::STEMCELL_HYPERVISOR,
      self
        .env
        .get(vars::STEMCELL_HYPERVISOR)
        .unwrap_or(infrastructure.default_hypervisor()),
    );
    options.insert(keys::BOSH_PROTOCOL_VERSION, BOSH_PROTOCOL_VERSION);

    match self.env.get(vars::RUBY_BIN) {
      Some(ruby_bin) => options.insert(keys::RUBY_BIN, ruby_bin),
      None => options.insert(keys::RUBY_BIN, self.interpreter.binary().as_path()),
    }

    options.insert(keys::BOSH_RELEASE_SRC_DIR, self.sources.release_src_dir().as_path());
    options.insert(keys::BOSH_AGENT_SRC_DIR, self.sources.agent_src_dir().as_path());
    options.insert(
      keys::IMAGE_CREATE_DISK_SIZE,
      overrides.disk_size.unwrap_or(infrastructure.default_disk_size()),
    );

    // Populated whenever OVFTOOL is set, not only for vSphere.
    options.insert_opt(keys::IMAGE_VSPHERE_OVF_OVFTOOL_PATH, self.env.get(vars::OVFTOOL));

    let options = options.merged(&overrides.extra);
    debug!(%infrastructure, count = options.len(), "resolved build options");
    Ok(options)
  }

  /// Options enabling a micro stemcell build, see [`micro_options`].
  pub fn micro_options(&self, manifest_path: &str, tarball_path: &str) -> Options {
    micro_options(&self.sources, manifest_path, tarball_path)
  }
}
