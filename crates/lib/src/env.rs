//! Injected environment.
//!
//! Every ambient value the resolver and orchestrator read comes through an
//! [`Environment`]. The process environment is captured once at the program
//! boundary with [`Environment::from_process`]; tests build one from literals.

use std::collections::BTreeMap;

/// Names of the environment variables this crate understands.
pub mod vars {
  pub const OVFTOOL: &str = "OVFTOOL";
  pub const STEMCELL_HYPERVISOR: &str = "STEMCELL_HYPERVISOR";
  pub const STEMCELL_NAME: &str = "STEMCELL_NAME";
  pub const UBUNTU_ISO: &str = "UBUNTU_ISO";
  pub const UBUNTU_MIRROR: &str = "UBUNTU_MIRROR";
  pub const TW_LOCAL_PASSPHRASE: &str = "TW_LOCAL_PASSPHRASE";
  pub const TW_SITE_PASSPHRASE: &str = "TW_SITE_PASSPHRASE";
  pub const RUBY_BIN: &str = "RUBY_BIN";
  pub const BUILD_PATH: &str = "BUILD_PATH";
  pub const WORK_PATH: &str = "WORK_PATH";
  pub const HTTP_PROXY: &str = "HTTP_PROXY";
  pub const NO_PROXY: &str = "no_proxy";
  pub const PATH: &str = "PATH";
  pub const BOSH_SRC_ROOT: &str = "BOSH_SRC_ROOT";
  pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID_FOR_STEMCELLS_JENKINS_ACCOUNT";
  pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY_FOR_STEMCELLS_JENKINS_ACCOUNT";
}

/// An immutable snapshot of key/value configuration.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
  vars: BTreeMap<String, String>,
}

impl Environment {
  /// An environment with no variables set.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Capture the current process environment.
  ///
  /// Variables whose name or value is not valid UTF-8 are skipped.
  pub fn from_process() -> Self {
    std::env::vars_os()
      .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
      .collect()
  }

  /// Look up a variable, returning `None` when it is unset or empty.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
  }

  pub fn contains(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  /// Return a copy with `key` set to `value`.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.vars.insert(key.into(), value.into());
    self
  }

  /// Return a copy with `key` removed.
  pub fn without(mut self, key: &str) -> Self {
    self.vars.remove(key);
    self
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}
