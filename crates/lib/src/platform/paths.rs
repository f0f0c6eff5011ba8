use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::env::{Environment, vars};

/// The source checkout that holds the release, agent and builder sources.
///
/// Every location is derived from the checkout root rather than hardcoded, so
/// a relocated checkout keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
  root: PathBuf,
}

impl SourceTree {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: normalize_path(&root.into()),
    }
  }

  /// Locate the checkout.
  ///
  /// `BOSH_SRC_ROOT` wins when set, otherwise the checkout this crate was
  /// built from is used.
  pub fn discover(env: &Environment) -> Self {
    let root = match env.get(vars::BOSH_SRC_ROOT) {
      Some(root) => {
        let root = PathBuf::from(root);
        dunce::canonicalize(&root).unwrap_or(root)
      }
      None => default_root(),
    };
    debug!(root = %root.display(), "using source tree");
    Self::new(root)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Sources of the release packaged into the stemcell
  pub fn release_src_dir(&self) -> PathBuf {
    self.root.join("release").join("src").join("bosh")
  }

  /// Sources of the agent installed into the stemcell
  pub fn agent_src_dir(&self) -> PathBuf {
    self.root.join("bosh_agent")
  }

  /// Package compiler used by micro stemcells
  pub fn package_compiler_dir(&self) -> PathBuf {
    self.root.join("package_compiler")
  }

  /// Builder support files staged into every workspace
  pub fn stemcell_builder_dir(&self) -> PathBuf {
    self.root.join("stemcell_builder")
  }
}

/// Checkout root relative to this crate's manifest (`<root>/crates/lib`)
fn default_root() -> PathBuf {
  normalize_path(&Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(".."))
}

/// Normalize a path by resolving `.` and `..` components without requiring the path to exist
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut components = Vec::new();

  for component in path.components() {
    match component {
      Component::ParentDir => {
        if matches!(components.last(), Some(Component::Normal(_))) {
          components.pop();
        } else if components.is_empty() {
          components.push(component);
        }
      }
      Component::CurDir => {}
      other => components.push(other),
    }
  }

  components.iter().collect()
}
