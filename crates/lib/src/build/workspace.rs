//! Build workspace layout.
//!
//! ```text
//! <root>/                      BUILD_PATH, or /var/tmp/bosh/bosh_agent-<version>-<token>
//!   build/                     staged builder support files
//!     bin/build_from_spec.sh
//!     etc/settings.bash        generated settings artifact
//!     spec/<name>.spec
//!   work/                      chroot target (or WORK_PATH)
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::consts::{AGENT_NAME, AGENT_VERSION, BUILD_ROOT_PREFIX, BUILD_SCRIPT, SETTINGS_FILENAME};
use crate::env::{Environment, vars};

/// Builds handed out a token by [`WorkspaceToken::unique`] in this process.
static ISSUED: AtomicU64 = AtomicU64::new(0);

/// Unique suffix for a workspace root.
///
/// Two builds with different tokens never share a default workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceToken(String);

impl WorkspaceToken {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  /// Token unique within the process, `<pid>-<n>`.
  pub fn unique() -> Self {
    let n = ISSUED.fetch_add(1, Ordering::Relaxed);
    Self(format!("{}-{}", std::process::id(), n))
  }

  /// Token derived from the current process id alone.
  pub fn from_process() -> Self {
    Self(std::process::id().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for WorkspaceToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Paths of one build workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildWorkspace {
  root: PathBuf,
  work_dir: PathBuf,
}

impl BuildWorkspace {
  /// Workspace with an explicit root and work directory.
  pub fn new(root: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      work_dir: work_dir.into(),
    }
  }

  /// Resolve the workspace for `token`, honoring `BUILD_PATH` and `WORK_PATH`.
  ///
  /// An explicit `BUILD_PATH` bypasses the token; keeping concurrent builds
  /// apart is then up to the caller.
  pub fn resolve(env: &Environment, token: &WorkspaceToken) -> Self {
    let root = env
      .get(vars::BUILD_PATH)
      .map(PathBuf::from)
      .unwrap_or_else(|| default_root(token));
    let work_dir = env
      .get(vars::WORK_PATH)
      .map(PathBuf::from)
      .unwrap_or_else(|| root.join("work"));
    Self { root, work_dir }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn build_dir(&self) -> PathBuf {
    self.root.join("build")
  }

  pub fn work_dir(&self) -> &Path {
    &self.work_dir
  }

  pub fn etc_dir(&self) -> PathBuf {
    self.build_dir().join("etc")
  }

  pub fn settings_path(&self) -> PathBuf {
    self.etc_dir().join(SETTINGS_FILENAME)
  }

  pub fn spec_path(&self, spec_name: &str) -> PathBuf {
    self.build_dir().join("spec").join(format!("{}.spec", spec_name))
  }

  pub fn build_script(&self) -> PathBuf {
    self.build_dir().join("bin").join(BUILD_SCRIPT)
  }

  /// Create the root and `build` directories. Succeeds if they already exist.
  pub fn create_build_dir(&self) -> io::Result<PathBuf> {
    let build_dir = self.build_dir();
    std::fs::create_dir_all(&build_dir)?;
    Ok(build_dir)
  }

  /// Create the work directory. Succeeds if it already exists.
  pub fn create_work_dir(&self) -> io::Result<()> {
    std::fs::create_dir_all(&self.work_dir)
  }
}

/// Default workspace root for `token`
pub fn default_root(token: &WorkspaceToken) -> PathBuf {
  Path::new(BUILD_ROOT_PREFIX).join(format!("{}-{}-{}", AGENT_NAME, AGENT_VERSION, token))
}
