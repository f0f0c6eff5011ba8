//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID_FOR_STEMCELLS_JENKINS_ACCOUNT";
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY_FOR_STEMCELLS_JENKINS_ACCOUNT";

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a fake source checkout,
/// a build root and an object store.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an environment with a minimal builder tree in the checkout.
  pub fn new() -> Self {
    let env = Self {
      temp: TempDir::new().unwrap(),
    };
    env.write_file("src/stemcell_builder/bin/build_from_spec.sh", "#!/bin/sh\nexit 0\n");
    env.write_file("src/stemcell_builder/spec/stemcell-aws.spec", "stage base_debootstrap\n");
    env.write_file("src/stemcell_builder/stages/base_debootstrap/apply.sh", "#!/bin/sh\n");
    env
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Source checkout root (isolated per test).
  pub fn src_root(&self) -> PathBuf {
    let p = self.temp.path().join("src");
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Build workspace root, not created up front.
  pub fn build_root(&self) -> PathBuf {
    self.temp.path().join("build-root")
  }

  /// Object store root with `bucket` created.
  pub fn store_with_bucket(&self, bucket: &str) -> PathBuf {
    let store = self.temp.path().join("store");
    std::fs::create_dir_all(store.join(bucket)).unwrap();
    store
  }

  /// Get a pre-configured Command for the stemcell binary.
  ///
  /// The process environment is cleared, then:
  /// - `BOSH_SRC_ROOT`: the fake checkout
  /// - `BUILD_PATH`: isolated build root
  /// - `RUBY_BIN`: fixed so host detection does not leak into output
  pub fn stemcell_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("stemcell");
    cmd.env_clear();
    cmd.env("BOSH_SRC_ROOT", self.src_root());
    cmd.env("BUILD_PATH", self.build_root());
    cmd.env("RUBY_BIN", "/opt/ruby/bin/ruby");
    cmd
  }
}

pub fn read(path: &Path) -> String {
  std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
