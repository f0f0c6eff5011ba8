//! Implementation of the `stemcell upload` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use stemcell_lib::Environment;
use stemcell_lib::upload::{LocalStore, UploadAdapter};

use crate::output::{print_stat, print_success};

/// Upload `file` as `key` into `bucket` of the store rooted at `store`.
///
/// Credentials come from the process environment and the bucket must already exist.
pub fn cmd_upload(store: &Path, bucket: &str, key: &str, file: &Path, public: bool) -> Result<()> {
  let env = Environment::from_process();
  let body = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

  let adapter = UploadAdapter::from_env(LocalStore::new(store), &env)?;
  let info = adapter.upload(bucket, key, &body, public)?;

  print_success(&format!("Uploaded {} to {}/{}", file.display(), info.bucket, info.key));
  print_stat("Size", &format!("{} bytes", info.size));
  print_stat("SHA-256", &info.etag);
  print_stat("Public", if info.public { "yes" } else { "no" });
  Ok(())
}
