use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by uploads and object stores.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("bucket '{0}' not found")]
  BucketNotFound(String),

  #[error("missing storage credential: {0} is not set")]
  MissingCredential(&'static str),

  #[error("invalid object key: {0}")]
  InvalidKey(String),

  #[error("storage io error at {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// A request to store one object.
#[derive(Debug, Clone, Copy)]
pub struct PutObject<'a> {
  pub bucket: &'a str,
  pub key: &'a str,
  pub body: &'a [u8],
  /// Readable by anyone, not just the owner.
  pub public: bool,
  /// Access key id of the uploader.
  pub owner: &'a str,
}

/// Metadata of a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
  pub bucket: String,
  pub key: String,
  /// SHA256 of the body, hex encoded.
  pub etag: String,
  pub size: u64,
  pub public: bool,
}
