use tracing::info;

use crate::env::Environment;
use crate::upload::credentials::Credentials;
use crate::upload::store::ObjectStore;
use crate::upload::types::{ObjectInfo, PutObject, StorageError};

/// Uploads artifacts into existing buckets of an [`ObjectStore`].
#[derive(Debug)]
pub struct UploadAdapter<S> {
  store: S,
  credentials: Credentials,
}

impl<S: ObjectStore> UploadAdapter<S> {
  pub fn new(store: S, credentials: Credentials) -> Self {
    Self { store, credentials }
  }

  /// Create an adapter with credentials read from `env`.
  pub fn from_env(store: S, env: &Environment) -> Result<Self, StorageError> {
    Ok(Self::new(store, Credentials::from_env(env)?))
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Store `body` under `key` in `bucket_name`.
  ///
  /// The bucket is never created on demand.
  ///
  /// # Errors
  ///
  /// [`StorageError::BucketNotFound`] when `bucket_name` does not exist.
  pub fn upload(&self, bucket_name: &str, key: &str, body: &[u8], public: bool) -> Result<ObjectInfo, StorageError> {
    if !self.store.bucket_exists(bucket_name)? {
      return Err(StorageError::BucketNotFound(bucket_name.to_string()));
    }

    let info = self.store.put_object(&PutObject {
      bucket: bucket_name,
      key,
      body,
      public,
      owner: &self.credentials.access_key_id,
    })?;

    info!(bucket = %bucket_name, key = %key, size = info.size, public, "uploaded object");
    Ok(info)
  }
}
