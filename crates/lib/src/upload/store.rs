//! Object stores.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::upload::types::{ObjectInfo, PutObject, StorageError};
use crate::util::hash::hash_bytes;

/// Bucketed key/value object storage.
pub trait ObjectStore {
  fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError>;

  /// Store an object in an existing bucket, replacing any previous body.
  fn put_object(&self, request: &PutObject<'_>) -> Result<ObjectInfo, StorageError>;

  /// Read an object back, `None` if the bucket or key does not exist.
  fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
  fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
    (**self).bucket_exists(bucket)
  }

  fn put_object(&self, request: &PutObject<'_>) -> Result<ObjectInfo, StorageError> {
    (**self).put_object(request)
  }

  fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
    (**self).get_object(bucket, key)
  }
}

fn object_info(request: &PutObject<'_>) -> ObjectInfo {
  ObjectInfo {
    bucket: request.bucket.to_string(),
    key: request.key.to_string(),
    etag: hash_bytes(request.body).0,
    size: request.body.len() as u64,
    public: request.public,
  }
}

#[derive(Debug, Clone)]
struct StoredObject {
  body: Vec<u8>,
  public: bool,
  owner: String,
}

/// Buckets held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
  buckets: Mutex<BTreeMap<String, BTreeMap<String, StoredObject>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create `bucket` if it does not exist yet.
  pub fn create_bucket(&self, bucket: &str) {
    let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
    buckets.entry(bucket.to_string()).or_default();
  }

  /// Whether `key` in `bucket` is publicly readable.
  pub fn is_public(&self, bucket: &str, key: &str) -> Option<bool> {
    let buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
    buckets.get(bucket)?.get(key).map(|o| o.public)
  }

  /// Access key id that last wrote `key` in `bucket`.
  pub fn owner(&self, bucket: &str, key: &str) -> Option<String> {
    let buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
    buckets.get(bucket)?.get(key).map(|o| o.owner.clone())
  }
}

impl ObjectStore for MemoryStore {
  fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
    let buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
    Ok(buckets.contains_key(bucket))
  }

  fn put_object(&self, request: &PutObject<'_>) -> Result<ObjectInfo, StorageError> {
    let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
    let objects = buckets
      .get_mut(request.bucket)
      .ok_or_else(|| StorageError::BucketNotFound(request.bucket.to_string()))?;

    objects.insert(
      request.key.to_string(),
      StoredObject {
        body: request.body.to_vec(),
        public: request.public,
        owner: request.owner.to_string(),
      },
    );
    Ok(object_info(request))
  }

  fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
    let buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
    Ok(buckets.get(bucket).and_then(|objects| objects.get(key)).map(|o| o.body.clone()))
  }
}

/// Buckets stored as directories under a root directory.
///
/// Object keys may contain `/` to nest objects; keys that would escape the
/// bucket are rejected. On Unix, public objects are created world-readable
/// (0644) and private ones owner-only (0600).
#[derive(Debug, Clone)]
pub struct LocalStore {
  root: PathBuf,
}

impl LocalStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Create `bucket` if it does not exist yet.
  pub fn create_bucket(&self, bucket: &str) -> Result<(), StorageError> {
    let path = self.bucket_path(bucket)?;
    fs::create_dir_all(&path).map_err(|source| StorageError::Io { path, source })
  }

  fn bucket_path(&self, bucket: &str) -> Result<PathBuf, StorageError> {
    if bucket.is_empty() || bucket.contains('/') || bucket.starts_with('.') {
      return Err(StorageError::InvalidKey(bucket.to_string()));
    }
    Ok(self.root.join(bucket))
  }

  fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StorageError> {
    let key_path = Path::new(key);
    let valid = !key.is_empty() && key_path.components().all(|c| matches!(c, Component::Normal(_)));
    if !valid {
      return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(self.bucket_path(bucket)?.join(key_path))
  }
}

impl ObjectStore for LocalStore {
  fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
    Ok(self.bucket_path(bucket)?.is_dir())
  }

  fn put_object(&self, request: &PutObject<'_>) -> Result<ObjectInfo, StorageError> {
    if !self.bucket_exists(request.bucket)? {
      return Err(StorageError::BucketNotFound(request.bucket.to_string()));
    }

    let path = self.object_path(request.bucket, request.key)?;
    let io_err = |source| StorageError::Io {
      path: path.clone(),
      source,
    };

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(io_err)?;
    }
    write_object(&path, request.body, request.public).map_err(io_err)?;

    debug!(path = %path.display(), owner = %request.owner, public = request.public, "stored object");
    Ok(object_info(request))
  }

  fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
    let path = self.object_path(bucket, key)?;
    match fs::read(&path) {
      Ok(body) => Ok(Some(body)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(source) => Err(StorageError::Io { path, source }),
    }
  }
}

/// Write `body` to `path`. The mode is applied before any byte is written,
/// also when replacing an object with different visibility.
#[cfg(unix)]
fn write_object(path: &Path, body: &[u8], public: bool) -> io::Result<()> {
  use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

  let mode = if public { 0o644 } else { 0o600 };
  let mut file = fs::OpenOptions::new()
    .write(true)
    .create(true)
    .truncate(true)
    .mode(mode)
    .open(path)?;
  file.set_permissions(fs::Permissions::from_mode(mode))?;
  file.write_all(body)
}

#[cfg(not(unix))]
fn write_object(path: &Path, body: &[u8], _public: bool) -> io::Result<()> {
  fs::File::create(path)?.write_all(body)
}
