use std::fmt;

use crate::env::{Environment, vars};
use crate::upload::types::StorageError;

/// Access key pair for the stemcell storage account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  pub access_key_id: String,
  pub secret_access_key: String,
}

impl Credentials {
  pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
    Self {
      access_key_id: access_key_id.into(),
      secret_access_key: secret_access_key.into(),
    }
  }

  /// Read the key pair from the injected environment.
  pub fn from_env(env: &Environment) -> Result<Self, StorageError> {
    let access_key_id = env
      .get(vars::AWS_ACCESS_KEY_ID)
      .ok_or(StorageError::MissingCredential(vars::AWS_ACCESS_KEY_ID))?;
    let secret_access_key = env
      .get(vars::AWS_SECRET_ACCESS_KEY)
      .ok_or(StorageError::MissingCredential(vars::AWS_SECRET_ACCESS_KEY))?;
    Ok(Self::new(access_key_id, secret_access_key))
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("access_key_id", &self.access_key_id)
      .field("secret_access_key", &"<redacted>")
      .finish()
  }
}
