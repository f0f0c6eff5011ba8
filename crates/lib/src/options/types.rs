use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while resolving build options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// No infrastructure was given. The message is the user-facing diagnostic.
  #[error("Please specify target infrastructure (vsphere, aws, openstack)")]
  MissingInfrastructure,

  /// The infrastructure is not one of the supported targets.
  #[error("Unknown infrastructure: {0}")]
  UnknownInfrastructure(String),
}

/// A single option value: either text or an unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
  Int(u64),
  Str(String),
}

impl OptionValue {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Str(s) => Some(s),
      Self::Int(_) => None,
    }
  }

  pub fn as_int(&self) -> Option<u64> {
    match self {
      Self::Int(n) => Some(*n),
      Self::Str(_) => None,
    }
  }
}

impl fmt::Display for OptionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Int(n) => write!(f, "{}", n),
      Self::Str(s) => write!(f, "{}", s),
    }
  }
}

impl From<&str> for OptionValue {
  fn from(value: &str) -> Self {
    Self::Str(value.to_string())
  }
}

impl From<String> for OptionValue {
  fn from(value: String) -> Self {
    Self::Str(value)
  }
}

impl From<&Path> for OptionValue {
  fn from(value: &Path) -> Self {
    Self::Str(value.to_string_lossy().into_owned())
  }
}

impl From<u64> for OptionValue {
  fn from(value: u64) -> Self {
    Self::Int(value)
  }
}

/// Build options keyed by name.
///
/// Keys iterate in sorted order so anything rendered from a mapping is
/// deterministic. The public API never mutates a mapping in place; combining
/// two mappings produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, OptionValue>);

impl Options {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: &str) -> Option<&OptionValue> {
    self.0.get(key)
  }

  /// Text value of `key`, `None` if missing or an integer.
  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(OptionValue::as_str)
  }

  /// Integer value of `key`, `None` if missing or text.
  pub fn get_int(&self, key: &str) -> Option<u64> {
    self.get(key).and_then(OptionValue::as_int)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.0.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v))
  }

  /// Combine with `other`; entries in `other` win key by key.
  pub fn merged(mut self, other: &Options) -> Self {
    for (key, value) in &other.0 {
      self.0.insert(key.clone(), value.clone());
    }
    self
  }

  /// Return a copy with `key` set to `value`.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    self.0.insert(key.into(), value.into());
    self
  }

  pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
    self.0.insert(key.into(), value.into());
  }

  pub(crate) fn insert_opt(&mut self, key: &str, value: Option<&str>) {
    if let Some(value) = value {
      self.insert(key, value);
    }
  }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

/// Caller-supplied adjustments applied on top of the resolved defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
  /// Image disk size in MB; wins over every infrastructure default.
  pub disk_size: Option<u64>,

  /// Arbitrary options layered last, replacing resolved keys of the same name.
  pub extra: Options,
}

impl Overrides {
  pub fn with_disk_size(mut self, disk_size: u64) -> Self {
    self.disk_size = Some(disk_size);
    self
  }

  pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    self.extra = self.extra.with(key, value);
    self
  }
}
