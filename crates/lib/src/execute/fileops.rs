//! Recursive file copying.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::execute::types::CopyError;

/// Copies source entries into a destination directory.
///
/// Each source lands at `dest/<file name of source>`, directories recursively,
/// the way `cp -r src... dest` behaves when `dest` exists.
pub trait FileCopier {
  fn copy_recursive(&self, sources: &[PathBuf], dest: &Path, preserve: bool) -> Result<(), CopyError>;
}

impl<C: FileCopier + ?Sized> FileCopier for &C {
  fn copy_recursive(&self, sources: &[PathBuf], dest: &Path, preserve: bool) -> Result<(), CopyError> {
    (**self).copy_recursive(sources, dest, preserve)
  }
}

/// Copies on the local filesystem.
///
/// With `preserve` set, permissions and access/modification times are carried
/// over. Symlinks are recreated rather than followed on Unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCopier;

impl FileCopier for FsCopier {
  fn copy_recursive(&self, sources: &[PathBuf], dest: &Path, preserve: bool) -> Result<(), CopyError> {
    for source in sources {
      let Some(name) = source.file_name() else {
        continue;
      };
      let target_root = dest.join(name);
      debug!(from = %source.display(), to = %target_root.display(), "copying");

      // Children come before their directory so directory times survive the copy.
      for entry in WalkDir::new(source).contents_first(true) {
        let entry = entry.map_err(|e| CopyError::Walk {
          path: source.clone(),
          source: e,
        })?;

        let relative = entry.path().strip_prefix(source).unwrap_or(Path::new(""));
        let target = if relative.as_os_str().is_empty() {
          target_root.clone()
        } else {
          target_root.join(relative)
        };

        copy_entry(entry.path(), &target, entry.file_type(), preserve).map_err(|e| CopyError::Copy {
          from: entry.path().to_path_buf(),
          to: target.clone(),
          source: e,
        })?;
      }
    }
    Ok(())
  }
}

fn copy_entry(from: &Path, to: &Path, file_type: fs::FileType, preserve: bool) -> io::Result<()> {
  trace!(from = %from.display(), to = %to.display(), "copy entry");

  if file_type.is_symlink() {
    return copy_symlink(from, to);
  }

  if file_type.is_dir() {
    fs::create_dir_all(to)?;
  } else {
    if let Some(parent) = to.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)?;
  }

  if preserve {
    let metadata = fs::metadata(from)?;
    fs::set_permissions(to, metadata.permissions())?;
    filetime::set_file_times(
      to,
      FileTime::from_last_access_time(&metadata),
      FileTime::from_last_modification_time(&metadata),
    )?;
  }
  Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
  let link_target = fs::read_link(from)?;
  if let Some(parent) = to.parent() {
    fs::create_dir_all(parent)?;
  }
  if fs::symlink_metadata(to).is_ok() {
    fs::remove_file(to)?;
  }
  std::os::unix::fs::symlink(link_target, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
  if let Some(parent) = to.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::copy(from, to).map(|_| ())
}

/// List the non-hidden entries of `dir`, sorted by name.
///
/// A missing directory yields an empty list.
pub fn list_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
  let entries = match fs::read_dir(dir) {
    Ok(entries) => entries,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
    Err(e) => return Err(e),
  };

  let mut paths = Vec::new();
  for entry in entries {
    let entry = entry?;
    if entry.file_name().to_string_lossy().starts_with('.') {
      continue;
    }
    paths.push(entry.path());
  }
  paths.sort();
  Ok(paths)
}
