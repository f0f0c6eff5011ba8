//! External collaborators used by the build orchestrator.
//!
//! This module provides the narrow interfaces the orchestrator talks through:
//! - [`CommandRunner`]: blocking execution of a [`CommandLine`]
//! - [`FileCopier`]: recursive copy of builder support files
//!
//! Both are traits so callers and tests can swap implementations.

pub mod fileops;
pub mod runner;
pub mod types;

pub use fileops::{FileCopier, FsCopier, list_dir};
pub use runner::{CommandRunner, DryRunRunner, SystemRunner};
pub use types::{CommandLine, CopyError, RunError};
