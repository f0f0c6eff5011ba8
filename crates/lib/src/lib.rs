//! stemcell-lib: configuration resolution and build orchestration for stemcells
//!
//! This crate provides the pieces needed to turn a build spec into a stemcell:
//! - `options`: resolves per-infrastructure build options from the environment
//! - `build`: prepares an isolated workspace and runs the external builder
//! - `execute`: the command runner and file copy collaborators
//! - `upload`: pushes produced artifacts into an object store

pub mod build;
pub mod consts;
pub mod env;
pub mod execute;
pub mod infrastructure;
pub mod options;
pub mod platform;
pub mod upload;
pub mod util;

pub use env::Environment;
pub use infrastructure::Infrastructure;
pub use options::{OptionValue, Options, Overrides, ResolveError};
