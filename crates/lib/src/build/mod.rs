//! Stemcell builds.
//!
//! A build turns a spec file and a set of resolved options into a stemcell by
//! preparing an isolated workspace and running the external builder in it.
//!
//! # Submodules
//!
//! - [`workspace`] - workspace layout and the token that keeps builds apart
//! - [`settings`] - the generated `settings.bash` artifact
//! - [`command`] - the elevated builder invocation and its environment filter
//! - [`execute`] - the orchestrator tying the steps together

pub mod command;
pub mod execute;
pub mod settings;
mod types;
pub mod workspace;

pub use execute::StemcellBuilder;
pub use types::*;
pub use workspace::{BuildWorkspace, WorkspaceToken};
