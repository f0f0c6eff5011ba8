//! Host and checkout discovery.
//!
//! - [`paths`] - locations inside the source checkout
//! - [`interpreter`] - the host interpreter baked into builder options

pub mod interpreter;
pub mod paths;

pub use interpreter::HostInterpreter;
pub use paths::SourceTree;
