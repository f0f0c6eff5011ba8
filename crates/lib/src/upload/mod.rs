//! Artifact uploads into object storage.
//!
//! [`UploadAdapter`] checks that the target bucket exists and stores the body
//! through an [`ObjectStore`]. Two stores ship with the crate:
//! - [`MemoryStore`]: in-process buckets, handy for tests and embedders
//! - [`LocalStore`]: buckets as directories on the local filesystem

pub mod adapter;
pub mod credentials;
pub mod store;
mod types;

pub use adapter::UploadAdapter;
pub use credentials::Credentials;
pub use store::{LocalStore, MemoryStore, ObjectStore};
pub use types::*;
