//! Build option resolution.
//!
//! Options are assembled from three layers, later layers winning key by key:
//!
//! 1. values copied from the injected [`Environment`](crate::Environment)
//! 2. defaults derived from the target [`Infrastructure`](crate::Infrastructure)
//! 3. explicit [`Overrides`] from the caller
//!
//! # Submodules
//!
//! - [`keys`] - option names consumed by the builder
//! - [`resolve`] - the resolver itself
//! - [`micro`] - extra options for micro stemcells

pub mod keys;
pub mod micro;
pub mod resolve;
mod types;

pub use micro::micro_options;
pub use resolve::OptionsResolver;
pub use types::*;
