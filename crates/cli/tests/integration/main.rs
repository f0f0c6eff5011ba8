//! CLI integration tests driving the stemcell binary against temp directories.

mod build_tests;
mod common;
mod options_tests;
mod upload_tests;
