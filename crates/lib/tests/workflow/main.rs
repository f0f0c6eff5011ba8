//! End-to-end tests: resolve options, stage a builder tree and build.

mod build_tests;
mod upload_tests;
