use crate::options::keys;
use crate::options::types::Options;
use crate::platform::SourceTree;

/// Options that turn a regular build into a micro stemcell build.
///
/// A micro stemcell embeds a release compiled with the package compiler from
/// the source tree. The manifest and tarball paths are passed through as given.
pub fn micro_options(sources: &SourceTree, manifest_path: &str, tarball_path: &str) -> Options {
  Options::new()
    .with(keys::BOSH_MICRO_ENABLED, "yes")
    .with(keys::BOSH_MICRO_PACKAGE_COMPILER_PATH, sources.package_compiler_dir().as_path())
    .with(keys::BOSH_MICRO_MANIFEST_YML_PATH, manifest_path)
    .with(keys::BOSH_MICRO_RELEASE_TGZ_PATH, tarball_path)
}
