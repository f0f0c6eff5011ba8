/// Application name used in diagnostics
pub const APP_NAME: &str = "stemcell";

/// Protocol version spoken by the agent baked into the stemcell
pub const BOSH_PROTOCOL_VERSION: &str = "1";

/// Agent name used when tagging workspace directories
pub const AGENT_NAME: &str = "bosh_agent";

/// Agent version used when tagging workspace directories
pub const AGENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parent directory of per-build workspace roots
pub const BUILD_ROOT_PREFIX: &str = "/var/tmp/bosh";

/// Interpreter looked up on `PATH` when no explicit binary is configured
pub const RUBY_INSTALL_NAME: &str = "ruby";

/// Fallback binary directory for the interpreter
pub const RUBY_FALLBACK_BINDIR: &str = "/usr/bin";

/// Script inside the staged builder tree that drives an image build
pub const BUILD_SCRIPT: &str = "build_from_spec.sh";

/// Name of the generated settings artifact
pub const SETTINGS_FILENAME: &str = "settings.bash";
