mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stemcell_lib::ResolveError;

use crate::cmd::{ResolveArgs, cmd_build, cmd_info, cmd_options, cmd_upload};
use crate::output::print_error;

/// stemcell - resolve builder options and build stemcell images
#[derive(Parser)]
#[command(name = "stemcell")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the resolved builder options
  Options {
    #[command(flatten)]
    resolve: ResolveArgs,

    /// Print the options as JSON
    #[arg(long)]
    json: bool,
  },

  /// Build a stemcell from a builder spec
  Build {
    /// Spec name under the builder's spec directory (without .spec)
    spec: String,

    #[command(flatten)]
    resolve: ResolveArgs,

    /// Stage the workspace and write settings without running the builder
    #[arg(long)]
    dry_run: bool,
  },

  /// Upload an artifact into a bucket of a local object store
  Upload {
    /// Directory holding the store's buckets
    #[arg(long)]
    store: PathBuf,

    /// Existing bucket to upload into
    #[arg(long)]
    bucket: String,

    /// Object key
    #[arg(long)]
    key: String,

    /// File to upload
    file: PathBuf,

    /// Make the object publicly readable
    #[arg(long)]
    public: bool,
  },

  /// Show version and build locations
  Info,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "info" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      match err.downcast_ref::<ResolveError>() {
        Some(missing @ ResolveError::MissingInfrastructure) => eprintln!("{}", missing),
        _ => print_error(&format!("{:#}", err)),
      }
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Options { resolve, json } => cmd_options(&resolve, json),
    Commands::Build { spec, resolve, dry_run } => cmd_build(&spec, &resolve, dry_run),
    Commands::Upload {
      store,
      bucket,
      key,
      file,
      public,
    } => cmd_upload(&store, &bucket, &key, &file, public),
    Commands::Info => cmd_info(),
  }
}
