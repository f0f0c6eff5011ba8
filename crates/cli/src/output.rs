//! Terminal output for the stemcell commands.
//!
//! Status lines go to stdout, errors to stderr. Resolved options are printed
//! in the same `KEY=value` form the builder reads from its settings file.

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

use stemcell_lib::Options;

const SUCCESS: &str = "✓";
const ERROR: &str = "✗";

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_heading(title: &str) {
  println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// `KEY=value` lines in key order, newline terminated.
pub fn render_options(options: &Options) -> String {
  options
    .iter()
    .map(|(key, value)| format!("{}={}\n", key, value))
    .collect()
}

pub fn print_options(options: &Options) {
  print!("{}", render_options(options));
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
