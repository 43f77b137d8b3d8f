//! CLI argument parsing for promptbind.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptbind: derive template variables and compose agent payloads.
///
/// Placeholders are written as `{name}` using letters, digits, and
/// underscores. Payloads are printed as JSON for an external client to send.
#[derive(Parser, Debug)]
#[command(name = "promptbind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./promptbind.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptbind.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the variables of a template.
    ///
    /// Prints one variable per line in first-seen order.
    Vars(VarsArgs),

    /// Compose the persistence payload for a template.
    ///
    /// Uses the configured default template when no input is given.
    Persist(PersistArgs),

    /// Compose the invocation payload for a template.
    ///
    /// Every template variable needs a `--arg`; extra arguments pass through.
    Invoke(InvokeArgs),

    /// Check a stored template record for stale input variables.
    Check(CheckArgs),
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    /// Template file, or `-` for stdin.
    pub input: String,

    /// Print a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `persist` command.
#[derive(Parser, Debug)]
pub struct PersistArgs {
    /// Template file, or `-` for stdin. Omit to use the default template.
    pub input: Option<String>,

    /// Template name.
    #[arg(short, long)]
    pub name: String,

    /// Identifier of an existing template (omit when creating).
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the `invoke` command.
#[derive(Parser, Debug)]
pub struct InvokeArgs {
    /// Template file, or `-` for stdin.
    pub input: String,

    /// Argument value as KEY=VALUE (repeatable).
    #[arg(short, long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,

    /// Template name recorded in the event log.
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Stored record (YAML or JSON) with `name`, `template`, `input_variables`.
    pub record: PathBuf,

    /// Print the record with recomputed variables instead of failing on drift.
    #[arg(long)]
    pub refresh: bool,
}

/// Parse a `KEY=VALUE` argument. The value may contain further `=`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument '{}': expected KEY=VALUE", s))?;

    if key.is_empty() {
        return Err(format!("invalid argument '{}': key must not be empty", s));
    }

    Ok((key.to_string(), value.to_string()))
}
