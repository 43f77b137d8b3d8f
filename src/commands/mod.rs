//! Command implementations for promptbind.
//!
//! Each command composes its output as text and returns it; the dispatcher
//! prints payloads to stdout and diagnostics to stderr.

mod check;
mod input;
mod invoke;
mod persist;
mod vars;

use crate::cli::{Cli, Command};
use promptbind::config::Config;
use promptbind::error::{PromptError, Result};
use promptbind::events::{Event, append_event};

/// Text produced by a command.
#[derive(Debug)]
pub struct Outcome {
    /// Written to stdout.
    pub stdout: String,
    /// Written to stderr, one line each.
    pub diagnostics: Vec<String>,
}

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PromptError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    let outcome = match cli.command {
        Command::Vars(args) => vars::cmd_vars(args),
        Command::Persist(args) => persist::cmd_persist(args, &config),
        Command::Invoke(args) => invoke::cmd_invoke(args, &config),
        Command::Check(args) => check::cmd_check(args, &config),
    }?;

    for line in &outcome.diagnostics {
        eprintln!("{}", line);
    }
    if !outcome.stdout.is_empty() {
        println!("{}", outcome.stdout);
    }

    Ok(())
}

/// Append `event` to the configured log, if any.
fn record_event(config: &Config, event: Event) -> Result<()> {
    match &config.events_file {
        Some(path) => append_event(path, &event),
        None => Ok(()),
    }
}
