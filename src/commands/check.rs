//! Implementation of the `promptbind check` command.
//!
//! Verifies that a stored record's `input_variables` still match its
//! template, and reports recommended-variable policy warnings.

use super::{Outcome, record_event};
use crate::cli::CheckArgs;
use promptbind::config::Config;
use promptbind::error::{PromptError, Result};
use promptbind::events::{Event, EventAction};
use promptbind::payload::PersistencePayload;
use promptbind::policy::{check_recommended, enforce};
use serde_json::json;

/// Execute the `promptbind check` command.
pub fn cmd_check(args: CheckArgs, config: &Config) -> Result<Outcome> {
    let record = PersistencePayload::load(&args.record)?;
    let drift = record.drift();

    let binding = record.binding();
    let warnings = check_recommended(binding.variables(), &config.recommended_variables);
    enforce(&warnings, config.strict_policy)?;

    let mut diagnostics: Vec<String> = warnings.iter().map(|w| format!("Warning: {}", w)).collect();

    record_event(
        config,
        Event::new(EventAction::Check)
            .with_prompt(record.id.clone().unwrap_or_else(|| record.name.clone()))
            .with_details(json!({
                "drift": drift.is_some(),
                "refresh": args.refresh,
            })),
    )?;

    let Some(drift) = drift else {
        return Ok(Outcome {
            stdout: format!(
                "{}: ok ({} variables)",
                record.name,
                record.input_variables.len()
            ),
            diagnostics,
        });
    };

    let mut summary = Vec::new();
    let duplicates = drift.duplicates();
    if !duplicates.is_empty() {
        summary.push(format!("stored more than once: {}", duplicates.join(", ")));
    }
    let added = drift.added();
    if !added.is_empty() {
        summary.push(format!("not stored: {}", added.join(", ")));
    }
    let removed = drift.removed();
    if !removed.is_empty() {
        summary.push(format!("no longer in template: {}", removed.join(", ")));
    }
    if summary.is_empty() {
        summary.push("variable order differs".to_string());
    }
    let summary = format!("{}: {}", record.name, summary.join("; "));

    if args.refresh {
        diagnostics.push(format!("Refreshed {}", summary));
        return Ok(Outcome {
            stdout: record.refreshed().to_json()?,
            diagnostics,
        });
    }

    Err(PromptError::StaleRecord(summary))
}
