//! Implementation of the `promptbind persist` command.

use super::input::read_template;
use super::{Outcome, record_event};
use crate::cli::PersistArgs;
use promptbind::config::Config;
use promptbind::error::Result;
use promptbind::events::{Event, EventAction};
use promptbind::payload::to_persistence_payload;
use promptbind::policy::{check_recommended, enforce};
use promptbind::template::TemplateBinding;
use serde_json::json;

/// Execute the `promptbind persist` command.
///
/// Composes the payload first, then applies the recommended-variable policy,
/// and logs the event only once both succeeded.
pub fn cmd_persist(args: PersistArgs, config: &Config) -> Result<Outcome> {
    let body = match &args.input {
        Some(source) => read_template(source)?,
        None => config.default_template.clone(),
    };

    let mut binding = TemplateBinding::new(body);
    persist_binding(&mut binding, &args, config)
}

/// Submit `binding` and compose its persistence payload.
pub(super) fn persist_binding(
    binding: &mut TemplateBinding,
    args: &PersistArgs,
    config: &Config,
) -> Result<Outcome> {
    let payload = to_persistence_payload(&binding.submit(), &args.name, args.id.as_deref())?;

    let warnings = check_recommended(&payload.input_variables, &config.recommended_variables);
    enforce(&warnings, config.strict_policy)?;

    let action = if payload.id.is_some() { "update" } else { "create" };
    record_event(
        config,
        Event::new(EventAction::Persist)
            .with_prompt(payload.id.clone().unwrap_or_else(|| payload.name.clone()))
            .with_details(json!({
                "mode": action,
                "name": payload.name,
                "input_variables": payload.input_variables,
            })),
    )?;

    Ok(Outcome {
        stdout: payload.to_json()?,
        diagnostics: warnings.iter().map(|w| format!("Warning: {}", w)).collect(),
    })
}
