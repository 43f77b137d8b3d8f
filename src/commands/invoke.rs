//! Implementation of the `promptbind invoke` command.

use super::input::read_template;
use super::{Outcome, record_event};
use crate::cli::InvokeArgs;
use promptbind::config::Config;
use promptbind::error::Result;
use promptbind::events::{Event, EventAction};
use promptbind::payload::to_invocation_payload;
use promptbind::template::TemplateBinding;
use serde_json::json;
use std::collections::BTreeMap;

/// Execute the `promptbind invoke` command.
///
/// A repeated `--arg` key keeps its last value.
pub fn cmd_invoke(args: InvokeArgs, config: &Config) -> Result<Outcome> {
    let body = read_template(&args.input)?;
    let mut binding = TemplateBinding::new(body);
    invoke_binding(&mut binding, args, config)
}

/// Submit `binding` and compose its invocation payload.
pub(super) fn invoke_binding(
    binding: &mut TemplateBinding,
    args: InvokeArgs,
    config: &Config,
) -> Result<Outcome> {
    let snapshot = binding.submit();
    let arguments: BTreeMap<String, String> = args.args.into_iter().collect();
    let payload = to_invocation_payload(&snapshot, &arguments)?;

    let unused: Vec<&str> = payload
        .input
        .keys()
        .filter(|key| !snapshot.variables().contains(key))
        .map(String::as_str)
        .collect();

    let mut event = Event::new(EventAction::Invoke).with_details(json!({
        "input_variables": snapshot.variables(),
        "argument_keys": payload.input.keys().collect::<Vec<_>>(),
    }));
    if let Some(name) = args.name {
        event = event.with_prompt(name);
    }
    record_event(config, event)?;

    let diagnostics = if unused.is_empty() {
        Vec::new()
    } else {
        vec![format!(
            "Note: passing through arguments not used by the template: {}",
            unused.join(", ")
        )]
    };

    Ok(Outcome {
        stdout: payload.to_json()?,
        diagnostics,
    })
}
