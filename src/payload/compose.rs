//! Persistence and invocation payload composers.
//!
//! Both take the [`BindingSnapshot`] returned by
//! [`TemplateBinding::submit`](crate::template::TemplateBinding::submit), so
//! composing a payload always moves the binding to the submitted state.

use super::record::{InvocationPayload, PersistencePayload};
use crate::error::{PromptError, Result};
use crate::template::BindingSnapshot;
use std::collections::BTreeMap;

/// Compose the persistence payload for a submitted binding.
///
/// # Errors
///
/// Returns `PromptError::ValidationError` if `name` or the snapshot's body is
/// empty. Name is checked first.
///
/// # Examples
///
/// ```
/// use promptbind::payload::to_persistence_payload;
/// use promptbind::template::{BindingState, TemplateBinding};
///
/// let mut binding = TemplateBinding::new("Hello {name}");
/// let payload = to_persistence_payload(&binding.submit(), "Greeter", None).unwrap();
///
/// assert_eq!(binding.state(), BindingState::Submitted);
/// assert_eq!(payload.name, "Greeter");
/// assert_eq!(payload.template, "Hello {name}");
/// assert_eq!(payload.input_variables, ["name"]);
/// assert!(payload.id.is_none());
/// ```
pub fn to_persistence_payload(
    snapshot: &BindingSnapshot,
    name: &str,
    id: Option<&str>,
) -> Result<PersistencePayload> {
    if name.is_empty() {
        return Err(PromptError::ValidationError { field: "name" });
    }

    if snapshot.body().is_empty() {
        return Err(PromptError::ValidationError { field: "template" });
    }

    Ok(PersistencePayload {
        id: id.map(str::to_string),
        name: name.to_string(),
        template: snapshot.body().to_string(),
        input_variables: snapshot.variables().to_vec(),
    })
}

/// Compose the invocation payload for a submitted binding.
///
/// Every declared variable must have an entry in `arguments`. Keys the
/// template does not reference are passed through unchanged.
///
/// # Errors
///
/// Returns `PromptError::MissingArgument` naming the first variable, in
/// declaration order, that has no value.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use promptbind::payload::to_invocation_payload;
/// use promptbind::template::TemplateBinding;
///
/// let mut binding = TemplateBinding::new("{a} {b}");
/// let args = BTreeMap::from([("a".to_string(), "x".to_string())]);
///
/// let err = to_invocation_payload(&binding.submit(), &args).unwrap_err();
/// assert_eq!(err.to_string(), "Missing value for template variable 'b'");
/// ```
pub fn to_invocation_payload(
    snapshot: &BindingSnapshot,
    arguments: &BTreeMap<String, String>,
) -> Result<InvocationPayload> {
    if let Some(missing) = snapshot
        .variables()
        .iter()
        .find(|name| !arguments.contains_key(name.as_str()))
    {
        return Err(PromptError::MissingArgument {
            name: missing.clone(),
        });
    }

    Ok(InvocationPayload {
        input: arguments.clone(),
    })
}
