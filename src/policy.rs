//! Caller-side template policy.
//!
//! The engine treats every placeholder the same way. Conventions such as
//! "include `{chat_history}` if the agent should remember past queries" are
//! enforced here, outside the engine, and only when the caller asks.

use crate::error::{PromptError, Result};
use std::fmt;

/// A recommended variable the template does not reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyWarning {
    /// The missing variable name.
    pub variable: String,
}

impl fmt::Display for PolicyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "template does not reference the recommended variable {{{}}}",
            self.variable
        )
    }
}

/// Check which recommended variables are absent from `variables`.
///
/// Warnings follow the order of `recommended`.
///
/// # Examples
///
/// ```
/// use promptbind::policy::check_recommended;
/// use promptbind::template::TemplateBinding;
///
/// let binding = TemplateBinding::new("Human: {human_input}");
/// let warnings = check_recommended(binding.variables(), &["chat_history".to_string()]);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].variable, "chat_history");
/// ```
pub fn check_recommended(variables: &[String], recommended: &[String]) -> Vec<PolicyWarning> {
    recommended
        .iter()
        .filter(|name| !variables.contains(name))
        .map(|name| PolicyWarning {
            variable: name.clone(),
        })
        .collect()
}

/// Turn warnings into an error when `strict` is set.
pub fn enforce(warnings: &[PolicyWarning], strict: bool) -> Result<()> {
    if !strict || warnings.is_empty() {
        return Ok(());
    }

    let names = warnings
        .iter()
        .map(|w| w.variable.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Err(PromptError::PolicyViolation(format!(
        "template is missing recommended variables: {}",
        names
    )))
}
