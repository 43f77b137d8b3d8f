//! Error types for promptbind.
//!
//! Scanning and variable building never fail; every error here is raised at
//! the payload boundary or by the surrounding CLI glue.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptbind operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A required persistence field is empty.
    #[error("Validation failed: '{field}' is required and must not be empty")]
    ValidationError {
        /// Name of the offending field (`name` or `template`).
        field: &'static str,
    },

    /// An invocation lacks a value for a variable declared by the template.
    #[error("Missing value for template variable '{name}'")]
    MissingArgument {
        /// First declared variable without a value.
        name: String,
    },

    /// A caller-side policy check failed in strict mode.
    #[error("Policy check failed: {0}")]
    PolicyViolation(String),

    /// A stored record's variables no longer match its template.
    #[error("Stale template record: {0}")]
    StaleRecord(String),

    /// Bad input, unreadable file, or invalid configuration.
    #[error("{0}")]
    UserError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::ValidationError { .. } => exit_codes::VALIDATION_FAILURE,
            PromptError::StaleRecord(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::MissingArgument { .. } => exit_codes::MISSING_ARGUMENT,
            PromptError::PolicyViolation(_) => exit_codes::POLICY_VIOLATION,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for promptbind operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = PromptError::ValidationError { field: "name" };
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn missing_argument_has_correct_exit_code() {
        let err = PromptError::MissingArgument {
            name: "b".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::MISSING_ARGUMENT);
    }

    #[test]
    fn policy_violation_has_correct_exit_code() {
        let err = PromptError::PolicyViolation("chat_history".to_string());
        assert_eq!(err.exit_code(), exit_codes::POLICY_VIOLATION);
    }

    #[test]
    fn stale_record_has_correct_exit_code() {
        let err = PromptError::StaleRecord("Greeter".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PromptError::ValidationError { field: "template" };
        assert_eq!(
            err.to_string(),
            "Validation failed: 'template' is required and must not be empty"
        );

        let err = PromptError::MissingArgument {
            name: "human_input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing value for template variable 'human_input'"
        );
    }
}
