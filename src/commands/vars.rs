//! Implementation of the `promptbind vars` command.

use super::Outcome;
use super::input::read_template;
use crate::cli::VarsArgs;
use promptbind::error::{PromptError, Result};
use promptbind::template::TemplateBinding;

/// Execute the `promptbind vars` command.
pub fn cmd_vars(args: VarsArgs) -> Result<Outcome> {
    let body = read_template(&args.input)?;
    list_variables(&body, args.json)
}

pub(super) fn list_variables(body: &str, json: bool) -> Result<Outcome> {
    let binding = TemplateBinding::new(body);

    let stdout = if json {
        serde_json::to_string(binding.variables()).map_err(|e| {
            PromptError::UserError(format!("failed to serialize variables: {}", e))
        })?
    } else {
        binding.variables().join("\n")
    };

    Ok(Outcome {
        stdout,
        diagnostics: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_one_per_line() {
        let outcome = list_variables("{b} {a} {b}", false).unwrap();
        assert_eq!(outcome.stdout, "b\na");
    }

    #[test]
    fn test_lists_as_json() {
        let outcome = list_variables("{chat_history} {human_input}", true).unwrap();
        assert_eq!(outcome.stdout, r#"["chat_history","human_input"]"#);
    }

    #[test]
    fn test_no_variables_prints_nothing() {
        let outcome = list_variables("plain {not valid}", false).unwrap();
        assert!(outcome.stdout.is_empty());

        let outcome = list_variables("", true).unwrap();
        assert_eq!(outcome.stdout, "[]");
    }

    #[test]
    fn test_missing_file_is_user_error() {
        let err = cmd_vars(VarsArgs {
            input: "/nonexistent/prompt.txt".to_string(),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to read template file"));
    }
}
