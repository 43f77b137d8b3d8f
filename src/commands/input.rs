//! Template text input from a file or stdin.

use promptbind::error::{PromptError, Result};
use std::io::Read;

/// Read template text from `source`; `-` means stdin.
pub fn read_template(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| PromptError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(buf);
    }

    std::fs::read_to_string(source).map_err(|e| {
        PromptError::UserError(format!("failed to read template file '{}': {}", source, e))
    })
}
