//! Template variable engine.
//!
//! This module provides:
//!
//! - **Scanner**: finds `{name}` placeholder candidates in template text
//! - **Variables**: filters candidates into a unique, ordered identifier list
//! - **Binding**: keeps a template body and its variable list in sync
//!
//! # Placeholder Syntax
//!
//! A placeholder is a single pair of braces enclosing identifier characters
//! (letters, digits, underscore):
//!
//! ```text
//! You are a helpful assistant.
//!
//! {chat_history}
//! Human: {human_input}
//! ```
//!
//! Malformed placeholders (`{`, `{}`, `{human input}`) are not errors; they
//! are simply not recognized as variables.

mod binding;
mod scanner;
mod variables;

#[cfg(test)]
mod tests;

pub use binding::{BindingSnapshot, BindingState, TemplateBinding};
pub use scanner::scan;
pub use variables::{build, derive_variables, is_valid_identifier};
