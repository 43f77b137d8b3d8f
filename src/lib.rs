//! Promptbind: placeholder discovery and payload composition for agent prompt
//! templates.
//!
//! A prompt template is free text with `{name}` placeholders. This crate
//! derives the ordered, de-duplicated variable list of a template, keeps it in
//! step with the text while it is edited, and packages both into the payloads
//! a backend stores and later uses to invoke an agent.
//!
//! ```
//! use std::collections::BTreeMap;
//! use promptbind::payload::{to_invocation_payload, to_persistence_payload};
//! use promptbind::template::TemplateBinding;
//!
//! let mut binding = TemplateBinding::new("{chat_history}\nHuman: {human_input}");
//! let stored = to_persistence_payload(&binding.submit(), "Chat", None)?;
//! assert_eq!(stored.input_variables, ["chat_history", "human_input"]);
//!
//! binding.set_body("Human: {human_input}");
//! let args = BTreeMap::from([("human_input".to_string(), "hi".to_string())]);
//! let run = to_invocation_payload(&binding.submit(), &args)?;
//! assert_eq!(run.input["human_input"], "hi");
//! # Ok::<(), promptbind::error::PromptError>(())
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod payload;
pub mod policy;
pub mod template;
