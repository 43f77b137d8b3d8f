//! Payload composition for the persistence and invocation collaborators.
//!
//! Both composers take the [`BindingSnapshot`] returned by
//! [`TemplateBinding::submit`] and return a new value. Later edits to the
//! binding cannot reach a payload that was already composed.
//!
//! [`BindingSnapshot`]: crate::template::BindingSnapshot
//! [`TemplateBinding::submit`]: crate::template::TemplateBinding::submit
//!
//! # Wire Shapes
//!
//! Persistence:
//!
//! ```json
//! { "id": "tmpl_1", "name": "Greeter", "template": "Hello {name}", "input_variables": ["name"] }
//! ```
//!
//! Invocation:
//!
//! ```json
//! { "input": { "name": "Ada" } }
//! ```

mod compose;
mod record;


pub use compose::{to_invocation_payload, to_persistence_payload};
pub use record::{InvocationPayload, PersistencePayload, VariableDrift};
