//! Live template binding.
//!
//! A [`TemplateBinding`] owns one template body together with the variable
//! list derived from it. The list is recomputed inside every mutation, so the
//! pair can never be observed out of sync.
//!
//! # States
//!
//! - **Editing**: the body may change; each change recomputes the variables.
//! - **Submitted**: [`TemplateBinding::submit`] handed out a
//!   [`BindingSnapshot`]. The payload composers only accept snapshots, so
//!   this is the one way to reach a payload. Further edits are still allowed
//!   and move the binding back to editing; the snapshot already handed off
//!   is an owned copy and is unaffected.

use super::derive_variables;

/// Lifecycle state of a [`TemplateBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingState {
    /// Body may change; variables follow every change.
    #[default]
    Editing,
    /// A snapshot was taken and no edit has happened since.
    Submitted,
}

/// A template body paired with its derived variable list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateBinding {
    body: String,
    variables: Vec<String>,
    state: BindingState,
}

/// Immutable copy of a binding taken at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSnapshot {
    body: String,
    variables: Vec<String>,
}

impl TemplateBinding {
    /// Create a binding pre-seeded with `body`.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptbind::template::TemplateBinding;
    ///
    /// let mut binding = TemplateBinding::new("Hello {name}");
    /// assert_eq!(binding.variables(), ["name"]);
    ///
    /// binding.set_body("{greeting}, {name}! {greeting}");
    /// assert_eq!(binding.variables(), ["greeting", "name"]);
    /// ```
    pub fn new(body: impl Into<String>) -> Self {
        let body = body.into();
        let variables = derive_variables(&body);
        Self {
            body,
            variables,
            state: BindingState::Editing,
        }
    }

    /// Create a binding with an empty body and no variables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the body and recompute the variable list before returning.
    pub fn set_body(&mut self, body: impl Into<String>) {
        let body = body.into();
        // Derive first so body and variables are swapped in together.
        let variables = derive_variables(&body);
        self.body = body;
        self.variables = variables;
        self.state = BindingState::Editing;
    }

    /// Current template body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Variables derived from the current body, in first-seen order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BindingState {
        self.state
    }

    /// Take an owned snapshot for a payload and mark the binding submitted.
    pub fn submit(&mut self) -> BindingSnapshot {
        self.state = BindingState::Submitted;
        BindingSnapshot {
            body: self.body.clone(),
            variables: self.variables.clone(),
        }
    }
}

impl From<&str> for TemplateBinding {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for TemplateBinding {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl BindingSnapshot {
    /// Template body at the moment of submission.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Variables at the moment of submission.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Split into owned `(body, variables)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.body, self.variables)
    }
}
