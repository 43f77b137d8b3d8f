//! Payload value types.

use crate::error::{PromptError, Result};
use crate::template::{TemplateBinding, derive_variables};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// A template as stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistencePayload {
    /// Backend identifier; absent for templates not created yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    pub name: String,

    /// Template body.
    pub template: String,

    /// Variables derived from `template` when the payload was composed.
    #[serde(default)]
    pub input_variables: Vec<String>,
}

/// Arguments for running an agent against a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationPayload {
    /// Values keyed by variable name. May hold keys the template does not use.
    pub input: BTreeMap<String, String>,
}

/// Difference between stored and freshly derived variables of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDrift {
    /// Variables saved with the record.
    pub stored: Vec<String>,
    /// Variables derived from the record's current template.
    pub derived: Vec<String>,
}

impl VariableDrift {
    /// Derived variables missing from the stored list.
    pub fn added(&self) -> Vec<&str> {
        self.derived
            .iter()
            .filter(|v| !self.stored.contains(v))
            .map(String::as_str)
            .collect()
    }

    /// Stored variables listed more than once, each reported once.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.stored
            .iter()
            .filter(|v| !seen.insert(*v))
            .filter(|v| reported.insert(*v))
            .map(String::as_str)
            .collect()
    }

    /// Stored variables no longer present in the template.
    pub fn removed(&self) -> Vec<&str> {
        self.stored
            .iter()
            .filter(|v| !self.derived.contains(v))
            .map(String::as_str)
            .collect()
    }
}

impl PersistencePayload {
    /// Load a stored record from a YAML or JSON file.
    ///
    /// JSON is a subset of YAML, so both are read with the YAML parser.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read template record '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            PromptError::UserError(format!(
                "failed to parse template record '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize to a single JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize persistence payload: {}", e))
        })
    }

    /// Compare the stored variable list with one derived from `template`.
    ///
    /// Returns `None` when they match exactly, order included.
    pub fn drift(&self) -> Option<VariableDrift> {
        let derived = derive_variables(&self.template);
        if derived == self.input_variables {
            None
        } else {
            Some(VariableDrift {
                stored: self.input_variables.clone(),
                derived,
            })
        }
    }

    /// Copy of this record with `input_variables` recomputed.
    pub fn refreshed(&self) -> Self {
        Self {
            input_variables: derive_variables(&self.template),
            ..self.clone()
        }
    }

    /// Open an editing binding over this record's template.
    pub fn binding(&self) -> TemplateBinding {
        TemplateBinding::new(self.template.as_str())
    }
}

impl InvocationPayload {
    /// Serialize to a single JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize invocation payload: {}", e))
        })
    }
}
