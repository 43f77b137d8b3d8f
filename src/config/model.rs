//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for promptbind.
///
/// This struct represents the contents of `promptbind.yaml`.
/// Unknown fields in the YAML are preserved for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Body used when a template is created without one.
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Variables every template should reference (warnings only unless strict).
    #[serde(default = "default_recommended_variables")]
    pub recommended_variables: Vec<String>,

    /// Treat recommended-variable warnings as errors.
    #[serde(default)]
    pub strict_policy: bool,

    /// NDJSON audit log of composed payloads. Logging is off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            recommended_variables: default_recommended_variables(),
            strict_policy: false,
            events_file: None,
            extra: BTreeMap::new(),
        }
    }
}
