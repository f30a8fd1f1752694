//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for welcomegen.
///
/// This struct represents the contents of `welcomegen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metadata document, relative to the project root unless absolute.
    #[serde(default = "default_appdata_path")]
    pub appdata_path: String,

    /// Handling of demo scripts that do not parse.
    #[serde(default)]
    pub demo_policy: DemoPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appdata_path: default_appdata_path(),
            demo_policy: DemoPolicy::default(),
        }
    }
}
