//! The configuration document
//!
//! A document is a JSON object holding the sensor domain lists. JSON is a
//! subset of YAML, so a device config converted with any YAML tool loads
//! as-is. Top-level keys outside the sensor domains are ignored.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Sensor domain lists of a device configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaDocument {
    #[serde(default)]
    pub sensor: Vec<Value>,
    #[serde(default)]
    pub binary_sensor: Vec<Value>,
    #[serde(default)]
    pub text_sensor: Vec<Value>,
}

impl SpaDocument {
    /// Load a document from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("Could not parse {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document = serde_json::from_str(content)?;
        Ok(document)
    }

    /// Entries declared under a domain (`sensor`, `binary_sensor`, `text_sensor`)
    pub fn entries(&self, domain: &str) -> &[Value] {
        match domain {
            "sensor" => &self.sensor,
            "binary_sensor" => &self.binary_sensor,
            "text_sensor" => &self.text_sensor,
            _ => &[],
        }
    }
}
