//! Fields shared by every sensor entity.

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// Entity category shown by the home automation frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

impl EntityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Config => "config",
            EntityCategory::Diagnostic => "diagnostic",
        }
    }

    /// C++ enumerator passed to `set_entity_category`
    pub fn cpp_value(&self) -> &'static str {
        match self {
            EntityCategory::Config => "ENTITY_CATEGORY_CONFIG",
            EntityCategory::Diagnostic => "ENTITY_CATEGORY_DIAGNOSTIC",
        }
    }
}

/// Common entity configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Explicit id; generated when absent
    #[serde(default)]
    pub id: Option<Id>,
    /// Friendly name
    #[serde(default)]
    pub name: Option<String>,
    /// Internal entities are not exposed to the frontend
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub disabled_by_default: bool,
    /// Icon in `prefix:name` form, e.g. `mdi:hot-tub`
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub entity_category: Option<EntityCategory>,
}

impl EntityConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
