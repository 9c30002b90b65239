//! Text sensor platform configuration.

use serde::{Deserialize, Serialize};

use super::entity::EntityConfig;
use crate::id::Id;
use crate::slot::TextSlot;

/// A text sensor attached to an existing aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSensorConfig {
    #[serde(flatten)]
    pub entity: EntityConfig,
    pub parent_id: Id,
    #[serde(rename = "type")]
    pub sensor_type: TextSlot,
}

impl TextSensorConfig {
    pub fn new(parent_id: Id, sensor_type: TextSlot) -> Self {
        Self {
            entity: EntityConfig::default(),
            parent_id,
            sensor_type,
        }
    }
}
