//! Binary sensor platform configuration.

use serde::{Deserialize, Serialize};

use super::entity::EntityConfig;
use crate::id::Id;
use crate::slot::BinarySlot;

/// A binary sensor attached to an existing aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinarySensorConfig {
    #[serde(flatten)]
    pub entity: EntityConfig,
    /// Aggregator the sensor attaches to
    pub parent_id: Id,
    /// Which slot on the aggregator receives the sensor
    #[serde(rename = "type")]
    pub sensor_type: BinarySlot,
    #[serde(default)]
    pub device_class: Option<String>,
}

impl BinarySensorConfig {
    pub fn new(parent_id: Id, sensor_type: BinarySlot) -> Self {
        Self {
            entity: EntityConfig::default(),
            parent_id,
            sensor_type,
            device_class: None,
        }
    }
}
