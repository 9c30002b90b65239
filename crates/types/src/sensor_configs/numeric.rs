//! Numeric sensor platform configuration.
//!
//! Unlike the binary and text platforms, the numeric platform declares the
//! aggregator itself and carries its sensors under fixed keys.

use serde::{Deserialize, Serialize};

use super::entity::EntityConfig;
use crate::id::Id;
use crate::slot::NumericSlot;

/// State class reported for long-term statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
    Total,
    TotalIncreasing,
}

impl StateClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateClass::Measurement => "measurement",
            StateClass::Total => "total",
            StateClass::TotalIncreasing => "total_increasing",
        }
    }

    pub fn cpp_value(&self) -> &'static str {
        match self {
            StateClass::Measurement => "sensor::STATE_CLASS_MEASUREMENT",
            StateClass::Total => "sensor::STATE_CLASS_TOTAL",
            StateClass::TotalIncreasing => "sensor::STATE_CLASS_TOTAL_INCREASING",
        }
    }
}

/// A single numeric sensor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    #[serde(flatten)]
    pub entity: EntityConfig,
    #[serde(default)]
    pub unit_of_measurement: Option<String>,
    #[serde(default)]
    pub accuracy_decimals: Option<u8>,
    #[serde(default)]
    pub device_class: Option<String>,
    #[serde(default)]
    pub state_class: Option<StateClass>,
}

/// The numeric platform entry: one aggregator plus its temperature sensors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericPlatformConfig {
    /// Aggregator id; generated when absent
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub measured_temp: Option<SensorConfig>,
    #[serde(default)]
    pub set_temp: Option<SensorConfig>,
    #[serde(default)]
    pub setup_priority: Option<f32>,
}

impl NumericPlatformConfig {
    /// Sensor configured for a fixed slot, if any
    pub fn sensor(&self, slot: NumericSlot) -> Option<&SensorConfig> {
        match slot {
            NumericSlot::MeasuredTemp => self.measured_temp.as_ref(),
            NumericSlot::SetTemp => self.set_temp.as_ref(),
        }
    }
}
