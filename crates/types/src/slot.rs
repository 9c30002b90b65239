//! Attachment slots on the hot tub display aggregator.
//!
//! Each sensor kind has a closed set of slots. The discriminant in a sensor
//! config deserializes straight into one of these enums, so there is no
//! string left to compare by the time a sensor gets wired.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slots a binary sensor can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinarySlot {
    Heater,
    Pump,
    Light,
}

impl BinarySlot {
    pub const ALL: [BinarySlot; 3] = [BinarySlot::Heater, BinarySlot::Pump, BinarySlot::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            BinarySlot::Heater => "heater",
            BinarySlot::Pump => "pump",
            BinarySlot::Light => "light",
        }
    }
}

/// Slots a text sensor can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSlot {
    ErrorCode,
}

impl TextSlot {
    pub const ALL: [TextSlot; 1] = [TextSlot::ErrorCode];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextSlot::ErrorCode => "error_code",
        }
    }
}

/// Fixed numeric slots, keyed by name in the platform config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericSlot {
    MeasuredTemp,
    SetTemp,
}

impl NumericSlot {
    pub const ALL: [NumericSlot; 2] = [NumericSlot::MeasuredTemp, NumericSlot::SetTemp];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericSlot::MeasuredTemp => "measured_temp",
            NumericSlot::SetTemp => "set_temp",
        }
    }
}

/// Any slot on the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Binary(BinarySlot),
    Text(TextSlot),
    Numeric(NumericSlot),
}

impl Slot {
    /// Every slot, in the order the aggregator declares them
    pub const ALL: [Slot; 6] = [
        Slot::Binary(BinarySlot::Heater),
        Slot::Binary(BinarySlot::Pump),
        Slot::Binary(BinarySlot::Light),
        Slot::Text(TextSlot::ErrorCode),
        Slot::Numeric(NumericSlot::MeasuredTemp),
        Slot::Numeric(NumericSlot::SetTemp),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Binary(slot) => slot.as_str(),
            Slot::Text(slot) => slot.as_str(),
            Slot::Numeric(slot) => slot.as_str(),
        }
    }

    /// Name of the aggregator method that stores a sensor in this slot
    pub fn setter(&self) -> &'static str {
        match self {
            Slot::Binary(BinarySlot::Heater) => "set_heater_sensor",
            Slot::Binary(BinarySlot::Pump) => "set_pump_sensor",
            Slot::Binary(BinarySlot::Light) => "set_light_sensor",
            Slot::Text(TextSlot::ErrorCode) => "set_error_text_sensor",
            Slot::Numeric(NumericSlot::MeasuredTemp) => "set_measured_temp_sensor",
            Slot::Numeric(NumericSlot::SetTemp) => "set_set_temp_sensor",
        }
    }

    /// The sensor kind this slot accepts
    pub fn kind(&self) -> SensorKind {
        match self {
            Slot::Binary(_) => SensorKind::Binary,
            Slot::Text(_) => SensorKind::Text,
            Slot::Numeric(_) => SensorKind::Numeric,
        }
    }
}

impl From<BinarySlot> for Slot {
    fn from(slot: BinarySlot) -> Self {
        Slot::Binary(slot)
    }
}

impl From<TextSlot> for Slot {
    fn from(slot: TextSlot) -> Self {
        Slot::Text(slot)
    }
}

impl From<NumericSlot> for Slot {
    fn from(slot: NumericSlot) -> Self {
        Slot::Numeric(slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of sensor entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Binary,
    Text,
    Numeric,
}

impl SensorKind {
    /// Config domain the kind is declared under
    pub fn domain(&self) -> &'static str {
        match self {
            SensorKind::Binary => "binary_sensor",
            SensorKind::Text => "text_sensor",
            SensorKind::Numeric => "sensor",
        }
    }

    /// Fully qualified C++ class of the sensor object
    pub fn cpp_type(&self) -> &'static str {
        match self {
            SensorKind::Binary => "binary_sensor::BinarySensor",
            SensorKind::Text => "text_sensor::TextSensor",
            SensorKind::Numeric => "sensor::Sensor",
        }
    }

    /// Application method that makes the sensor visible to the runtime
    pub fn register_call(&self) -> &'static str {
        match self {
            SensorKind::Binary => "App.register_binary_sensor",
            SensorKind::Text => "App.register_text_sensor",
            SensorKind::Numeric => "App.register_sensor",
        }
    }

    /// Base used when generating an id for a sensor that declares none
    pub fn id_base(&self) -> &'static str {
        match self {
            SensorKind::Binary => "binary_sensor_id",
            SensorKind::Text => "text_sensor_id",
            SensorKind::Numeric => "sensor_id",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.domain())
    }
}
