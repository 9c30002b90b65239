//! Base schemas shared by the sensor platforms

use spa_registrar_core::{ConfigOption, ConfigSchema, ValueType};
use spa_registrar_types::{BinarySlot, TextSlot};

/// Keys every platform entry carries
pub fn platform_schema() -> ConfigSchema {
    ConfigSchema::new().with(ConfigOption::required(
        "platform",
        ValueType::String,
        "Platform that handles this entry",
    ))
}

/// Fields common to all entities
pub fn entity_schema() -> ConfigSchema {
    ConfigSchema::new()
        .with(ConfigOption::optional("id", ValueType::Id, "Id used in generated code"))
        .with(ConfigOption::optional("name", ValueType::String, "Friendly name"))
        .with(ConfigOption::optional(
            "internal",
            ValueType::Boolean,
            "Hide the entity from the frontend",
        ))
        .with(ConfigOption::optional(
            "disabled_by_default",
            ValueType::Boolean,
            "Register the entity disabled",
        ))
        .with(ConfigOption::optional("icon", ValueType::Icon, "Icon, e.g. mdi:hot-tub"))
        .with(ConfigOption::optional(
            "entity_category",
            ValueType::Enum(vec!["config", "diagnostic"]),
            "Entity category",
        ))
}

pub fn sensor_schema() -> ConfigSchema {
    entity_schema()
        .with(ConfigOption::optional(
            "unit_of_measurement",
            ValueType::String,
            "Unit shown next to the value",
        ))
        .with(ConfigOption::optional(
            "accuracy_decimals",
            ValueType::IntegerRange(0, i64::from(u8::MAX)),
            "Decimals to round published values to",
        ))
        .with(ConfigOption::optional("device_class", ValueType::String, "Device class"))
        .with(ConfigOption::optional(
            "state_class",
            ValueType::Enum(vec!["measurement", "total", "total_increasing"]),
            "State class for long-term statistics",
        ))
}

pub fn binary_sensor_schema() -> ConfigSchema {
    entity_schema().with(ConfigOption::optional(
        "device_class",
        ValueType::String,
        "Device class",
    ))
}

pub fn text_sensor_schema() -> ConfigSchema {
    entity_schema()
}

pub fn binary_slot_names() -> Vec<&'static str> {
    BinarySlot::ALL.iter().map(|slot| slot.as_str()).collect()
}

pub fn text_slot_names() -> Vec<&'static str> {
    TextSlot::ALL.iter().map(|slot| slot.as_str()).collect()
}
