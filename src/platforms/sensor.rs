//! Numeric sensor platform
//!
//! Each entry declares one display aggregator and, optionally, its measured
//! and set temperature sensors.

use super::schemas::{platform_schema, sensor_schema};
use super::EntityRecord;
use anyhow::Result;
use serde_json::Value;
use spa_registrar_core::{ConfigOption, ConfigSchema, Registrar, RegistrarError, ValueType};
use spa_registrar_types::{NumericPlatformConfig, NumericSlot, Slot};

pub const DOMAIN: &str = "sensor";

pub fn config_schema() -> ConfigSchema {
    let schema = platform_schema()
        .with(ConfigOption::optional(
            "id",
            ValueType::Id,
            "Id of the display aggregator; generated when absent",
        ))
        .with(ConfigOption::optional(
            "setup_priority",
            ValueType::Float,
            "Override the component's setup priority",
        ));

    NumericSlot::ALL.iter().fold(schema, |schema, slot| {
        schema.with(ConfigOption::optional(
            slot.as_str(),
            ValueType::Map(sensor_schema()),
            "Temperature sensor",
        ))
    })
}

pub fn validate(value: &Value) -> Result<NumericPlatformConfig, RegistrarError> {
    config_schema().validate(value)?;
    super::deserialize(value)
}

pub fn to_code(registrar: &mut Registrar, value: &Value) -> Result<Vec<EntityRecord>> {
    let config = validate(value)?;
    let aggregator_id = registrar.register_numeric_sensors(&config)?;
    let aggregator = registrar.registry().aggregator(&aggregator_id)?;

    let mut entities = Vec::new();
    for slot in NumericSlot::ALL {
        if let (Some(sensor_config), Some(sensor)) =
            (config.sensor(slot), aggregator.slot(Slot::Numeric(slot)))
        {
            entities.push(EntityRecord::new(sensor.clone(), &sensor_config.entity));
        }
    }
    Ok(entities)
}
