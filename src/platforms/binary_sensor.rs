//! Binary sensor platform: heater, pump and light indicators

use super::schemas::{binary_sensor_schema, binary_slot_names, platform_schema};
use super::EntityRecord;
use anyhow::Result;
use serde_json::Value;
use spa_registrar_core::{ConfigOption, ConfigSchema, Registrar, RegistrarError, ValueType};
use spa_registrar_types::BinarySensorConfig;

pub const DOMAIN: &str = "binary_sensor";

pub fn config_schema() -> ConfigSchema {
    binary_sensor_schema()
        .extend(platform_schema())
        .with(ConfigOption::required(
            "parent_id",
            ValueType::Id,
            "Display aggregator to attach to",
        ))
        .with(ConfigOption::required(
            "type",
            ValueType::Enum(binary_slot_names()),
            "Aggregator slot that receives the sensor",
        ))
}

pub fn validate(value: &Value) -> Result<BinarySensorConfig, RegistrarError> {
    config_schema().validate(value)?;
    super::deserialize(value)
}

pub fn to_code(registrar: &mut Registrar, value: &Value) -> Result<Vec<EntityRecord>> {
    let config = validate(value)?;
    let sensor = registrar.register_binary_sensor(&config)?;
    Ok(vec![EntityRecord::new(sensor, &config.entity)])
}
