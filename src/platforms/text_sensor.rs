//! Text sensor platform: panel error codes

use super::schemas::{platform_schema, text_sensor_schema, text_slot_names};
use super::EntityRecord;
use anyhow::Result;
use serde_json::Value;
use spa_registrar_core::{ConfigOption, ConfigSchema, Registrar, RegistrarError, ValueType};
use spa_registrar_types::TextSensorConfig;

pub const DOMAIN: &str = "text_sensor";

pub fn config_schema() -> ConfigSchema {
    text_sensor_schema()
        .extend(platform_schema())
        .with(ConfigOption::required(
            "parent_id",
            ValueType::Id,
            "Display aggregator to attach to",
        ))
        .with(ConfigOption::required(
            "type",
            ValueType::Enum(text_slot_names()),
            "Aggregator slot that receives the sensor",
        ))
}

pub fn validate(value: &Value) -> Result<TextSensorConfig, RegistrarError> {
    config_schema().validate(value)?;
    super::deserialize(value)
}

pub fn to_code(registrar: &mut Registrar, value: &Value) -> Result<Vec<EntityRecord>> {
    let config = validate(value)?;
    let sensor = registrar.register_text_sensor(&config)?;
    Ok(vec![EntityRecord::new(sensor, &config.entity)])
}
