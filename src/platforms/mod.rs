//! Sensor platforms
//!
//! Each platform validates its domain's entries and hands them to the
//! registrar. Platforms run in registration order, which puts the numeric
//! platform (the one that declares aggregators) ahead of the platforms that
//! reference them.

pub mod binary_sensor;
mod schemas;
pub mod sensor;
pub mod text_sensor;

use crate::config::SpaDocument;
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;
use spa_registrar_core::{
    AggregatorType, ConfigSchema, Program, Registrar, RegistrarError, Registry, SensorRef,
};
use spa_registrar_types::{EntityConfig, Id, SensorKind};

pub use schemas::{
    binary_sensor_schema, entity_schema, platform_schema, sensor_schema, text_sensor_schema,
};

/// Value of the `platform` key this crate handles
pub const PLATFORM_NAME: &str = "esp32_spa";

/// Function that validates one entry and registers what it declares
pub type ToCode = fn(&mut Registrar, &Value) -> Result<Vec<EntityRecord>>;

/// Function that builds a platform's config schema
pub type SchemaFactory = fn() -> ConfigSchema;

/// A sensor entity produced by a platform entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub kind: SensorKind,
    pub id: Id,
    pub name: Option<String>,
    pub internal: bool,
}

impl EntityRecord {
    pub fn new(sensor: SensorRef, entity: &EntityConfig) -> Self {
        Self {
            kind: sensor.kind,
            id: sensor.id,
            name: entity.name.clone(),
            internal: entity.internal,
        }
    }
}

/// A registered platform
#[derive(Clone)]
pub struct Platform {
    pub domain: &'static str,
    pub schema: SchemaFactory,
    pub to_code: ToCode,
}

/// Platforms in the order their entries are processed
#[derive(Clone, Default)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a platform, replacing any earlier one for the same domain
    pub fn register(&mut self, domain: &'static str, schema: SchemaFactory, to_code: ToCode) {
        self.platforms.retain(|p| p.domain != domain);
        self.platforms.push(Platform {
            domain,
            schema,
            to_code,
        });
    }

    pub fn get(&self, domain: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.domain == domain)
    }

    /// List all registered domains in processing order
    pub fn list_domains(&self) -> Vec<&'static str> {
        self.platforms.iter().map(|p| p.domain).collect()
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}

/// Register all built-in platforms
pub fn register_all() -> PlatformRegistry {
    let mut registry = PlatformRegistry::new();
    registry.register(sensor::DOMAIN, sensor::config_schema, sensor::to_code);
    registry.register(
        binary_sensor::DOMAIN,
        binary_sensor::config_schema,
        binary_sensor::to_code,
    );
    registry.register(
        text_sensor::DOMAIN,
        text_sensor::config_schema,
        text_sensor::to_code,
    );
    registry
}

/// Everything a build produced
#[derive(Debug)]
pub struct BuildReport {
    pub program: Program,
    pub registry: Registry,
    pub entities: Vec<EntityRecord>,
}

impl BuildReport {
    /// Entities visible to the home automation frontend
    pub fn exposed_entities(&self) -> impl Iterator<Item = &EntityRecord> {
        self.entities.iter().filter(|entity| !entity.internal)
    }
}

/// Validate and register every entry in the document that belongs to this platform
pub fn process_document(
    document: &SpaDocument,
    platforms: &PlatformRegistry,
    aggregator_type: AggregatorType,
) -> Result<BuildReport> {
    let mut registrar = Registrar::new(aggregator_type);
    let mut entities = Vec::new();

    for platform in platforms.platforms() {
        for (index, entry) in document.entries(platform.domain).iter().enumerate() {
            let location = format!("{}[{}]", platform.domain, index);
            let name = entry
                .get("platform")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow!("{}: required key 'platform' not provided", location))?;

            if name != PLATFORM_NAME {
                debug!("Skipping {} (platform '{}')", location, name);
                continue;
            }

            let produced = (platform.to_code)(&mut registrar, entry)
                .with_context(|| format!("Invalid config at {}", location))?;
            entities.extend(produced);
        }
    }

    let (registry, program) = registrar.into_parts();
    info!(
        "Registered {} aggregator(s) and {} sensor(s), {} statement(s)",
        registry.aggregators().len(),
        registry.sensors().len(),
        program.len()
    );

    Ok(BuildReport {
        program,
        registry,
        entities,
    })
}

fn deserialize<T: DeserializeOwned>(value: &Value) -> Result<T, RegistrarError> {
    T::deserialize(value).map_err(|e| RegistrarError::validation("config", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spa_registrar_core::Statement;

    fn document(value: Value) -> SpaDocument {
        serde_json::from_value(value).unwrap()
    }

    fn build(value: Value) -> Result<BuildReport> {
        process_document(&document(value), &register_all(), AggregatorType::default())
    }

    #[test]
    fn test_register_all_order() {
        assert_eq!(
            register_all().list_domains(),
            vec!["sensor", "binary_sensor", "text_sensor"]
        );
    }

    #[test]
    fn test_register_replaces_domain() {
        let mut platforms = register_all();
        platforms.register("sensor", sensor::config_schema, sensor::to_code);
        assert_eq!(platforms.list_domains().len(), 3);
        assert!(platforms.get("sensor").is_some());
        assert!(platforms.get("switch").is_none());
    }

    #[test]
    fn test_children_may_precede_aggregator_in_file() {
        let report = build(json!({
            "binary_sensor": [
                {"platform": "esp32_spa", "parent_id": "spa1", "type": "pump", "id": "spa_pump"}
            ],
            "sensor": [
                {"platform": "esp32_spa", "id": "spa1"}
            ]
        }))
        .unwrap();

        let spa1 = Id::parse("spa1").unwrap();
        let calls = report.program.setter_calls(&spa1);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "set_pump_sensor");
        assert_eq!(calls[0].1.as_str(), "spa_pump");
    }

    #[test]
    fn test_full_document() {
        let report = build(json!({
            "sensor": [{
                "platform": "esp32_spa",
                "id": "spa1",
                "measured_temp": {"name": "Spa Measured Temp"},
                "set_temp": {"name": "Spa Set Temp"}
            }],
            "binary_sensor": [
                {"platform": "esp32_spa", "parent_id": "spa1", "type": "heater", "name": "Spa Heater"},
                {"platform": "esp32_spa", "parent_id": "spa1", "type": "pump", "name": "Spa Pump"},
                {"platform": "esp32_spa", "parent_id": "spa1", "type": "light", "name": "Spa Light"},
                {"platform": "gpio", "pin": 4, "name": "Lid"}
            ],
            "text_sensor": [
                {"platform": "esp32_spa", "parent_id": "spa1", "type": "error_code", "internal": true}
            ]
        }))
        .unwrap();

        let spa1 = Id::parse("spa1").unwrap();
        let setters: Vec<&str> = report
            .program
            .setter_calls(&spa1)
            .into_iter()
            .map(|(setter, _)| setter)
            .collect();
        assert_eq!(
            setters,
            vec![
                "set_measured_temp_sensor",
                "set_set_temp_sensor",
                "set_heater_sensor",
                "set_pump_sensor",
                "set_light_sensor",
                "set_error_text_sensor",
            ]
        );

        let aggregator = report.registry.aggregator(&spa1).unwrap();
        assert_eq!(aggregator.filled_slots().len(), 6);
        assert_eq!(report.entities.len(), 6);
        assert_eq!(report.exposed_entities().count(), 5);
    }

    #[test]
    fn test_unknown_parent_aborts_build() {
        let err = build(json!({
            "text_sensor": [
                {"platform": "esp32_spa", "parent_id": "spa1", "type": "error_code"}
            ]
        }))
        .unwrap_err();

        assert!(err.to_string().contains("text_sensor[0]"));
        let cause = err.downcast_ref::<RegistrarError>().unwrap();
        assert!(matches!(cause, RegistrarError::ReferenceResolution { .. }));
    }

    #[test]
    fn test_entry_without_platform() {
        let err = build(json!({"sensor": [{"id": "spa1"}]})).unwrap_err();
        assert!(err.to_string().contains("sensor[0]"));
    }

    #[test]
    fn test_two_aggregators_get_distinct_ids() {
        let report = build(json!({
            "sensor": [
                {"platform": "esp32_spa"},
                {"platform": "esp32_spa"}
            ]
        }))
        .unwrap();

        let new_components: Vec<String> = report
            .program
            .statements()
            .iter()
            .filter_map(|s| match s {
                Statement::NewComponent { id, .. } => Some(id.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(
            new_components,
            vec!["hottubdisplaysensor_id", "hottubdisplaysensor_id_2"]
        );
    }
}
