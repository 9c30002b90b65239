//! Home Assistant entity ids for the generated sensors
//!
//! The spa dashboard card looks entities up as
//! `<domain>.<device>_<entity name>`, both parts normalized the same way.

use crate::platforms::EntityRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex"));

/// Lowercase, collapse runs of other characters into `_`, trim `_` at both ends
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

pub fn entity_id(domain: &str, device: &str, name: Option<&str>) -> String {
    let device = normalize(device);
    match name.map(normalize).filter(|n| !n.is_empty()) {
        Some(name) => format!("{}.{}_{}", domain, device, name),
        None => format!("{}.{}", domain, device),
    }
}

/// Entity id an exposed record gets on the given device
pub fn record_entity_id(device: &str, record: &EntityRecord) -> String {
    entity_id(record.kind.domain(), device, record.name.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spa_registrar_types::{Id, SensorKind};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("esp32-spa"), "esp32_spa");
        assert_eq!(normalize("  Spa  Set Temp!! "), "spa_set_temp");
        assert_eq!(normalize("Hot--Tub__2"), "hot_tub_2");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_entity_id_matches_dashboard_card() {
        assert_eq!(
            entity_id("sensor", "esp32-spa", Some("Spa Set Temp")),
            "sensor.esp32_spa_spa_set_temp"
        );
        assert_eq!(
            entity_id("sensor", "esp32-spa", Some("Spa Measured Temp")),
            "sensor.esp32_spa_spa_measured_temp"
        );
    }

    #[test]
    fn test_unnamed_entity_uses_device_name() {
        assert_eq!(entity_id("binary_sensor", "Backyard Spa", None), "binary_sensor.backyard_spa");
        assert_eq!(entity_id("binary_sensor", "Backyard Spa", Some("!!")), "binary_sensor.backyard_spa");
    }

    #[test]
    fn test_record_entity_id() {
        let record = EntityRecord {
            kind: SensorKind::Binary,
            id: Id::parse("spa_pump").unwrap(),
            name: Some("Spa Pump".to_string()),
            internal: false,
        };
        assert_eq!(record_entity_id("esp32-spa", &record), "binary_sensor.esp32_spa_spa_pump");
    }
}
