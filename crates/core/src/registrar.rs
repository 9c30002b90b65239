//! Sensor registration and slot dispatch
//!
//! The registrar turns validated sensor configs into declared objects and
//! emitted statements. Binary and text sensors attach to an aggregator that
//! already exists; the numeric platform declares the aggregator itself.

use crate::aggregator::{Aggregator, AggregatorType, SensorRef};
use crate::codegen::{Literal, Program, Statement};
use crate::error::Result;
use crate::registry::Registry;
use log::{debug, info, warn};
use spa_registrar_types::{
    BinarySensorConfig, EntityConfig, Id, NumericPlatformConfig, NumericSlot, SensorConfig,
    SensorKind, Slot, TextSensorConfig,
};

/// Per-sensor settings that become property setter calls
pub trait SensorProperties {
    fn entity(&self) -> &EntityConfig;

    /// Settings beyond the common entity fields
    fn extra_properties(&self) -> Vec<(&'static str, Literal)> {
        Vec::new()
    }
}

impl SensorProperties for BinarySensorConfig {
    fn entity(&self) -> &EntityConfig {
        &self.entity
    }

    fn extra_properties(&self) -> Vec<(&'static str, Literal)> {
        self.device_class
            .iter()
            .map(|class| ("set_device_class", Literal::Str(class.clone())))
            .collect()
    }
}

impl SensorProperties for TextSensorConfig {
    fn entity(&self) -> &EntityConfig {
        &self.entity
    }
}

impl SensorProperties for SensorConfig {
    fn entity(&self) -> &EntityConfig {
        &self.entity
    }

    fn extra_properties(&self) -> Vec<(&'static str, Literal)> {
        let mut properties = Vec::new();
        if let Some(unit) = &self.unit_of_measurement {
            properties.push(("set_unit_of_measurement", Literal::Str(unit.clone())));
        }
        if let Some(decimals) = self.accuracy_decimals {
            properties.push(("set_accuracy_decimals", Literal::Int(i64::from(decimals))));
        }
        if let Some(class) = &self.device_class {
            properties.push(("set_device_class", Literal::Str(class.clone())));
        }
        if let Some(state_class) = self.state_class {
            properties.push(("set_state_class", Literal::Raw(state_class.cpp_value())));
        }
        properties
    }
}

/// A sensor that attaches to an existing aggregator through its `type`
#[derive(Debug, Clone, Copy)]
pub enum ChildSensorConfig<'a> {
    Binary(&'a BinarySensorConfig),
    Text(&'a TextSensorConfig),
}

impl ChildSensorConfig<'_> {
    pub fn kind(&self) -> SensorKind {
        match self {
            ChildSensorConfig::Binary(_) => SensorKind::Binary,
            ChildSensorConfig::Text(_) => SensorKind::Text,
        }
    }

    pub fn parent_id(&self) -> &Id {
        match self {
            ChildSensorConfig::Binary(config) => &config.parent_id,
            ChildSensorConfig::Text(config) => &config.parent_id,
        }
    }

    /// Aggregator slot selected by the discriminant
    pub fn slot(&self) -> Slot {
        match self {
            ChildSensorConfig::Binary(config) => Slot::Binary(config.sensor_type),
            ChildSensorConfig::Text(config) => Slot::Text(config.sensor_type),
        }
    }

    fn properties(&self) -> &dyn SensorProperties {
        match self {
            ChildSensorConfig::Binary(config) => *config,
            ChildSensorConfig::Text(config) => *config,
        }
    }
}

/// Builds aggregators and sensors and records the statements that wire them
pub struct Registrar {
    aggregator_type: AggregatorType,
    registry: Registry,
    program: Program,
}

impl Registrar {
    pub fn new(aggregator_type: AggregatorType) -> Self {
        Self {
            aggregator_type,
            registry: Registry::new(),
            program: Program::new(),
        }
    }

    pub fn aggregator_type(&self) -> &AggregatorType {
        &self.aggregator_type
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn into_parts(self) -> (Registry, Program) {
        (self.registry, self.program)
    }

    /// Declare a new aggregator and attach whichever temperature sensors are configured
    pub fn register_numeric_sensors(&mut self, config: &NumericPlatformConfig) -> Result<Id> {
        let id = match &config.id {
            Some(id) => id.clone(),
            None => self.registry.generate_id(&self.aggregator_type.id_base())?,
        };

        self.registry.declare_aggregator(Aggregator::new(id.clone()))?;
        self.program.add(Statement::NewComponent {
            id: id.clone(),
            cpp_type: self.aggregator_type.cpp_type(),
        });
        if let Some(priority) = config.setup_priority {
            self.program.add(Statement::SetProperty {
                target: id.clone(),
                setter: "set_setup_priority",
                value: Literal::Float(priority),
            });
        }
        self.program.add(Statement::RegisterComponent { id: id.clone() });
        info!("Declared {} '{}'", self.aggregator_type.class_name, id);

        for slot in NumericSlot::ALL {
            if let Some(sensor_config) = config.sensor(slot) {
                let sensor = self.new_sensor(SensorKind::Numeric, sensor_config)?;
                self.attach(&id, Slot::Numeric(slot), sensor)?;
            }
        }

        Ok(id)
    }

    /// Attach a binary or text sensor to the aggregator named by its `parent_id`
    pub fn register_child_sensor(&mut self, config: ChildSensorConfig<'_>) -> Result<SensorRef> {
        let parent = config.parent_id();
        // Resolve before constructing so a bad reference leaves nothing behind
        self.registry.aggregator(parent)?;

        let sensor = self.new_sensor(config.kind(), config.properties())?;
        self.attach(parent, config.slot(), sensor.clone())?;
        Ok(sensor)
    }

    pub fn register_binary_sensor(&mut self, config: &BinarySensorConfig) -> Result<SensorRef> {
        self.register_child_sensor(ChildSensorConfig::Binary(config))
    }

    pub fn register_text_sensor(&mut self, config: &TextSensorConfig) -> Result<SensorRef> {
        self.register_child_sensor(ChildSensorConfig::Text(config))
    }

    fn new_sensor(
        &mut self,
        kind: SensorKind,
        config: &dyn SensorProperties,
    ) -> Result<SensorRef> {
        let entity = config.entity();
        let id = match &entity.id {
            Some(id) => id.clone(),
            None => self.registry.generate_id(kind.id_base())?,
        };

        let sensor = SensorRef { id: id.clone(), kind };
        self.registry.declare_sensor(sensor.clone())?;
        self.program.add(Statement::NewSensor { id: id.clone(), kind });

        let mut properties = Vec::new();
        if let Some(name) = &entity.name {
            properties.push(("set_name", Literal::Str(name.clone())));
        }
        if entity.internal {
            properties.push(("set_internal", Literal::Bool(true)));
        }
        if entity.disabled_by_default {
            properties.push(("set_disabled_by_default", Literal::Bool(true)));
        }
        if let Some(icon) = &entity.icon {
            properties.push(("set_icon", Literal::Str(icon.clone())));
        }
        if let Some(category) = entity.entity_category {
            properties.push(("set_entity_category", Literal::Raw(category.cpp_value())));
        }
        properties.extend(config.extra_properties());

        for (setter, value) in properties {
            self.program.add(Statement::SetProperty {
                target: id.clone(),
                setter,
                value,
            });
        }
        self.program.add(Statement::RegisterSensor { id, kind });

        Ok(sensor)
    }

    fn attach(&mut self, parent: &Id, slot: Slot, sensor: SensorRef) -> Result<()> {
        let argument = sensor.id.clone();
        let aggregator = self.registry.aggregator_mut(parent)?;
        if let Some(previous) = aggregator.attach(slot, sensor) {
            warn!(
                "Slot '{}' on '{}' already held '{}', replacing it with '{}'",
                slot, parent, previous.id, argument
            );
        }

        debug!("{}->{}({})", parent, slot.setter(), argument);
        self.program.add(Statement::InvokeSetter {
            target: parent.clone(),
            setter: slot.setter(),
            argument,
        });
        Ok(())
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(AggregatorType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrarError;
    use spa_registrar_types::{BinarySlot, EntityCategory, StateClass, TextSlot};

    fn id(s: &str) -> Id {
        Id::parse(s).unwrap()
    }

    fn registrar_with_spa1() -> Registrar {
        let mut registrar = Registrar::default();
        let config = NumericPlatformConfig {
            id: Some(id("spa1")),
            ..NumericPlatformConfig::default()
        };
        registrar.register_numeric_sensors(&config).unwrap();
        registrar
    }

    #[test]
    fn test_each_binary_type_invokes_only_its_setter() {
        for slot in BinarySlot::ALL {
            let mut registrar = registrar_with_spa1();
            let sensor = registrar
                .register_binary_sensor(&BinarySensorConfig::new(id("spa1"), slot))
                .unwrap();

            let calls = registrar.program().setter_calls(&id("spa1"));
            assert_eq!(calls.len(), 1, "slot {:?}", slot);
            assert_eq!(calls[0].0, Slot::Binary(slot).setter());
            assert_eq!(calls[0].1, &sensor.id);

            let aggregator = registrar.registry().aggregator(&id("spa1")).unwrap();
            assert_eq!(aggregator.filled_slots(), vec![Slot::Binary(slot)]);
        }
    }

    #[test]
    fn test_error_code_text_sensor() {
        let mut registrar = registrar_with_spa1();
        registrar
            .register_text_sensor(&TextSensorConfig::new(id("spa1"), TextSlot::ErrorCode))
            .unwrap();

        let calls = registrar.program().setter_calls(&id("spa1"));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "set_error_text_sensor");
    }

    #[test]
    fn test_pump_scenario() {
        let mut registrar = registrar_with_spa1();
        let mut config = BinarySensorConfig::new(id("spa1"), BinarySlot::Pump);
        config.entity.id = Some(id("spa_pump"));
        registrar.register_binary_sensor(&config).unwrap();

        let rendered = registrar.program().render_cpp();
        assert_eq!(rendered.matches("spa1->set_pump_sensor(spa_pump);").count(), 1);
        assert!(!rendered.contains("set_heater_sensor"));
        assert!(!rendered.contains("set_light_sensor"));
    }

    #[test]
    fn test_numeric_both_slots() {
        let mut registrar = Registrar::default();
        let config = NumericPlatformConfig {
            id: None,
            measured_temp: Some(SensorConfig::default()),
            set_temp: Some(SensorConfig::default()),
            setup_priority: None,
        };
        let aggregator_id = registrar.register_numeric_sensors(&config).unwrap();
        assert_eq!(aggregator_id.as_str(), "hottubdisplaysensor_id");

        let calls = registrar.program().setter_calls(&aggregator_id);
        let setters: Vec<&str> = calls.iter().map(|(setter, _)| *setter).collect();
        assert_eq!(setters, vec!["set_measured_temp_sensor", "set_set_temp_sensor"]);
        assert_ne!(calls[0].1, calls[1].1);
    }

    #[test]
    fn test_numeric_no_slots() {
        let mut registrar = Registrar::default();
        let aggregator_id = registrar
            .register_numeric_sensors(&NumericPlatformConfig::default())
            .unwrap();

        assert!(registrar.program().setter_calls(&aggregator_id).is_empty());
        let aggregator = registrar.registry().aggregator(&aggregator_id).unwrap();
        assert!(aggregator.slot(Slot::Numeric(NumericSlot::MeasuredTemp)).is_none());
        assert!(aggregator.slot(Slot::Numeric(NumericSlot::SetTemp)).is_none());
        assert_eq!(
            registrar.program().statements(),
            &[
                Statement::NewComponent {
                    id: aggregator_id.clone(),
                    cpp_type: "esp32_spa_v2::HotTubDisplaySensor".to_string(),
                },
                Statement::RegisterComponent { id: aggregator_id },
            ]
        );
    }

    #[test]
    fn test_numeric_measured_only_scenario() {
        let mut registrar = Registrar::default();
        let config = NumericPlatformConfig {
            id: Some(id("x")),
            measured_temp: Some(SensorConfig {
                unit_of_measurement: Some("°F".to_string()),
                accuracy_decimals: Some(0),
                state_class: Some(StateClass::Measurement),
                ..SensorConfig::default()
            }),
            ..NumericPlatformConfig::default()
        };
        registrar.register_numeric_sensors(&config).unwrap();

        let rendered = registrar.program().render_cpp();
        assert_eq!(rendered.matches("x->set_measured_temp_sensor(").count(), 1);
        assert!(!rendered.contains("set_set_temp_sensor"));
        assert!(rendered.contains("sensor_id->set_unit_of_measurement(\"°F\");"));
        assert!(rendered.contains("sensor_id->set_accuracy_decimals(0);"));
        assert!(rendered.contains("sensor_id->set_state_class(sensor::STATE_CLASS_MEASUREMENT);"));
    }

    #[test]
    fn test_setup_priority_precedes_registration() {
        let mut registrar = Registrar::default();
        let config = NumericPlatformConfig {
            id: Some(id("spa1")),
            setup_priority: Some(600.0),
            ..NumericPlatformConfig::default()
        };
        registrar.register_numeric_sensors(&config).unwrap();

        let lines: Vec<String> = registrar
            .program()
            .statements()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            lines,
            vec![
                "auto *spa1 = new esp32_spa_v2::HotTubDisplaySensor();",
                "spa1->set_setup_priority(600.0f);",
                "App.register_component(spa1);",
            ]
        );
    }

    #[test]
    fn test_second_registration_overwrites_slot() {
        let mut registrar = registrar_with_spa1();
        let first = registrar
            .register_binary_sensor(&BinarySensorConfig::new(id("spa1"), BinarySlot::Light))
            .unwrap();
        let second = registrar
            .register_binary_sensor(&BinarySensorConfig::new(id("spa1"), BinarySlot::Light))
            .unwrap();
        assert_ne!(first.id, second.id);

        let calls = registrar.program().setter_calls(&id("spa1"));
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(setter, _)| *setter == "set_light_sensor"));

        let aggregator = registrar.registry().aggregator(&id("spa1")).unwrap();
        assert_eq!(
            aggregator.slot(Slot::Binary(BinarySlot::Light)),
            Some(&second)
        );
    }

    #[test]
    fn test_unknown_parent_constructs_nothing() {
        let mut registrar = Registrar::default();
        let err = registrar
            .register_binary_sensor(&BinarySensorConfig::new(id("spa9"), BinarySlot::Heater))
            .unwrap_err();

        assert_eq!(err, RegistrarError::ReferenceResolution { id: id("spa9") });
        assert!(registrar.program().is_empty());
        assert!(registrar.registry().is_empty());
    }

    #[test]
    fn test_parent_must_be_aggregator() {
        let mut registrar = registrar_with_spa1();
        let mut config = BinarySensorConfig::new(id("spa1"), BinarySlot::Pump);
        config.entity.id = Some(id("spa_pump"));
        registrar.register_binary_sensor(&config).unwrap();

        let err = registrar
            .register_binary_sensor(&BinarySensorConfig::new(id("spa_pump"), BinarySlot::Heater))
            .unwrap_err();
        assert!(matches!(err, RegistrarError::TypeMismatch { .. }));
    }

    #[test]
    fn test_duplicate_sensor_id() {
        let mut registrar = registrar_with_spa1();
        let mut config = BinarySensorConfig::new(id("spa1"), BinarySlot::Pump);
        config.entity.id = Some(id("spa1"));
        let err = registrar.register_binary_sensor(&config).unwrap_err();
        assert_eq!(err, RegistrarError::DuplicateId { id: id("spa1") });
    }

    #[test]
    fn test_entity_properties_emitted() {
        let mut registrar = registrar_with_spa1();
        let mut config = BinarySensorConfig::new(id("spa1"), BinarySlot::Heater);
        config.entity = EntityConfig {
            id: Some(id("spa_heater")),
            name: Some("Spa Heater".to_string()),
            internal: false,
            disabled_by_default: true,
            icon: Some("mdi:fire".to_string()),
            entity_category: Some(EntityCategory::Diagnostic),
        };
        config.device_class = Some("heat".to_string());
        registrar.register_binary_sensor(&config).unwrap();

        let rendered = registrar.program().render_cpp();
        let expected = "\
auto *spa_heater = new binary_sensor::BinarySensor();
spa_heater->set_name(\"Spa Heater\");
spa_heater->set_disabled_by_default(true);
spa_heater->set_icon(\"mdi:fire\");
spa_heater->set_entity_category(ENTITY_CATEGORY_DIAGNOSTIC);
spa_heater->set_device_class(\"heat\");
App.register_binary_sensor(spa_heater);
spa1->set_heater_sensor(spa_heater);
";
        assert!(rendered.ends_with(expected), "got:\n{}", rendered);
    }

    #[test]
    fn test_custom_aggregator_type() {
        let mut registrar = Registrar::new(AggregatorType::new("spa_test", "FakeDisplay"));
        let aggregator_id = registrar
            .register_numeric_sensors(&NumericPlatformConfig::default())
            .unwrap();
        assert_eq!(aggregator_id.as_str(), "fakedisplay_id");
        assert!(registrar
            .program()
            .render_cpp()
            .starts_with("auto *fakedisplay_id = new spa_test::FakeDisplay();"));
    }
}
