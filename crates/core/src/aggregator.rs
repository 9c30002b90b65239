//! The display aggregator and its type descriptor

use spa_registrar_types::{Id, SensorKind, Slot};

/// C++ type of the aggregator component
///
/// Passed to the registrar explicitly so that the generated code and the
/// reference checks agree on one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorType {
    pub namespace: String,
    pub class_name: String,
}

impl AggregatorType {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
        }
    }

    /// The hot tub display decoder shipped with the firmware
    pub fn hot_tub_display() -> Self {
        Self::new("esp32_spa_v2", "HotTubDisplaySensor")
    }

    pub fn cpp_type(&self) -> String {
        format!("{}::{}", self.namespace, self.class_name)
    }

    /// Base used when generating an aggregator id
    pub fn id_base(&self) -> String {
        format!("{}_id", self.class_name.to_lowercase())
    }
}

impl Default for AggregatorType {
    fn default() -> Self {
        Self::hot_tub_display()
    }
}

/// Non-owning reference to a registered sensor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SensorRef {
    pub id: Id,
    pub kind: SensorKind,
}

/// A declared aggregator and the sensors wired into it
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregator {
    id: Id,
    heater: Option<SensorRef>,
    pump: Option<SensorRef>,
    light: Option<SensorRef>,
    error_code: Option<SensorRef>,
    measured_temp: Option<SensorRef>,
    set_temp: Option<SensorRef>,
}

impl Aggregator {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            heater: None,
            pump: None,
            light: None,
            error_code: None,
            measured_temp: None,
            set_temp: None,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<SensorRef> {
        use spa_registrar_types::{BinarySlot, NumericSlot, TextSlot};

        match slot {
            Slot::Binary(BinarySlot::Heater) => &mut self.heater,
            Slot::Binary(BinarySlot::Pump) => &mut self.pump,
            Slot::Binary(BinarySlot::Light) => &mut self.light,
            Slot::Text(TextSlot::ErrorCode) => &mut self.error_code,
            Slot::Numeric(NumericSlot::MeasuredTemp) => &mut self.measured_temp,
            Slot::Numeric(NumericSlot::SetTemp) => &mut self.set_temp,
        }
    }

    /// Sensor currently held in a slot
    pub fn slot(&self, slot: Slot) -> Option<&SensorRef> {
        use spa_registrar_types::{BinarySlot, NumericSlot, TextSlot};

        match slot {
            Slot::Binary(BinarySlot::Heater) => self.heater.as_ref(),
            Slot::Binary(BinarySlot::Pump) => self.pump.as_ref(),
            Slot::Binary(BinarySlot::Light) => self.light.as_ref(),
            Slot::Text(TextSlot::ErrorCode) => self.error_code.as_ref(),
            Slot::Numeric(NumericSlot::MeasuredTemp) => self.measured_temp.as_ref(),
            Slot::Numeric(NumericSlot::SetTemp) => self.set_temp.as_ref(),
        }
    }

    /// Store a sensor in a slot, returning the one it replaced
    pub fn attach(&mut self, slot: Slot, sensor: SensorRef) -> Option<SensorRef> {
        debug_assert_eq!(slot.kind(), sensor.kind);
        self.slot_mut(slot).replace(sensor)
    }

    /// Slots that currently hold a sensor, in declaration order
    pub fn filled_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.slot(*slot).is_some())
            .collect()
    }
}
