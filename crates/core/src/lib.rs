//! spa-registrar-core: Registration core for the hot tub display sensors.
//!
//! This crate contains the aggregator model, the id registry, schema
//! validation, code emission and the registrar that ties them together.

pub mod aggregator;
pub mod codegen;
mod error;
pub mod registrar;
mod registry;
pub mod schema;

pub use aggregator::{Aggregator, AggregatorType, SensorRef};
pub use codegen::{cpp_string, Literal, Program, Statement};
pub use error::{RegistrarError, Result};
pub use registrar::{ChildSensorConfig, Registrar, SensorProperties};
pub use registry::{Registry, Variable};
pub use schema::{ConfigOption, ConfigSchema, ValueType};

// Re-export types used in registrar signatures for convenience
pub use spa_registrar_types::{
    BinarySensorConfig, BinarySlot, Id, NumericPlatformConfig, NumericSlot, SensorConfig,
    SensorKind, Slot, TextSensorConfig, TextSlot,
};
