//! spa-registrar-types: Shared data types for the hot tub display sensor registrar.
//!
//! This crate contains pure data types (ids, slot enums, sensor configs)
//! that are shared by the registrar core and the application crate.

pub mod id;
pub mod sensor_configs;
pub mod slot;

// Re-export commonly used types at the crate root for convenience
pub use id::{Id, InvalidId};
pub use sensor_configs::{
    BinarySensorConfig, EntityCategory, EntityConfig, NumericPlatformConfig, SensorConfig,
    StateClass, TextSensorConfig,
};
pub use slot::{BinarySlot, NumericSlot, SensorKind, Slot, TextSlot};
