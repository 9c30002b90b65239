//! Configuration records for the sensor platforms.

pub mod binary;
pub mod entity;
pub mod numeric;
pub mod text;

pub use binary::BinarySensorConfig;
pub use entity::{EntityCategory, EntityConfig};
pub use numeric::{NumericPlatformConfig, SensorConfig, StateClass};
pub use text::TextSensorConfig;
