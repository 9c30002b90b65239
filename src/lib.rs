//! spa-registrar: sensor wiring for the hot tub display decoder
//!
//! This library provides the build-time side of the hot tub display sensors:
//! - Loading the device configuration document
//! - Validating the `sensor`, `binary_sensor` and `text_sensor` platform entries
//! - Registering sensors against their display aggregator and emitting the wiring code
//! - Deriving the entity ids the dashboard card expects

pub mod config;
pub mod naming;
pub mod platforms;

// Re-export commonly used types
pub use config::SpaDocument;
pub use platforms::{process_document, register_all, BuildReport, EntityRecord, PLATFORM_NAME};
pub use spa_registrar_core::{AggregatorType, Registrar, RegistrarError};
