//! Declarative configuration schemas
//!
//! A schema lists the keys a config mapping may contain. Validation runs on
//! the raw JSON value before typed deserialization so that errors can name
//! the offending field and closed enumerations are rejected up front.

use crate::error::{RegistrarError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use spa_registrar_types::Id;

static ICON_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-]+:[\w\-]+$").expect("Invalid regex"));

/// Accepted value shape for a config option
#[derive(Debug, Clone)]
pub enum ValueType {
    String,
    Boolean,
    Integer,
    /// An integer within an inclusive range
    IntegerRange(i64, i64),
    /// A number that fits a finite `f32`
    Float,
    /// A string that must parse as an [`Id`]
    Id,
    /// A string of the form `prefix:name`
    Icon,
    /// A string drawn from a closed set
    Enum(Vec<&'static str>),
    /// A nested mapping with its own schema
    Map(ConfigSchema),
}

impl ValueType {
    fn describe(&self) -> &'static str {
        match self {
            ValueType::String => "a string",
            ValueType::Boolean => "a boolean",
            ValueType::Integer | ValueType::IntegerRange(..) => "an integer",
            ValueType::Float => "a number",
            ValueType::Id => "an id",
            ValueType::Icon => "an icon",
            ValueType::Enum(_) => "one of the listed options",
            ValueType::Map(_) => "a mapping",
        }
    }
}

/// Configuration schema entry
#[derive(Debug, Clone)]
pub struct ConfigOption {
    /// Option key
    pub key: String,
    /// Description
    pub description: String,
    /// Value type
    pub value_type: ValueType,
    /// Whether the key must be present
    pub required: bool,
}

impl ConfigOption {
    pub fn required(key: &str, value_type: ValueType, description: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            value_type,
            required: true,
        }
    }

    pub fn optional(key: &str, value_type: ValueType, description: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            value_type,
            required: false,
        }
    }
}

/// Configuration schema for a config mapping
#[derive(Debug, Clone, Default)]
pub struct ConfigSchema {
    /// Available configuration options
    pub options: Vec<ConfigOption>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, replacing any existing option with the same key
    pub fn with(mut self, option: ConfigOption) -> Self {
        self.options.retain(|existing| existing.key != option.key);
        self.options.push(option);
        self
    }

    /// Merge another schema's options into this one
    pub fn extend(self, other: ConfigSchema) -> Self {
        other.options.into_iter().fold(self, |schema, option| schema.with(option))
    }

    pub fn get(&self, key: &str) -> Option<&ConfigOption> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.key.as_str())
    }

    /// Validate a raw config value against this schema
    pub fn validate(&self, value: &Value) -> Result<()> {
        self.validate_at(value, "")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<()> {
        let map = value.as_object().ok_or_else(|| {
            RegistrarError::validation(display_path(path), "expected a mapping")
        })?;

        for key in map.keys() {
            if self.get(key).is_none() {
                return Err(RegistrarError::validation(
                    join_path(path, key),
                    "extra keys not allowed",
                ));
            }
        }

        for option in &self.options {
            let field = join_path(path, &option.key);
            match map.get(&option.key) {
                None if option.required => {
                    return Err(RegistrarError::validation(field, "required key not provided"));
                }
                None => {}
                Some(value) => check_value(&option.value_type, value, &field)?,
            }
        }

        Ok(())
    }
}

fn check_value(value_type: &ValueType, value: &Value, field: &str) -> Result<()> {
    let mismatch = || {
        RegistrarError::validation(
            field,
            format!("expected {}, got {}", value_type.describe(), type_name(value)),
        )
    };

    match value_type {
        ValueType::String => value.as_str().map(|_| ()).ok_or_else(mismatch),
        ValueType::Boolean => value.as_bool().map(|_| ()).ok_or_else(mismatch),
        ValueType::Integer => {
            if value.is_i64() || value.is_u64() {
                Ok(())
            } else {
                Err(mismatch())
            }
        }
        ValueType::IntegerRange(min, max) => {
            let number = value.as_i64().or_else(|| value.as_u64().map(|_| i64::MAX));
            match number {
                Some(n) if (*min..=*max).contains(&n) => Ok(()),
                Some(_) => Err(RegistrarError::validation(
                    field,
                    format!("value must be between {} and {}, got {}", min, max, value),
                )),
                None => Err(mismatch()),
            }
        }
        ValueType::Float => {
            let number = value.as_f64().ok_or_else(mismatch)?;
            if (number as f32).is_finite() {
                Ok(())
            } else {
                Err(RegistrarError::validation(
                    field,
                    format!("value {} is out of range", value),
                ))
            }
        }
        ValueType::Id => {
            let text = value.as_str().ok_or_else(mismatch)?;
            Id::parse(text)
                .map(|_| ())
                .map_err(|e| RegistrarError::validation(field, e.to_string()))
        }
        ValueType::Icon => {
            let text = value.as_str().ok_or_else(mismatch)?;
            if ICON_PATTERN.is_match(text) {
                Ok(())
            } else {
                Err(RegistrarError::validation(
                    field,
                    format!("icons must match the format 'prefix:name', got '{}'", text),
                ))
            }
        }
        ValueType::Enum(allowed) => {
            let text = value.as_str().ok_or_else(mismatch)?;
            if allowed.contains(&text) {
                Ok(())
            } else {
                let options: Vec<String> = allowed.iter().map(|a| format!("'{}'", a)).collect();
                Err(RegistrarError::validation(
                    field,
                    format!("unknown value '{}', valid options are {}", text, options.join(", ")),
                ))
            }
        }
        ValueType::Map(schema) => schema.validate_at(value, field),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
