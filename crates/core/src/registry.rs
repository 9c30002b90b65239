//! Registry of declared ids
//!
//! Every object the generated code declares gets an entry here. Sensors are
//! owned by the registry; aggregators only hold their ids.

use crate::aggregator::{Aggregator, SensorRef};
use crate::error::{RegistrarError, Result};
use spa_registrar_types::Id;
use std::collections::HashMap;

/// A declared object
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Aggregator(Aggregator),
    Sensor(SensorRef),
}

/// Registry for aggregators and sensors, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    variables: HashMap<Id, Variable>,
    order: Vec<Id>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn declare(&mut self, id: Id, variable: Variable) -> Result<()> {
        if self.variables.contains_key(&id) {
            return Err(RegistrarError::DuplicateId { id });
        }
        self.order.push(id.clone());
        self.variables.insert(id, variable);
        Ok(())
    }

    pub fn declare_aggregator(&mut self, aggregator: Aggregator) -> Result<()> {
        self.declare(aggregator.id().clone(), Variable::Aggregator(aggregator))
    }

    pub fn declare_sensor(&mut self, sensor: SensorRef) -> Result<()> {
        self.declare(sensor.id.clone(), Variable::Sensor(sensor))
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.variables.contains_key(id)
    }

    pub fn get(&self, id: &Id) -> Result<&Variable> {
        self.variables
            .get(id)
            .ok_or_else(|| RegistrarError::ReferenceResolution { id: id.clone() })
    }

    /// Resolve an id that must name an aggregator
    pub fn aggregator(&self, id: &Id) -> Result<&Aggregator> {
        match self.get(id)? {
            Variable::Aggregator(aggregator) => Ok(aggregator),
            Variable::Sensor(_) => Err(RegistrarError::TypeMismatch {
                id: id.clone(),
                expected: "display aggregator",
            }),
        }
    }

    pub fn aggregator_mut(&mut self, id: &Id) -> Result<&mut Aggregator> {
        match self.variables.get_mut(id) {
            Some(Variable::Aggregator(aggregator)) => Ok(aggregator),
            Some(Variable::Sensor(_)) => Err(RegistrarError::TypeMismatch {
                id: id.clone(),
                expected: "display aggregator",
            }),
            None => Err(RegistrarError::ReferenceResolution { id: id.clone() }),
        }
    }

    /// All aggregators in declaration order
    pub fn aggregators(&self) -> Vec<&Aggregator> {
        self.order
            .iter()
            .filter_map(|id| match self.variables.get(id) {
                Some(Variable::Aggregator(aggregator)) => Some(aggregator),
                _ => None,
            })
            .collect()
    }

    /// All sensors in declaration order
    pub fn sensors(&self) -> Vec<&SensorRef> {
        self.order
            .iter()
            .filter_map(|id| match self.variables.get(id) {
                Some(Variable::Sensor(sensor)) => Some(sensor),
                _ => None,
            })
            .collect()
    }

    /// Generate an unused id from `base`: `base`, `base_2`, `base_3`, ...
    pub fn generate_id(&self, base: &str) -> Result<Id> {
        let first = Id::parse(base)?;
        if !self.contains(&first) {
            return Ok(first);
        }
        let mut n = 2;
        loop {
            let candidate = Id::parse(format!("{}_{}", base, n))?;
            if !self.contains(&candidate) {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
