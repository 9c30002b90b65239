//! Code emission
//!
//! Registration produces a flat, ordered list of statements. Rendering turns
//! them into C++ lines for the firmware's generated `setup()` body.

use spa_registrar_types::{Id, SensorKind};
use std::fmt;

/// A literal argument to a property setter
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f32),
    /// A C++ expression emitted verbatim, e.g. an enumerator
    Raw(&'static str),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{}", cpp_string(s)),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(v) if v.fract() == 0.0 => write!(f, "{:.1}f", v),
            Literal::Float(v) => write!(f, "{}f", v),
            Literal::Raw(expr) => f.write_str(expr),
        }
    }
}

/// A single generated statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Construct the aggregator component
    NewComponent { id: Id, cpp_type: String },
    /// Hand the component to the application's setup/loop cycle
    RegisterComponent { id: Id },
    /// Construct a sensor object
    NewSensor { id: Id, kind: SensorKind },
    /// Make a sensor visible to the runtime
    RegisterSensor { id: Id, kind: SensorKind },
    /// Configure a property on any object
    SetProperty {
        target: Id,
        setter: &'static str,
        value: Literal,
    },
    /// Wire a sensor into an aggregator slot
    InvokeSetter {
        target: Id,
        setter: &'static str,
        argument: Id,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::NewComponent { id, cpp_type } => {
                write!(f, "auto *{} = new {}();", id, cpp_type)
            }
            Statement::RegisterComponent { id } => write!(f, "App.register_component({});", id),
            Statement::NewSensor { id, kind } => {
                write!(f, "auto *{} = new {}();", id, kind.cpp_type())
            }
            Statement::RegisterSensor { id, kind } => {
                write!(f, "{}({});", kind.register_call(), id)
            }
            Statement::SetProperty {
                target,
                setter,
                value,
            } => write!(f, "{}->{}({});", target, setter, value),
            Statement::InvokeSetter {
                target,
                setter,
                argument,
            } => write!(f, "{}->{}({});", target, setter, argument),
        }
    }
}

/// Ordered output of a registration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, statement: Statement) {
        log::trace!("emit: {}", statement);
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Wiring calls made on `target`, as (setter, argument) pairs in emission order
    pub fn setter_calls(&self, target: &Id) -> Vec<(&'static str, &Id)> {
        self.statements
            .iter()
            .filter_map(|statement| match statement {
                Statement::InvokeSetter {
                    target: t,
                    setter,
                    argument,
                } if t == target => Some((*setter, argument)),
                _ => None,
            })
            .collect()
    }

    /// Render as C++ source, one statement per line
    pub fn render_cpp(&self) -> String {
        let mut out = String::new();
        for statement in &self.statements {
            out.push_str(&statement.to_string());
            out.push('\n');
        }
        out
    }
}

/// Quote and escape a string as a C++ literal
pub fn cpp_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
