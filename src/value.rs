//! Primitive field values
//!
//! A [`Value`] is what one field of a record yields at generation time. The
//! node adapter turns values into literal nodes by looking up a conversion
//! registered for the value's [`ValueKind`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value read from one field of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Integer(i64),
    UnsignedLong(u64),
    Boolean(bool),
    Float(f64),
}

/// The runtime kind of a [`Value`], used to key literal conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Integer,
    UnsignedLong,
    Boolean,
    Float,
}

impl Value {
    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::UnsignedLong(_) => ValueKind::UnsignedLong,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Float(_) => ValueKind::Float,
        }
    }

    /// Lexical form of the value, used when it is spliced into a subject
    /// IRI or becomes the text of a literal.
    pub fn lexical(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::UnsignedLong(u) => u.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Float(f) => f.to_string(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::UnsignedLong => "unsigned-long",
            ValueKind::Boolean => "boolean",
            ValueKind::Float => "float",
        };
        write!(f, "{}", name)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::UnsignedLong(u)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
