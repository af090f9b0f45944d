//! Typed scalars and structured values
//!
//! Scanners classify a token lexically as String, Integer or Float while
//! accumulating it; [`build_scalar`] then converts the token into a
//! [`Value`]. Lists and maps nest values recursively.

use crate::error::{ScanError, ScanResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Lexical type of a scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Integer,
    Float,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Integer => write!(f, "integer"),
            ScalarKind::Float => write!(f, "float"),
        }
    }
}

/// Scalar, list or map produced by the literal scanners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    /// Lists use Box<SmallVec> to avoid infinite size recursion
    List(Box<ValueList>),
    Map(ValueMap),
}

/// List literal contents (insertion order is significant)
pub type ValueList = SmallVec<[Value; 4]>;

/// Map literal contents (preserves insertion order, keys are strings)
pub type ValueMap = IndexMap<String, Value>;

impl Value {
    /// Returns an empty string value, used for tokens with no content
    pub fn empty() -> Self {
        Value::String(String::new())
    }

    /// Returns the lexical kind of a scalar, or `None` for lists and maps
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Value::String(_) => Some(ScalarKind::String),
            Value::Integer(_) => Some(ScalarKind::Integer),
            Value::Float(_) => Some(ScalarKind::Float),
            Value::List(_) | Value::Map(_) => None,
        }
    }

    /// Returns true if the value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if the value is a map
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns a reference to the string if this is a String variant
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns the integer value if this is an Integer variant
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Returns the float value if this is a Float variant
    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(f) = self {
            Some(*f)
        } else {
            None
        }
    }

    /// Returns a reference to the list if this is a List variant
    pub fn as_list(&self) -> Option<&ValueList> {
        if let Value::List(list) = self {
            Some(list)
        } else {
            None
        }
    }

    /// Returns a reference to the map if this is a Map variant
    pub fn as_map(&self) -> Option<&ValueMap> {
        if let Value::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Box::new(ValueList::from_vec(items)))
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

/// Converts an accumulated token into a scalar of the given kind.
///
/// String tokens are wrapped as-is. Integer and Float tokens are parsed with
/// the standard decimal parsers; a rejected literal is an error, never a
/// silent fallback to String.
pub fn build_scalar(token: &str, kind: ScalarKind) -> ScanResult<Value> {
    match kind {
        ScalarKind::String => Ok(Value::String(token.to_string())),
        ScalarKind::Integer => token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| ScanError::InvalidNumericLiteral {
                literal: token.to_string(),
                kind,
                message: e.to_string(),
            }),
        ScalarKind::Float => token
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| ScanError::InvalidNumericLiteral {
                literal: token.to_string(),
                kind,
                message: e.to_string(),
            }),
    }
}
