//! Verification targets: one path, or an ordered list of paths.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::error::InternalError;

/// What the existence verifier checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTarget {
    One(String),
    Many(Vec<String>),
}

impl PathTarget {
    /// Paths in check order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        }
    }
}

impl From<&str> for PathTarget {
    fn from(path: &str) -> Self {
        Self::One(path.to_string())
    }
}

impl TryFrom<Value> for PathTarget {
    type Error = InternalError;

    /// Accepts a string or an array of strings; every other shape is a
    /// malformed test definition.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(path) => Ok(Self::One(path)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(path) => Ok(path),
                    other => Err(InternalError::InvalidTarget {
                        found: format!("a list containing {}", describe(&other)),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            other => Err(InternalError::InvalidTarget {
                found: describe(&other),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for PathTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(D::Error::custom)
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("a boolean ({b})"),
        Value::Number(n) => format!("a number ({n})"),
        Value::String(s) => format!("a string ({s})"),
        Value::Array(_) => "a nested list".to_string(),
        Value::Object(_) => "a mapping".to_string(),
    }
}
