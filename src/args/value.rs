//! Field types and the untyped values stored in containers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// 32-bit signed integer.
    Int,
    /// Boolean flag.
    Bool,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A single value held by a container.
///
/// Serialized untagged so a container reads as plain JSON:
/// `{"camera_id": "0", "pixel_format": 35}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Key present with no value.
    Null,
    /// String value.
    String(String),
    /// Integer value.
    Int(i32),
    /// Boolean value.
    Bool(bool),
}

impl Value {
    /// Returns the type of this value, or `None` for null.
    #[must_use]
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Null => None,
            Self::String(_) => Some(FieldType::String),
            Self::Int(_) => Some(FieldType::Int),
            Self::Bool(_) => Some(FieldType::Bool),
        }
    }

    /// Human-readable type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.field_type().map_or_else(|| "null".to_string(), |t| t.to_string())
    }

    /// Parses a command-line literal into a value of the given type.
    ///
    /// `null` parses to [`Value::Null`] for every type so the codec can
    /// report it. For string fields a leading backslash is dropped, so `\null`
    /// yields the four-character string `null`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the literal is not valid for `field_type`.
    pub fn parse_as(field_type: FieldType, raw: &str) -> Result<Self, String> {
        if raw == "null" {
            return Ok(Self::Null);
        }
        match field_type {
            FieldType::String => {
                Ok(Self::String(raw.strip_prefix('\\').unwrap_or(raw).to_string()))
            }
            FieldType::Int => raw
                .parse::<i32>()
                .map(Self::Int)
                .map_err(|e| format!("Invalid int literal {raw:?}: {e}")),
            FieldType::Bool => raw
                .parse::<bool>()
                .map(Self::Bool)
                .map_err(|e| format!("Invalid bool literal {raw:?}: {e}")),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
