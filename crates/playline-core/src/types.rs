//! Declared value types for external function signatures.

use serde::{Deserialize, Serialize};

/// Value types a declaration can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    String,
    Any,
    Number,
    #[serde(rename = "bool")]
    Boolean,
}

/// A type name that doesn't match any known [`Type`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid type `{0}` (expected one of: string, any, number, bool)")]
pub struct UnknownType(pub String);

impl Type {
    /// Resolve a declared type name. Matching ignores case.
    pub fn resolve(name: &str) -> Result<Self, UnknownType> {
        match name.to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "any" => Ok(Self::Any),
            "number" => Ok(Self::Number),
            "bool" => Ok(Self::Boolean),
            _ => Err(UnknownType(name.to_owned())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Any => "any",
            Self::Number => "number",
            Self::Boolean => "bool",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
