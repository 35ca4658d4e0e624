//! Compiled program representation.
//!
//! Mirrors what the external compiler emits. Deserialization reads the
//! compiler's camelCase wire format; serialization writes PascalCase field
//! names, with operands and opcodes flattened (see [`crate::flatten`]).

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compiled dialogue program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Program {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: IndexMap<String, Node>,
    #[serde(default)]
    pub initial_values: IndexMap<String, Operand>,
}

/// A single dialogue node and its instruction stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Node {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    /// Label name to instruction index.
    #[serde(default)]
    pub labels: IndexMap<String, i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        rename(serialize = "SourceTextStringID", deserialize = "sourceTextStringID")
    )]
    pub source_text_string_id: Option<String>,
    #[serde(default)]
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Header {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Instruction {
    pub opcode: OpCode,
    #[serde(default)]
    pub operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(opcode: OpCode, operands: impl IntoIterator<Item = Operand>) -> Self {
        Self {
            opcode,
            operands: operands.into_iter().collect(),
        }
    }
}

/// Instruction kind.
///
/// Serializes as its symbolic name. Deserializes from either that name or
/// the compiler's SCREAMING_SNAKE_CASE spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum OpCode {
    #[serde(alias = "JUMP_TO")]
    JumpTo,
    #[serde(alias = "JUMP")]
    Jump,
    #[serde(alias = "RUN_LINE")]
    RunLine,
    #[serde(alias = "RUN_COMMAND")]
    RunCommand,
    #[serde(alias = "ADD_OPTION")]
    AddOption,
    #[serde(alias = "SHOW_OPTIONS")]
    ShowOptions,
    #[serde(alias = "PUSH_STRING")]
    PushString,
    #[serde(alias = "PUSH_FLOAT")]
    PushFloat,
    #[serde(alias = "PUSH_BOOL")]
    PushBool,
    #[serde(alias = "PUSH_NULL")]
    PushNull,
    #[serde(alias = "JUMP_IF_FALSE")]
    JumpIfFalse,
    #[serde(alias = "POP")]
    Pop,
    #[serde(alias = "CALL_FUNC")]
    CallFunc,
    #[serde(alias = "PUSH_VARIABLE")]
    PushVariable,
    #[serde(alias = "STORE_VARIABLE")]
    StoreVariable,
    #[serde(alias = "STOP")]
    Stop,
    #[serde(alias = "RUN_NODE")]
    RunNode,
}

impl OpCode {
    pub fn name(self) -> &'static str {
        match self {
            Self::JumpTo => "JumpTo",
            Self::Jump => "Jump",
            Self::RunLine => "RunLine",
            Self::RunCommand => "RunCommand",
            Self::AddOption => "AddOption",
            Self::ShowOptions => "ShowOptions",
            Self::PushString => "PushString",
            Self::PushFloat => "PushFloat",
            Self::PushBool => "PushBool",
            Self::PushNull => "PushNull",
            Self::JumpIfFalse => "JumpIfFalse",
            Self::Pop => "Pop",
            Self::CallFunc => "CallFunc",
            Self::PushVariable => "PushVariable",
            Self::StoreVariable => "StoreVariable",
            Self::Stop => "Stop",
            Self::RunNode => "RunNode",
        }
    }
}

impl std::fmt::Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single typed instruction operand.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Operand {
    #[default]
    Unset,
    Float(f64),
    Bool(bool),
    String(String),
}

impl Operand {
    /// Build an operand from JSON.
    ///
    /// Accepts the flattened scalar form (`1.5`, `true`, `"x"`, `null`) and
    /// the compiler's tagged form (`{"floatValue": 1.5}`). A tagged object
    /// with no tag is unset; more than one tag is an error.
    pub fn from_json(value: Value) -> Result<Self, String> {
        match value {
            Value::Null => Ok(Self::Unset),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Float)
                .ok_or_else(|| format!("operand number {n} is out of range")),
            Value::String(s) => Ok(Self::String(s)),
            Value::Object(map) => {
                let mut tagged = map.into_iter().filter(|(_, v)| !v.is_null());
                let Some((tag, inner)) = tagged.next() else {
                    return Ok(Self::Unset);
                };
                if let Some((extra, _)) = tagged.next() {
                    return Err(format!("operand has both `{tag}` and `{extra}` set"));
                }
                match (tag.as_str(), inner) {
                    ("floatValue" | "float_value", Value::Number(n)) => n
                        .as_f64()
                        .map(Self::Float)
                        .ok_or_else(|| format!("operand number {n} is out of range")),
                    ("boolValue" | "bool_value", Value::Bool(b)) => Ok(Self::Bool(b)),
                    ("stringValue" | "string_value", Value::String(s)) => Ok(Self::String(s)),
                    (tag, inner) => Err(format!("invalid operand `{tag}`: {inner}")),
                }
            }
            Value::Array(_) => Err("operand cannot be an array".to_owned()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(de::Error::custom)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
