//! Flattening of tagged program values into plain scalars.
//!
//! Operands and opcodes never serialize field-by-field. Both go through
//! [`Flatten`], which maps them onto a [`Scalar`]; every other program type
//! uses its derived `Serialize`.

use serde::{Serialize, Serializer};

use crate::program::{OpCode, Operand};

/// A value in its output-encoding form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Number(f64),
    Boolean(bool),
    String(&'a str),
    Null,
}

impl Serialize for Scalar<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Scalar::Number(n) => serializer.serialize_f64(n),
            Scalar::Boolean(b) => serializer.serialize_bool(b),
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Null => serializer.serialize_none(),
        }
    }
}

impl std::fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::String(s) => write!(f, "{s:?}"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// Values that render as a single scalar.
pub trait Flatten {
    fn flatten(&self) -> Scalar<'_>;
}

impl Flatten for Operand {
    fn flatten(&self) -> Scalar<'_> {
        match self {
            Operand::Float(n) => Scalar::Number(*n),
            Operand::Bool(b) => Scalar::Boolean(*b),
            Operand::String(s) => Scalar::String(s),
            Operand::Unset => Scalar::Null,
        }
    }
}

impl Flatten for OpCode {
    fn flatten(&self) -> Scalar<'_> {
        Scalar::String(self.name())
    }
}

impl<T: Flatten> Flatten for Option<T> {
    fn flatten(&self) -> Scalar<'_> {
        match self {
            Some(value) => value.flatten(),
            None => Scalar::Null,
        }
    }
}

impl Serialize for Operand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.flatten().serialize(serializer)
    }
}

impl Serialize for OpCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.flatten().serialize(serializer)
    }
}
