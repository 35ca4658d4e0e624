//! Lua table literal encoder.
//!
//! Values are first serialized to a `serde_json::Value`, so every
//! `Serialize` impl (including operand and opcode flattening) applies
//! unchanged. Object keys keep insertion order, which makes the output
//! byte-for-byte reproducible for identical input.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;

const INDENT: &str = "  ";

/// Lua reserved words; never valid as bare table keys.
const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Renders values as indented Lua table constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuaWriter {
    skip_null_members: bool,
}

impl LuaWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave out object members whose value is null.
    ///
    /// Nulls inside arrays are still written as `nil` so positions hold.
    pub fn skip_null_members(mut self, value: bool) -> Self {
        self.skip_null_members = value;
        self
    }

    pub fn to_string<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        let value = serde_json::to_value(value)?;
        Ok(self.render(&value))
    }

    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str("nil"),
            Value::Bool(b) => write!(out, "{b}").unwrap(),
            Value::Number(n) => write!(out, "{n}").unwrap(),
            Value::String(s) => write_string(out, s),
            Value::Array(items) => {
                if items.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (i, item) in items.iter().enumerate() {
                    push_indent(out, depth + 1);
                    self.write_value(out, item, depth + 1);
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push('}');
            }
            Value::Object(members) => {
                let members: Vec<_> = members
                    .iter()
                    .filter(|(_, v)| !(self.skip_null_members && v.is_null()))
                    .collect();
                if members.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (i, (key, member)) in members.iter().enumerate() {
                    push_indent(out, depth + 1);
                    write_key(out, key);
                    out.push_str(" = ");
                    self.write_value(out, member, depth + 1);
                    if i + 1 < members.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push('}');
            }
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Whether `name` can be written as a bare key or field access.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name)
}

/// `name` or `["name"]`.
pub fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        out.push('[');
        write_string(out, key);
        out.push(']');
    }
}

/// Double-quoted Lua string literal. Non-ASCII text passes through as UTF-8.
pub fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => write!(out, "\\{:03}", c as u32).unwrap(),
            c => out.push(c),
        }
    }
    out.push('"');
}
