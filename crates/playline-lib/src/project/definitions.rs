//! External function declarations from a definitions document.
//!
//! The document is read loosely: only the `Functions` array matters, and a
//! missing file or missing array means "nothing declared".

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use playline_core::{FunctionDeclaration, Type};
use serde_json::Value;

use crate::{Error, Result};

/// Load declarations from `path`. A missing file yields none.
pub fn load_declarations(path: &Path) -> Result<Vec<FunctionDeclaration>> {
    match fs::read_to_string(path) {
        Ok(text) => parse_declarations(path, &text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Parse declarations from document text. `path` is used for error messages.
pub fn parse_declarations(path: &Path, text: &str) -> Result<Vec<FunctionDeclaration>> {
    let invalid = |message: String| Error::Definitions {
        path: path.to_path_buf(),
        message,
    };

    let root: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;

    let Some(functions) = root.get("Functions").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let mut declarations = Vec::with_capacity(functions.len());
    for (index, function) in functions.iter().enumerate() {
        let field = |key: &str| {
            function
                .get(key)
                .and_then(Value::as_str)
                .ok_or_else(|| invalid(format!("function #{index}: missing string `{key}`")))
        };

        let name = field("YarnName")?.to_owned();
        let return_type = Type::resolve(field("ReturnType")?)?;

        let parameters = match function.get("Parameters") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(parameters)) => parameters
                .iter()
                .map(|parameter| {
                    let type_name =
                        parameter.get("Type").and_then(Value::as_str).ok_or_else(|| {
                            invalid(format!(
                                "function `{name}`: parameter is missing string `Type`"
                            ))
                        })?;
                    Ok(Type::resolve(type_name)?)
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(invalid(format!(
                    "function `{name}`: `Parameters` must be an array"
                )));
            }
        };

        let documentation = function
            .get("Documentation")
            .and_then(Value::as_str)
            .map(str::to_owned);

        declarations.push(FunctionDeclaration {
            name,
            return_type,
            parameters,
            documentation,
        });
    }

    Ok(declarations)
}
