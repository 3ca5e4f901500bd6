//! CLI command implementations.

pub mod collections;
pub mod find;
pub mod insert;

use crate::error::CliError;
use tinydb_codec::{from_json, Fields, Value};

/// Parses a command-line argument as a JSON object.
pub fn parse_object(arg: &'static str, text: &str) -> Result<Fields, CliError> {
    let value: Value =
        from_json(text.as_bytes()).map_err(|source| CliError::InvalidJson { arg, source })?;
    let found = value.type_name();
    value
        .into_object()
        .ok_or(CliError::NotAnObject { arg, found })
}
