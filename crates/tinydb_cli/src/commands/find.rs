//! Find command implementation.

use super::parse_object;
use crate::error::CliError;
use std::io::Write;
use std::path::Path;
use tinydb_codec::to_json_pretty;
use tinydb_core::{Query, Store};

/// Runs the find command, printing matches as a JSON array.
pub fn run(
    path: &Path,
    collection: &str,
    filter: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let query = filter
        .map(|text| parse_object("--where", text).map(Query::from))
        .transpose()?;

    let store = Store::open_file(path)?;
    let documents = store.find(collection, query.as_ref());

    out.write_all(&to_json_pretty(&documents)?)?;
    writeln!(out)?;
    Ok(())
}
