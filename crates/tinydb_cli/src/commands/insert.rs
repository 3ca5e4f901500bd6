//! Insert command implementation.

use super::parse_object;
use crate::error::CliError;
use std::io::Write;
use std::path::Path;
use tinydb_core::Store;
use tracing::info;

/// Runs the insert command, printing the new document id.
pub fn run(path: &Path, collection: &str, data: &str, out: &mut impl Write) -> Result<(), CliError> {
    let fields = parse_object("data", data)?;
    let mut store = Store::open_file(path)?;

    let id = store.insert(collection, fields)?;
    info!(collection, %id, "document inserted");

    writeln!(out, "{id}")?;
    Ok(())
}
