//! Collections command implementation.

use crate::error::CliError;
use std::io::Write;
use std::path::Path;
use tinydb_core::Store;

/// Runs the collections command, printing one name per line.
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let store = Store::open_file(path)?;
    for name in store.collections() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
