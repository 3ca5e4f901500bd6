//! Whole-store snapshot encoding.
//!
//! The snapshot is a single JSON object:
//!
//! ```text
//! {
//!   "<collection>": [ { "id": "...", ...fields, "createdAt": "..." }, ... ],
//!   ...
//! }
//! ```
//!
//! Collections appear in first-insert order and documents in insertion order.

use crate::document::Document;
use crate::error::{CoreError, CoreResult};
use indexmap::IndexMap;
use tinydb_codec::{from_json, to_json_pretty, CodecError};

/// Collection name to ordered documents, in first-insert order.
pub(crate) type Collections = IndexMap<String, Vec<Document>>;

/// Encodes the full store state.
pub(crate) fn encode(collections: &Collections) -> CoreResult<Vec<u8>> {
    Ok(to_json_pretty(collections)?)
}

/// Decodes a full store state.
///
/// Any malformed content, including an empty file, is a `Parse` error
/// carrying the decoder's own message.
pub(crate) fn decode(bytes: &[u8]) -> CoreResult<Collections> {
    from_json(bytes).map_err(|e| match e {
        CodecError::DecodingFailed { message } => CoreError::parse(message),
        other => CoreError::parse(other.to_string()),
    })
}
