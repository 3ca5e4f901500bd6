//! # TinyDB Codec
//!
//! Dynamic values and JSON snapshot encoding for TinyDB.
//!
//! Documents carry arbitrary nested payloads without a static schema.
//! [`Value`] is the tagged union that holds them, and the snapshot functions
//! turn any serializable state into pretty-printed JSON and back.
//!
//! ## Snapshot Rules
//!
//! - Objects keep field insertion order
//! - Output is indented with two spaces
//! - Non-finite floats are written as `null`
//! - Input must be complete, valid UTF-8 JSON
//!
//! ## Usage
//!
//! ```
//! use tinydb_codec::{to_json_pretty, from_json, Value};
//!
//! let value = Value::object([("name", Value::from("Ann")), ("age", Value::from(30))]);
//! let bytes = to_json_pretty(&value).unwrap();
//!
//! let decoded: Value = from_json(&bytes).unwrap();
//! assert_eq!(value, decoded);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod json;
mod value;

pub use error::{CodecError, CodecResult};
pub use json::{from_json, to_json_pretty};
pub use value::{Fields, Value};
