//! # TinyDB Core
//!
//! A minimal embedded document store.
//!
//! This crate provides:
//! - Named collections of JSON-like documents, created on first insert
//! - System-assigned `id` and `createdAt` fields on every document
//! - Exact-match, conjunctive queries
//! - Optional whole-file persistence to a single JSON snapshot
//!
//! ## Example
//!
//! ```rust
//! use tinydb_core::{Query, Store, Value};
//!
//! let mut store = Store::in_memory();
//! let id = store
//!     .insert("users", [("name", Value::from("Ann")), ("age", Value::from(30))])
//!     .unwrap();
//!
//! let query = Query::new().eq("name", "Ann");
//! let found = store.find("users", Some(&query));
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id(), &id);
//! ```
//!
//! ## Persistence
//!
//! With a persistence file configured, every insert rewrites the whole file.
//! Inserts therefore cost O(total stored data), which bounds how large a
//! store can usefully grow.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod document;
mod error;
mod query;
mod snapshot;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use document::{Document, DocumentId, InvalidDocument, CREATED_AT_FIELD, ID_FIELD};
pub use error::{CoreError, CoreResult};
pub use query::Query;
pub use store::Store;

pub use tinydb_codec::{Fields, Value};
