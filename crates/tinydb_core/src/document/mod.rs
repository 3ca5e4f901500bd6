//! Document types.

mod id;
mod record;

pub use id::DocumentId;
pub use record::{Document, InvalidDocument, CREATED_AT_FIELD, ID_FIELD};
