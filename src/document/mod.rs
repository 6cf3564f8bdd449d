pub mod builder;
pub mod document;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use builder::{decode_entities, DocumentBuilder, UNTITLED};
pub use document::{Document, NormalizedContent};
