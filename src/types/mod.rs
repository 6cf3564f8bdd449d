pub mod identifiers;
pub mod search;

pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
pub use search::{Query, SearchMetadata, SearchResponse, SearchResult};
