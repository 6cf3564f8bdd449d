use serde::{Deserialize, Serialize};

use crate::normalize::Normalizer;
use crate::types::identifiers::DocumentId;

/// A normalized query.
///
/// Tokens keep their query order and repeats; scoring decides whether
/// repeats count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub tokens: Vec<String>,
}

impl Query {
    pub fn parse(raw: impl Into<String>, normalizer: &Normalizer) -> Self {
        let raw = raw.into();
        let tokens = normalizer.normalize(&raw);
        Self { raw, tokens }
    }

    /// True when nothing survived normalization (empty or all stop words).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A ranked hit. Built fresh per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: DocumentId,
    pub title: String,
    pub snippet: String,
    /// Number of query tokens found in the document; always >= 1.
    pub relevance: usize,
}

/// Metadata describing the outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub query: String,
    pub tokens: Vec<String>,
    pub documents_considered: usize,
    pub documents_matched: usize,
    pub documents_returned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub search: SearchMetadata,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
