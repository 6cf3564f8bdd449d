use std::collections::BTreeSet;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::builder::DocumentBuilder;
use crate::normalize::Normalizer;
use crate::types::identifiers::{DocumentId, DocumentVersion};

/// Normalized form of a document body, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    pub tokens: Vec<String>,
    pub terms: BTreeSet<String>,
}

impl NormalizedContent {
    fn new(tokens: Vec<String>) -> Self {
        let terms = tokens.iter().cloned().collect();
        Self { tokens, terms }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }
}

/// The atomic unit of content.
///
/// Immutable once ingested, apart from the normalized form which is filled
/// in on first use and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub title: String,
    /// Body text with the title line removed.
    pub content: String,
    /// Whitespace-delimited words in `content`, stop words included.
    pub word_count: usize,
    #[serde(skip)]
    normalized: OnceCell<NormalizedContent>,
}

impl Document {
    /// Build a Document from decoded source text.
    pub fn from_text(id: DocumentId, raw_text: &str) -> Self {
        let (title, content) = DocumentBuilder.build(raw_text);

        // Version computed on the body, which is also the dedup key
        let version = DocumentVersion::from_content(content.as_bytes());
        let word_count = content.split_whitespace().count();

        Document {
            id,
            version,
            title,
            content,
            word_count,
            normalized: OnceCell::new(),
        }
    }

    pub fn group(&self) -> &str {
        self.id.group()
    }

    /// Cached normalized tokens, if they have been computed.
    pub fn normalized_tokens(&self) -> Option<&[String]> {
        self.normalized.get().map(|n| n.tokens.as_slice())
    }

    pub(crate) fn normalized_with(&self, normalizer: &Normalizer) -> &NormalizedContent {
        self.normalized
            .get_or_init(|| NormalizedContent::new(normalizer.normalize(&self.content)))
    }
}
