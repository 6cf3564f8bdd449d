// Read-only after build:
// no mutation
// no incremental patching of aggregates
// rebuild to change

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::document::{Document, NormalizedContent};
use crate::normalize::Normalizer;
use crate::types::identifiers::{DocumentId, DocumentVersion};

/// One `(id, raw text)` pair supplied by a corpus source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub id: DocumentId,
    pub text: String,
}

impl SourceDocument {
    pub fn new(id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Aggregate counts for one group (leading id segment).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    pub document_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub corpus_version: String,
    pub document_count: usize,
    pub word_count: usize,
    pub duplicates_dropped: usize,
    pub groups: BTreeMap<String, GroupStats>,
    pub built_at: DateTime<Utc>, // informational only
}

/// Ordered, deduplicated collection of documents.
///
/// Owns the [`Normalizer`] its documents are normalized with, so queries
/// run against it are normalized the same way.
#[derive(Debug)]
pub struct CorpusIndex {
    documents: Vec<Document>,
    positions: HashMap<DocumentId, usize>,
    groups: BTreeMap<String, GroupStats>,
    duplicates_dropped: usize,
    corpus_version: String,
    built_at: DateTime<Utc>,
    normalizer: Normalizer,
}

impl CorpusIndex {
    pub fn build<I>(sources: I, normalizer: Normalizer) -> Self
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        let documents = sources
            .into_iter()
            .map(|source| Document::from_text(source.id, &source.text))
            .collect();
        Self::from_documents(documents, normalizer)
    }

    /// Index documents in the order given. On identical content the first
    /// document wins; a repeated id is also dropped.
    pub fn from_documents(documents: Vec<Document>, normalizer: Normalizer) -> Self {
        let supplied = documents.len();
        let mut kept: Vec<Document> = Vec::with_capacity(supplied);
        let mut positions = HashMap::with_capacity(supplied);
        let mut by_version: HashMap<DocumentVersion, usize> = HashMap::with_capacity(supplied);

        for doc in documents {
            if positions.contains_key(&doc.id) {
                tracing::warn!("Dropping document with repeated id {}", doc.id);
                continue;
            }

            if let Some(&first) = by_version.get(&doc.version) {
                let original: &Document = &kept[first];
                if original.content == doc.content {
                    tracing::debug!("Dropping {} as duplicate of {}", doc.id, original.id);
                    continue;
                }
            } else {
                by_version.insert(doc.version.clone(), kept.len());
            }

            positions.insert(doc.id.clone(), kept.len());
            kept.push(doc);
        }

        let duplicates_dropped = supplied - kept.len();
        let groups = aggregate_groups(&kept);
        let corpus_version = compute_corpus_version(&kept);

        if kept.is_empty() {
            tracing::warn!("Corpus is empty");
        } else {
            tracing::info!(
                "Built corpus {}: {} documents, {} duplicates dropped, {} groups",
                &corpus_version[..19.min(corpus_version.len())],
                kept.len(),
                duplicates_dropped,
                groups.len()
            );
        }

        Self {
            documents: kept,
            positions,
            groups,
            duplicates_dropped,
            corpus_version,
            built_at: Utc::now(),
            normalizer,
        }
    }

    pub fn empty(normalizer: Normalizer) -> Self {
        Self::from_documents(Vec::new(), normalizer)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn groups(&self) -> &BTreeMap<String, GroupStats> {
        &self.groups
    }

    /// Look up a document. Unknown ids log an error and return `None`.
    pub fn get(&self, id: &str) -> Option<&Document> {
        let found = self
            .positions
            .get(&DocumentId::new(id))
            .map(|&i| &self.documents[i]);
        if found.is_none() {
            tracing::error!("Document {} not found in corpus", id);
        }
        found
    }

    /// Raw whitespace word count of a document body.
    pub fn word_count(&self, id: &str) -> Option<usize> {
        self.get(id).map(|doc| doc.word_count)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalized form of a document, computed on first access.
    pub fn normalized<'a>(&self, doc: &'a Document) -> &'a NormalizedContent {
        doc.normalized_with(&self.normalizer)
    }

    /// Normalize every document now rather than on first query.
    pub fn warm(&self) {
        for doc in &self.documents {
            self.normalized(doc);
        }
        tracing::debug!("Normalized {} documents", self.documents.len());
    }

    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// SHA-256 over `id:version` lines in corpus order.
    pub fn corpus_version(&self) -> &str {
        &self.corpus_version
    }

    pub fn summary(&self) -> CorpusSummary {
        CorpusSummary {
            corpus_version: self.corpus_version.clone(),
            document_count: self.documents.len(),
            word_count: self.groups.values().map(|g| g.word_count).sum(),
            duplicates_dropped: self.duplicates_dropped,
            groups: self.groups.clone(),
            built_at: self.built_at,
        }
    }
}

fn aggregate_groups(documents: &[Document]) -> BTreeMap<String, GroupStats> {
    let mut groups: BTreeMap<String, GroupStats> = BTreeMap::new();
    for doc in documents {
        let stats = groups.entry(doc.group().to_string()).or_default();
        stats.document_count += 1;
        stats.word_count += doc.word_count;
    }
    groups
}

fn compute_corpus_version(documents: &[Document]) -> String {
    let mut hasher = Sha256::new();
    for doc in documents {
        let line = format!("{}:{}\n", doc.id.as_str(), doc.version.as_str());
        hasher.update(line.as_bytes());
    }
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
