//! Browse-side corpus filters.
//!
//! Filters select which documents are shown or searched; they never change
//! how a document scores.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusIndex;
use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Id,
    Title,
    Content,
}

impl FilterField {
    fn value<'a>(&self, doc: &'a Document) -> &'a str {
        match self {
            FilterField::Id => doc.id.as_str(),
            FilterField::Title => &doc.title,
            FilterField::Content => &doc.content,
        }
    }
}

/// Conjunction of substring filters and an inclusive word-count range.
#[derive(Debug, Clone, Default)]
pub struct CorpusFilter {
    substrings: Vec<(FilterField, String)>,
    case_sensitive: bool,
    word_count: Option<RangeInclusive<usize>>,
}

impl CorpusFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to contain `value`. Empty values are ignored.
    pub fn field(mut self, field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.substrings.push((field, value));
        }
        self
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn word_count_between(mut self, min: usize, max: usize) -> Self {
        self.word_count = Some(min..=max);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty() && self.word_count.is_none()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(range) = &self.word_count {
            if !range.contains(&doc.word_count) {
                return false;
            }
        }

        self.substrings.iter().all(|(field, needle)| {
            let haystack = field.value(doc);
            if self.case_sensitive {
                haystack.contains(needle.as_str())
            } else {
                haystack.to_lowercase().contains(&needle.to_lowercase())
            }
        })
    }

    /// Matching documents in corpus order.
    pub fn apply<'a>(&self, corpus: &'a CorpusIndex) -> Vec<&'a Document> {
        corpus.documents().iter().filter(|d| self.matches(d)).collect()
    }
}
