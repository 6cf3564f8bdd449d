//! Normalization, indexing and relevance ranking for short news-style text
//! corpora.
//!
//! `corpus-search` ingests `(id, raw text)` pairs into a deduplicated
//! [`corpus::CorpusIndex`], normalizes document and query text through a
//! lemmatizing [`normalize::Normalizer`], ranks documents by matched query
//! terms and extracts highlighted snippets. Every step is deterministic:
//! identical inputs always produce identical rankings.

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod search;
pub mod types;

pub use error::{Error, Result};
