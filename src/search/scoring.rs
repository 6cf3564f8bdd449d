use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::document::NormalizedContent;
use crate::types::search::Query;

/// How repeated query tokens are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Every query token occurrence counts, so `oil oil` scores 2 on a
    /// document mentioning oil.
    #[default]
    PerOccurrence,
    /// Repeated query tokens count once.
    Distinct,
}

pub trait Scorer {
    /// Number of query tokens matched by the document. 0 means no match.
    fn score(&self, content: &NormalizedContent, query: &Query) -> usize;
}

/// v0: count of query tokens present in the document's normalized terms.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchCountScorer {
    pub policy: ScoringPolicy,
}

impl MatchCountScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }
}

impl Scorer for MatchCountScorer {
    fn score(&self, content: &NormalizedContent, query: &Query) -> usize {
        match self.policy {
            ScoringPolicy::PerOccurrence => query
                .tokens
                .iter()
                .filter(|token| content.contains(token))
                .count(),
            ScoringPolicy::Distinct => query
                .tokens
                .iter()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .filter(|token| content.contains(token))
                .count(),
        }
    }
}
