pub mod filters;
pub mod highlight;
pub mod scoring;
pub mod snippet;

use crate::corpus::CorpusIndex;
use crate::document::Document;
use crate::types::search::{Query, SearchMetadata, SearchResponse, SearchResult};
pub use filters::{CorpusFilter, FilterField};
pub use highlight::{highlight, render_snippet};
pub use scoring::{MatchCountScorer, Scorer, ScoringPolicy};
pub use snippet::DEFAULT_WINDOW;

/// Ranks corpus documents against a free-text query.
///
/// Stateless between calls: every search reads the corpus and allocates
/// its own results.
pub struct QueryEngine<S> {
	scorer: S,
	snippet_window: usize,
	max_results: usize,
}

impl Default for QueryEngine<MatchCountScorer> {
	fn default() -> Self {
		Self::new(MatchCountScorer::default())
	}
}

impl<S> QueryEngine<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self {
			scorer,
			snippet_window: DEFAULT_WINDOW,
			max_results: 0,
		}
	}

	pub fn with_snippet_window(mut self, window: usize) -> Self {
		self.snippet_window = window;
		self
	}

	/// Cap the number of returned results after ranking. 0 means unlimited.
	pub fn with_max_results(mut self, max: usize) -> Self {
		self.max_results = max;
		self
	}

	pub fn search(&self, query: &str, corpus: &CorpusIndex) -> SearchResponse {
		self.search_within(query, corpus, corpus.documents())
	}

	/// Search a subset of the corpus, e.g. the output of a [`CorpusFilter`].
	pub fn search_within<'a, I>(
		&self,
		query: &str,
		corpus: &CorpusIndex,
		documents: I,
	) -> SearchResponse
	where
		I: IntoIterator<Item = &'a Document>,
	{
		let query = Query::parse(query, corpus.normalizer());

		// 1. Scoring Phase
		// Candidates are counted even when nothing can match
		let mut considered = 0;
		let mut results: Vec<SearchResult> = Vec::new();
		for doc in documents {
			considered += 1;
			if query.is_empty() {
				continue;
			}
			let relevance = self.scorer.score(corpus.normalized(doc), &query);
			if relevance == 0 {
				continue;
			}
			results.push(SearchResult {
				document_id: doc.id.clone(),
				title: doc.title.clone(),
				snippet: snippet::extract(&doc.content, &query.tokens, self.snippet_window),
				relevance,
			});
		}

		// 2. Ordering Phase
		// Stable sort: equal relevance keeps corpus order
		results.sort_by(|a, b| b.relevance.cmp(&a.relevance));

		debug_assert!(results.windows(2).all(|w| w[0].relevance >= w[1].relevance));

		let documents_matched = results.len();
		if self.max_results > 0 {
			results.truncate(self.max_results);
		}

		tracing::info!(
			"Query {:?} -> tokens {:?}: {} of {} documents matched",
			query.raw,
			query.tokens,
			documents_matched,
			considered
		);

		SearchResponse {
			search: SearchMetadata {
				query: query.raw,
				tokens: query.tokens,
				documents_considered: considered,
				documents_matched,
				documents_returned: results.len(),
			},
			results,
		}
	}
}
