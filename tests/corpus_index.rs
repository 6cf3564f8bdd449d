use corpus_search::corpus::{CorpusIndex, GroupStats, SourceDocument};
use corpus_search::normalize::Normalizer;

fn build(sources: Vec<SourceDocument>) -> CorpusIndex {
    CorpusIndex::build(sources, Normalizer::default())
}

fn sample() -> Vec<SourceDocument> {
    vec![
        SourceDocument::new("training/1", "oil rose today"),
        SourceDocument::new("training/2", "gold fell"),
        SourceDocument::new("test/9", "wheat corn barley rice"),
    ]
}

#[test]
fn identical_content_keeps_first_id() {
    let corpus = build(vec![
        SourceDocument::new("a/1", "Same text here."),
        SourceDocument::new("b/2", "Same text here."),
    ]);

    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].id.as_str(), "a/1");
    assert_eq!(corpus.duplicates_dropped(), 1);
}

#[test]
fn dedup_key_is_the_body_after_title_removal() {
    let corpus = build(vec![
        SourceDocument::new("a/1", "FIRST\nshared body"),
        SourceDocument::new("a/2", "SECOND\nshared body"),
        SourceDocument::new("a/3", "different body"),
    ]);

    let ids: Vec<&str> = corpus.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a/1", "a/3"]);
}

#[test]
fn ingestion_order_is_preserved() {
    let corpus = build(sample());
    let ids: Vec<&str> = corpus.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["training/1", "training/2", "test/9"]);
}

#[test]
fn repeated_id_keeps_first_document() {
    let corpus = build(vec![
        SourceDocument::new("a/1", "first text"),
        SourceDocument::new("a/1", "second text"),
    ]);
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].content, "first text");
}

#[test]
fn group_aggregates_sum_over_documents() {
    let corpus = build(sample());
    let groups = corpus.groups();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups["training"], GroupStats { document_count: 2, word_count: 5 });
    assert_eq!(groups["test"], GroupStats { document_count: 1, word_count: 4 });
}

#[test]
fn dropped_duplicates_do_not_count_towards_groups() {
    let mut sources = sample();
    sources.push(SourceDocument::new("training/3", "gold fell"));
    let corpus = build(sources);

    assert_eq!(corpus.groups()["training"].document_count, 2);
    assert_eq!(corpus.summary().word_count, 9);
}

#[test]
fn lookups_signal_not_found() {
    let corpus = build(sample());

    assert_eq!(corpus.get("training/2").map(|d| d.content.as_str()), Some("gold fell"));
    assert!(corpus.get("missing/1").is_none());
    assert_eq!(corpus.word_count("test/9"), Some(4));
    assert_eq!(corpus.word_count("missing/1"), None);
}

#[test]
fn normalization_is_memoized_on_first_use() {
    let corpus = build(sample());
    assert!(corpus.documents().iter().all(|d| d.normalized_tokens().is_none()));

    corpus.warm();

    let doc = &corpus.documents()[0];
    let tokens = doc.normalized_tokens().unwrap().to_vec();
    assert_eq!(tokens, vec!["oil", "rise", "today"]);

    // Same allocation on repeated access
    let first = corpus.normalized(doc) as *const _;
    let second = corpus.normalized(doc) as *const _;
    assert_eq!(first, second);
}

#[test]
fn corpus_version_depends_on_content_and_order() {
    let a = build(sample());
    let b = build(sample());
    assert_eq!(a.corpus_version(), b.corpus_version());

    let mut reversed = sample();
    reversed.reverse();
    let c = build(reversed);
    assert_ne!(a.corpus_version(), c.corpus_version());
}

#[test]
fn summary_serializes_group_counts() {
    let summary = build(sample()).summary();
    assert_eq!(summary.document_count, 3);
    assert_eq!(summary.duplicates_dropped, 0);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["groups"]["training"]["document_count"], 2);
    assert_eq!(json["groups"]["test"]["word_count"], 4);
}

#[test]
fn empty_source_builds_empty_index() {
    let corpus = build(Vec::new());
    assert!(corpus.is_empty());
    assert!(corpus.groups().is_empty());
    assert_eq!(corpus.summary().word_count, 0);
}
