use corpus_search::document::{decode_entities, Document, DocumentBuilder, DocumentId, UNTITLED};
use std::path::Path;

fn make_doc(id: &str, text: &str) -> Document {
    Document::from_text(DocumentId::new(id), text)
}

#[test]
fn title_is_first_upper_case_line() {
    let (title, body) =
        DocumentBuilder.build("PROFITS RISE\nCompany profits rose sharply this quarter.");
    assert_eq!(title, "PROFITS RISE");
    assert_eq!(body, "Company profits rose sharply this quarter.");
}

#[test]
fn missing_title_keeps_full_text() {
    let text = "Company profits rose.\nNo headline here.";
    let (title, body) = DocumentBuilder.build(text);
    assert_eq!(title, UNTITLED);
    assert_eq!(title, "Untitled Document");
    assert_eq!(body, text);
}

#[test]
fn title_search_skips_blank_and_mixed_lines() {
    let (title, body) = DocumentBuilder.build("  \nIntro line\n  REUTER HEADLINE  \nline1\nline2");
    assert_eq!(title, "REUTER HEADLINE");
    assert_eq!(body, "line1\nline2");
}

#[test]
fn lines_without_letters_are_not_titles() {
    let (title, _) = DocumentBuilder.build("1987\n12.5 - 3\nshares rose");
    assert_eq!(title, UNTITLED);
}

#[test]
fn title_on_last_line_leaves_empty_body() {
    let (title, body) = DocumentBuilder.build("lower text\nTITLE");
    assert_eq!(title, "TITLE");
    assert_eq!(body, "");
}

#[test]
fn title_entities_are_decoded() {
    let (title, body) = DocumentBuilder.build("&lt;IBM&gt; EARNINGS UP\nFirst quarter results.");
    assert_eq!(title, "<IBM> EARNINGS UP");
    assert_eq!(body, "First quarter results.");
}

#[test]
fn entity_decoding_leaves_unknown_references() {
    assert_eq!(decode_entities("AT&T &amp; &#65;&#x42; &bogus;"), "AT&T & AB &bogus;");
    assert_eq!(decode_entities("no entities"), "no entities");
    assert_eq!(decode_entities("trailing &"), "trailing &");
}

#[test]
fn word_count_uses_raw_body_whitespace() {
    let doc = make_doc("a/1", "PROFITS RISE\nCompany profits rose sharply this quarter.");
    assert_eq!(doc.title, "PROFITS RISE");
    assert_eq!(doc.word_count, 6);
}

#[test]
fn invariant_same_body_same_version() {
    let doc1 = make_doc("a/1", "FIRST\nshared body");
    let doc2 = make_doc("b/2", "SECOND\nshared body");
    let doc3 = make_doc("c/3", "shared body!");

    assert_eq!(doc1.version, doc2.version);
    assert_ne!(doc1.version, doc3.version);
    assert!(doc1.version.as_str().starts_with("sha256:"));
}

#[test]
fn normalized_cache_starts_empty() {
    let doc = make_doc("a/1", "Oil prices rose.");
    assert!(doc.normalized_tokens().is_none());
}

#[test]
fn ids_from_paths_keep_case_and_use_forward_slashes() {
    let id =
        DocumentId::from_path(Path::new("/corpus"), Path::new("/corpus/Training/1042")).unwrap();
    assert_eq!(id.as_str(), "Training/1042");
    assert_eq!(id.group(), "Training");

    assert!(DocumentId::from_path(Path::new("/corpus"), Path::new("/elsewhere/1")).is_err());
}

#[test]
fn id_without_separator_is_its_own_group() {
    assert_eq!(DocumentId::new("solo").group(), "solo");
}
