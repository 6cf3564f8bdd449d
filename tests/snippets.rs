use corpus_search::search::snippet::{extract, lead};
use corpus_search::search::{highlight, render_snippet, DEFAULT_WINDOW};

const SPAN_OPEN: &str = "<span style='color: red; font-weight: bold;'>";

fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn numbered_words(count: usize) -> String {
    (0..count).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn window_is_centered_on_first_match() {
    let text = numbered_words(100);
    let snippet = extract(&text, &tokens(&["w50"]), DEFAULT_WINDOW);

    let words: Vec<&str> = snippet.split(' ').collect();
    assert_eq!(words.len(), 30);
    assert_eq!(words[0], "w35");
    assert_eq!(words[29], "w64");
}

#[test]
fn early_match_clamps_at_start() {
    let text = numbered_words(100);
    let snippet = extract(&text, &tokens(&["w2"]), DEFAULT_WINDOW);

    let words: Vec<&str> = snippet.split(' ').collect();
    assert_eq!(words.len(), 17);
    assert_eq!(words[0], "w0");
}

#[test]
fn only_first_match_is_used() {
    let text = numbered_words(100);
    let snippet = extract(&text, &tokens(&["w80", "w40"]), 10);
    assert!(snippet.starts_with("w35 "));
}

#[test]
fn no_match_returns_leading_words() {
    let text = numbered_words(100);
    let snippet = extract(&text, &tokens(&["oil"]), DEFAULT_WINDOW);
    assert_eq!(snippet, numbered_words(30));

    assert_eq!(extract("short body text", &tokens(&["oil"]), DEFAULT_WINDOW), "short body text");
    assert_eq!(extract("", &tokens(&["oil"]), DEFAULT_WINDOW), "");
}

#[test]
fn words_match_case_insensitively_but_verbatim() {
    assert_eq!(extract("a b OIL c", &tokens(&["oil"]), 2), "b OIL");
    // Trailing punctuation keeps the word from matching.
    assert_eq!(extract("a b oil. c", &tokens(&["oil"]), 2), "a b");
}

#[test]
fn lead_keeps_first_sentences() {
    let text = "First one. Second two. Third three.";
    assert_eq!(lead(text, 2), "First one. Second two.");
    assert_eq!(lead(text, 5), text);
}

#[test]
fn highlight_escapes_markdown_and_emphasizes_whole_words() {
    let out = highlight("Oil *prices* rose\nsharply", &tokens(&["oil", "price"]));
    assert_eq!(out, r"**OIL** \*prices\* rosesharply");
}

#[test]
fn highlight_is_single_pass() {
    assert_eq!(highlight("oil oil", &tokens(&["oil", "oil"])), "**OIL** **OIL**");
    assert_eq!(
        highlight("oilfield oil", &tokens(&["oil", "oilfield"])),
        "**OILFIELD** **OIL**"
    );
    // Markup text is never rescanned.
    assert_eq!(highlight("oil is bold", &tokens(&["oil", "bold"])), "**OIL** is **BOLD**");
}

#[test]
fn highlight_ignores_case() {
    assert_eq!(highlight("OIL Oil oil", &tokens(&["oil"])), "**OIL** **OIL** **OIL**");
}

#[test]
fn highlight_without_tokens_only_escapes() {
    assert_eq!(highlight("snake_case\nline", &[]), r"snake\_caseline");
}

#[test]
fn rendered_snippet_wraps_matches_in_spans() {
    let out = render_snippet("oil is bold", &tokens(&["oil", "bold"]));
    assert_eq!(
        out,
        format!("**Snippet:** {SPAN_OPEN}OIL</span> is {SPAN_OPEN}BOLD</span>")
    );
}

#[test]
fn rendered_snippet_without_match_lists_tokens() {
    let out = render_snippet("gold fell", &tokens(&["oil", "price"]));
    assert_eq!(out, "**No snippet with exact match. Matched Tokens:** oil, price");

    let many = tokens(&["a1", "b2", "c3", "d4", "e5", "f6"]);
    assert!(render_snippet("nothing", &many).ends_with("a1, b2, c3, d4, e5"));
}

#[test]
fn substring_presence_selects_snippet_branch() {
    // "price" is inside "prices" but not a whole word, so nothing is wrapped.
    let out = render_snippet("prices rose", &tokens(&["price"]));
    assert_eq!(out, "**Snippet:** prices rose");
}
