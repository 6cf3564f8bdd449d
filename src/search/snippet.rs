//! Excerpts of raw document text.

/// Default excerpt length in words.
pub const DEFAULT_WINDOW: usize = 30;

/// Excerpt of at most `window` words around the first word whose
/// lower-cased form is a query token.
///
/// Words are compared verbatim (punctuation included) against the
/// normalized query tokens. Without a match, the first `window` words are
/// returned. Only the first match is considered, not the densest window.
pub fn extract(content: &str, query_tokens: &[String], window: usize) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    let half = window / 2;

    let first_match = words.iter().position(|word| {
        let lower = word.to_lowercase();
        query_tokens.iter().any(|token| *token == lower)
    });

    match first_match {
        Some(i) => {
            let start = i.saturating_sub(half);
            let end = words.len().min(i + half);
            words[start..end].join(" ")
        }
        None => words[..window.min(words.len())].join(" "),
    }
}

/// The first `sentences` sentences, split on `". "`. A trailing `.` is
/// restored when the text was cut short.
pub fn lead(content: &str, sentences: usize) -> String {
    let parts: Vec<&str> = content.split(". ").collect();
    let count = sentences.min(parts.len());
    let mut out = parts[..count].join(". ");
    if parts.len() > sentences {
        out.push('.');
    }
    out
}
