//! Rendering of matched query terms.
//!
//! All tokens are replaced in one pass over the text, longest token first,
//! so markup inserted for one token is never rescanned for another.

use regex::{Captures, Regex};

const SNIPPET_SPAN_OPEN: &str = "<span style='color: red; font-weight: bold;'>";
const SNIPPET_SPAN_CLOSE: &str = "</span>";

/// Markdown-safe full content with every whole-word token occurrence
/// upper-cased and wrapped in `**`.
///
/// `_ * ~ \`` are backslash-escaped and line feeds removed first.
pub fn highlight(content: &str, tokens: &[String]) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '_' | '*' | '~' | '`' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => {}
            _ => escaped.push(c),
        }
    }

    emphasize(&escaped, tokens, |word| format!("**{word}**"))
}

/// Display line for a result snippet.
///
/// When any token occurs in the snippet its whole-word matches are
/// wrapped in a red bold span; otherwise the first five tokens are listed.
pub fn render_snippet(snippet: &str, tokens: &[String]) -> String {
    let lower = snippet.to_lowercase();
    if tokens.iter().any(|token| lower.contains(token.as_str())) {
        let marked = emphasize(snippet, tokens, |word| {
            format!("{SNIPPET_SPAN_OPEN}{word}{SNIPPET_SPAN_CLOSE}")
        });
        format!("**Snippet:** {marked}")
    } else {
        let listed: Vec<&str> = tokens.iter().take(5).map(String::as_str).collect();
        format!(
            "**No snippet with exact match. Matched Tokens:** {}",
            listed.join(", ")
        )
    }
}

/// Replace whole-word, case-insensitive token matches with `wrap(UPPER)`.
fn emphasize<F>(text: &str, tokens: &[String], wrap: F) -> String
where
    F: Fn(&str) -> String,
{
    let Some(pattern) = token_pattern(tokens) else {
        return text.to_string();
    };

    pattern
        .replace_all(text, |caps: &Captures| wrap(&caps[0].to_uppercase()))
        .into_owned()
}

fn token_pattern(tokens: &[String]) -> Option<Regex> {
    let mut distinct: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    distinct.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    distinct.dedup();

    if distinct.is_empty() {
        return None;
    }

    let alternation: Vec<String> = distinct.iter().map(|t| regex::escape(t)).collect();
    match Regex::new(&format!(r"(?i)\b(?:{})\b", alternation.join("|"))) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Highlight pattern rejected: {}", e);
            None
        }
    }
}
