//! Treebank-style word tokenizer.
//!
//! Whitespace-delimited chunks are split further: leading and trailing
//! punctuation become separate tokens and English clitics (`n't`, `'s`,
//! `'re`, ...) are detached. Inner punctuation (`mln-dlr`, `U.S`) keeps a
//! token whole.

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let chunk = chunk.replace('\u{2019}', "'");
        let chars: Vec<char> = chunk.chars().collect();

        let mut start = 0;
        while start < chars.len() && !chars[start].is_alphanumeric() {
            tokens.push(chars[start].to_string());
            start += 1;
        }

        let mut end = chars.len();
        let mut trailing = Vec::new();
        while end > start && !chars[end - 1].is_alphanumeric() {
            trailing.push(chars[end - 1].to_string());
            end -= 1;
        }

        if start < end {
            let word: String = chars[start..end].iter().collect();
            split_clitic(&word, &mut tokens);
        }

        tokens.extend(trailing.into_iter().rev());
    }

    tokens
}

fn split_clitic(word: &str, tokens: &mut Vec<String>) {
    let lower = word.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        tokens.push(word[..cut].to_string());
        tokens.push(word[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = word.len() - clitic.len();
            tokens.push(word[..cut].to_string());
            tokens.push(word[cut..].to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}
