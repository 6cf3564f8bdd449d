pub mod lemmatizer;
pub mod lexicon;
pub mod tagger;
pub mod tokenizer;

use std::sync::Arc;

pub use lemmatizer::WordClass;
pub use lexicon::Lexicon;

/// Turns raw text into canonical content tokens.
///
/// Pipeline: tokenize, keep purely alphabetic tokens (lower-cased), tag
/// them in sentence order, lemmatize by tag class, drop stop words, drop
/// tokens of one character. Output order follows input order.
///
/// Cloning is cheap; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        let words: Vec<String> = tokenizer::tokenize(text)
            .into_iter()
            .filter(|t| t.chars().all(char::is_alphabetic))
            .map(|t| t.to_lowercase())
            .collect();

        let tags = tagger::tag(&self.lexicon, &words);

        words
            .iter()
            .zip(tags)
            .map(|(word, tag)| {
                lemmatizer::lemmatize(&self.lexicon, word, WordClass::from_treebank(tag))
            })
            .filter(|lemma| !self.lexicon.is_stop_word(lemma))
            .filter(|lemma| lemma.chars().count() > 1)
            .collect()
    }

    /// Normalized tokens joined by single spaces.
    pub fn normalize_as_text(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::english()))
    }
}
