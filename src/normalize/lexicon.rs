use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use crate::normalize::lemmatizer::WordClass;

/// NLTK English stop-word list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "people"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("data", "datum"),
    ("media", "medium"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("bases", "basis"),
    ("indices", "index"),
    ("quizzes", "quiz"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("wolves", "wolf"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    ("dies", "die"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("pies", "pie"),
    ("movies", "movie"),
    ("cookies", "cookie"),
];

/// Nouns whose final `s` belongs to the lemma.
const NOUN_INVARIANTS: &[&str] = &[
    "news", "series", "species", "means", "headquarters", "politics", "economics", "physics",
    "mathematics", "statistics", "gas", "bias", "lens", "chaos", "canvas", "always", "whereas",
    "perhaps", "thus", "plus", "minus", "bonus", "status", "census", "consensus", "campus",
    "virus", "surplus", "corps", "earnings", "savings", "proceeds", "billiards", "is", "was",
    "has", "this", "us", "yes",
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"),
    ("are", "be"),
    ("am", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("said", "say"),
    ("says", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("sold", "sell"),
    ("bought", "buy"),
    ("paid", "pay"),
    ("held", "hold"),
    ("left", "leave"),
    ("led", "lead"),
    ("met", "meet"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("began", "begin"),
    ("begun", "begin"),
    ("came", "come"),
    ("became", "become"),
    ("brought", "bring"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("kept", "keep"),
    ("lost", "lose"),
    ("spent", "spend"),
    ("sent", "send"),
    ("built", "build"),
    ("struck", "strike"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
    ("knew", "know"),
    ("known", "know"),
    ("saw", "see"),
    ("seen", "see"),
    ("felt", "feel"),
    ("meant", "mean"),
    ("stood", "stand"),
    ("understood", "understand"),
    ("ran", "run"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("broke", "break"),
    ("broken", "break"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("fed", "feed"),
    ("fled", "flee"),
    ("heard", "hear"),
    ("hung", "hang"),
    ("hanging", "hang"),
    ("hanged", "hang"),
    ("lent", "lend"),
    ("dealt", "deal"),
    ("sought", "seek"),
    ("taught", "teach"),
    ("caught", "catch"),
    ("fought", "fight"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("froze", "freeze"),
    ("frozen", "freeze"),
    ("shook", "shake"),
    ("shaken", "shake"),
    ("swore", "swear"),
    ("sworn", "swear"),
    ("withdrew", "withdraw"),
    ("withdrawn", "withdraw"),
    ("undertook", "undertake"),
    ("undertaken", "undertake"),
    ("overtook", "overtake"),
    ("overtaken", "overtake"),
    ("lying", "lie"),
    ("dying", "die"),
    ("tying", "tie"),
    ("agreed", "agree"),
    ("disagreed", "disagree"),
    ("freed", "free"),
    ("guaranteed", "guarantee"),
    ("creating", "create"),
    ("created", "create"),
    ("controlled", "control"),
    ("controlling", "control"),
    ("compelled", "compel"),
    ("cancelled", "cancel"),
    ("cancelling", "cancel"),
    ("expelled", "expel"),
    ("propelled", "propel"),
    ("labelled", "label"),
    ("travelled", "travel"),
    ("totalled", "total"),
    ("totalling", "total"),
    ("modelled", "model"),
    ("fuelled", "fuel"),
    ("signalled", "signal"),
    ("patrolled", "patrol"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("less", "little"),
    ("least", "little"),
    ("larger", "large"),
    ("largest", "large"),
    ("wider", "wide"),
    ("widest", "wide"),
    ("later", "late"),
    ("latest", "late"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("further", "far"),
    ("farther", "far"),
];

/// Normalization data shared by every [`Normalizer`](super::Normalizer):
/// the stop-word set, per-class irregular forms, and an optional list of
/// known base forms used to validate lemma candidates.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    exceptions: HashMap<WordClass, HashMap<&'static str, &'static str>>,
    noun_invariants: HashSet<&'static str>,
    known_words: Option<HashSet<String>>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        let mut exceptions = HashMap::new();
        exceptions.insert(WordClass::Noun, table(NOUN_EXCEPTIONS));
        exceptions.insert(WordClass::Verb, table(VERB_EXCEPTIONS));
        exceptions.insert(WordClass::Adjective, table(ADJECTIVE_EXCEPTIONS));
        exceptions.insert(WordClass::Adverb, table(ADVERB_EXCEPTIONS));

        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            exceptions,
            noun_invariants: NOUN_INVARIANTS.iter().copied().collect(),
            known_words: None,
        }
    }

    /// Add stop words on top of the current set. Words are lower-cased.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Restrict lemma candidates to a list of known base forms.
    pub fn with_known_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.known_words = Some(known);
        self
    }

    /// Load a newline-separated known-word list. Blank lines and `#` comments are ignored.
    pub fn load_known_words(self, path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let words = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));
        Ok(self.with_known_words(words))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn exception(&self, class: WordClass, word: &str) -> Option<&'static str> {
        self.exceptions.get(&class)?.get(word).copied()
    }

    pub fn is_noun_invariant(&self, word: &str) -> bool {
        self.noun_invariants.contains(word)
    }

    pub fn known_words(&self) -> Option<&HashSet<String>> {
        self.known_words.as_ref()
    }
}

fn table(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
