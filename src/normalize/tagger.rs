//! Rule-based part-of-speech tagger producing Penn Treebank tags.
//!
//! Tags are assigned left to right from a closed-class lexicon, the
//! lexicon's irregular verb forms, suffix rules and the previous tag. Input
//! tokens are expected lower-cased.

use crate::normalize::lemmatizer::WordClass;
use crate::normalize::lexicon::Lexicon;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "either", "neither", "all", "both",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "into", "about", "over", "under",
    "after", "before", "between", "through", "during", "against", "among", "without", "within",
    "upon", "near", "since", "until", "than", "because", "while", "although", "though",
    "whether", "if", "per", "via", "despite", "toward", "towards", "above", "below", "onto",
    "amid", "across", "behind", "beyond", "along", "around", "off", "out", "up", "down",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];

const MODALS: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may", "might", "must", "wo", "ca",
];

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "itself",
    "himself", "herself", "themselves", "ourselves", "myself", "yourself",
];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "its", "our", "their"];

const ADVERBS: &[&str] = &[
    "not", "also", "very", "just", "only", "now", "then", "still", "even", "already", "too",
    "so", "here", "again", "ago", "soon", "often", "never", "always", "however", "further",
    "back", "away", "almost", "once", "perhaps", "yesterday", "today", "tomorrow",
];

const COMPARATIVES: &[&str] = &[
    "higher", "lower", "greater", "larger", "smaller", "stronger", "weaker", "bigger", "faster",
    "slower", "earlier", "later", "longer", "shorter", "wider", "cheaper", "easier", "harder",
    "better", "worse", "more", "less", "fewer",
];

const SUPERLATIVES: &[&str] = &[
    "highest", "lowest", "greatest", "largest", "smallest", "strongest", "weakest", "biggest",
    "latest", "earliest", "longest", "shortest", "widest", "cheapest", "easiest", "hardest",
    "best", "worst", "most", "least", "fewest",
];

/// Words that look like `-ed`, `-ing` or `-ly` forms but are not.
const NOT_VERB_FORMS: &[(&str, &str)] = &[
    ("hundred", "CD"),
    ("hatred", "NN"),
    ("kindred", "NN"),
    ("sacred", "JJ"),
    ("naked", "JJ"),
    ("wicked", "JJ"),
    ("thing", "NN"),
    ("something", "NN"),
    ("nothing", "NN"),
    ("anything", "NN"),
    ("everything", "NN"),
    ("king", "NN"),
    ("ring", "NN"),
    ("spring", "NN"),
    ("string", "NN"),
    ("morning", "NN"),
    ("evening", "NN"),
    ("ceiling", "NN"),
    ("sibling", "NN"),
    ("wing", "NN"),
    ("supply", "NN"),
    ("family", "NN"),
    ("july", "NNP"),
    ("italy", "NNP"),
    ("rally", "NN"),
    ("ally", "NN"),
    ("assembly", "NN"),
    ("monopoly", "NN"),
    ("anomaly", "NN"),
    ("early", "JJ"),
    ("daily", "JJ"),
    ("weekly", "JJ"),
    ("monthly", "JJ"),
    ("quarterly", "JJ"),
    ("yearly", "JJ"),
    ("likely", "JJ"),
    ("only", "RB"),
    ("apply", "VB"),
    ("reply", "VB"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "ic", "ical", "less", "ish", "ary", "ant", "ent",
];

const BE_FORMS: &[(&str, &str)] = &[
    ("is", "VBZ"),
    ("are", "VBP"),
    ("am", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("has", "VBZ"),
    ("have", "VBP"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("does", "VBZ"),
    ("do", "VBP"),
    ("did", "VBD"),
];

fn lookup(table: &[(&str, &'static str)], word: &str) -> Option<&'static str> {
    table.iter().find(|(w, _)| *w == word).map(|(_, t)| *t)
}

fn closed_class(word: &str) -> Option<&'static str> {
    if DETERMINERS.contains(&word) {
        return Some("DT");
    }
    if word == "to" {
        return Some("TO");
    }
    if word == "there" {
        return Some("EX");
    }
    if PREPOSITIONS.contains(&word) {
        return Some("IN");
    }
    if CONJUNCTIONS.contains(&word) {
        return Some("CC");
    }
    if MODALS.contains(&word) {
        return Some("MD");
    }
    if PERSONAL_PRONOUNS.contains(&word) {
        return Some("PRP");
    }
    if POSSESSIVE_PRONOUNS.contains(&word) {
        return Some("PRP$");
    }
    if matches!(word, "who" | "whom" | "what" | "which") {
        return Some("WP");
    }
    if matches!(word, "when" | "where" | "why" | "how") {
        return Some("WRB");
    }
    if let Some(tag) = lookup(BE_FORMS, word) {
        return Some(tag);
    }
    if COMPARATIVES.contains(&word) {
        return Some("JJR");
    }
    if SUPERLATIVES.contains(&word) {
        return Some("JJS");
    }
    if ADVERBS.contains(&word) {
        return Some("RB");
    }
    lookup(NOT_VERB_FORMS, word)
}

fn is_auxiliary(tag: &str) -> bool {
    matches!(tag, "VBZ" | "VBP" | "VBD" | "VB" | "VBN" | "VBG")
}

fn is_nominal(tag: &str) -> bool {
    matches!(tag, "NN" | "NNS" | "NNP" | "PRP" | "WP")
}

fn after_be_or_have(prev: Option<&'static str>, prev_word: Option<&str>) -> bool {
    prev.map(is_auxiliary).unwrap_or(false)
        && prev_word.map(|w| lookup(BE_FORMS, w).is_some()).unwrap_or(false)
}

/// Tag for an irregular verb form (`rose`, `sold`, `hanging`).
///
/// Forms following a determiner, possessive or adjective (`the left`,
/// `a saw`) are left to the noun rules.
fn irregular_verb(
    lexicon: &Lexicon,
    word: &str,
    prev: Option<&'static str>,
    prev_word: Option<&str>,
) -> Option<&'static str> {
    lexicon.exception(WordClass::Verb, word)?;
    if matches!(prev, Some("DT") | Some("PRP$") | Some("JJ")) {
        return None;
    }

    if word.ends_with("ing") {
        return Some("VBG");
    }
    if word.ends_with('s') {
        return Some("VBZ");
    }
    Some(if after_be_or_have(prev, prev_word) {
        "VBN"
    } else {
        "VBD"
    })
}

fn open_class(
    lexicon: &Lexicon,
    word: &str,
    prev: Option<&'static str>,
    prev_word: Option<&str>,
) -> &'static str {
    let len = word.chars().count();

    if matches!(prev, Some("TO") | Some("MD")) {
        return "VB";
    }

    if let Some(tag) = irregular_verb(lexicon, word, prev, prev_word) {
        return tag;
    }

    if len > 4 && word.ends_with("ly") {
        return "RB";
    }

    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }

    if len > 3 && word.ends_with("ed") {
        return if after_be_or_have(prev, prev_word) {
            "VBN"
        } else {
            "VBD"
        };
    }

    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| len > suffix.len() + 2 && word.ends_with(suffix))
    {
        return "JJ";
    }

    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return if prev.map(is_nominal).unwrap_or(false) {
            "VBZ"
        } else {
            "NNS"
        };
    }

    "NN"
}

/// Tag a token sequence. The output has one tag per input token.
pub fn tag<S: AsRef<str>>(lexicon: &Lexicon, tokens: &[S]) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let word = token.as_ref();
        let prev = tags.last().copied();
        let prev_word = i.checked_sub(1).map(|p| tokens[p].as_ref());

        let tag = closed_class(word).unwrap_or_else(|| open_class(lexicon, word, prev, prev_word));
        tags.push(tag);
    }

    tags
}
