//! Morphological base-form reduction.
//!
//! Follows the WordNet "morphy" scheme: irregular forms come from the
//! lexicon's exception tables, regular forms by detaching a class-specific
//! suffix. With a known-word list loaded, the shortest candidate present in
//! the list wins; without one, candidates are chosen by spelling rules.

use crate::normalize::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Map a Penn Treebank tag to a lemma class. Unmapped tags are nouns.
    pub fn from_treebank(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => WordClass::Adjective,
            Some('V') => WordClass::Verb,
            Some('N') => WordClass::Noun,
            Some('R') => WordClass::Adverb,
            _ => WordClass::Noun,
        }
    }

    fn detachment_rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            WordClass::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            WordClass::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            WordClass::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            WordClass::Adverb => &[],
        }
    }
}

/// Stem endings that take a silent `e` once `-ed`/`-ing`/`-er` is removed.
const SILENT_E_ENDINGS: &[&str] = &[
    "at", "bl", "cl", "dl", "fl", "gl", "kl", "pl", "tl", "zl", "v", "c", "u", "z", "dg", "rg",
    "ang", "eng", "ur", "ir", "ar", "ut", "ot", "ak", "ik", "ok", "id", "ud", "od", "ad", "am",
    "um", "in", "il", "ul", "ol", "ap",
];

const VOWEL_DIGRAPHS: &[&str] = &["ea", "oa", "ai", "oi", "ee", "oo", "ou", "au", "ei"];

const UNDOUBLED: &[char] = &['b', 'd', 'g', 'm', 'n', 'p', 'r', 't'];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

pub fn lemmatize(lexicon: &Lexicon, word: &str, class: WordClass) -> String {
    if let Some(base) = lexicon.exception(class, word) {
        return base.to_string();
    }

    if let Some(known) = lexicon.known_words() {
        let mut candidates: Vec<String> = Vec::new();
        if known.contains(word) {
            candidates.push(word.to_string());
        }
        for (suffix, replacement) in class.detachment_rules() {
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !candidate.is_empty() && known.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }
        // Shortest wins; ties keep rule order.
        return candidates
            .into_iter()
            .reduce(|best, c| if c.len() < best.len() { c } else { best })
            .unwrap_or_else(|| word.to_string());
    }

    match class {
        WordClass::Noun => noun_base(lexicon, word),
        WordClass::Verb => verb_base(word),
        WordClass::Adjective => adjective_base(word),
        WordClass::Adverb => word.to_string(),
    }
}

fn noun_base(lexicon: &Lexicon, word: &str) -> String {
    if word.len() <= 3 || lexicon.is_noun_invariant(word) {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") || word.ends_with("ics")
    {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ses") {
        // losses -> loss, bonuses -> bonus; houses, causes keep their `e`.
        let mut tail = stem.chars().rev();
        let last = tail.next();
        let before = tail.next();
        let short_u = last == Some('u') && !before.map(is_vowel).unwrap_or(false);
        if last == Some('s') || short_u {
            return format!("{stem}s");
        }
        return format!("{stem}se");
    }
    if let Some(stem) = word.strip_suffix("zes") {
        if stem.ends_with('z') {
            return format!("{stem}z");
        }
        return format!("{stem}ze");
    }
    for (suffix, replacement) in [("xes", "x"), ("ches", "ch"), ("shes", "sh")] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    if word.len() >= 5 {
        if let Some(stem) = word.strip_suffix("men") {
            return format!("{stem}man");
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() <= 2 {
            return format!("{stem}ie");
        }
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }

    word.to_string()
}

fn verb_base(word: &str) -> String {
    if word.len() <= 3 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() <= 2 {
            return format!("{stem}ie");
        }
        return format!("{stem}y");
    }

    if let Some(stem) = word.strip_suffix("ing") {
        if word.len() > 4 && stem.len() >= 2 && has_vowel(stem) {
            return restore_stem(stem);
        }
        return word.to_string();
    }

    if word.ends_with("eed") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 2 && has_vowel(stem) {
            return restore_stem(stem);
        }
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with('x')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
            || stem.ends_with("zz")
            || stem.ends_with('o')
        {
            return stem.to_string();
        }
        return format!("{stem}e");
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }

    word.to_string()
}

fn adjective_base(word: &str) -> String {
    if word.len() <= 4 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("iest").or_else(|| word.strip_suffix("ier")) {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("est").or_else(|| word.strip_suffix("er")) {
        if stem.len() >= 2 && has_vowel(stem) {
            return restore_stem(stem);
        }
    }

    word.to_string()
}

/// Undo consonant doubling or restore a dropped silent `e`.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    // stopp -> stop, plann -> plan; add, odd keep their double.
    if n >= 4
        && chars[n - 1] == chars[n - 2]
        && UNDOUBLED.contains(&chars[n - 1])
        && is_vowel(chars[n - 3])
        && !is_vowel(chars[n - 4])
    {
        return chars[..n - 1].iter().collect();
    }

    if stem.ends_with("creat") {
        return format!("{stem}e");
    }

    // Any stem ending in a single `s` (raised, closed, increased, licensed).
    if stem.ends_with('s') && !stem.ends_with("ss") {
        return format!("{stem}e");
    }

    for ending in SILENT_E_ENDINGS {
        if !stem.ends_with(ending) || stem.len() == ending.len() {
            continue;
        }
        let first = ending.chars().next().unwrap_or_default();
        if is_vowel(first) {
            let before = chars[n - ending.chars().count() - 1];
            let pair: String = [before, first].iter().collect();
            if VOWEL_DIGRAPHS.contains(&pair.as_str()) {
                continue;
            }
        }
        return format!("{stem}e");
    }

    stem.to_string()
}
