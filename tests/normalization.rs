use std::collections::BTreeSet;
use std::sync::Arc;

use corpus_search::normalize::{Lexicon, Normalizer};

#[test]
fn news_sentence_is_lemmatized_and_filtered() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("Company profits rose sharply this quarter."),
        vec!["company", "profit", "rise", "sharply", "quarter"]
    );
}

#[test]
fn inflected_forms_reduce_to_base_forms() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("The companies raised prices and stopped exports."),
        vec!["company", "raise", "price", "stop", "export"]
    );
}

#[test]
fn irregular_past_tense_verbs_reduce_to_base_forms() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("Oil prices rose sharply."),
        vec!["oil", "price", "rise", "sharply"]
    );
    assert_eq!(normalizer.normalize("Gold prices fell."), vec!["gold", "price", "fall"]);
    assert_eq!(normalizer.normalize("Sales grew strongly."), vec!["sale", "grow", "strongly"]);
    assert_eq!(
        normalizer.normalize("The company sold shares."),
        vec!["company", "sell", "share"]
    );
}

#[test]
fn only_alphabetic_tokens_survive() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("3.5 mln-dlr U.S. oil"), vec!["oil"]);
}

#[test]
fn stop_words_and_single_letters_are_dropped() {
    let normalizer = Normalizer::default();
    assert!(normalizer.normalize("the and of").is_empty());
    assert!(normalizer.normalize("q x").is_empty());
}

#[test]
fn empty_input_yields_empty_sequence() {
    let normalizer = Normalizer::default();
    assert!(normalizer.normalize("").is_empty());
    assert_eq!(normalizer.normalize_as_text(""), "");
}

#[test]
fn normalization_is_deterministic() {
    let normalizer = Normalizer::default();
    let text = "Crude oil prices and gold prices jumped after OPEC talks.";
    assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
}

#[test]
fn renormalizing_joined_output_keeps_token_set() {
    let normalizer = Normalizer::default();
    for text in [
        "Company profits rose sharply this quarter.",
        "The companies raised prices and stopped exports.",
    ] {
        let once = normalizer.normalize(text);
        let twice = normalizer.normalize(&normalizer.normalize_as_text(text));
        let once: BTreeSet<_> = once.into_iter().collect();
        let twice: BTreeSet<_> = twice.into_iter().collect();
        assert_eq!(once, twice, "token set changed for {text:?}");
    }
}

#[test]
fn output_order_follows_input_order() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("wheat oil gold"), vec!["wheat", "oil", "gold"]);
}

#[test]
fn extra_stop_words_are_honoured() {
    let lexicon = Lexicon::english().with_stop_words(["Reuter"]);
    let normalizer = Normalizer::new(Arc::new(lexicon));
    assert_eq!(normalizer.normalize("oil Reuter"), vec!["oil"]);
}

#[test]
fn nltk_stop_word_list_is_complete() {
    assert_eq!(Lexicon::english().stop_word_count(), 179);
}
