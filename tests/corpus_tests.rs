/// Corpus model integration tests — tables derived from the fixture corpus.

use pseudoword_engine::core::corpus::{count_syllables, tokenize, CorpusError, CorpusModel};
use pseudoword_engine::core::syllabifier::{DictionarySyllabifier, HeuristicSyllabifier};
use pseudoword_engine::schema::phonotactics::DEFAULT_STOPLIST;
use std::collections::BTreeSet;

fn fixture_corpus() -> String {
    std::fs::read_to_string("tests/fixtures/test_corpus.txt").unwrap()
}

fn stoplist() -> Vec<String> {
    DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect()
}

#[test]
fn letter_weights_are_non_negative_and_observed_pairs_positive() {
    let corpus = fixture_corpus();
    let model = CorpusModel::build(&corpus, &stoplist()).unwrap();

    assert!(model.letter_frequency().values().all(|w| *w >= 0.0));

    let chars: Vec<char> = corpus.chars().collect();
    for pair in chars.windows(2) {
        if pair[1].is_whitespace() || pair[1] == '.' || pair[1] == '\'' {
            continue;
        }
        let key: String = pair.iter().flat_map(|c| c.to_lowercase()).collect();
        assert!(model.letter_weight(&key) > 0.0, "pair {:?} has no weight", key);
    }
}

#[test]
fn syllable_distribution_matches_tokens() {
    let corpus = fixture_corpus();
    let stop = stoplist();
    let model = CorpusModel::build(&corpus, &stop).unwrap();

    let total: f64 = model.syllable_frequency().values().sum();
    assert!((total - 1.0).abs() < 1e-9, "distribution sums to {}", total);

    let expected: BTreeSet<usize> = tokenize(&corpus)
        .filter(|t| !stop.iter().any(|s| s.eq_ignore_ascii_case(t)))
        .map(count_syllables)
        .collect();
    let actual: BTreeSet<usize> = model.syllable_frequency().keys().copied().collect();
    assert_eq!(actual, expected);
    assert!(model.max_syllables() >= 3);
}

#[test]
fn repeated_word_corpus_has_single_key() {
    let model = CorpusModel::build("the the the", &[]).unwrap();
    assert_eq!(model.syllable_frequency().len(), 1);
    assert!((model.syllable_frequency()[&1] - 1.0).abs() < 1e-12);
}

#[test]
fn repeated_stopword_corpus_has_no_tokens() {
    let result = CorpusModel::build("the the the", &stoplist());
    assert!(matches!(result, Err(CorpusError::NoTokens)));
}

#[test]
fn dictionary_tallies_differ_from_heuristic() {
    let corpus = fixture_corpus();
    let dictionary = DictionarySyllabifier::load(std::path::Path::new(
        "tests/fixtures/test_hyphenation.txt",
    ))
    .unwrap();
    assert!(dictionary.len() > 30);

    let with_dictionary =
        CorpusModel::build_with_syllabifier(&corpus, &stoplist(), &dictionary).unwrap();
    let with_heuristic =
        CorpusModel::build_with_syllabifier(&corpus, &stoplist(), &HeuristicSyllabifier).unwrap();

    let dict_tallies = with_dictionary.onset_coda().unwrap();
    let heur_tallies = with_heuristic.onset_coda().unwrap();
    assert!(!dict_tallies.onsets.is_empty());
    assert!(!dict_tallies.codas.is_empty());
    assert_ne!(dict_tallies, heur_tallies);

    // Letter and syllable-count tables do not depend on the syllabifier
    assert_eq!(
        with_dictionary.syllable_frequency(),
        with_heuristic.syllable_frequency()
    );
}

#[test]
fn model_ron_round_trip() {
    let corpus = fixture_corpus();
    let model =
        CorpusModel::build_with_syllabifier(&corpus, &stoplist(), &HeuristicSyllabifier).unwrap();

    let serialized = ron::to_string(&model).unwrap();
    let deserialized: CorpusModel = ron::from_str(&serialized).unwrap();

    assert_eq!(deserialized.syllable_frequency(), model.syllable_frequency());
    assert_eq!(deserialized.onset_coda(), model.onset_coda());
    assert_eq!(
        deserialized.letter_frequency().len(),
        model.letter_frequency().len()
    );
}
