/// Corpus statistics — letter-pair weights, syllable-count distribution and
/// onset/coda tallies.
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::syllabifier::Syllabifier;
use crate::schema::phonotactics::{is_vowel, CONSONANTS, SYLLABLE_VOWELS, VOWELS};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus has {0} characters, at least 2 are required")]
    CorpusTooShort(usize),
    #[error("corpus contains no usable word tokens")]
    NoTokens,
}

/// Fallback weight added to every single letter after normalization.
const LETTER_BONUS: f64 = 0.01;

/// Characters that end a letter pair instead of continuing a word.
fn breaks_pair(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == '\''
}

/// Heuristic syllable count.
///
/// Counts vowel groups (`aeiouy`), drops one for a trailing `e` and never
/// returns less than 1. This is an approximation: silent-e exceptions
/// ("recipe") and vowel pairs spanning two syllables ("create") are
/// miscounted, and that is accepted.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().flat_map(|c| c.to_lowercase()).collect();
    let voiced = |c: &char| SYLLABLE_VOWELS.contains(*c);

    let mut count: i64 = 0;
    if chars.first().is_some_and(voiced) {
        count += 1;
    }
    for pair in chars.windows(2) {
        if voiced(&pair[1]) && !voiced(&pair[0]) {
            count += 1;
        }
    }
    if chars.last() == Some(&'e') {
        count -= 1;
    }
    count.max(1) as usize
}

/// Word-like tokens: maximal runs of alphanumeric characters.
pub fn tokenize(corpus: &str) -> impl Iterator<Item = &str> {
    corpus
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

/// Split a syllable into (onset, nucleus, coda).
///
/// The onset is the leading non-vowel run, the nucleus the vowel run after
/// it and the coda the trailing non-vowel run. Anything between nucleus and
/// coda belongs to neither. A syllable without a vowel is all onset.
pub fn split_syllable(syllable: &str) -> (&str, &str, &str) {
    let Some(nucleus_start) = syllable.find(is_vowel) else {
        return (syllable, "", "");
    };

    let after_onset = &syllable[nucleus_start..];
    let nucleus_len = after_onset
        .find(|c: char| !is_vowel(c))
        .unwrap_or(after_onset.len());
    let nucleus_end = nucleus_start + nucleus_len;

    // rfind cannot miss: the nucleus holds at least one vowel
    let coda_start = syllable
        .rfind(is_vowel)
        .map(|i| i + 1)
        .unwrap_or(nucleus_end);

    (
        &syllable[..nucleus_start],
        &syllable[nucleus_start..nucleus_end],
        &syllable[coda_start..],
    )
}

/// Normalized letter-pair weights with add-one smoothing.
///
/// Every distinct lower-cased pair starts at 1 and gains 1 per occurrence;
/// pairs whose second character is whitespace, `.` or `'` are skipped.
/// After normalization each single vowel and consonant key gets a
/// [`LETTER_BONUS`], so values are relative weights rather than a strict
/// distribution.
pub fn calculate_letter_frequency(corpus: &str) -> FxHashMap<String, f64> {
    let chars: Vec<char> = corpus.chars().collect();
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();

    for pair in chars.windows(2) {
        if breaks_pair(pair[1]) {
            continue;
        }
        let key: String = pair.iter().flat_map(|c| c.to_lowercase()).collect();
        *counts.entry(key).or_insert(1) += 1;
    }

    let total: u64 = counts.values().sum();
    let mut frequency: FxHashMap<String, f64> = counts
        .into_iter()
        .map(|(pair, count)| (pair, count as f64 / total as f64))
        .collect();

    for c in CONSONANTS.chars().chain(VOWELS.chars()) {
        *frequency.entry(c.to_string()).or_insert(0.0) += LETTER_BONUS;
    }

    frequency
}

/// Normalized histogram of heuristic syllable counts over corpus tokens,
/// skipping any token in `stoplist` (case-insensitive).
pub fn calculate_syllable_frequency(corpus: &str, stoplist: &[String]) -> BTreeMap<usize, f64> {
    let stop: FxHashSet<String> = stoplist.iter().map(|w| w.to_lowercase()).collect();

    let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
    for token in tokenize(corpus) {
        if stop.contains(&token.to_lowercase()) {
            continue;
        }
        *counts.entry(count_syllables(token)).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    counts
        .into_iter()
        .map(|(syllables, count)| (syllables, count as f64 / total as f64))
        .collect()
}

/// Raw onset and coda occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnsetCodaFrequency {
    pub onsets: BTreeMap<String, u32>,
    pub codas: BTreeMap<String, u32>,
}

/// Tally onsets and codas of every syllable of every corpus token.
///
/// Tokens are lower-cased; tokens with anything other than ASCII letters are
/// skipped so digits and accented letters never become clusters. Empty
/// onsets and codas are counted like any other.
pub fn calculate_onset_coda_frequency(
    corpus: &str,
    syllabifier: &dyn Syllabifier,
) -> OnsetCodaFrequency {
    let mut frequency = OnsetCodaFrequency::default();

    for token in tokenize(corpus) {
        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        let word = token.to_ascii_lowercase();
        for syllable in syllabifier.syllabify(&word) {
            let (onset, _nucleus, coda) = split_syllable(&syllable);
            *frequency.onsets.entry(onset.to_string()).or_insert(0) += 1;
            *frequency.codas.entry(coda.to_string()).or_insert(0) += 1;
        }
    }

    frequency
}

/// Statistical tables derived once from a corpus and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusModel {
    letter_frequency: FxHashMap<String, f64>,
    syllable_frequency: BTreeMap<usize, f64>,
    onset_coda: Option<OnsetCodaFrequency>,
}

impl CorpusModel {
    /// Build letter-pair and syllable-count tables.
    ///
    /// Fails if the corpus is shorter than two characters or leaves no
    /// token once `stoplist` is applied.
    pub fn build(corpus: &str, stoplist: &[String]) -> Result<CorpusModel, CorpusError> {
        let length = corpus.chars().count();
        if length < 2 {
            return Err(CorpusError::CorpusTooShort(length));
        }

        let syllable_frequency = calculate_syllable_frequency(corpus, stoplist);
        if syllable_frequency.is_empty() {
            return Err(CorpusError::NoTokens);
        }

        let letter_frequency = calculate_letter_frequency(corpus);

        debug!(
            "corpus model: {} letter keys, syllable counts {:?}",
            letter_frequency.len(),
            syllable_frequency.keys().collect::<Vec<_>>()
        );

        Ok(CorpusModel {
            letter_frequency,
            syllable_frequency,
            onset_coda: None,
        })
    }

    /// Build all tables, including onset/coda tallies from `syllabifier`.
    pub fn build_with_syllabifier(
        corpus: &str,
        stoplist: &[String],
        syllabifier: &dyn Syllabifier,
    ) -> Result<CorpusModel, CorpusError> {
        let mut model = Self::build(corpus, stoplist)?;
        let onset_coda = calculate_onset_coda_frequency(corpus, syllabifier);
        debug!(
            "onset/coda tallies: {} onsets, {} codas",
            onset_coda.onsets.len(),
            onset_coda.codas.len()
        );
        model.onset_coda = Some(onset_coda);
        Ok(model)
    }

    pub fn letter_frequency(&self) -> &FxHashMap<String, f64> {
        &self.letter_frequency
    }

    /// Weight of a letter pair or single letter; 0 when unseen.
    pub fn letter_weight(&self, key: &str) -> f64 {
        self.letter_frequency.get(key).copied().unwrap_or(0.0)
    }

    pub fn syllable_frequency(&self) -> &BTreeMap<usize, f64> {
        &self.syllable_frequency
    }

    /// Largest syllable count observed in the corpus.
    pub fn max_syllables(&self) -> usize {
        self.syllable_frequency.keys().next_back().copied().unwrap_or(0)
    }

    pub fn onset_coda(&self) -> Option<&OnsetCodaFrequency> {
        self.onset_coda.as_ref()
    }
}
