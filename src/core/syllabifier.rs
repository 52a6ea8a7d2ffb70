/// Word → syllable splitting, behind a single capability trait.
use log::trace;
use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::phonotactics::SYLLABLE_VOWELS;

#[derive(Debug, Error)]
pub enum SyllabifierError {
    #[error("hyphenation list line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits a word into its ordered syllables.
///
/// Implementations must return syllables whose concatenation is the
/// lower-cased input word. An empty word yields no syllables.
pub trait Syllabifier {
    fn syllabify(&self, word: &str) -> Vec<String>;
}

/// Vowel-run splitter.
///
/// Each maximal run of `aeiouy` (a word-initial `y` counts as a consonant)
/// anchors one syllable. A single consonant between two runs opens the next
/// syllable; in a longer cluster the first consonant closes the previous one
/// and the rest open the next. Words without a vowel stay whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSyllabifier;

impl HeuristicSyllabifier {
    fn is_nucleus(chars: &[char], i: usize) -> bool {
        let c = chars[i];
        SYLLABLE_VOWELS.contains(c) && !(i == 0 && c == 'y')
    }
}

impl Syllabifier for HeuristicSyllabifier {
    fn syllabify(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().flat_map(|c| c.to_lowercase()).collect();
        if chars.is_empty() {
            return Vec::new();
        }

        // (start, end) of every vowel run
        let mut runs: Vec<(usize, usize)> = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if Self::is_nucleus(&chars, i) {
                let start = i;
                while i < chars.len() && Self::is_nucleus(&chars, i) {
                    i += 1;
                }
                runs.push((start, i));
            } else {
                i += 1;
            }
        }

        if runs.len() < 2 {
            return vec![chars.iter().collect()];
        }

        let mut syllables = Vec::with_capacity(runs.len());
        let mut start = 0;
        for pair in runs.windows(2) {
            let gap_start = pair[0].1;
            let gap = pair[1].0 - gap_start;
            let split = if gap <= 1 { gap_start } else { gap_start + 1 };
            syllables.push(chars[start..split].iter().collect());
            start = split;
        }
        syllables.push(chars[start..].iter().collect());
        syllables
    }
}

/// Syllabifier backed by a hyphenation dictionary.
///
/// Words missing from the dictionary are split by [`HeuristicSyllabifier`].
#[derive(Debug, Clone, Default)]
pub struct DictionarySyllabifier {
    entries: FxHashMap<String, Vec<String>>,
    fallback: HeuristicSyllabifier,
}

impl DictionarySyllabifier {
    /// Load a hyphenation list from a file.
    pub fn load(path: &Path) -> Result<Self, SyllabifierError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a hyphenation list: one word per line with syllables separated
    /// by `-` (e.g. `mar-ma-lade`). Blank lines and `#` comments are skipped.
    pub fn parse(input: &str) -> Result<Self, SyllabifierError> {
        let mut entries = FxHashMap::default();

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let syllables: Vec<String> = line.split('-').map(|s| s.trim().to_lowercase()).collect();
            if syllables.iter().any(|s| s.is_empty()) {
                return Err(SyllabifierError::Parse {
                    line: index + 1,
                    reason: format!("empty syllable in '{}'", line),
                });
            }
            if syllables.iter().any(|s| s.chars().any(char::is_whitespace)) {
                return Err(SyllabifierError::Parse {
                    line: index + 1,
                    reason: format!("'{}' is not a single word", line),
                });
            }

            entries.insert(syllables.concat(), syllables);
        }

        Ok(Self {
            entries,
            fallback: HeuristicSyllabifier,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Syllabifier for DictionarySyllabifier {
    fn syllabify(&self, word: &str) -> Vec<String> {
        let key = word.to_lowercase();
        match self.entries.get(&key) {
            Some(syllables) => syllables.clone(),
            None => {
                trace!("'{}' not in hyphenation list, using heuristic split", key);
                self.fallback.syllabify(&key)
            }
        }
    }
}
