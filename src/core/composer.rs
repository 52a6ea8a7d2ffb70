/// Word composition — joins sampled syllables and repairs blocked boundaries.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::sampler::SyllableSampler;
use crate::schema::phonotactics::PhonotacticRules;

/// Assembles words from a [`SyllableSampler`].
///
/// When the last letter of the word so far and the first letter of the
/// next syllable form a blocklisted boundary, a random vowel is inserted
/// between them. Only the listed boundaries are repaired.
#[derive(Debug, Clone)]
pub struct WordComposer {
    rules: PhonotacticRules,
}

impl WordComposer {
    pub fn new(rules: PhonotacticRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PhonotacticRules {
        &self.rules
    }

    /// Draw a syllable count and build a word with that many syllables.
    pub fn compose(&self, sampler: &SyllableSampler, rng: &mut StdRng) -> String {
        let syllables = sampler.sample_count(rng);
        let mut word = String::new();

        for _ in 0..syllables {
            let next = sampler.sample_syllable(rng);
            if let (Some(last), Some(first)) = (word.chars().last(), next.chars().next()) {
                if self.rules.is_blocked(last, first) {
                    if let Some(vowel) = sampler.vowels().choose(rng) {
                        word.push(*vowel);
                    }
                }
            }
            word.push_str(&next);
        }

        word
    }
}
