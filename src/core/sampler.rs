/// Syllable sampling — syllable counts and onset/nucleus/coda synthesis.
use log::warn;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::corpus::CorpusModel;
use crate::core::weighted::weighted_choice;
use crate::schema::phonotactics::PhonotacticRules;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("syllable-count distribution is empty")]
    EmptyDistribution,
    #[error("observed clusters requested but the model has no onset/coda tallies")]
    MissingOnsetCoda,
    #[error("no {0} candidates to sample from")]
    NoCandidates(&'static str),
}

/// Where onset and coda candidates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClusterSource {
    /// The vetted cluster lists, weighted by letter-pair frequency.
    #[default]
    Vetted,
    /// Clusters tallied from the syllabified corpus, weighted by count.
    Observed,
}

/// Candidates paired with their sampling weights.
#[derive(Debug, Clone)]
struct Weighted<T> {
    items: Vec<T>,
    weights: Vec<f64>,
}

impl<T> Weighted<T> {
    fn new(pairs: impl IntoIterator<Item = (T, f64)>) -> Self {
        let (items, weights) = pairs.into_iter().unzip();
        Self { items, weights }
    }

    /// No candidate carries a positive weight, so every pick is uniform.
    fn is_unweighted(&self) -> bool {
        !self.weights.iter().any(|w| *w > 0.0)
    }

    fn pick(&self, rng: &mut StdRng) -> &T {
        // non-empty by construction
        weighted_choice(&self.items, &self.weights, rng).unwrap_or(&self.items[0])
    }
}

/// Draws syllable counts and synthesizes syllables from a [`CorpusModel`].
///
/// All candidate lists and weights are fixed at construction, in a stable
/// order, so a seeded RNG reproduces the same draws.
#[derive(Debug, Clone)]
pub struct SyllableSampler {
    counts: Weighted<usize>,
    onsets: Weighted<String>,
    nuclei: Weighted<char>,
    codas: Weighted<String>,
}

impl SyllableSampler {
    pub fn new(
        model: &CorpusModel,
        rules: &PhonotacticRules,
        source: ClusterSource,
    ) -> Result<Self, SamplerError> {
        let counts = Weighted::new(
            model
                .syllable_frequency()
                .iter()
                .map(|(count, freq)| (*count, *freq)),
        );
        if counts.items.is_empty() {
            return Err(SamplerError::EmptyDistribution);
        }

        let (onsets, codas) = match source {
            ClusterSource::Vetted => {
                let by_letters = |clusters: &[String]| {
                    Weighted::new(
                        clusters
                            .iter()
                            .map(|c| (c.clone(), model.letter_weight(c))),
                    )
                };
                (by_letters(&rules.onsets), by_letters(&rules.codas))
            }
            ClusterSource::Observed => {
                let tallies = model.onset_coda().ok_or(SamplerError::MissingOnsetCoda)?;
                let by_count = |table: &BTreeMap<String, u32>| {
                    Weighted::new(table.iter().map(|(c, n)| (c.clone(), *n as f64)))
                };
                (by_count(&tallies.onsets), by_count(&tallies.codas))
            }
        };
        if onsets.items.is_empty() {
            return Err(SamplerError::NoCandidates("onset"));
        }
        if codas.items.is_empty() {
            return Err(SamplerError::NoCandidates("coda"));
        }

        let nuclei = Weighted::new(
            rules
                .vowel_chars()
                .into_iter()
                .map(|v| (v, model.letter_weight(&v.to_string()))),
        );
        if nuclei.items.is_empty() {
            return Err(SamplerError::NoCandidates("vowel"));
        }

        for (name, unweighted) in [
            ("onset", onsets.is_unweighted()),
            ("nucleus", nuclei.is_unweighted()),
            ("coda", codas.is_unweighted()),
        ] {
            if unweighted {
                warn!("no {} candidate has a positive weight, sampling uniformly", name);
            }
        }

        Ok(Self {
            counts,
            onsets,
            nuclei,
            codas,
        })
    }

    /// Draw a syllable count, weighted by corpus frequency.
    pub fn sample_count(&self, rng: &mut StdRng) -> usize {
        *self.counts.pick(rng)
    }

    pub fn sample_onset(&self, rng: &mut StdRng) -> &str {
        self.onsets.pick(rng)
    }

    pub fn sample_nucleus(&self, rng: &mut StdRng) -> char {
        *self.nuclei.pick(rng)
    }

    pub fn sample_coda(&self, rng: &mut StdRng) -> &str {
        self.codas.pick(rng)
    }

    /// Onset, nucleus and coda concatenated.
    pub fn sample_syllable(&self, rng: &mut StdRng) -> String {
        let onset = self.sample_onset(rng);
        let nucleus = self.sample_nucleus(rng);
        let coda = self.sample_coda(rng);

        let mut syllable = String::with_capacity(onset.len() + coda.len() + 1);
        syllable.push_str(onset);
        syllable.push(nucleus);
        syllable.push_str(coda);
        syllable
    }

    /// Largest syllable count `sample_count` can return.
    pub fn max_count(&self) -> usize {
        self.counts.items.iter().copied().max().unwrap_or(0)
    }

    /// Nucleus candidates, in inventory order.
    pub fn vowels(&self) -> &[char] {
        &self.nuclei.items
    }
}
