/// The generation pipeline: corpus → model → sampler → composer → words.
///
/// Builds the corpus model once, then composes candidates until the
/// requested number of multi-syllable words has been accepted.
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::composer::WordComposer;
use crate::core::corpus::{count_syllables, CorpusError, CorpusModel};
use crate::core::sampler::{ClusterSource, SamplerError, SyllableSampler};
use crate::core::syllabifier::{HeuristicSyllabifier, Syllabifier, SyllabifierError};
use crate::schema::config::{ConfigError, GeneratorConfig};

/// Accepted words must count more syllables than this.
const MIN_SYLLABLES_EXCLUSIVE: usize = 1;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("syllabifier error: {0}")]
    Syllabifier(#[from] SyllabifierError),
    #[error("no corpus or corpus model was provided")]
    MissingCorpus,
    #[error("requested word count must be positive")]
    InvalidCount,
    #[error("corpus words never exceed {max_syllables} syllable(s), no multi-syllable word can be generated")]
    DegenerateModel { max_syllables: usize },
    #[error("no multi-syllable word after {0} attempts")]
    AttemptsExhausted(u32),
}

/// Word generator for one session. Built via `WordGenerator::builder()`.
pub struct WordGenerator {
    model: CorpusModel,
    sampler: SyllableSampler,
    composer: WordComposer,
    config: GeneratorConfig,
    rng: StdRng,
}

/// Builder for constructing a `WordGenerator`.
pub struct WordGeneratorBuilder {
    corpus: Option<String>,
    model: Option<CorpusModel>,
    config: Option<GeneratorConfig>,
    syllabifier: Option<Box<dyn Syllabifier>>,
    seed: u64,
}

impl WordGenerator {
    pub fn builder() -> WordGeneratorBuilder {
        WordGeneratorBuilder {
            corpus: None,
            model: None,
            config: None,
            syllabifier: None,
            seed: 0,
        }
    }

    pub fn model(&self) -> &CorpusModel {
        &self.model
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate exactly `count` words, each with more than one syllable.
    ///
    /// Candidates with a single heuristic syllable are discarded. Each word
    /// gets at most `max_attempts` candidates; running out is an error and
    /// no partial list is returned.
    pub fn generate(&mut self, count: usize) -> Result<Vec<String>, PipelineError> {
        if count == 0 {
            return Err(PipelineError::InvalidCount);
        }

        let max_syllables = self.sampler.max_count();
        if max_syllables <= MIN_SYLLABLES_EXCLUSIVE {
            return Err(PipelineError::DegenerateModel { max_syllables });
        }

        let max_attempts = self.config.max_attempts;
        let mut words = Vec::with_capacity(count);
        let mut rejected = 0u64;

        while words.len() < count {
            let mut accepted = None;
            for _ in 0..max_attempts {
                let candidate = self.composer.compose(&self.sampler, &mut self.rng);
                if count_syllables(&candidate) > MIN_SYLLABLES_EXCLUSIVE {
                    accepted = Some(candidate);
                    break;
                }
                trace!("rejected single-syllable candidate '{}'", candidate);
                rejected += 1;
            }

            match accepted {
                Some(word) => words.push(word),
                None => return Err(PipelineError::AttemptsExhausted(max_attempts)),
            }
        }

        info!("generated {} words ({} candidates rejected)", words.len(), rejected);
        Ok(words)
    }
}

impl WordGeneratorBuilder {
    /// Corpus text to derive the model from.
    pub fn corpus(mut self, text: &str) -> Self {
        self.corpus = Some(text.to_string());
        self
    }

    /// Provide a prebuilt model directly (skips corpus analysis).
    pub fn with_model(mut self, model: CorpusModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Syllabifier for onset/coda tallies.
    pub fn syllabifier(mut self, syllabifier: Box<dyn Syllabifier>) -> Self {
        self.syllabifier = Some(syllabifier);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<WordGenerator, PipelineError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let model = match (self.model, self.corpus) {
            (Some(model), _) => model,
            (None, Some(corpus)) => {
                let stoplist = config.active_stoplist();
                match (self.syllabifier, config.cluster_source) {
                    (Some(syllabifier), _) => {
                        CorpusModel::build_with_syllabifier(&corpus, stoplist, syllabifier.as_ref())?
                    }
                    (None, ClusterSource::Observed) => {
                        debug!("no syllabifier given, tallying clusters with the heuristic splitter");
                        CorpusModel::build_with_syllabifier(&corpus, stoplist, &HeuristicSyllabifier)?
                    }
                    (None, ClusterSource::Vetted) => CorpusModel::build(&corpus, stoplist)?,
                }
            }
            (None, None) => return Err(PipelineError::MissingCorpus),
        };

        let sampler = SyllableSampler::new(&model, &config.rules, config.cluster_source)?;
        let composer = WordComposer::new(config.rules.clone());

        Ok(WordGenerator {
            model,
            sampler,
            composer,
            config,
            rng: StdRng::seed_from_u64(self.seed),
        })
    }
}

/// Build a generator from `corpus` with default settings and return
/// `count` words.
pub fn generate_words(corpus: &str, count: usize, seed: u64) -> Result<Vec<String>, PipelineError> {
    WordGenerator::builder()
        .corpus(corpus)
        .seed(seed)
        .build()?
        .generate(count)
}
