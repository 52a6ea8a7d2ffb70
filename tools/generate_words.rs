/// Generate Words — prints pronounceable pseudo-words sampled from a corpus.
///
/// Usage: generate_words --corpus <file.txt> [--count <n>] [--seed <u64>]
///        [--config <config.ron>] [--hyphenation <list.txt>] [--observed]
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process;

use pseudoword_engine::core::pipeline::WordGenerator;
use pseudoword_engine::core::sampler::ClusterSource;
use pseudoword_engine::core::syllabifier::DictionarySyllabifier;
use pseudoword_engine::schema::config::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate pseudo-words from a text corpus", long_about = None)]
struct Cli {
    /// Plain-text corpus to model
    #[arg(long)]
    corpus: PathBuf,

    /// Number of words to print
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Generator config in RON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hyphenation list (`syl-la-bles` per line); implies --observed
    #[arg(long)]
    hyphenation: Option<PathBuf>,

    /// Sample onsets/codas observed in the corpus instead of the vetted lists
    #[arg(long)]
    observed: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Warn,
        (0, 1) => LevelFilter::Info,
        (0, 2) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Error,
        _ => LevelFilter::Off,
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load_from_ron(path).unwrap_or_else(|e| {
            eprintln!("Error loading config '{}': {}", path.display(), e);
            process::exit(1);
        }),
        None => GeneratorConfig::default(),
    };
    if cli.observed || cli.hyphenation.is_some() {
        config.cluster_source = ClusterSource::Observed;
    }

    let text = std::fs::read_to_string(&cli.corpus).unwrap_or_else(|e| {
        eprintln!("Error reading corpus '{}': {}", cli.corpus.display(), e);
        process::exit(1);
    });

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {}", seed);

    let mut builder = WordGenerator::builder()
        .corpus(&text)
        .config(config)
        .seed(seed);

    if let Some(path) = &cli.hyphenation {
        let dictionary = DictionarySyllabifier::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading hyphenation list '{}': {}", path.display(), e);
            process::exit(1);
        });
        info!("{} hyphenation entries", dictionary.len());
        builder = builder.syllabifier(Box::new(dictionary));
    }

    let words = builder
        .build()
        .and_then(|mut generator| generator.generate(cli.count))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });

    for word in words {
        println!("{}", word);
    }
}
