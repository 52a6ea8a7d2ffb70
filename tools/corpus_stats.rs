/// Corpus Stats — prints the tables derived from a corpus.
///
/// Usage: corpus_stats --corpus <file.txt> [--top <n>] [--no-stoplist] [--ron]
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use pseudoword_engine::core::corpus::CorpusModel;
use pseudoword_engine::core::syllabifier::{DictionarySyllabifier, HeuristicSyllabifier, Syllabifier};
use pseudoword_engine::schema::phonotactics::DEFAULT_STOPLIST;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect the statistics derived from a corpus", long_about = None)]
struct Cli {
    /// Plain-text corpus to analyse
    #[arg(long)]
    corpus: PathBuf,

    /// Hyphenation list used for onset/coda tallies
    #[arg(long)]
    hyphenation: Option<PathBuf>,

    /// How many letter pairs, onsets and codas to list
    #[arg(long, default_value_t = 15)]
    top: usize,

    /// Keep function words in the syllable-count distribution
    #[arg(long)]
    no_stoplist: bool,

    /// Dump the whole model as RON instead of a summary
    #[arg(long)]
    ron: bool,
}

fn top_entries<'a, V: Copy + PartialOrd + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a V)>,
    n: usize,
) -> Vec<(&'a String, V)> {
    let mut sorted: Vec<(&String, V)> = entries.map(|(k, v)| (k, *v)).collect();
    sorted.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    sorted.truncate(n);
    sorted
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let text = std::fs::read_to_string(&cli.corpus).unwrap_or_else(|e| {
        eprintln!("Error reading corpus '{}': {}", cli.corpus.display(), e);
        process::exit(1);
    });

    let syllabifier: Box<dyn Syllabifier> = match &cli.hyphenation {
        Some(path) => Box::new(DictionarySyllabifier::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading hyphenation list '{}': {}", path.display(), e);
            process::exit(1);
        })),
        None => Box::new(HeuristicSyllabifier),
    };

    let stoplist: Vec<String> = if cli.no_stoplist {
        Vec::new()
    } else {
        DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect()
    };

    let model = CorpusModel::build_with_syllabifier(&text, &stoplist, syllabifier.as_ref())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });

    if cli.ron {
        let serialized = ron::ser::to_string_pretty(&model, ron::ser::PrettyConfig::default())
            .unwrap_or_else(|e| {
                eprintln!("Error serializing model: {}", e);
                process::exit(1);
            });
        println!("{}", serialized);
        return;
    }

    let pairs = model
        .letter_frequency()
        .iter()
        .filter(|(k, _)| k.chars().count() == 2);
    println!("Letter pairs: {}", model.letter_frequency().len());
    for (pair, weight) in top_entries(pairs, cli.top) {
        println!("  {:?} {:.5}", pair, weight);
    }

    println!("Syllable counts:");
    for (syllables, freq) in model.syllable_frequency() {
        println!("  {:>2}: {:.4}", syllables, freq);
    }

    if let Some(tallies) = model.onset_coda() {
        println!("Onsets: {}", tallies.onsets.len());
        for (onset, count) in top_entries(tallies.onsets.iter(), cli.top) {
            println!("  {:?} {}", onset, count);
        }
        println!("Codas: {}", tallies.codas.len());
        for (coda, count) in top_entries(tallies.codas.iter(), cli.top) {
            println!("  {:?} {}", coda, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn top_entries_sorts_by_weight_then_key() {
        let mut table: BTreeMap<String, u32> = BTreeMap::new();
        table.insert("st".to_string(), 4);
        table.insert("b".to_string(), 9);
        table.insert("tr".to_string(), 4);
        table.insert("".to_string(), 1);

        let top = top_entries(table.iter(), 3);
        let keys: Vec<&str> = top.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "st", "tr"]);
        assert_eq!(top[0].1, 9);
    }

    #[test]
    fn top_entries_on_float_weights() {
        let mut table: BTreeMap<String, f64> = BTreeMap::new();
        table.insert("an".to_string(), 0.3);
        table.insert("ba".to_string(), 0.1);
        let top = top_entries(table.iter(), 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "an");
    }
}
