/// Phonotactic inventory: vowels, vetted onset/coda clusters and the
/// inter-syllable repair list.
use serde::{Deserialize, Serialize};

/// Vowels used for nuclei and for onset/nucleus/coda splitting.
pub const VOWELS: &str = "aeiou";

/// Vowels recognised by the syllable-counting heuristic.
pub const SYLLABLE_VOWELS: &str = "aeiouy";

pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Real English onset clusters, including the empty onset.
pub const COMMON_ONSETS: &[&str] = &[
    "", "s", "c", "p", "t", "b", "d", "k", "g", "f", "v", "th", "sh", "ch", "m", "n", "r", "l",
    "h", "w", "y", "j", "qu", "wh", "ph", "gh", "kn", "wr", "sw", "st", "sp", "sk", "sm", "sn",
    "sl", "cl", "pl", "fl", "bl", "gl", "pr", "br", "tr", "dr", "cr", "gr", "tw", "dw", "cw",
    "gw", "sch", "scr", "shr", "sph", "spl", "spr", "squ", "str", "thr",
];

/// Real English coda clusters, including the empty coda.
///
/// Duplicates are intentional: a cluster listed twice is twice as likely
/// when the list is sampled with equal weights.
pub const COMMON_CODAS: &[&str] = &[
    "", "t", "d", "k", "g", "f", "v", "th", "s", "z", "sh", "ch", "m", "n", "ng", "r", "l", "w",
    "y", "x", "pt", "ct", "kt", "ft", "vt", "pht", "tch", "ts", "dz", "cks", "x", "zz", "ss",
    "zz", "mm", "nn", "rr", "ll", "tt", "dd", "rt", "rd", "lt", "ld", "nt", "nd", "rn", "rm",
    "rl", "rk", "rf", "rv", "rp", "rb", "rg", "rc", "rk", "mp", "mb", "lp", "lb", "rp", "rb",
    "sp", "st", "sk", "ft", "kt", "pt", "ct", "pht", "xt",
];

/// Syllable boundaries that get a vowel inserted between them.
pub const DEFAULT_BLOCKLIST: &[&str] = &["dcd", "gj", "cb", "fp", "tv", "sz"];

/// Function words left out of the syllable-count distribution.
pub const DEFAULT_STOPLIST: &[&str] = &[
    "a", "an", "of", "the", "and", "in", "is", "on", "as", "I", "be", "or",
];

/// The phonotactic inventory a sampler and composer work from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonotacticRules {
    /// Nucleus candidates, one character each.
    pub vowels: String,
    pub onsets: Vec<String>,
    pub codas: Vec<String>,
    /// Two-character boundaries repaired by inserting a vowel.
    pub blocklist: Vec<String>,
}

impl Default for PhonotacticRules {
    fn default() -> Self {
        Self {
            vowels: VOWELS.to_string(),
            onsets: COMMON_ONSETS.iter().map(|s| s.to_string()).collect(),
            codas: COMMON_CODAS.iter().map(|s| s.to_string()).collect(),
            blocklist: DEFAULT_BLOCKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PhonotacticRules {
    /// Nucleus candidates as characters.
    pub fn vowel_chars(&self) -> Vec<char> {
        self.vowels.chars().collect()
    }

    /// Blocklist entries that can never match a two-letter boundary.
    pub fn inert_blocklist_entries(&self) -> Vec<&str> {
        self.blocklist
            .iter()
            .map(String::as_str)
            .filter(|b| b.chars().count() != 2 || !b.chars().all(|c| c.is_ascii_lowercase()))
            .collect()
    }

    /// Whether the boundary between `left` and `right` is blocklisted.
    pub fn is_blocked(&self, left: char, right: char) -> bool {
        let mut boundary = String::with_capacity(2);
        boundary.push(left);
        boundary.push(right);
        self.blocklist.iter().any(|b| *b == boundary)
    }
}

/// Whether `c` is a nucleus vowel for onset/coda splitting.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_use_builtin_inventory() {
        let rules = PhonotacticRules::default();
        assert_eq!(rules.vowels, "aeiou");
        assert_eq!(rules.onsets.len(), COMMON_ONSETS.len());
        assert!(rules.onsets.contains(&String::new()));
        assert!(rules.codas.contains(&"ng".to_string()));
        assert_eq!(rules.blocklist.len(), 6);
    }

    #[test]
    fn blocked_boundaries() {
        let rules = PhonotacticRules::default();
        assert!(rules.is_blocked('g', 'j'));
        assert!(rules.is_blocked('s', 'z'));
        assert!(!rules.is_blocked('j', 'g'));
        assert!(!rules.is_blocked('d', 'c'));
    }

    #[test]
    fn custom_blocklist() {
        let rules = PhonotacticRules {
            blocklist: vec!["kk".to_string()],
            ..PhonotacticRules::default()
        };
        assert!(rules.is_blocked('k', 'k'));
        assert!(!rules.is_blocked('g', 'j'));
    }

    #[test]
    fn default_blocklist_keeps_inert_dcd() {
        let rules = PhonotacticRules::default();
        assert_eq!(rules.inert_blocklist_entries(), vec!["dcd"]);
    }

    #[test]
    fn vetted_clusters_are_lowercase_letters() {
        for cluster in COMMON_ONSETS.iter().chain(COMMON_CODAS) {
            assert!(cluster.chars().all(|c| c.is_ascii_lowercase()), "{cluster}");
        }
    }
}
