use crate::error::GameError;
use crate::rng::SeededRandom;
use crate::scorer::WORD_LENGTH;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Words that can be chosen as the hidden target.
pub const EMBEDDED_CORPUS: &str = include_str!("resources/corpus.txt");
/// Words accepted as guesses. Every corpus word is also listed here.
pub const EMBEDDED_ALLOWED: &str = include_str!("resources/allowed.txt");

fn is_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse a newline-delimited list, keeping only 5-letter alphabetic entries
/// (lowercased), in file order.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_word(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// The ordered target corpus. Order matters: a seed selects by index.
#[derive(Debug, Clone)]
pub struct WordBank {
    corpus: Vec<String>,
}

impl WordBank {
    /// Fails with [`GameError::Configuration`] if there is nothing to pick from.
    pub fn new(corpus: Vec<String>) -> Result<Self, GameError> {
        if corpus.is_empty() {
            return Err(GameError::Configuration(
                "target word corpus is empty".to_string(),
            ));
        }
        Ok(Self { corpus })
    }

    pub fn embedded() -> Result<Self, GameError> {
        Self::new(load_wordbank_from_str(EMBEDDED_CORPUS))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.corpus
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Uppercased target for `seed`. Same seed, same corpus, same word.
    #[must_use]
    pub fn select_target(&self, seed: u64) -> String {
        let mut rng = SeededRandom::new(seed);
        let index = rng.next_int(self.corpus.len());
        self.corpus[index].to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_wordbank_from_str_filters() {
        let words = load_wordbank_from_str("Crane\n  slate \ncalm\nfrugal\nab1de\n\nRAISE");
        assert_eq!(words, vec!["crane", "slate", "raise"]);
    }

    #[test]
    fn test_load_wordbank_from_file() {
        let path = std::env::temp_dir().join("seeded_wordle_wordbank_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "APPLE").unwrap();
            writeln!(file, "grape").unwrap();
            writeln!(file, "kiwi").unwrap();
        }
        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["apple", "grape"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_wordbank_from_missing_file() {
        assert!(load_wordbank_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_embedded_lists_are_clean() {
        let corpus = load_wordbank_from_str(EMBEDDED_CORPUS);
        let allowed = load_wordbank_from_str(EMBEDDED_ALLOWED);
        assert_eq!(corpus.len(), EMBEDDED_CORPUS.lines().count());
        assert!(corpus.iter().all(|w| allowed.contains(w)));
    }

    #[test]
    fn test_empty_corpus_is_configuration_error() {
        assert!(matches!(
            WordBank::new(Vec::new()),
            Err(GameError::Configuration(_))
        ));
    }

    #[test]
    fn test_select_target_repeatable_and_uppercase() {
        let bank = WordBank::embedded().unwrap();
        for seed in [0, 1, 42, 12_345, 999_999, u64::MAX] {
            let first = bank.select_target(seed);
            assert_eq!(first, bank.select_target(seed));
            assert_eq!(first.len(), WORD_LENGTH);
            assert!(first.chars().all(|c| c.is_ascii_uppercase()));
            assert!(bank.words().contains(&first.to_lowercase()));
        }
    }

    #[test]
    fn test_select_target_matches_first_draw() {
        let bank = WordBank::new(load_wordbank_from_str("alpha\nbravo\ncharm\ndelta")).unwrap();
        // Seed 1 draws 58598 / 233280 = 0.2512.., times 4 floors to 1.
        assert_eq!(bank.select_target(1), "BRAVO");
    }

    #[test]
    fn test_single_word_corpus() {
        let bank = WordBank::new(vec!["solos".to_string()]).unwrap();
        assert_eq!(bank.select_target(77), "SOLOS");
    }
}
