//! Guess validation against the allowed word set.
//!
//! The embedded set is authoritative and always available. Extra sources
//! implement [`Dictionary`] and can only widen what is accepted.

use crate::wordbank::{EMBEDDED_ALLOWED, load_wordbank_from_file, load_wordbank_from_str};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A pluggable source of additionally accepted words.
pub trait Dictionary {
    /// `word` is already lowercased.
    fn contains(&self, word: &str) -> bool;
}

/// Supplementary word list loaded from disk, kept apart from any session.
#[derive(Debug, Clone, Default)]
pub struct WordCache {
    words: HashSet<String>,
}

impl WordCache {
    /// Load a newline-delimited list. Any failure yields an empty cache; the
    /// player never sees it.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match load_wordbank_from_file(path) {
            Ok(words) => {
                log::info!("Loaded {} supplementary words from {}", words.len(), path.display());
                Self {
                    words: words.into_iter().collect(),
                }
            }
            Err(e) => {
                log::warn!(
                    "Could not load supplementary words from {}, using built-in list: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordCache {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Default location of the supplementary list, if the platform has a cache dir.
#[must_use]
pub fn default_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("seeded-wordle").join("words.txt"))
}

pub struct WordValidator {
    allowed: HashSet<String>,
    extra: Vec<Box<dyn Dictionary>>,
}

impl WordValidator {
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            allowed: allowed.into_iter().map(|w| w.to_lowercase()).collect(),
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::new(load_wordbank_from_str(EMBEDDED_ALLOWED))
    }

    /// Accept everything in `words` as well. Used to keep a custom target
    /// corpus inside the allowed set.
    pub fn extend<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.allowed
            .extend(words.into_iter().map(|w| w.to_lowercase()));
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Box<dyn Dictionary>) -> Self {
        self.extra.push(dictionary);
        self
    }

    /// Case-insensitive membership test. Length is checked by the caller.
    #[must_use]
    pub fn is_accepted(&self, raw: &str) -> bool {
        let word = raw.to_lowercase();
        self.allowed.contains(&word) || self.extra.iter().any(|d| d.contains(&word))
    }
}
