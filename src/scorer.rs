use std::fmt;

pub const WORD_LENGTH: usize = 5;
const ALPHABET_SIZE: usize = 26;

/// Outcome for a single letter of a guess.
///
/// Variants are ordered by strength so the keyboard overlay can keep the
/// strongest verdict seen for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,  // Gray
    Present, // Yellow
    Correct, // Green
}

impl Verdict {
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    #[must_use]
    pub fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// A submitted guess together with the verdicts computed when it was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: String,
    pub verdicts: [Verdict; WORD_LENGTH],
}

impl Guess {
    #[must_use]
    pub fn new(word: &str, target: &str) -> Self {
        Self {
            word: word.to_string(),
            verdicts: score(word, target),
        }
    }

    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.verdicts.iter().all(|v| *v == Verdict::Correct)
    }

    #[must_use]
    pub fn emoji_row(&self) -> String {
        self.verdicts.iter().map(|v| v.to_emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self.verdicts.iter().map(|v| v.to_char()).collect();
        write!(f, "{} {}", self.word, pattern)
    }
}

/// Score `guess` against `target`. Both must be 5 uppercase letters.
///
/// Exact matches are taken first and consume their target letter, then each
/// remaining guess letter consumes the first unconsumed occurrence in the
/// target. A repeated guess letter can therefore never earn more
/// Correct/Present verdicts than the target has copies of it.
#[must_use]
pub fn score(guess: &str, target: &str) -> [Verdict; WORD_LENGTH] {
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();
    debug_assert_eq!(guess_chars.len(), WORD_LENGTH);
    debug_assert_eq!(remaining.len(), WORD_LENGTH);

    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut matched = [false; WORD_LENGTH];

    // First pass: exact positions
    for (i, &g) in guess_chars.iter().enumerate().take(WORD_LENGTH) {
        if remaining.get(i) == Some(&Some(g)) {
            verdicts[i] = Verdict::Correct;
            matched[i] = true;
            remaining[i] = None;
        }
    }

    // Second pass: letters elsewhere in the target
    for (i, &g) in guess_chars.iter().enumerate().take(WORD_LENGTH) {
        if matched[i] {
            continue;
        }
        if let Some(pos) = remaining.iter().position(|&c| c == Some(g)) {
            verdicts[i] = Verdict::Present;
            remaining[pos] = None;
        }
    }

    verdicts
}

/// Strongest verdict seen for each letter across a guess history.
///
/// Rebuilt from the stored verdicts every time, never tracked incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardOverlay {
    letters: [Option<Verdict>; ALPHABET_SIZE],
}

impl KeyboardOverlay {
    #[must_use]
    pub fn from_history(history: &[Guess]) -> Self {
        let mut overlay = Self::default();
        for guess in history {
            for (c, &verdict) in guess.word.chars().zip(guess.verdicts.iter()) {
                if let Some(slot) = letter_index(c).map(|i| &mut overlay.letters[i]) {
                    *slot = Some(slot.map_or(verdict, |old| old.max(verdict)));
                }
            }
        }
        overlay
    }

    /// Verdict for `letter`, or `None` if it has not been guessed.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        letter_index(letter).and_then(|i| self.letters[i])
    }
}

fn letter_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}
