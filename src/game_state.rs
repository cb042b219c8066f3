use crate::error::GameError;
use crate::rng::SeededRandom;
use crate::scorer::{Guess, KeyboardOverlay, WORD_LENGTH};
use crate::validator::WordValidator;
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};

pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Per-session rules. Built through [`GameConfig::new`] so a session can
/// never run with a zero guess budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_guesses: usize,
}

impl GameConfig {
    pub fn new(max_guesses: usize) -> Result<Self, GameError> {
        if max_guesses == 0 {
            return Err(GameError::Configuration(
                "max guesses must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_guesses })
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub guess: Guess,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRow {
    Submitted(Guess),
    Pending(String),
    Empty,
}

/// Everything a front end needs to draw the game, rebuilt on every request.
#[derive(Debug, Clone)]
pub struct Board {
    pub seed: u64,
    pub rows: Vec<BoardRow>,
    pub keyboard: KeyboardOverlay,
    pub status: GameStatus,
}

/// One puzzle, from target selection to win or loss.
///
/// All mutation goes through this type. A rejected submission leaves every
/// field untouched.
pub struct GameSession<'a> {
    seed: u64,
    target: String,
    history: Vec<Guess>,
    status: GameStatus,
    pending: String,
    config: GameConfig,
    validator: &'a WordValidator,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(
        seed: u64,
        bank: &WordBank,
        validator: &'a WordValidator,
        config: GameConfig,
    ) -> Self {
        let target = bank.select_target(seed);
        info_log!("New session with seed {}", seed);
        debug_log!("Target word for seed {}: {}", seed, target);
        Self {
            seed,
            target,
            history: Vec::new(),
            status: GameStatus::InProgress,
            pending: String::new(),
            config,
            validator,
        }
    }

    /// Start a session on a fresh, non-reproducible seed.
    #[must_use]
    pub fn random(bank: &WordBank, validator: &'a WordValidator, config: GameConfig) -> Self {
        Self::new(SeededRandom::random_seed(), bank, validator, config)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The answer. Front ends only reveal it once the game is lost.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Validate, score and record `raw`.
    ///
    /// Checks run in order: length, dictionary, terminal state. The first
    /// failure is returned and nothing changes. Only A-Z words get past the
    /// dictionary check, whatever the validator accepts.
    pub fn submit_guess(&mut self, raw: &str) -> Result<SubmitOutcome, GameError> {
        let actual = raw.chars().count();
        if actual != WORD_LENGTH {
            return Err(GameError::Length {
                expected: WORD_LENGTH,
                actual,
            });
        }
        let word = raw.to_ascii_uppercase();
        if !word.chars().all(|c| c.is_ascii_alphabetic()) || !self.validator.is_accepted(&word) {
            return Err(GameError::InvalidWord(word));
        }
        if self.status.is_terminal() || self.history.len() >= self.config.max_guesses {
            return Err(GameError::TerminalState);
        }

        let guess = Guess::new(&word, &self.target);
        self.history.push(guess.clone());

        self.status = if word == self.target {
            GameStatus::Won
        } else if self.history.len() >= self.config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        info_log!(
            "Guess {}/{}: {} -> {:?}",
            self.history.len(),
            self.config.max_guesses,
            guess,
            self.status
        );

        Ok(SubmitOutcome {
            guess,
            status: self.status,
        })
    }

    /// Append a letter to the pending row. Ignored once the row is full,
    /// the game is over, or `c` is not A-Z.
    pub fn type_letter(&mut self, c: char) {
        if self.status.is_terminal()
            || !c.is_ascii_alphabetic()
            || self.pending.len() >= WORD_LENGTH
        {
            return;
        }
        self.pending.push(c.to_ascii_uppercase());
    }

    pub fn backspace(&mut self) {
        if !self.status.is_terminal() {
            self.pending.pop();
        }
    }

    /// Submit the pending row. It is cleared only if the guess is accepted,
    /// so the player can fix a rejected word.
    pub fn submit_pending(&mut self) -> Result<SubmitOutcome, GameError> {
        let pending = self.pending.clone();
        let outcome = self.submit_guess(&pending)?;
        self.pending.clear();
        Ok(outcome)
    }

    #[must_use]
    pub fn board(&self) -> Board {
        let mut rows: Vec<BoardRow> = self
            .history
            .iter()
            .cloned()
            .map(BoardRow::Submitted)
            .collect();
        if !self.status.is_terminal() && rows.len() < self.config.max_guesses {
            rows.push(BoardRow::Pending(self.pending.clone()));
        }
        rows.resize(self.config.max_guesses.max(rows.len()), BoardRow::Empty);

        Board {
            seed: self.seed,
            rows,
            keyboard: KeyboardOverlay::from_history(&self.history),
            status: self.status,
        }
    }

    /// End-of-game text, `None` while still playing.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => {
                let count = self.history.len();
                let noun = if count == 1 { "guess" } else { "guesses" };
                Some(format!("Congratulations! You won in {count} {noun}!"))
            }
            GameStatus::Lost => Some(format!("Game Over! The word was: {}", self.target)),
        }
    }

    /// Spoiler-free result grid for sharing alongside the seed.
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = match self.status {
            GameStatus::Won => self.history.len().to_string(),
            GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
        };
        let mut text = format!(
            "Seeded Wordle #{} {}/{}",
            self.seed, score, self.config.max_guesses
        );
        for guess in &self.history {
            text.push('\n');
            text.push_str(&guess.emoji_row());
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    Backspace,
    Submit,
    /// A whole word at once, as typed on a line-based front end.
    Guess(String),
    NewPuzzle,
    LoadSeed(u64),
    Exit,
}

/// Front end seam. The game loop drives the session and hands plain data to
/// the interface; the interface never touches game state.
pub trait GameInterface {
    /// Next player action, or `None` if nothing actionable happened.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_new_game(&mut self, seed: u64, word_count: usize);
    fn display_board(&mut self, board: &Board);
    fn display_error(&mut self, error: &GameError);
    fn display_message(&mut self, message: &str);
    fn display_exit_message(&mut self);
}

/// Run puzzles until the player exits. Starts on `seed` if given, otherwise
/// on a random seed.
pub fn game_loop<I: GameInterface>(
    bank: &WordBank,
    validator: &WordValidator,
    config: GameConfig,
    seed: Option<u64>,
    interface: &mut I,
) {
    let mut session = match seed {
        Some(seed) => GameSession::new(seed, bank, validator, config),
        None => GameSession::random(bank, validator, config),
    };
    start_session(&session, bank, interface);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        let result = match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewPuzzle => {
                session = GameSession::random(bank, validator, config);
                start_session(&session, bank, interface);
                continue;
            }
            UserAction::LoadSeed(seed) => {
                session = GameSession::new(seed, bank, validator, config);
                start_session(&session, bank, interface);
                continue;
            }
            UserAction::Letter(c) => {
                session.type_letter(c);
                None
            }
            UserAction::Backspace => {
                session.backspace();
                None
            }
            UserAction::Submit => Some(session.submit_pending()),
            UserAction::Guess(word) => Some(session.submit_guess(&word)),
        };

        interface.display_board(&session.board());
        match result {
            Some(Ok(outcome)) if outcome.status.is_terminal() => {
                if let Some(message) = session.status_message() {
                    interface.display_message(&message);
                }
                interface.display_message(&session.share_text());
            }
            Some(Err(e)) => {
                debug_log!("game_loop() - rejected: {}", e);
                interface.display_error(&e);
            }
            Some(Ok(_)) | None => {}
        }
    }
}

fn start_session<I: GameInterface>(session: &GameSession, bank: &WordBank, interface: &mut I) {
    interface.display_new_game(session.seed(), bank.len());
    interface.display_board(&session.board());
}
