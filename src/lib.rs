// Library interface for seeded-wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod rng;
pub mod scorer;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::GameError;
pub use game_state::{
    Board, BoardRow, GameConfig, GameInterface, GameSession, GameStatus, SubmitOutcome,
    UserAction, game_loop,
};
pub use rng::SeededRandom;
pub use scorer::{Guess, KeyboardOverlay, Verdict, score};
pub use validator::{Dictionary, WordCache, WordValidator};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
