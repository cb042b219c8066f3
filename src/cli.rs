use crate::error::GameError;
use crate::game_state::{Board, BoardRow, DEFAULT_MAX_GUESSES, GameInterface, UserAction};
use crate::scorer::{KeyboardOverlay, Verdict, WORD_LENGTH};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Seeded Wordle: share a seed, get the same puzzle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Play the puzzle for this seed instead of a random one
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of guesses before the game is lost
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES, value_parser = parse_max_guesses)]
    pub max_guesses: usize,

    /// Path to a newline-delimited file of target words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Extra accepted guesses (defaults to the cached list if present)
    #[arg(long)]
    pub extra_words: Option<PathBuf>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Write logs here instead of the default data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn parse_max_guesses(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// One parsed line of plain-text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Action(UserAction),
    Blank,
    /// Unusable command, with the hint to show the player.
    Invalid(&'static str),
}

/// Interpret one line of input without printing anything.
#[must_use]
pub fn parse_line(line: &str) -> LineInput {
    let input = line.trim();
    let lower = input.to_lowercase();
    let mut parts = lower.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (None, _, _) => LineInput::Blank,
        (Some("exit" | "quit"), None, _) => LineInput::Action(UserAction::Exit),
        (Some("new" | "next"), None, _) => LineInput::Action(UserAction::NewPuzzle),
        (Some("seed"), Some(value), None) => match value.parse::<u64>() {
            Ok(seed) => LineInput::Action(UserAction::LoadSeed(seed)),
            Err(_) => LineInput::Invalid("Seed must be a non-negative whole number."),
        },
        (Some("seed"), _, _) => LineInput::Invalid("Usage: seed <number>"),
        _ => LineInput::Action(UserAction::Guess(input.to_string())),
    }
}

fn key_label(c: char, overlay: &KeyboardOverlay) -> String {
    match overlay.get(c) {
        Some(Verdict::Correct) => format!("[{c}]"),
        Some(Verdict::Present) => format!("({c})"),
        Some(Verdict::Absent) => " · ".to_string(),
        None => format!(" {c} "),
    }
}

/// Plain-text rendering of the board, one line per row plus the keyboard.
#[must_use]
pub fn render_board(board: &Board) -> Vec<String> {
    let mut lines = Vec::new();
    for row in &board.rows {
        let line = match row {
            BoardRow::Submitted(guess) => {
                let pattern: String = guess.verdicts.iter().map(|v| v.to_char()).collect();
                format!("  {}  {}  {}", guess.word, pattern, guess.emoji_row())
            }
            BoardRow::Pending(input) => {
                format!("  {:_<width$}", input, width = WORD_LENGTH)
            }
            BoardRow::Empty => format!("  {}", "_".repeat(WORD_LENGTH)),
        };
        lines.push(line);
    }
    lines.push(String::new());
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let row: String = keys.chars().map(|c| key_label(c, &board.keyboard)).collect();
        lines.push(format!("{}{}", " ".repeat(indent * 2), row));
    }
    lines
}

/// Line-based front end. Reads one command or guess per line.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter your guess (5 letters), 'new', 'seed <n>' or 'exit':");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input ends the game like 'exit'
            Ok(0) | Err(_) => Some(UserAction::Exit),
            Ok(_) => match parse_line(&input) {
                LineInput::Action(action) => Some(action),
                LineInput::Blank => None,
                LineInput::Invalid(hint) => {
                    println!("{hint}");
                    None
                }
            },
        }
    }

    fn display_new_game(&mut self, seed: u64, word_count: usize) {
        println!("New puzzle from {word_count} words. Seed: {seed} (share it to play the same word)");
    }

    fn display_board(&mut self, board: &Board) {
        for line in render_board(board) {
            println!("{line}");
        }
    }

    fn display_error(&mut self, error: &GameError) {
        println!("{error}");
    }

    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::Guess;
    use crate::game_state::GameStatus;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["seeded-wordle"]);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.max_guesses, 6);
        assert_eq!(cli.wordbank_path, None);
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_with_options() {
        let cli = Cli::parse_from([
            "seeded-wordle",
            "--seed",
            "12345",
            "-g",
            "8",
            "-i",
            "words.txt",
            "--plain",
        ]);
        assert_eq!(cli.seed, Some(12345));
        assert_eq!(cli.max_guesses, 8);
        assert_eq!(cli.wordbank_path, Some("words.txt".to_string()));
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_rejects_zero_guesses() {
        assert!(Cli::try_parse_from(["seeded-wordle", "-g", "0"]).is_err());
        assert!(Cli::try_parse_from(["seeded-wordle", "--seed", "-3"]).is_err());
    }

    fn action(line: &str) -> Option<UserAction> {
        match parse_line(line) {
            LineInput::Action(action) => Some(action),
            LineInput::Blank | LineInput::Invalid(_) => None,
        }
    }

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(action("exit\n"), Some(UserAction::Exit));
        assert_eq!(action("  QUIT "), Some(UserAction::Exit));
        assert_eq!(action("next"), Some(UserAction::NewPuzzle));
        assert_eq!(action("new"), Some(UserAction::NewPuzzle));
        assert_eq!(action("seed 42"), Some(UserAction::LoadSeed(42)));
        assert_eq!(action("Seed 0"), Some(UserAction::LoadSeed(0)));
    }

    #[test]
    fn test_parse_line_bad_seed_returns_hint() {
        assert_eq!(
            parse_line("seed abc"),
            LineInput::Invalid("Seed must be a non-negative whole number.")
        );
        assert_eq!(parse_line("seed -1"), parse_line("seed abc"));
        assert_eq!(parse_line("seed"), LineInput::Invalid("Usage: seed <number>"));
        assert_eq!(parse_line("seed 1 2"), LineInput::Invalid("Usage: seed <number>"));
    }

    #[test]
    fn test_parse_line_guesses() {
        assert_eq!(action("crane"), Some(UserAction::Guess("crane".to_string())));
        assert_eq!(action("  CRANE  "), Some(UserAction::Guess("CRANE".to_string())));
        assert_eq!(action("ab"), Some(UserAction::Guess("ab".to_string())));
        assert_eq!(parse_line("   "), LineInput::Blank);
    }

    #[test]
    fn test_read_action_skips_invalid_seed() {
        let mut interface = CliInterface::new(Cursor::new("seed x\nseed 3\n"));
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::LoadSeed(3)));
    }

    #[test]
    fn test_read_action_eof_is_exit() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_sequence() {
        let mut interface = CliInterface::new(Cursor::new("crane\n\nseed 7\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Guess("crane".to_string()))
        );
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::LoadSeed(7)));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_render_board() {
        let history = vec![Guess::new("CRANE", "CRATE")];
        let board = Board {
            seed: 1,
            rows: vec![
                BoardRow::Submitted(history[0].clone()),
                BoardRow::Pending("SL".to_string()),
                BoardRow::Empty,
            ],
            keyboard: KeyboardOverlay::from_history(&history),
            status: GameStatus::InProgress,
        };
        let lines = render_board(&board);
        assert_eq!(lines[0], "  CRANE  GGGXG  🟩🟩🟩⬛🟩");
        assert_eq!(lines[1], "  SL___");
        assert_eq!(lines[2], "  _____");
        assert!(lines[4].contains("[E]"));
        assert!(lines[4].contains(" T "));
        assert!(lines[6].contains(" · "));
    }
}
