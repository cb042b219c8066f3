//! TUI (Terminal User Interface) module for Seeded Wordle
//!
//! This module provides an interactive terminal interface using Ratatui.
//! It only renders the [`Board`] it is given and turns key presses into
//! [`UserAction`]s; all game rules live in the session.
//!
//! # State Machine
//! - `Playing` → `GameOver` when the board reports a finished game
//! - `Playing` / `GameOver` → `EnteringSeed` on Ctrl-L (or `S` after a game)
//! - `EnteringSeed` → `Playing` on Enter (loads the seed) or Esc (cancel)

use crate::error::GameError;
use crate::game_state::{Board, BoardRow, GameInterface, UserAction};
use crate::scorer::{KeyboardOverlay, Verdict, WORD_LENGTH};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn tile_colors(verdict: Option<Verdict>) -> (Color, Color) {
    match verdict {
        None => (Color::DarkGray, Color::White),
        Some(Verdict::Correct) => (Color::Green, Color::Black),
        Some(Verdict::Present) => (Color::Yellow, Color::Black),
        Some(Verdict::Absent) => (Color::Gray, Color::White),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    Playing,
    EnteringSeed { input: String },
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    board: Option<&'a Board>,
    state: &'a TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering and input handling.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Option<Board>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            board: None,
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: self.board.as_ref(),
            state: &self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Game board
                Constraint::Length(5),  // Keyboard
                Constraint::Min(4),     // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.board.map(|b| b.seed));
        if let Some(board) = ctx.board {
            Self::render_board(f, chunks[1], board);
            Self::render_keyboard(f, chunks[2], &board.keyboard);
        }
        Self::render_info(f, chunks[3], ctx.state, ctx.message, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, seed: Option<u64>) {
        let text = match seed {
            Some(seed) => format!("SEEDED WORDLE  |  Seed: {seed}"),
            None => "SEEDED WORDLE".to_string(),
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, board: &Board) {
        let block = Block::default()
            .title("Guesses")
            .borders(Borders::ALL)
            .style(Style::default());

        let inner = block.inner(area);
        f.render_widget(block, area);

        // Keep the most recent rows visible if the budget outgrows the panel
        let available_rows = (inner.height / ROW_SPACING) as usize;
        let last_used = board
            .rows
            .iter()
            .rposition(|r| !matches!(r, BoardRow::Empty))
            .map_or(0, |i| i + 1);
        let skip_count = last_used.saturating_sub(available_rows);

        for (display_index, row) in board.rows.iter().skip(skip_count).enumerate() {
            Self::render_row(f, row, display_index, inner);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_row(f: &mut Frame, row: &BoardRow, row_index: usize, area: Rect) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let (letter, verdict) = match row {
                BoardRow::Submitted(guess) => (
                    guess.word.chars().nth(i).unwrap_or(' '),
                    Some(guess.verdicts[i]),
                ),
                BoardRow::Pending(input) => (input.chars().nth(i).unwrap_or(' '), None),
                BoardRow::Empty => (' ', None),
            };
            let (bg_color, fg_color) = tile_colors(verdict);
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_keyboard(f: &mut Frame, area: Rect, overlay: &KeyboardOverlay) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .enumerate()
            .map(|(indent, keys)| {
                let mut spans = vec![Span::raw(" ".repeat(indent * 2 + 1))];
                for c in keys.chars() {
                    let (bg_color, fg_color) = tile_colors(overlay.get(c));
                    spans.push(Span::styled(
                        format!(" {c} "),
                        Style::default().fg(fg_color).bg(bg_color),
                    ));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        state: &TuiState,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        if let TuiState::EnteringSeed { input } = state {
            lines.push(Line::from(vec![Span::styled(
                format!("Load seed: {input}_"),
                SUCCESS_STYLE,
            )]));
        }

        for text in message.lines() {
            lines.push(Line::from(vec![Span::styled(text.to_string(), MESSAGE_STYLE)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Playing => {
                "Type a 5-letter guess | ENTER: Submit | Ctrl-N: New puzzle | Ctrl-L: Load seed | ESC: Quit"
            }
            TuiState::EnteringSeed { .. } => "Type digits | ENTER: Load | ESC: Cancel",
            TuiState::GameOver => "N: New puzzle | S: Load seed | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            // Mouse, focus, paste and resize events carry no game input
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Alt-tab can leave replacement or control characters behind
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        let action = match self.state {
            TuiState::Playing => self.handle_playing_input(key),
            TuiState::EnteringSeed { .. } => self.handle_seed_input(key),
            TuiState::GameOver => self.handle_game_over_input(key),
        };
        Ok(action)
    }

    fn handle_playing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('n' | 'N') if ctrl => Some(UserAction::NewPuzzle),
            KeyCode::Char('l' | 'L') if ctrl => {
                self.transition_to_entering_seed();
                None
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => None,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(UserAction::Letter(c)),
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            KeyCode::Backspace => Some(UserAction::Backspace),
            KeyCode::Enter => Some(UserAction::Submit),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn handle_seed_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let TuiState::EnteringSeed { input } = &mut self.state else {
            return None;
        };

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                input.push(c);
                None
            }
            KeyCode::Backspace => {
                input.pop();
                None
            }
            KeyCode::Enter => match input.parse::<u64>() {
                Ok(seed) => {
                    self.state = TuiState::Playing;
                    Some(UserAction::LoadSeed(seed))
                }
                Err(_) => {
                    self.error_message = "Please enter a seed".to_string();
                    None
                }
            },
            KeyCode::Esc => {
                self.restore_play_state();
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Seeds are numbers only! ('{c}' is not a digit)");
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewPuzzle),
            KeyCode::Char('s' | 'S') => {
                self.transition_to_entering_seed();
                None
            }
            KeyCode::Char('l' | 'L') if ctrl => {
                self.transition_to_entering_seed();
                None
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn transition_to_entering_seed(&mut self) {
        self.error_message.clear();
        self.state = TuiState::EnteringSeed {
            input: String::new(),
        };
        self.status = "Enter a seed to load its puzzle".to_string();
    }

    /// Back to whichever state the current board calls for.
    fn restore_play_state(&mut self) {
        let over = self.board.as_ref().is_some_and(|b| b.status.is_terminal());
        self.state = if over {
            TuiState::GameOver
        } else {
            TuiState::Playing
        };
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_new_game(&mut self, seed: u64, word_count: usize) {
        self.state = TuiState::Playing;
        self.error_message.clear();
        self.message =
            format!("New puzzle from {word_count} words. Share seed {seed} to play the same word.");
        self.status = "Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn display_board(&mut self, board: &Board) {
        self.board = Some(board.clone());
        if board.status.is_terminal() && self.state == TuiState::Playing {
            self.state = TuiState::GameOver;
            self.message.clear();
            self.status = "Game over".to_string();
        } else if !board.status.is_terminal() {
            let used = board
                .rows
                .iter()
                .filter(|r| matches!(r, BoardRow::Submitted(_)))
                .count();
            self.status = format!("Guess {} of {}", used + 1, board.rows.len());
        }
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_message(&mut self, message: &str) {
        if self.message.is_empty() || matches!(self.state, TuiState::Playing) {
            self.message = message.to_string();
        } else {
            self.message.push('\n');
            self.message.push_str(message);
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_colors_follow_verdict() {
        assert_eq!(tile_colors(Some(Verdict::Correct)).0, Color::Green);
        assert_eq!(tile_colors(Some(Verdict::Present)).0, Color::Yellow);
        assert_eq!(tile_colors(Some(Verdict::Absent)).0, Color::Gray);
        assert_eq!(tile_colors(None).0, Color::DarkGray);
    }
}
