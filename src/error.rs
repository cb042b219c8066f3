use thiserror::Error;

/// Everything that can go wrong while playing a session.
///
/// `Length`, `InvalidWord` and `TerminalState` are player mistakes: the
/// session is left untouched and the front end shows the message.
/// `Configuration` means the word lists are unusable and is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word must be {expected} letters (got {actual})")]
    Length { expected: usize, actual: usize },

    #[error("Not a valid word: {0}")]
    InvalidWord(String),

    #[error("The game is over, start a new puzzle")]
    TerminalState,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::Length {
            expected: 5,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Word must be 5 letters (got 2)");
        assert_eq!(
            GameError::InvalidWord("QQQQQ".to_string()).to_string(),
            "Not a valid word: QQQQQ"
        );
    }

    #[test]
    fn test_configuration_message() {
        assert_eq!(
            GameError::Configuration("empty corpus".to_string()).to_string(),
            "Configuration error: empty corpus"
        );
    }
}
