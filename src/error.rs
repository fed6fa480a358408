use std::path::PathBuf;

use crate::game::{Colour, Move, Side};

/// Errors from the board primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("slot ({col}, {row}) is outside the board")]
    OutOfRange { col: usize, row: usize },

    #[error("lane {lane} is not an insertion lane for side {side}")]
    InvalidLane { side: Side, lane: usize },

    #[error("unparseable board text: {0}")]
    Parse(String),
}

/// Reason a move was rejected by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveReason {
    #[error("the lane is not a valid insertion lane")]
    InvalidLane,

    #[error("{0} has no marbles left to insert")]
    SupplyExhausted(Colour),
}

/// Errors that can occur when applying a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: IllegalMoveReason },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors raised by an AI engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal moves available for move selection")]
    NoLegalMoves,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidLane {
            side: Side::Left,
            lane: 0,
        };
        assert_eq!(
            err.to_string(),
            "lane 0 is not an insertion lane for side Left"
        );
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::IllegalMove {
            mv: Move::new(Side::Top, 6),
            reason: IllegalMoveReason::InvalidLane,
        };
        assert_eq!(
            err.to_string(),
            "illegal move Top lane 6: the lane is not a valid insertion lane"
        );
    }

    #[test]
    fn test_supply_exhausted_display() {
        let err = IllegalMoveReason::SupplyExhausted(Colour::Orange);
        assert_eq!(err.to_string(), "Orange has no marbles left to insert");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("log_filter must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: log_filter must not be empty"
        );
    }
}
