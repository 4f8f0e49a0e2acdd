//! Error types for the trust game engine

use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Rounds must be a positive integer, got {0}")]
    InvalidRounds(u32),

    #[error("A tournament needs at least 2 players, got {0}")]
    RosterTooSmall(usize),

    #[error("Player {0} cannot be paired with itself")]
    SelfPairing(PlayerId),

    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed tournament config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tournament config: {0}")]
    Invalid(#[from] GameError),
}
