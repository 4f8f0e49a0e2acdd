//! Tournament configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError};

/// Rounds per match when nothing else is configured
pub const DEFAULT_ROUNDS_PER_MATCH: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    /// Rounds played in every pairing of a tournament
    pub rounds_per_match: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self { rounds_per_match: DEFAULT_ROUNDS_PER_MATCH }
    }
}

impl TournamentConfig {
    pub fn with_rounds(rounds_per_match: u32) -> Self {
        Self { rounds_per_match }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        validate_rounds(self.rounds_per_match)
    }
}

pub(crate) fn validate_rounds(rounds: u32) -> Result<(), GameError> {
    if rounds == 0 {
        return Err(GameError::InvalidRounds(rounds));
    }
    Ok(())
}
