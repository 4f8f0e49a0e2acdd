//! Cumulative scores and action histories per player

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::{Action, PlayerId};

/// One player's running record.
///
/// `actions.len()` is the number of rounds the player has played against
/// this scorecard, across every match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: i64,
    pub actions: Vec<Action>,
}

impl ScoreEntry {
    pub fn rounds_played(&self) -> usize {
        self.actions.len()
    }

    pub fn count(&self, action: Action) -> usize {
        self.actions.iter().filter(|a| **a == action).count()
    }
}

/// One participant's share of a resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundUpdate {
    pub player: PlayerId,
    pub action: Action,
    pub delta: i32,
}

/// Scores and histories keyed by player identity
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scorecard {
    entries: BTreeMap<PlayerId, ScoreEntry>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh record for every id not seen before.
    /// Existing records are left alone.
    pub fn register<I>(&mut self, players: I)
    where
        I: IntoIterator<Item = PlayerId>,
    {
        for id in players {
            self.entries.entry(id).or_default();
        }
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.entries.contains_key(&player)
    }

    /// Append `action` to the player's history and add `delta` to its score
    pub fn record(&mut self, player: PlayerId, action: Action, delta: i32) -> Result<(), GameError> {
        let entry = self
            .entries
            .get_mut(&player)
            .ok_or(GameError::UnknownPlayer(player))?;
        entry.actions.push(action);
        entry.score += delta as i64;
        Ok(())
    }

    /// Apply both halves of a round.
    ///
    /// Both ids are checked first, so either both updates land or neither does.
    pub fn record_round(&mut self, a: RoundUpdate, b: RoundUpdate) -> Result<(), GameError> {
        self.ensure_known(a.player)?;
        self.ensure_known(b.player)?;

        self.record(a.player, a.action, a.delta)?;
        self.record(b.player, b.action, b.delta)
    }

    pub fn entry(&self, player: PlayerId) -> Result<&ScoreEntry, GameError> {
        self.entries.get(&player).ok_or(GameError::UnknownPlayer(player))
    }

    pub fn score(&self, player: PlayerId) -> Result<i64, GameError> {
        self.entry(player).map(|e| e.score)
    }

    /// Snapshot of the requested players' records
    pub fn get_scorecard(&self, players: &[PlayerId]) -> Result<BTreeMap<PlayerId, ScoreEntry>, GameError> {
        players
            .iter()
            .map(|id| self.entry(*id).map(|e| (*id, e.clone())))
            .collect()
    }

    /// Snapshot of every registered player
    pub fn snapshot(&self) -> BTreeMap<PlayerId, ScoreEntry> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &ScoreEntry)> {
        self.entries.iter().map(|(id, e)| (*id, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn ensure_known(&self, player: PlayerId) -> Result<(), GameError> {
        if self.contains(player) {
            Ok(())
        } else {
            Err(GameError::UnknownPlayer(player))
        }
    }
}
