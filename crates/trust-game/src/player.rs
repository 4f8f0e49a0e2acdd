//! Actions, player identities and the `Player` trait

use std::fmt;

use serde::{Deserialize, Serialize};

/// A choice in one round of the trust game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Cheat,
}

impl Action {
    /// Both actions, in a fixed order
    pub const ALL: [Action; 2] = [Action::Cooperate, Action::Cheat];

    /// The other action
    pub fn opposite(self) -> Self {
        match self {
            Action::Cooperate => Action::Cheat,
            Action::Cheat => Action::Cooperate,
        }
    }
}

/// Stable identity of a seated player.
///
/// Assigned by the game in roster order. Two players running the same
/// strategy still get different ids and are scored independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A strategy that takes part in matches.
///
/// Both histories cover the current match only and hold every round
/// played before this one. A player never sees its opponent's choice for
/// the round being decided.
pub trait Player {
    /// Decide this round's action
    fn choose_action(&mut self, own_history: &[Action], opponent_history: &[Action]) -> Action;

    /// Short label used in logs
    fn name(&self) -> &str {
        "player"
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn choose_action(&mut self, own_history: &[Action], opponent_history: &[Action]) -> Action {
        (**self).choose_action(own_history, opponent_history)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
