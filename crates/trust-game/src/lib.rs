//! Trust Game engine
//!
//! Core logic for the iterated trust game: a fixed two-action payoff
//! table, pairwise matches, a shared scorecard and round-robin
//! tournaments over any number of strategies.

mod config;
mod error;
mod game;
mod pairing;
mod player;
mod random;
mod scorecard;
mod strategy;
mod tournament;

pub use config::{TournamentConfig, DEFAULT_ROUNDS_PER_MATCH};
pub use error::{ConfigError, GameError};
pub use game::{play_match, resolve_round, settle_match, Contestant, MatchResult, MatchTotals, RoundResult};
pub use pairing::{all_pairings, calculate_match_count};
pub use player::{Action, Player, PlayerId};
pub use random::{ActionSource, SeededRng};
pub use scorecard::{RoundUpdate, ScoreEntry, Scorecard};
pub use strategy::{
    AlwaysCheat, AlwaysCooperate, CheatEveryThird, Copycat, Detective, Grudge, Pavlov, RandomPlayer,
    TitForTwoTats,
};
pub use tournament::{TournamentSummary, TrustGame};

/// Payoff table for the trust game
/// Returns (delta_self, delta_opponent)
pub fn payoff(a: Action, b: Action) -> (i32, i32) {
    match (a, b) {
        (Action::Cooperate, Action::Cooperate) => (2, 2),
        (Action::Cooperate, Action::Cheat) => (-1, 3),
        (Action::Cheat, Action::Cooperate) => (3, -1),
        (Action::Cheat, Action::Cheat) => (0, 0),
    }
}
