//! Round-robin tournaments over a roster of players

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{validate_rounds, TournamentConfig};
use crate::error::GameError;
use crate::game::{play_match, settle_match, Contestant, MatchResult};
use crate::pairing::{all_pairings, calculate_match_count};
use crate::player::{Player, PlayerId};
use crate::scorecard::{ScoreEntry, Scorecard};

/// Outcome of a full round robin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub match_count: usize,
    pub rounds_per_match: u32,
    pub scores: BTreeMap<PlayerId, ScoreEntry>,
}

impl TournamentSummary {
    /// Players ordered by final score, best first. Ties keep roster order.
    pub fn standings(&self) -> Vec<(PlayerId, i64)> {
        let mut table: Vec<_> = self.scores.iter().map(|(id, e)| (*id, e.score)).collect();
        table.sort_by(|a, b| b.1.cmp(&a.1));
        table
    }
}

/// A roster of players sharing one scorecard.
///
/// Players are seated in the order given and get ids `#0`, `#1`, ... in
/// that order. The game owns every player, so the same instance can never
/// be seated twice.
pub struct TrustGame {
    players: Vec<Box<dyn Player>>,
    scorecard: Scorecard,
    config: TournamentConfig,
}

impl TrustGame {
    /// Seat a roster of at least two players with the default config
    pub fn new(players: Vec<Box<dyn Player>>) -> Result<Self, GameError> {
        Self::with_config(players, TournamentConfig::default())
    }

    pub fn with_config(players: Vec<Box<dyn Player>>, config: TournamentConfig) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::RosterTooSmall(players.len()));
        }
        config.validate()?;

        let mut scorecard = Scorecard::new();
        scorecard.register((0..players.len()).map(|i| PlayerId(i as u32)));

        Ok(Self { players, scorecard, config })
    }

    /// Seat exactly two players
    pub fn pair(a: Box<dyn Player>, b: Box<dyn Player>) -> Self {
        let mut scorecard = Scorecard::new();
        scorecard.register([PlayerId(0), PlayerId(1)]);

        Self {
            players: vec![a, b],
            scorecard,
            config: TournamentConfig::default(),
        }
    }

    /// Ids of every seated player, in roster order
    pub fn players(&self) -> Vec<PlayerId> {
        (0..self.players.len()).map(|i| PlayerId(i as u32)).collect()
    }

    pub fn player(&self, id: PlayerId) -> Result<&dyn Player, GameError> {
        self.players
            .get(id.index())
            .map(|p| &**p)
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    /// Snapshot of the requested players' scores and actions
    pub fn get_scorecard(&self, players: &[PlayerId]) -> Result<BTreeMap<PlayerId, ScoreEntry>, GameError> {
        self.scorecard.get_scorecard(players)
    }

    /// Play `rounds` rounds between two seated players
    pub fn play_match(&mut self, a: PlayerId, b: PlayerId, rounds: u32) -> Result<MatchResult, GameError> {
        let (a, b) = contestants(&mut self.players, a, b)?;
        play_match(a, b, rounds, &mut self.scorecard)
    }

    /// Round robin with the configured number of rounds per match
    pub fn play_tournament(&mut self) -> Result<TournamentSummary, GameError> {
        let rounds = self.config.rounds_per_match;
        self.play_tournament_with(rounds)
    }

    /// Every unordered pair of seated players meets exactly once, in
    /// roster order, all scoring onto the same scorecard.
    pub fn play_tournament_with(&mut self, rounds_per_match: u32) -> Result<TournamentSummary, GameError> {
        validate_rounds(rounds_per_match)?;
        let n = self.players.len();
        if n < 2 {
            return Err(GameError::RosterTooSmall(n));
        }

        let match_count = calculate_match_count(n);
        info!(players = n, matches = match_count, rounds_per_match, "tournament started");

        for (i, j) in all_pairings(n) {
            let (a, b) = contestants(&mut self.players, PlayerId(i as u32), PlayerId(j as u32))?;
            settle_match(a, b, rounds_per_match, &mut self.scorecard)?;
        }

        let summary = TournamentSummary {
            match_count,
            rounds_per_match,
            scores: self.scorecard.snapshot(),
        };

        if let Some((leader, score)) = summary.standings().first() {
            info!(%leader, score, "tournament finished");
        }

        Ok(summary)
    }
}

/// Borrow two different seats at once
fn contestants(
    players: &mut [Box<dyn Player>],
    a: PlayerId,
    b: PlayerId,
) -> Result<(Contestant<'_>, Contestant<'_>), GameError> {
    // split_at_mut below needs two distinct seats
    if a == b {
        return Err(GameError::SelfPairing(a));
    }
    let len = players.len();
    for id in [a, b] {
        if id.index() >= len {
            return Err(GameError::UnknownPlayer(id));
        }
    }

    let (i, j) = (a.index(), b.index());
    let (player_a, player_b) = if i < j {
        let (left, right) = players.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(i);
        (&mut right[0], &mut left[j])
    };

    Ok((Contestant::new(a, &mut **player_a), Contestant::new(b, &mut **player_b)))
}
