//! Match execution engine

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::validate_rounds;
use crate::error::GameError;
use crate::payoff;
use crate::player::{Action, Player, PlayerId};
use crate::scorecard::{RoundUpdate, Scorecard};

/// A seated player taking part in one match
pub struct Contestant<'a> {
    pub id: PlayerId,
    pub player: &'a mut dyn Player,
}

impl<'a> Contestant<'a> {
    pub fn new(id: PlayerId, player: &'a mut dyn Player) -> Self {
        Self { id, player }
    }
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub action_a: Action,
    pub action_b: Action,
    pub delta_a: i32,
    pub delta_b: i32,
    pub cumulative_a: i64,
    pub cumulative_b: i64,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub rounds: Vec<RoundResult>,
    pub total_score_a: i64,
    pub total_score_b: i64,
    pub round_count: u32,
}

/// Play one round and record it on the scorecard.
///
/// Both players decide from the histories as they stood before this
/// round, so neither can react to the other's current choice.
pub fn resolve_round(
    a: &mut Contestant<'_>,
    b: &mut Contestant<'_>,
    history_a: &[Action],
    history_b: &[Action],
    scorecard: &mut Scorecard,
) -> Result<(Action, Action), GameError> {
    let action_a = a.player.choose_action(history_a, history_b);
    let action_b = b.player.choose_action(history_b, history_a);

    let (delta_a, delta_b) = payoff(action_a, action_b);
    scorecard.record_round(
        RoundUpdate { player: a.id, action: action_a, delta: delta_a },
        RoundUpdate { player: b.id, action: action_b, delta: delta_b },
    )?;

    Ok((action_a, action_b))
}

/// Final totals of a match played without per-round records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTotals {
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub total_score_a: i64,
    pub total_score_b: i64,
    pub round_count: u32,
}

/// Run a complete match of `rounds` rounds between two players
///
/// # Arguments
/// * `a` - First player
/// * `b` - Second player, must have a different id
/// * `rounds` - Number of rounds, must be positive
/// * `scorecard` - Shared scorecard both players are registered on
///
/// # Returns
/// Round-by-round details. On error nothing has been recorded.
pub fn play_match(
    a: Contestant<'_>,
    b: Contestant<'_>,
    rounds: u32,
    scorecard: &mut Scorecard,
) -> Result<MatchResult, GameError> {
    let mut results = Vec::new();
    let totals = run_rounds(a, b, rounds, scorecard, |round| results.push(round))?;

    Ok(MatchResult {
        player_a: totals.player_a,
        player_b: totals.player_b,
        rounds: results,
        total_score_a: totals.total_score_a,
        total_score_b: totals.total_score_b,
        round_count: totals.round_count,
    })
}

/// Same as [`play_match`], keeping only the totals
pub fn settle_match(
    a: Contestant<'_>,
    b: Contestant<'_>,
    rounds: u32,
    scorecard: &mut Scorecard,
) -> Result<MatchTotals, GameError> {
    run_rounds(a, b, rounds, scorecard, |_| {})
}

fn run_rounds<F>(
    mut a: Contestant<'_>,
    mut b: Contestant<'_>,
    rounds: u32,
    scorecard: &mut Scorecard,
    mut on_round: F,
) -> Result<MatchTotals, GameError>
where
    F: FnMut(RoundResult),
{
    validate_rounds(rounds)?;
    if a.id == b.id {
        return Err(GameError::SelfPairing(a.id));
    }
    scorecard.ensure_known(a.id)?;
    scorecard.ensure_known(b.id)?;

    let mut history_a: Vec<Action> = Vec::new();
    let mut history_b: Vec<Action> = Vec::new();
    let mut total_a = 0i64;
    let mut total_b = 0i64;

    for round in 0..rounds {
        let (action_a, action_b) = resolve_round(&mut a, &mut b, &history_a, &history_b, scorecard)?;

        let (delta_a, delta_b) = payoff(action_a, action_b);
        total_a += delta_a as i64;
        total_b += delta_b as i64;

        trace!(
            round,
            player_a = %a.id,
            player_b = %b.id,
            ?action_a,
            ?action_b,
            "round resolved"
        );

        on_round(RoundResult {
            round,
            action_a,
            action_b,
            delta_a,
            delta_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        history_a.push(action_a);
        history_b.push(action_b);
    }

    debug!(
        player_a = %a.id,
        name_a = a.player.name(),
        player_b = %b.id,
        name_b = b.player.name(),
        rounds,
        score_a = total_a,
        score_b = total_b,
        "match finished"
    );

    Ok(MatchTotals {
        player_a: a.id,
        player_b: b.id,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count: rounds,
    })
}
