//! Reference strategies
//!
//! Apart from [`RandomPlayer`], every strategy here decides from the
//! current match's history alone, so one instance can be reused across all
//! of its tournament matches.

use crate::payoff;
use crate::player::{Action, Player};
use crate::random::{ActionSource, SeededRng};

/// Always cooperate, never cheat.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Player for AlwaysCooperate {
    fn choose_action(&mut self, _own: &[Action], _opponent: &[Action]) -> Action {
        Action::Cooperate
    }

    fn name(&self) -> &str {
        "always-cooperate"
    }
}

/// Always cheat, never cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCheat;

impl Player for AlwaysCheat {
    fn choose_action(&mut self, _own: &[Action], _opponent: &[Action]) -> Action {
        Action::Cheat
    }

    fn name(&self) -> &str {
        "always-cheat"
    }
}

/// Copy opponent's last action. Start with cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Copycat;

impl Player for Copycat {
    fn choose_action(&mut self, _own: &[Action], opponent: &[Action]) -> Action {
        copy_last(opponent)
    }

    fn name(&self) -> &str {
        "copycat"
    }
}

/// Cooperate until the opponent cheats once, then always cheat.
#[derive(Clone, Copy, Debug, Default)]
pub struct Grudge;

impl Player for Grudge {
    fn choose_action(&mut self, _own: &[Action], opponent: &[Action]) -> Action {
        if opponent.contains(&Action::Cheat) {
            Action::Cheat
        } else {
            Action::Cooperate
        }
    }

    fn name(&self) -> &str {
        "grudge"
    }
}

/// Opening moves played by [`Detective`]
const DETECTIVE_OPENING: [Action; 4] = [
    Action::Cooperate,
    Action::Cheat,
    Action::Cooperate,
    Action::Cooperate,
];

/// Plays a fixed four-round opening. If the opponent cheated at any point it
/// turns into a copycat, otherwise it exploits them by cheating for the
/// rest of the match.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detective;

impl Player for Detective {
    fn choose_action(&mut self, own: &[Action], opponent: &[Action]) -> Action {
        if let Some(action) = DETECTIVE_OPENING.get(own.len()) {
            return *action;
        }

        if opponent.contains(&Action::Cheat) {
            copy_last(opponent)
        } else {
            Action::Cheat
        }
    }

    fn name(&self) -> &str {
        "detective"
    }
}

/// Cheat on every third round (3rd, 6th, 9th, ...), cooperate otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheatEveryThird;

impl Player for CheatEveryThird {
    fn choose_action(&mut self, own: &[Action], _opponent: &[Action]) -> Action {
        if (own.len() + 1) % 3 == 0 {
            Action::Cheat
        } else {
            Action::Cooperate
        }
    }

    fn name(&self) -> &str {
        "cheat-every-third"
    }
}

/// Win-stay, lose-switch.
/// - Last payoff was good (2+ points): repeat the action
/// - Last payoff was bad (<2 points): switch
#[derive(Clone, Copy, Debug, Default)]
pub struct Pavlov;

impl Player for Pavlov {
    fn choose_action(&mut self, own: &[Action], opponent: &[Action]) -> Action {
        let (Some(my_last), Some(opp_last)) = (own.last(), opponent.last()) else {
            return Action::Cooperate;
        };

        let (my_score, _) = payoff(*my_last, *opp_last);
        if my_score >= 2 {
            *my_last
        } else {
            my_last.opposite()
        }
    }

    fn name(&self) -> &str {
        "pavlov"
    }
}

/// Only cheat if the opponent cheated twice in a row.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTwoTats;

impl Player for TitForTwoTats {
    fn choose_action(&mut self, _own: &[Action], opponent: &[Action]) -> Action {
        match opponent {
            [.., Action::Cheat, Action::Cheat] => Action::Cheat,
            _ => Action::Cooperate,
        }
    }

    fn name(&self) -> &str {
        "tit-for-two-tats"
    }
}

/// Picks uniformly between the two actions every round.
///
/// The source of randomness is injected so replays and tests stay
/// reproducible.
#[derive(Clone, Debug)]
pub struct RandomPlayer<S> {
    source: S,
}

impl<S: ActionSource> RandomPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl RandomPlayer<SeededRng> {
    /// Random player backed by a [`SeededRng`]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRng::new(seed, 0))
    }
}

impl<S: ActionSource> Player for RandomPlayer<S> {
    fn choose_action(&mut self, _own: &[Action], _opponent: &[Action]) -> Action {
        self.source.choose(&Action::ALL)
    }

    fn name(&self) -> &str {
        "random"
    }
}

fn copy_last(opponent: &[Action]) -> Action {
    opponent.last().copied().unwrap_or(Action::Cooperate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Action::{Cheat, Cooperate};

    /// Source that always returns the same action and counts its calls
    struct Scripted {
        action: Action,
        calls: usize,
    }

    impl ActionSource for Scripted {
        fn choose(&mut self, options: &[Action]) -> Action {
            assert_eq!(options, &Action::ALL);
            self.calls += 1;
            self.action
        }
    }

    #[test]
    fn test_always_cooperate() {
        let mut p = AlwaysCooperate;
        assert_eq!(p.choose_action(&[], &[]), Cooperate);
        assert_eq!(p.choose_action(&[Cooperate], &[Cheat]), Cooperate);
    }

    #[test]
    fn test_always_cheat() {
        let mut p = AlwaysCheat;
        assert_eq!(p.choose_action(&[], &[]), Cheat);
        assert_eq!(p.choose_action(&[Cheat], &[Cooperate]), Cheat);
    }

    #[test]
    fn test_copycat_first_move() {
        assert_eq!(Copycat.choose_action(&[], &[]), Cooperate);
    }

    #[test]
    fn test_copycat_copies() {
        let mut p = Copycat;
        assert_eq!(p.choose_action(&[Cooperate], &[Cooperate]), Cooperate);
        assert_eq!(p.choose_action(&[Cooperate], &[Cheat]), Cheat);
        assert_eq!(p.choose_action(&[Cooperate, Cheat], &[Cheat, Cooperate]), Cooperate);
    }

    #[test]
    fn test_grudge() {
        let mut p = Grudge;

        assert_eq!(p.choose_action(&[], &[]), Cooperate);
        assert_eq!(p.choose_action(&[Cooperate, Cooperate], &[Cooperate, Cooperate]), Cooperate);

        // Never forgives, even after the opponent goes back to cooperating
        assert_eq!(p.choose_action(&[Cooperate, Cooperate], &[Cheat, Cooperate]), Cheat);
    }

    #[test]
    fn test_detective_opening() {
        let mut p = Detective;
        let opponent = [Cooperate; 4];
        let mut own = Vec::new();

        for round in 0..4 {
            let a = p.choose_action(&own, &opponent[..round]);
            own.push(a);
        }
        assert_eq!(own, DETECTIVE_OPENING);
    }

    #[test]
    fn test_detective_exploits_pushover() {
        let mut p = Detective;
        let own = DETECTIVE_OPENING;
        assert_eq!(p.choose_action(&own, &[Cooperate; 4]), Cheat);
    }

    #[test]
    fn test_detective_copies_after_being_cheated() {
        let mut p = Detective;
        let own = DETECTIVE_OPENING;
        assert_eq!(p.choose_action(&own, &[Cooperate, Cooperate, Cheat, Cooperate]), Cooperate);
        assert_eq!(p.choose_action(&own, &[Cooperate, Cooperate, Cooperate, Cheat]), Cheat);
    }

    #[test]
    fn test_cheat_every_third() {
        let mut p = CheatEveryThird;
        let mut own = Vec::new();
        for _ in 0..9 {
            let a = p.choose_action(&own, &[]);
            own.push(a);
        }
        assert_eq!(
            own,
            vec![Cooperate, Cooperate, Cheat, Cooperate, Cooperate, Cheat, Cooperate, Cooperate, Cheat]
        );
    }

    #[test]
    fn test_pavlov_win_stay() {
        let mut p = Pavlov;

        // Both cooperated (2 points) - stay with cooperate
        assert_eq!(p.choose_action(&[Cooperate], &[Cooperate]), Cooperate);

        // We cheated, they cooperated (3 points) - stay with cheat
        assert_eq!(p.choose_action(&[Cheat], &[Cooperate]), Cheat);
    }

    #[test]
    fn test_pavlov_lose_switch() {
        let mut p = Pavlov;

        // We cooperated, they cheated (-1 point) - switch to cheat
        assert_eq!(p.choose_action(&[Cooperate], &[Cheat]), Cheat);

        // Both cheated (0 points) - switch to cooperate
        assert_eq!(p.choose_action(&[Cheat], &[Cheat]), Cooperate);
    }

    #[test]
    fn test_pavlov_first_move() {
        assert_eq!(Pavlov.choose_action(&[], &[]), Cooperate);
    }

    #[test]
    fn test_tit_for_two_tats() {
        let mut p = TitForTwoTats;

        assert_eq!(p.choose_action(&[], &[]), Cooperate);
        assert_eq!(p.choose_action(&[], &[Cheat]), Cooperate);

        // Single cheat - forgive
        assert_eq!(p.choose_action(&[], &[Cooperate, Cheat]), Cooperate);

        // Two consecutive cheats - retaliate
        assert_eq!(p.choose_action(&[], &[Cheat, Cheat]), Cheat);
        assert_eq!(p.choose_action(&[], &[Cheat, Cheat, Cooperate]), Cooperate);
    }

    #[test]
    fn test_random_player_uses_injected_source() {
        let mut p = RandomPlayer::new(Scripted { action: Cheat, calls: 0 });

        for _ in 0..5 {
            assert_eq!(p.choose_action(&[], &[]), Cheat);
        }
        assert_eq!(p.source().calls, 5);
    }

    #[test]
    fn test_seeded_random_player_is_reproducible() {
        let mut a = RandomPlayer::seeded(99);
        let mut b = RandomPlayer::seeded(99);

        let moves_a: Vec<_> = (0..50).map(|_| a.choose_action(&[], &[])).collect();
        let moves_b: Vec<_> = (0..50).map(|_| b.choose_action(&[], &[])).collect();

        assert_eq!(moves_a, moves_b);
        assert!(moves_a.contains(&Cooperate));
        assert!(moves_a.contains(&Cheat));
    }

    #[test]
    fn test_names_are_distinct() {
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(AlwaysCooperate),
            Box::new(AlwaysCheat),
            Box::new(Copycat),
            Box::new(Grudge),
            Box::new(Detective),
            Box::new(CheatEveryThird),
            Box::new(Pavlov),
            Box::new(TitForTwoTats),
            Box::new(RandomPlayer::seeded(1)),
        ];
        let mut names: Vec<_> = players.iter().map(|p| p.name().to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), players.len());
    }
}
