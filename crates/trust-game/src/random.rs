//! Seeded pseudo-random number generator
//!
//! Randomized players draw from an [`ActionSource`] handed to them at
//! construction, so a test can swap in a scripted source and a replay can
//! reuse the same seed.

use crate::player::Action;

/// Something a randomized player can draw its next action from.
pub trait ActionSource {
    /// Pick one of `options`. `options` is never empty.
    fn choose(&mut self, options: &[Action]) -> Action;
}

/// Seeded random number generator (xorshift64*)
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a seed and a stream index
    pub fn new(seed: u64, stream: u32) -> Self {
        // Zero is a fixed point of xorshift, keep the state odd
        let mut state = seed.wrapping_mul(0x9e3779b97f4a7c15) | 1;
        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
        if state == 0 {
            state = 0x2545f4914f6cdd1d;
        }

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl ActionSource for SeededRng {
    fn choose(&mut self, options: &[Action]) -> Action {
        let idx = self.next_range(options.len() as u32) as usize;
        options.get(idx).copied().unwrap_or(Action::Cooperate)
    }
}
