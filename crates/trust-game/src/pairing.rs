//! Deterministic round-robin pairings
//!
//! Pairs are roster indices `(i, j)` with `i < j`, ordered
//! lexicographically: (0,1), (0,2), ..., (0,n-1), (1,2), ..., (n-2,n-1).
//! Every unordered pair appears exactly once.

/// Number of matches in a full round robin — n(n-1)/2, or 0 for n < 2
pub fn calculate_match_count(participant_count: usize) -> usize {
    if participant_count < 2 {
        return 0;
    }
    participant_count * (participant_count - 1) / 2
}

/// Every pairing of a round robin, in play order
pub fn all_pairings(participant_count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..participant_count)
        .flat_map(move |i| (i + 1..participant_count).map(move |j| (i, j)))
}
