//! Strategy state and counter-play

use serde::{Deserialize, Serialize};

use crate::detect::predict_own_move_with;
use crate::history::MatchHistory;
use crate::moves::{ideal_response, Move};
use crate::random::SeededRng;

/// The sequence the fixed-cycle archetype replays
pub const DEFAULT_REFERENCE_CYCLE: [Move; 5] = [
    Move::Rock,
    Move::Rock,
    Move::Paper,
    Move::Paper,
    Move::Scissors,
];

/// A recognizable opponent behavior the agent knows how to exploit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Plays the counter to our second-to-last move.
    MirrorCounter,
    /// Replays a fixed reference sequence.
    FixedCycle,
    /// Predicts our next move from our own pair frequencies and counters it.
    MarkovCounter,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::MirrorCounter,
        Archetype::FixedCycle,
        Archetype::MarkovCounter,
    ];

    /// Human-readable description (used by the WASM module)
    pub fn describe(self) -> &'static str {
        match self {
            Archetype::MirrorCounter => "Answers our previous move with the move that beats it.",
            Archetype::FixedCycle => "Repeats a fixed sequence of moves.",
            Archetype::MarkovCounter => {
                "Predicts our next move from our own move-pair frequencies, then counters it."
            }
        }
    }
}

/// Which counter-strategy currently governs move selection.
///
/// `active == None` is the uniform random default. The cycle cursor is
/// never reset within a match, even if the lock moves away from the
/// fixed-cycle archetype and back again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyState {
    pub active: Option<Archetype>,
    pub cycle_cursor: usize,
}

impl StrategyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this round's detection result.
    ///
    /// Returns true if the active strategy changed.
    pub fn update(&mut self, detected: Option<Archetype>) -> bool {
        let changed = self.active != detected;
        self.active = detected;
        changed
    }
}

/// Choose our next move for the active strategy.
///
/// Does not record the move; the caller appends it to the history.
///
/// # Arguments
/// * `state` - Current strategy, the cycle cursor advances in place
/// * `history` - Both players' moves so far
/// * `reference` - The fixed-cycle archetype's sequence
/// * `opening` - Fallback for the mirror counter before we have moved
/// * `rng` - Source for the uniform fallbacks
pub fn select_move(
    state: &mut StrategyState,
    history: &MatchHistory,
    reference: &[Move],
    opening: Move,
    rng: &mut SeededRng,
) -> Move {
    match state.active {
        Some(Archetype::MirrorCounter) => play_mirror_counter(history, opening),
        Some(Archetype::FixedCycle) => play_fixed_cycle(&mut state.cycle_cursor, reference, rng),
        Some(Archetype::MarkovCounter) => play_markov_counter(history, rng),
        None => rng.next_move(),
    }
}

/// The opponent will answer our last move with its counter, so play the
/// counter to that.
fn play_mirror_counter(history: &MatchHistory, opening: Move) -> Move {
    match history.player().last() {
        Some(last) => ideal_response(ideal_response(*last)),
        None => opening,
    }
}

/// Beat the reference move at the cursor, then advance it
fn play_fixed_cycle(cursor: &mut usize, reference: &[Move], rng: &mut SeededRng) -> Move {
    if reference.is_empty() {
        return rng.next_move();
    }
    let predicted = reference[*cursor % reference.len()];
    *cursor = (*cursor + 1) % reference.len();
    ideal_response(predicted)
}

/// Predict the move the opponent expects us to play, then beat its
/// counter. Random until we have two moves of our own.
fn play_markov_counter(history: &MatchHistory, rng: &mut SeededRng) -> Move {
    match predict_own_move_with(history.player_pairs(), history.player()) {
        Some(predicted) => ideal_response(ideal_response(predicted)),
        None => rng.next_move(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_moves;

    fn make_rng() -> SeededRng {
        SeededRng::new(&[42u8; 32], 0)
    }

    fn own_history(s: &str) -> MatchHistory {
        let mut h = MatchHistory::new();
        for m in parse_moves(s).unwrap() {
            h.record_own_move(m);
        }
        h
    }

    /// Select with the default reference cycle and a Rock opening
    fn pick(state: &mut StrategyState, history: &MatchHistory, rng: &mut SeededRng) -> Move {
        select_move(state, history, &DEFAULT_REFERENCE_CYCLE, Move::Rock, rng)
    }

    fn locked(archetype: Archetype) -> StrategyState {
        StrategyState {
            active: Some(archetype),
            cycle_cursor: 0,
        }
    }

    #[test]
    fn test_update_reports_changes() {
        let mut state = StrategyState::new();
        assert!(!state.update(None));
        assert!(state.update(Some(Archetype::FixedCycle)));
        assert!(!state.update(Some(Archetype::FixedCycle)));
        assert!(state.update(None));
        assert_eq!(state.active, None);
    }

    #[test]
    fn test_update_keeps_cursor() {
        let mut state = StrategyState {
            active: Some(Archetype::FixedCycle),
            cycle_cursor: 3,
        };
        state.update(Some(Archetype::MirrorCounter));
        state.update(Some(Archetype::FixedCycle));
        assert_eq!(state.cycle_cursor, 3);
    }

    #[test]
    fn test_mirror_counter_beats_expected_answer() {
        let mut state = locked(Archetype::MirrorCounter);
        let mut rng = make_rng();

        // We played R, opponent will answer P, we play S
        let history = own_history("SR");
        let m = pick(&mut state, &history, &mut rng);
        assert_eq!(m, Move::Scissors);
    }

    #[test]
    fn test_mirror_counter_opening_fallback() {
        let mut state = locked(Archetype::MirrorCounter);
        let mut rng = make_rng();
        let history = MatchHistory::new();

        let m = select_move(
            &mut state,
            &history,
            &DEFAULT_REFERENCE_CYCLE,
            Move::Paper,
            &mut rng,
        );
        assert_eq!(m, Move::Paper);
    }

    #[test]
    fn test_fixed_cycle_counters_in_order_and_wraps() {
        let mut state = locked(Archetype::FixedCycle);
        let mut rng = make_rng();
        let history = MatchHistory::new();

        let played: Vec<Move> = (0..10)
            .map(|_| pick(&mut state, &history, &mut rng))
            .collect();

        let expected: Vec<Move> = DEFAULT_REFERENCE_CYCLE
            .iter()
            .chain(DEFAULT_REFERENCE_CYCLE.iter())
            .map(|m| ideal_response(*m))
            .collect();

        assert_eq!(played, expected);
        assert_eq!(state.cycle_cursor, 0);
    }

    #[test]
    fn test_fixed_cycle_empty_reference_falls_back() {
        let mut state = locked(Archetype::FixedCycle);
        let mut rng = make_rng();
        let history = MatchHistory::new();

        // Must not panic on the modulo
        let _ = select_move(&mut state, &history, &[], Move::Rock, &mut rng);
        assert_eq!(state.cycle_cursor, 0);
    }

    #[test]
    fn test_markov_counter_move() {
        let mut state = locked(Archetype::MarkovCounter);
        let mut rng = make_rng();

        // After R we mostly played P. Opponent expects P, plays S; we play R.
        let history = own_history("RPRSRPR");
        let m = pick(&mut state, &history, &mut rng);
        assert_eq!(m, Move::Rock);
    }

    #[test]
    fn test_non_random_branches_are_deterministic() {
        let history = own_history("RPRSRPRSSP");

        for archetype in Archetype::ALL {
            let mut first = locked(archetype);
            let mut second = locked(archetype);
            let mut rng1 = SeededRng::from_u64(1);
            let mut rng2 = SeededRng::from_u64(999);

            for _ in 0..7 {
                let a = pick(&mut first, &history, &mut rng1);
                let b = pick(&mut second, &history, &mut rng2);
                assert_eq!(a, b, "{:?} depended on the rng", archetype);
            }
        }
    }

    #[test]
    fn test_default_is_seeded_random() {
        let history = MatchHistory::new();
        let mut state1 = StrategyState::new();
        let mut state2 = StrategyState::new();
        let mut rng1 = make_rng();
        let mut rng2 = make_rng();

        let a: Vec<_> = (0..20)
            .map(|_| pick(&mut state1, &history, &mut rng1))
            .collect();
        let b: Vec<_> = (0..20)
            .map(|_| pick(&mut state2, &history, &mut rng2))
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_describe_is_non_empty() {
        for archetype in Archetype::ALL {
            assert!(!archetype.describe().is_empty());
        }
    }
}
