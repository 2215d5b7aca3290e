//! Opponent archetype detectors
//!
//! Every detector is a pure function of the two histories. Insufficient
//! history is never an error, the detector just reports `false`.
//!
//! - **Fixed cycle**: opponent replays a known sequence (`RRPPS` by default)
//! - **Markov counter**: opponent predicts our next move from the pair
//!   frequencies of our own history and plays its counter
//! - **Mirror counter**: opponent plays the counter to our second-to-last move

use crate::history::{MatchHistory, PairFrequencyTable};
use crate::moves::{ideal_response, Move};
use crate::strategy::Archetype;

/// Opponent history must be strictly longer than this before any
/// archetype is locked in.
pub const DETECTION_THRESHOLD: usize = 10;

/// Minimum own-move history before the markov detector will fire
const MARKOV_MIN_HISTORY: usize = 3;

/// Fixed-cycle detector.
///
/// Matches if the last `reference.len()` opponent moves equal the
/// reference, or if the reference appears at any of the first
/// `reference.len()` offsets of the last `2 * reference.len()` moves.
pub fn detect_fixed_cycle(opponent: &[Move], reference: &[Move]) -> bool {
    let n = reference.len();
    if n == 0 || opponent.len() < n {
        return false;
    }

    if &opponent[opponent.len() - n..] == reference {
        return true;
    }

    let window = 2 * n;
    if opponent.len() >= window {
        let recent = &opponent[opponent.len() - window..];
        return (0..n).any(|start| &recent[start..start + n] == reference);
    }

    false
}

/// Our most likely next move, judged by what we have most often played
/// after our current last move.
///
/// `None` with fewer than two own moves.
pub fn predict_own_move(player: &[Move]) -> Option<Move> {
    predict_own_move_with(&PairFrequencyTable::from_history(player), player)
}

/// What a markov-counter opponent expects to beat us with next
pub fn predict_markov_counter(player: &[Move]) -> Option<Move> {
    predict_own_move(player).map(ideal_response)
}

/// Markov-counter detector.
///
/// Matches if the opponent's last move is exactly the counter a pair-
/// frequency predictor over our own history would have chosen.
pub fn detect_markov_counter(player: &[Move], opponent: &[Move]) -> bool {
    markov_counter_with(&PairFrequencyTable::from_history(player), player, opponent)
}

/// Mirror-counter detector.
///
/// Matches if the opponent's last move beats our second-to-last move.
pub fn detect_mirror_counter(player: &[Move], opponent: &[Move]) -> bool {
    mirror_counter_after(DETECTION_THRESHOLD, player, opponent)
}

/// Run every detector in priority order and return the first match.
///
/// Mirror counter beats fixed cycle beats markov counter. `None` until
/// the opponent history is longer than `threshold`, or when nothing fires.
pub fn classify(history: &MatchHistory, reference: &[Move], threshold: usize) -> Option<Archetype> {
    let player = history.player();
    let opponent = history.opponent();

    if opponent.len() <= threshold {
        return None;
    }

    if mirror_counter_after(threshold, player, opponent) {
        Some(Archetype::MirrorCounter)
    } else if detect_fixed_cycle(opponent, reference) {
        Some(Archetype::FixedCycle)
    } else if markov_counter_with(history.player_pairs(), player, opponent) {
        Some(Archetype::MarkovCounter)
    } else {
        None
    }
}

/// Same as [`predict_own_move`] but reusing an already built table
pub(crate) fn predict_own_move_with(pairs: &PairFrequencyTable, player: &[Move]) -> Option<Move> {
    if player.len() < 2 {
        return None;
    }
    player.last().map(|last| pairs.most_frequent_after(*last))
}

fn markov_counter_with(pairs: &PairFrequencyTable, player: &[Move], opponent: &[Move]) -> bool {
    if player.len() < MARKOV_MIN_HISTORY {
        return false;
    }
    match (predict_own_move_with(pairs, player), opponent.last()) {
        (Some(predicted), Some(actual)) => ideal_response(predicted) == *actual,
        _ => false,
    }
}

fn mirror_counter_after(threshold: usize, player: &[Move], opponent: &[Move]) -> bool {
    if opponent.len() <= threshold || player.len() < 2 {
        return false;
    }
    match opponent.last() {
        Some(actual) => *actual == ideal_response(player[player.len() - 2]),
        None => false,
    }
}
