//! Match history and pair-frequency counting

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Counts of consecutive move pairs `(first, second)` in a history.
///
/// Rows and columns follow [`Move::ALL`] order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairFrequencyTable {
    counts: [[u32; 3]; 3],
}

impl PairFrequencyTable {
    /// Build the table by scanning every consecutive pair of `history`
    pub fn from_history(history: &[Move]) -> Self {
        let mut table = Self::default();
        for pair in history.windows(2) {
            table.increment(pair[0], pair[1]);
        }
        table
    }

    pub fn increment(&mut self, first: Move, second: Move) {
        self.counts[first.index()][second.index()] += 1;
    }

    pub fn count(&self, first: Move, second: Move) -> u32 {
        self.counts[first.index()][second.index()]
    }

    /// Sum of all counts; `len - 1` for a non-empty history
    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    /// The most frequent follow-up to `first`.
    ///
    /// Candidates are scanned in [`Move::ALL`] order and only a strictly
    /// larger count replaces the current best, so ties go to the earlier
    /// move and an empty row yields Rock.
    pub fn most_frequent_after(&self, first: Move) -> Move {
        let row = &self.counts[first.index()];
        let mut best = Move::ALL[0];
        for m in Move::ALL.iter().skip(1) {
            if row[m.index()] > row[best.index()] {
                best = *m;
            }
        }
        best
    }
}

/// Both players' moves for one match.
///
/// Append-only. Detectors only ever see the slices.
///
/// Only the moves are serialized; the pair table is rebuilt on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordedMoves")]
pub struct MatchHistory {
    player: Vec<Move>,
    opponent: Vec<Move>,
    #[serde(skip)]
    player_pairs: PairFrequencyTable,
}

/// Serialized form of a [`MatchHistory`]
#[derive(Deserialize)]
struct RecordedMoves {
    player: Vec<Move>,
    opponent: Vec<Move>,
}

impl From<RecordedMoves> for MatchHistory {
    fn from(moves: RecordedMoves) -> Self {
        Self {
            player_pairs: PairFrequencyTable::from_history(&moves.player),
            player: moves.player,
            opponent: moves.opponent,
        }
    }
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the opponent's previous move. `None` on the first round.
    pub fn record_opponent_move(&mut self, mv: Option<Move>) {
        if let Some(mv) = mv {
            self.opponent.push(mv);
        }
    }

    /// Append our own move and hand it back
    pub fn record_own_move(&mut self, mv: Move) -> Move {
        if let Some(&last) = self.player.last() {
            self.player_pairs.increment(last, mv);
        }
        self.player.push(mv);
        mv
    }

    pub fn player(&self) -> &[Move] {
        &self.player
    }

    pub fn opponent(&self) -> &[Move] {
        &self.opponent
    }

    /// Pair counts over our own moves, kept up to date on every append
    pub fn player_pairs(&self) -> &PairFrequencyTable {
        &self.player_pairs
    }

    /// Rounds we have played so far
    pub fn rounds(&self) -> usize {
        self.player.len()
    }
}
