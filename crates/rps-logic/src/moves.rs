//! Moves and the cyclic dominance relation

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveParseError;

/// A move in Rock-Paper-Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Result of one move against another, from the first player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Move {
    /// Every move, in the canonical order used for table keys,
    /// prediction candidates and uniform sampling.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position of this move in [`Move::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move that defeats `self`
    pub const fn ideal_response(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// True if `self` defeats `other`
    pub fn beats(self, other: Move) -> bool {
        other.ideal_response() == self
    }

    pub fn outcome(self, other: Move) -> Outcome {
        if self == other {
            Outcome::Draw
        } else if self.beats(other) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// Single-letter notation: `R`, `P` or `S`
    pub const fn to_char(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }
}

/// The move that defeats `m`.
///
/// Shared by detection and counter-play.
pub const fn ideal_response(m: Move) -> Move {
    m.ideal_response()
}

impl TryFrom<char> for Move {
    type Error = MoveParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Move::Rock),
            'P' => Ok(Move::Paper),
            'S' => Ok(Move::Scissors),
            _ => Err(MoveParseError::InvalidChar(c)),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MoveParseError::Empty),
            (Some(c), None) => Move::try_from(c),
            _ => match s.trim().to_ascii_lowercase().as_str() {
                "rock" => Ok(Move::Rock),
                "paper" => Ok(Move::Paper),
                "scissors" => Ok(Move::Scissors),
                _ => Err(MoveParseError::InvalidName(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a compact move sequence such as `"RRPPS"`.
///
/// Whitespace is skipped.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveParseError> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(Move::try_from)
        .collect()
}
