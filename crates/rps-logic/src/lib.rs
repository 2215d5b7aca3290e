//! Adaptive Rock-Paper-Scissors agent
//!
//! Watches the opponent's moves, recognizes one of three known opponent
//! archetypes and plays the counter-strategy, falling back to uniform
//! random play when nothing is recognized.
//! This crate is compiled to:
//! - Native (for match runners and bots)
//! - WASM (for playing against the agent in the browser)

mod agent;
mod detect;
mod error;
mod history;
mod moves;
mod random;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use agent::{AgentConfig, CounterAgent};
pub use detect::{
    classify, detect_fixed_cycle, detect_markov_counter, detect_mirror_counter,
    predict_markov_counter, predict_own_move, DETECTION_THRESHOLD,
};
pub use error::{ConfigError, MoveParseError};
pub use history::{MatchHistory, PairFrequencyTable};
pub use moves::{ideal_response, parse_moves, Move, Outcome};
pub use random::SeededRng;
pub use strategy::{select_move, Archetype, StrategyState, DEFAULT_REFERENCE_CYCLE};
