//! Match-scoped adaptive agent
//!
//! A [`CounterAgent`] owns everything one match needs: both histories,
//! the strategy lock and the seeded RNG. Build a fresh one per match
//! (or call [`CounterAgent::reset`]); nothing is shared between agents.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::detect::{classify, DETECTION_THRESHOLD};
use crate::error::ConfigError;
use crate::history::MatchHistory;
use crate::moves::Move;
use crate::random::SeededRng;
use crate::strategy::{select_move, Archetype, StrategyState, DEFAULT_REFERENCE_CYCLE};

/// Agent configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Seed for the uniform random fallback
    pub seed: [u8; 32],
    /// Mixed into the seed so consecutive matches differ
    pub match_index: u32,
    /// Sequence the fixed-cycle archetype replays
    pub reference_cycle: Vec<Move>,
    /// Detection runs once the opponent has played more moves than this
    pub detection_threshold: usize,
    /// Mirror-counter move when we have not moved yet
    pub opening_move: Move,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: [0u8; 32],
            match_index: 0,
            reference_cycle: DEFAULT_REFERENCE_CYCLE.to_vec(),
            detection_threshold: DETECTION_THRESHOLD,
            opening_move: Move::Rock,
        }
    }
}

impl AgentConfig {
    /// Default config with the given RNG seed
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let len = self.reference_cycle.len();
        if len == 0 {
            return Err(ConfigError::EmptyReferenceCycle);
        }
        if len > self.detection_threshold {
            return Err(ConfigError::ReferenceCycleTooLong {
                len,
                window: self.detection_threshold,
            });
        }
        Ok(())
    }
}

/// Adaptive agent for a single match
#[derive(Clone, Debug)]
pub struct CounterAgent {
    config: AgentConfig,
    history: MatchHistory,
    strategy: StrategyState,
    rng: SeededRng,
    match_index: u32,
}

impl CounterAgent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = SeededRng::new(&config.seed, config.match_index);
        Self {
            match_index: config.match_index,
            config,
            history: MatchHistory::new(),
            strategy: StrategyState::new(),
            rng,
        }
    }

    /// Validate `config` before building the agent
    pub fn try_new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Play one round.
    ///
    /// `opponent_previous` is the opponent's move from the last round, or
    /// `None` on the first call of the match.
    pub fn next_move(&mut self, opponent_previous: Option<Move>) -> Move {
        self.history.record_opponent_move(opponent_previous);
        let round = self.history.rounds() + 1;

        if self.history.opponent().len() > self.config.detection_threshold {
            let detected = classify(
                &self.history,
                &self.config.reference_cycle,
                self.config.detection_threshold,
            );
            let previous = self.strategy.active;
            if self.strategy.update(detected) {
                debug!(round, from = ?previous, to = ?detected, "Strategy lock changed");
            }
        }

        let mv = select_move(
            &mut self.strategy,
            &self.history,
            &self.config.reference_cycle,
            self.config.opening_move,
            &mut self.rng,
        );
        trace!(round, strategy = ?self.strategy.active, %mv, "Selected move");

        self.history.record_own_move(mv)
    }

    /// Start a new match with the same configuration.
    ///
    /// Histories and the strategy lock are cleared and the RNG moves on
    /// to the next match index.
    pub fn reset(&mut self) {
        self.match_index = self.match_index.wrapping_add(1);
        self.history = MatchHistory::new();
        self.strategy = StrategyState::new();
        self.rng = SeededRng::new(&self.config.seed, self.match_index);
    }

    /// Currently locked archetype, `None` while playing randomly
    pub fn active_archetype(&self) -> Option<Archetype> {
        self.strategy.active
    }

    pub fn strategy(&self) -> &StrategyState {
        &self.strategy
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Rounds played in the current match
    pub fn round(&self) -> usize {
        self.history.rounds()
    }
}

impl Default for CounterAgent {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}
