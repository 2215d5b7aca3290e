//! WASM bindings for playing the agent from the frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{AgentConfig, Archetype, CounterAgent, Move};

/// Agent handle owned by JavaScript, one per match
#[wasm_bindgen]
pub struct WasmCounterAgent {
    inner: CounterAgent,
}

#[wasm_bindgen]
impl WasmCounterAgent {
    /// Create an agent from a JSON `AgentConfig`. Missing fields take
    /// their defaults, so `"{}"` is valid.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmCounterAgent, JsError> {
        let config = AgentConfig::from_json(config_json)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        Ok(Self {
            inner: CounterAgent::new(config),
        })
    }

    /// Play one round
    ///
    /// # Arguments
    /// * `opponent_previous` - `"R"`, `"P"` or `"S"`, or nothing on the first round
    ///
    /// # Returns
    /// Our move as a single letter
    #[wasm_bindgen(js_name = nextMove)]
    pub fn next_move(&mut self, opponent_previous: Option<String>) -> Result<String, JsError> {
        let prev = opponent_previous
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Move>())
            .transpose()
            .map_err(|e| JsError::new(&format!("Invalid opponent move: {}", e)))?;

        Ok(self.inner.next_move(prev).to_string())
    }

    /// Currently locked archetype, or `undefined` while playing randomly
    #[wasm_bindgen(js_name = activeArchetype)]
    pub fn active_archetype(&self) -> Option<String> {
        self.inner.active_archetype().map(|a| format!("{:?}", a))
    }

    /// Start a new match with the same config
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Both histories as `{player: [...], opponent: [...]}`
    pub fn history(&self) -> Result<JsValue, JsError> {
        let history = HistoryView {
            player: self.inner.history().player().iter().map(|m| m.to_string()).collect(),
            opponent: self.inner.history().opponent().iter().map(|m| m.to_string()).collect(),
        };
        serde_wasm_bindgen::to_value(&history)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

#[derive(serde::Serialize)]
struct HistoryView {
    player: Vec<String>,
    opponent: Vec<String>,
}

#[derive(serde::Serialize)]
struct ArchetypeInfo {
    id: String,
    description: String,
}

/// Get every archetype the agent can detect, in priority order
#[wasm_bindgen(js_name = getArchetypes)]
pub fn get_archetypes() -> Result<JsValue, JsError> {
    let types: Vec<ArchetypeInfo> = Archetype::ALL
        .iter()
        .map(|a| ArchetypeInfo {
            id: format!("{:?}", a),
            description: a.describe().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Move that beats the given one, e.g. `"R"` -> `"P"`
#[wasm_bindgen(js_name = idealResponse)]
pub fn ideal_response(mv: &str) -> Result<String, JsError> {
    let mv: Move = mv
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid move: {}", e)))?;
    Ok(mv.ideal_response().to_string())
}
