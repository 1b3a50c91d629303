//! Mutable simulation state owned by [`crate::OrbitEngine`].

use life_orbit_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Hold and selection are independent: a node can be selected for its
/// detail view without being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub held: Option<NodeId>,
    pub selected: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub config: SimulationConfig,
    /// Global orbit phase in `[0, 2π)`.
    pub global_angle: f32,
    /// Number of ticks run since construction.
    pub tick: u64,
    pub interaction: InteractionState,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config: config.sanitized(),
            global_angle: 0.0,
            tick: 0,
            interaction: InteractionState::default(),
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
