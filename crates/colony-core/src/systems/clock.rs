//! Simulation Clock
//!
//! Tick counter advanced at the end of every scheduled tick.

use bevy_ecs::prelude::*;

/// Resource: global simulation progress
#[derive(Resource, Debug, Clone, Default)]
pub struct SimulationState {
    /// Number of completed ticks
    pub tick: u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// System: mark the current tick as complete
pub fn advance_tick(mut state: ResMut<SimulationState>) {
    state.advance();
}
