//! Ant Foraging Simulation Library
//!
//! Stigmergic foraging on a toroidal grid: agents search for food, carry it
//! home while laying pheromone, and follow the decaying trail others leave.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod error;
pub mod movement;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::{FoodSource, SearchMode, SimConfig};
pub use error::SimError;
pub use movement::{MovementKernel, TurningSampler};
pub use simulation::Simulation;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
