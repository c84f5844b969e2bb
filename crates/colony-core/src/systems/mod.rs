//! ECS Systems
//!
//! One tick runs `step_foragers`, then `update_pheromone`, then `advance_tick`.

pub mod clock;
pub mod foraging;
pub mod pheromone;

pub use clock::{advance_tick, SimulationState};
pub use foraging::{step_foragers, TickActions};
pub use pheromone::update_pheromone;
