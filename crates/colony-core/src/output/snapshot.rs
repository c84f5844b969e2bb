//! Snapshot Generation
//!
//! Read-only views of the colony for rendering and reporting layers.

use bevy_ecs::prelude::*;
use colony_events::{
    generate_snapshot_id, AgentSnapshot, ColonyMetrics, ColonySnapshot, GridSnapshot,
};

use crate::components::agent::{AntId, ForagingAgent};
use crate::components::environment::Environment;
use crate::systems::clock::SimulationState;

/// Generate a complete colony snapshot. Agents are listed in id order.
///
/// Takes the world by shared reference; snapshotting never mutates it.
pub fn generate_snapshot(world: &World, triggered_by: &str) -> ColonySnapshot {
    let tick = world.resource::<SimulationState>().tick;

    let mut agents: Vec<AgentSnapshot> = world
        .iter_entities()
        .filter_map(|entity| {
            let id = entity.get::<AntId>()?;
            let agent = entity.get::<ForagingAgent>()?;
            Some(AgentSnapshot::new(
                id.0,
                agent.position.x,
                agent.position.y,
                agent.heading,
                agent.carrying,
            ))
        })
        .collect();
    agents.sort_by_key(|a| a.agent_id);

    let env = world.resource::<Environment>();
    let (width, height) = (env.domain.width(), env.domain.height());

    let metrics = compute_metrics(env, &agents);

    ColonySnapshot {
        snapshot_id: generate_snapshot_id(tick),
        tick,
        triggered_by: triggered_by.to_string(),
        agents,
        pheromone: GridSnapshot::new(width, height, env.pheromone.cells().to_vec()),
        food: GridSnapshot::new(width, height, env.food.cells().to_vec()),
        nest: GridSnapshot::new(width, height, env.nest().cells().to_vec()),
        metrics,
    }
}

/// Colony-wide totals
fn compute_metrics(env: &Environment, agents: &[AgentSnapshot]) -> ColonyMetrics {
    ColonyMetrics {
        total_pheromone: env.pheromone.total(),
        remaining_food: env.food.total(),
        carrying_count: agents.iter().filter(|a| a.carrying).count() as u32,
        food_delivered: env.food_delivered(),
    }
}
