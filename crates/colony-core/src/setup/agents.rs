//! Agent Spawning
//!
//! Places the whole colony at the nest center with random headings.

use bevy_ecs::prelude::*;
use rand::Rng;
use std::f64::consts::PI;

use crate::components::agent::{AntId, ForagingAgent};
use crate::components::space::Position;
use crate::movement::MovementKernel;

/// Spawn `population` foragers at `nest_center`, ids `0..population`.
///
/// Headings are uniform over the full circle and the kernel is shared by
/// every agent.
pub fn spawn_colony<R: Rng + ?Sized>(
    world: &mut World,
    population: u32,
    nest_center: Position,
    speed: f64,
    kernel: MovementKernel,
    rng: &mut R,
) -> Vec<Entity> {
    let entities: Vec<Entity> = (0..population)
        .map(|id| {
            let heading = rng.gen_range(-PI..PI);
            world
                .spawn((AntId(id), ForagingAgent::new(nest_center, heading, speed, kernel)))
                .id()
        })
        .collect();

    tracing::debug!(
        population,
        mode = %kernel.mode(),
        x = nest_center.x,
        y = nest_center.y,
        "colony spawned"
    );

    entities
}
