//! Forager Components
//!
//! The per-agent state and the foraging decision each agent makes once per
//! tick.

use bevy_ecs::prelude::*;
use colony_events::ActionKind;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI};

use super::environment::Environment;
use super::fields::PheromoneField;
use super::space::{normalize_heading, Position, SpatialDomain};
use crate::movement::MovementKernel;

/// Angle between the ahead sensor and each side sensor when following a trail
pub const UPHILL_SENSE_ANGLE: f64 = FRAC_PI_4;

/// Distance ahead at which the trail is sensed
pub const UPHILL_SENSE_DISTANCE: f64 = 1.0;

/// Stable identifier for a forager; also its position in spawn order
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AntId(pub u32);

/// Component: a single forager
#[derive(Component, Debug, Clone)]
pub struct ForagingAgent {
    /// Always inside the domain
    pub position: Position,
    /// Radians, kept in (-pi, pi]
    pub heading: f64,
    /// Step length for homing, trail following and random-walk search
    pub speed: f64,
    pub kernel: MovementKernel,
    pub carrying: bool,
}

impl ForagingAgent {
    pub fn new(position: Position, heading: f64, speed: f64, kernel: MovementKernel) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
            speed,
            kernel,
            carrying: false,
        }
    }

    /// Run exactly one branch of the foraging decision, in priority order:
    /// return to nest, pick up food, follow the trail, search.
    pub fn step<R: Rng + ?Sized>(&mut self, env: &mut Environment, rng: &mut R) -> ActionKind {
        if self.carrying {
            return self.return_to_nest(env);
        }

        let cell = env.domain.cell_index(self.position);

        if env.food.take_one(cell) {
            self.carrying = true;
            tracing::trace!(x = cell.x, y = cell.y, "food picked up");
            return ActionKind::Pickup;
        }

        if env.pheromone.get(cell) > env.follow_threshold() {
            self.uphill(&env.pheromone, &env.domain);
            self.advance(&env.domain, self.speed);
            return ActionKind::FollowTrail;
        }

        self.search(&env.domain, rng);
        ActionKind::Search
    }

    /// Homing. On a nest cell the food is dropped and the agent turns about
    /// without moving; elsewhere it aims at the nest center, marks its
    /// current cell and steps forward.
    pub fn return_to_nest(&mut self, env: &mut Environment) -> ActionKind {
        let cell = env.domain.cell_index(self.position);

        if env.is_nest(cell) {
            self.carrying = false;
            self.turn_by(PI);
            env.record_delivery();
            tracing::trace!(x = self.position.x, y = self.position.y, "food delivered");
            return ActionKind::Deliver;
        }

        let (dx, dy) = self.position.vector_to(&env.nest_center());
        self.heading = normalize_heading(dy.atan2(dx));

        env.pheromone.deposit(cell, env.deposit_amount());
        self.advance(&env.domain, self.speed);
        ActionKind::ReturnToNest
    }

    /// Sample `field` one unit ahead at 0 and +/-45 degrees and turn 45 degrees
    /// toward the stronger side if either side beats the ahead sensor.
    /// Equal sides resolve to the negative turn. Returns the turn applied.
    pub fn uphill(&mut self, field: &PheromoneField, domain: &SpatialDomain) -> Option<f64> {
        let ahead = self.sense(field, domain, 0.0);
        let plus = self.sense(field, domain, UPHILL_SENSE_ANGLE);
        let minus = self.sense(field, domain, -UPHILL_SENSE_ANGLE);

        if plus > ahead || minus > ahead {
            let turn = if plus > minus {
                UPHILL_SENSE_ANGLE
            } else {
                -UPHILL_SENSE_ANGLE
            };
            self.turn_by(turn);
            Some(turn)
        } else {
            None
        }
    }

    /// One uninformed search step: move along the heading, then turn.
    pub fn search<R: Rng + ?Sized>(&mut self, domain: &SpatialDomain, rng: &mut R) {
        let distance = self.kernel.step_length(self.speed, rng);
        self.advance(domain, distance);
        let turn = self.kernel.turn(rng);
        self.turn_by(turn);
    }

    /// Translate `distance` along the current heading with toroidal wrap.
    pub fn advance(&mut self, domain: &SpatialDomain, distance: f64) {
        self.position = domain.project(self.position, self.heading, distance);
    }

    pub fn turn_by(&mut self, angle: f64) {
        self.heading = normalize_heading(self.heading + angle);
    }

    fn sense(&self, field: &PheromoneField, domain: &SpatialDomain, offset: f64) -> f64 {
        let point = domain.project(self.position, self.heading + offset, UPHILL_SENSE_DISTANCE);
        field.sample(point)
    }
}
