//! Environment Resource
//!
//! The shared state every forager reads and writes during a tick: the
//! domain, the three grid fields and the foraging tunables. Agents receive
//! it by mutable reference; there is no global field state.

use bevy_ecs::prelude::*;

use super::fields::{FoodField, NestField, PheromoneField};
use super::space::{CellIndex, Position, SpatialDomain};
use crate::config::SimConfig;

/// Tunables governing deposits, trail detection and the field update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Pheromone laid per homing tick
    pub deposit_amount: f64,
    /// Trail is followed when the current cell exceeds this level
    pub follow_threshold: f64,
    /// Diffusion blend fraction in [0, 1]
    pub diffusion_coefficient: f64,
    /// Per-tick survival fraction in [0, 1]
    pub evaporation_factor: f64,
}

impl FieldParams {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            deposit_amount: config.deposit_amount,
            follow_threshold: config.follow_threshold,
            diffusion_coefficient: config.diffusion_coefficient(),
            evaporation_factor: config.evaporation_factor(),
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// Resource: shared foraging environment
#[derive(Resource, Debug, Clone)]
pub struct Environment {
    pub domain: SpatialDomain,
    pub pheromone: PheromoneField,
    pub food: FoodField,
    nest: NestField,
    nest_center: Position,
    params: FieldParams,
    food_delivered: u64,
}

impl Environment {
    /// Empty pheromone and food fields around a fixed nest.
    pub fn new(domain: SpatialDomain, nest: NestField, nest_center: Position, params: FieldParams) -> Self {
        Self {
            domain,
            pheromone: PheromoneField::new(domain),
            food: FoodField::new(domain),
            nest,
            nest_center,
            params,
            food_delivered: 0,
        }
    }

    pub fn nest(&self) -> &NestField {
        &self.nest
    }

    pub fn nest_center(&self) -> Position {
        self.nest_center
    }

    pub fn is_nest(&self, cell: CellIndex) -> bool {
        self.nest.contains(cell)
    }

    pub fn deposit_amount(&self) -> f64 {
        self.params.deposit_amount
    }

    pub fn follow_threshold(&self) -> f64 {
        self.params.follow_threshold
    }

    /// Units of food brought back to the nest so far.
    pub fn food_delivered(&self) -> u64 {
        self.food_delivered
    }

    pub fn record_delivery(&mut self) {
        self.food_delivered += 1;
    }

    /// Diffuse then evaporate the pheromone field once.
    pub fn update_pheromone(&mut self) {
        self.pheromone.update(
            self.params.diffusion_coefficient,
            self.params.evaporation_factor,
        );
    }
}
