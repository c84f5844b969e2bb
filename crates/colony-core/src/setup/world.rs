//! World Setup
//!
//! Builds the environment: the nest disk at the domain center and the food
//! patches at their fractional centers.

use rand::Rng;

use crate::components::environment::{Environment, FieldParams};
use crate::components::fields::{within_radius, FoodField, NestField};
use crate::components::space::{CellIndex, Position, SpatialDomain};
use crate::config::{FoodSource, SimConfig};

/// Create the environment described by `config`, seeding food from `rng`.
pub fn create_environment<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Environment {
    let domain = SpatialDomain::new(config.width, config.height);
    let nest_center = domain.center();
    let nest = NestField::disk(domain, nest_center, config.nest_radius);

    tracing::debug!(
        width = config.width,
        height = config.height,
        nest_cells = nest.size(),
        "nest marked"
    );

    let mut env = Environment::new(domain, nest, nest_center, FieldParams::from_config(config));

    for source in &config.food_sources {
        let center = source_center(&domain, source);
        fill_food_patch(&mut env.food, &domain, center, config.food_radius, rng);
    }

    tracing::debug!(
        patches = config.food_sources.len(),
        stocked_cells = env.food.stocked_cells(),
        total_food = env.food.total(),
        "food seeded"
    );

    env
}

/// Absolute position of a patch given as fractions of the extents.
pub fn source_center(domain: &SpatialDomain, source: &FoodSource) -> Position {
    Position::new(
        source.x * domain.width() as f64,
        source.y * domain.height() as f64,
    )
}

/// Give every cell strictly inside the disk 1 or 2 units, chosen uniformly.
///
/// Cells are visited column by column (x outer, y inner). A cell covered by
/// more than one patch keeps the amount drawn last.
pub fn fill_food_patch<R: Rng + ?Sized>(
    food: &mut FoodField,
    domain: &SpatialDomain,
    center: Position,
    radius: f64,
    rng: &mut R,
) {
    for x in 0..domain.width() {
        for y in 0..domain.height() {
            let cell = CellIndex::new(x, y);
            if within_radius(cell, center, radius) {
                food.set(cell, rng.gen_range(1..=2));
            }
        }
    }
}
