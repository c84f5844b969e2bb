//! Pheromone System
//!
//! The once-per-tick field update, run after every agent has acted.

use bevy_ecs::prelude::*;

use crate::components::environment::Environment;

/// System: diffuse then evaporate the pheromone field
pub fn update_pheromone(mut environment: ResMut<Environment>) {
    environment.update_pheromone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::environment::FieldParams;
    use crate::components::fields::NestField;
    use crate::components::space::{CellIndex, SpatialDomain};

    #[test]
    fn test_update_runs_after_deposits() {
        let domain = SpatialDomain::new(11, 11);
        let nest = NestField::disk(domain, domain.center(), 2.0);
        let mut env = Environment::new(domain, nest, domain.center(), FieldParams::default());
        env.pheromone.deposit(CellIndex::new(0, 0), 80.0);

        let mut world = World::new();
        world.insert_resource(env);

        let mut schedule = Schedule::default();
        schedule.add_systems(update_pheromone);
        schedule.run(&mut world);

        let env = world.resource::<Environment>();
        // 80 * 0.75 kept, then 5% evaporates
        assert!((env.pheromone.get(CellIndex::new(0, 0)) - 57.0).abs() < 1e-9);
        assert!((env.pheromone.get(CellIndex::new(10, 10)) - 2.5 * 0.95).abs() < 1e-9);
        assert!((env.pheromone.total() - 76.0).abs() < 1e-9);
    }
}
