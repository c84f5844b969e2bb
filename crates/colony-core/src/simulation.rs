//! Simulation Driver
//!
//! Owns the ECS world and the tick schedule. A `Simulation` is only ever
//! built from a validated configuration, so stepping cannot fail.

use bevy_ecs::prelude::*;
use colony_events::{ColonySnapshot, TickSummary};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::agent::{AntId, ForagingAgent};
use crate::components::environment::Environment;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::movement::MovementKernel;
use crate::output::generate_snapshot;
use crate::setup::{create_environment, spawn_colony};
use crate::systems::{
    advance_tick, step_foragers, update_pheromone, SimulationState, TickActions,
};
use crate::SimRng;

/// A running foraging simulation
pub struct Simulation {
    world: World,
    schedule: Schedule,
    config: SimConfig,
    seed: u64,
    /// Entities indexed by `AntId`
    ants: Vec<Entity>,
}

impl Simulation {
    /// Validate `config` and build the nest, food patches and colony.
    ///
    /// Without a configured seed one is drawn from OS entropy and logged.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let kernel = MovementKernel::from_config(&config)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);

        let environment = create_environment(&config, &mut rng);
        let nest_center = environment.nest_center();

        let mut world = World::new();
        world.insert_resource(environment);
        world.insert_resource(SimulationState::new());
        world.insert_resource(TickActions::new());

        let ants = spawn_colony(
            &mut world,
            config.population,
            nest_center,
            config.speed,
            kernel,
            &mut rng,
        );
        world.insert_resource(SimRng(rng));

        tracing::info!(
            seed,
            width = config.width,
            height = config.height,
            population = config.population,
            search_mode = %config.search_mode,
            "simulation initialized"
        );

        Ok(Self {
            world,
            schedule: build_schedule(),
            config,
            seed,
            ants,
        })
    }

    /// Advance one tick: every agent acts once in shuffled order, then the
    /// pheromone field diffuses and evaporates.
    pub fn step(&mut self) -> TickSummary {
        self.schedule.run(&mut self.world);
        let summary = self.summary();

        tracing::debug!(
            tick = summary.tick,
            pickups = summary.actions.pickup,
            deliveries = summary.actions.deliver,
            total_pheromone = summary.total_pheromone,
            remaining_food = summary.remaining_food,
            "tick complete"
        );

        summary
    }

    /// Advance `ticks` ticks, returning each tick's summary.
    pub fn run(&mut self, ticks: u64) -> Vec<TickSummary> {
        (0..ticks).map(|_| self.step()).collect()
    }

    /// Summary of the last completed tick.
    pub fn summary(&self) -> TickSummary {
        let env = self.environment();
        TickSummary {
            tick: self.tick(),
            actions: self.world.resource::<TickActions>().counts(),
            total_pheromone: env.pheromone.total(),
            remaining_food: env.food.total(),
            food_delivered: env.food_delivered(),
        }
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.world.resource::<SimulationState>().tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        self.world.resource::<Environment>()
    }

    /// Mutable access to the fields, for seeding scenarios between ticks.
    pub fn environment_mut(&mut self) -> Mut<'_, Environment> {
        self.world.resource_mut::<Environment>()
    }

    /// Branches taken during the last tick.
    pub fn last_actions(&self) -> &TickActions {
        self.world.resource::<TickActions>()
    }

    pub fn population(&self) -> usize {
        self.ants.len()
    }

    pub fn agent(&self, id: AntId) -> Option<&ForagingAgent> {
        let entity = *self.ants.get(id.0 as usize)?;
        self.world.get::<ForagingAgent>(entity)
    }

    pub fn agent_mut(&mut self, id: AntId) -> Option<Mut<'_, ForagingAgent>> {
        let entity = *self.ants.get(id.0 as usize)?;
        self.world.get_mut::<ForagingAgent>(entity)
    }

    /// Every agent in id order.
    pub fn agents(&self) -> Vec<(AntId, ForagingAgent)> {
        self.ants
            .iter()
            .enumerate()
            .filter_map(|(i, entity)| {
                self.world
                    .get::<ForagingAgent>(*entity)
                    .map(|agent| (AntId(i as u32), agent.clone()))
            })
            .collect()
    }

    /// Read-only view of the whole colony.
    pub fn snapshot(&self, triggered_by: &str) -> ColonySnapshot {
        generate_snapshot(&self.world, triggered_by)
    }
}

/// Tick schedule: agents first, then the field update, then the clock.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((step_foragers, update_pheromone, advance_tick).chain());
    schedule
}
