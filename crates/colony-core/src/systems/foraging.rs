//! Foraging System
//!
//! Steps every forager once per tick in a freshly shuffled order. Agents act
//! in sequence on the shared environment, so a deposit or pickup made by one
//! agent is visible to every agent after it in the same tick.

use bevy_ecs::prelude::*;
use colony_events::{ActionCounts, ActionKind};
use rand::seq::SliceRandom;

use crate::components::agent::{AntId, ForagingAgent};
use crate::components::environment::Environment;
use crate::SimRng;

/// Resource: the branch each agent took during the last tick, in visit order
#[derive(Resource, Debug, Clone, Default)]
pub struct TickActions {
    pub actions: Vec<(AntId, ActionKind)>,
}

impl TickActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn record(&mut self, id: AntId, action: ActionKind) {
        self.actions.push((id, action));
    }

    /// Action taken by `id` in the last tick
    pub fn action_of(&self, id: AntId) -> Option<ActionKind> {
        self.actions
            .iter()
            .find(|(ant, _)| *ant == id)
            .map(|(_, action)| *action)
    }

    /// Order in which agents were visited
    pub fn visit_order(&self) -> Vec<AntId> {
        self.actions.iter().map(|(id, _)| *id).collect()
    }

    pub fn counts(&self) -> ActionCounts {
        self.actions.iter().map(|(_, action)| *action).collect()
    }
}

/// System: shuffle the colony and run one foraging decision per agent
///
/// Agents are sorted by id before the shuffle so the permutation depends only
/// on the RNG state, never on entity storage order.
pub fn step_foragers(
    mut rng: ResMut<SimRng>,
    mut environment: ResMut<Environment>,
    mut tick_actions: ResMut<TickActions>,
    mut query: Query<(Entity, &AntId, &mut ForagingAgent)>,
) {
    let mut order: Vec<(AntId, Entity)> = query.iter().map(|(entity, id, _)| (*id, entity)).collect();
    order.sort_unstable_by_key(|(id, _)| *id);
    order.shuffle(&mut rng.0);

    tick_actions.clear();
    let env: &mut Environment = &mut environment;

    for (id, entity) in order {
        if let Ok((_, _, mut agent)) = query.get_mut(entity) {
            let action = agent.step(env, &mut rng.0);
            tick_actions.record(id, action);
        }
    }
}
