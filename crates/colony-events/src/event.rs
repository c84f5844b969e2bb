//! Action Types
//!
//! Records of which foraging branch each agent executed during a tick.

use serde::{Deserialize, Serialize};

/// The branch of the foraging decision an agent executed in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Carrying agent standing on the nest dropped its food
    Deliver,
    /// Carrying agent laid pheromone and stepped toward the nest
    ReturnToNest,
    /// Agent took one unit of food from its cell
    Pickup,
    /// Agent turned uphill on the pheromone field and stepped
    FollowTrail,
    /// Agent performed one uninformed search step
    Search,
}

impl ActionKind {
    /// Returns all action variants in decision-priority order.
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::Deliver,
            ActionKind::ReturnToNest,
            ActionKind::Pickup,
            ActionKind::FollowTrail,
            ActionKind::Search,
        ]
    }

    /// Whether the agent's position can change under this action.
    pub fn moves(&self) -> bool {
        !matches!(self, ActionKind::Deliver | ActionKind::Pickup)
    }
}

/// Per-branch counters for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts {
    pub deliver: u32,
    pub return_to_nest: u32,
    pub pickup: u32,
    pub follow_trail: u32,
    pub search: u32,
}

impl ActionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one executed action.
    pub fn record(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::Deliver => self.deliver += 1,
            ActionKind::ReturnToNest => self.return_to_nest += 1,
            ActionKind::Pickup => self.pickup += 1,
            ActionKind::FollowTrail => self.follow_trail += 1,
            ActionKind::Search => self.search += 1,
        }
    }

    /// Number of recorded actions of one kind.
    pub fn get(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::Deliver => self.deliver,
            ActionKind::ReturnToNest => self.return_to_nest,
            ActionKind::Pickup => self.pickup,
            ActionKind::FollowTrail => self.follow_trail,
            ActionKind::Search => self.search,
        }
    }

    /// Total number of recorded actions.
    pub fn total(&self) -> u32 {
        ActionKind::all().iter().map(|k| self.get(*k)).sum()
    }
}

impl FromIterator<ActionKind> for ActionCounts {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        let mut counts = ActionCounts::new();
        for kind in iter {
            counts.record(kind);
        }
        counts
    }
}

/// Summary of one completed tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Number of ticks completed, including this one
    pub tick: u64,
    pub actions: ActionCounts,
    /// Pheromone mass after diffusion and evaporation
    pub total_pheromone: f64,
    pub remaining_food: u64,
    pub food_delivered: u64,
}

impl TickSummary {
    /// Serializes the summary to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a summary from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActionKind::ReturnToNest).unwrap();
        assert_eq!(json, "\"return_to_nest\"");

        let parsed: ActionKind = serde_json::from_str("\"follow_trail\"").unwrap();
        assert_eq!(parsed, ActionKind::FollowTrail);
    }

    #[test]
    fn test_stationary_actions() {
        assert!(!ActionKind::Deliver.moves());
        assert!(!ActionKind::Pickup.moves());
        assert!(ActionKind::ReturnToNest.moves());
        assert!(ActionKind::FollowTrail.moves());
        assert!(ActionKind::Search.moves());
    }

    #[test]
    fn test_action_counts_collect() {
        let counts: ActionCounts = [
            ActionKind::Search,
            ActionKind::Search,
            ActionKind::Pickup,
            ActionKind::Deliver,
        ]
        .into_iter()
        .collect();

        assert_eq!(counts.search, 2);
        assert_eq!(counts.pickup, 1);
        assert_eq!(counts.deliver, 1);
        assert_eq!(counts.follow_trail, 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_tick_summary_jsonl() {
        let summary = TickSummary {
            tick: 12,
            actions: ActionCounts {
                search: 3,
                ..ActionCounts::default()
            },
            total_pheromone: 120.5,
            remaining_food: 40,
            food_delivered: 2,
        };

        let line = summary.to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"remaining_food\":40"));

        let parsed = TickSummary::from_jsonl(&line).unwrap();
        assert_eq!(parsed, summary);
    }
}
