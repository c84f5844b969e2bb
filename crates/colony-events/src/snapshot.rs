//! Snapshot Types
//!
//! Serialization structs for colony snapshots.
//!
//! Snapshots capture the complete observable state of the simulation at a
//! point in time: every forager plus the pheromone, food and nest grids.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Foraging state of an agent at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForagerState {
    Searching,
    Carrying,
}

impl ForagerState {
    pub fn from_carrying(carrying: bool) -> Self {
        if carrying {
            ForagerState::Carrying
        } else {
            ForagerState::Searching
        }
    }
}

/// Single forager snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub agent_id: u32,
    pub x: f64,
    pub y: f64,
    /// Heading in radians, within (-pi, pi]
    pub heading: f64,
    pub carrying: bool,
    pub state: ForagerState,
}

impl AgentSnapshot {
    pub fn new(agent_id: u32, x: f64, y: f64, heading: f64, carrying: bool) -> Self {
        Self {
            agent_id,
            x,
            y,
            heading,
            carrying,
            state: ForagerState::from_carrying(carrying),
        }
    }
}

/// Dense grid, row-major (`y * width + x`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot<T> {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<T>,
}

impl<T: Copy> GridSnapshot<T> {
    pub fn new(width: u32, height: u32, cells: Vec<T>) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    /// Value at cell `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    /// Iterate `(x, y, value)` over every cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i as u32 % width, i as u32 / width, *v))
    }
}

/// Aggregate colony metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColonyMetrics {
    pub total_pheromone: f64,
    pub remaining_food: u64,
    pub carrying_count: u32,
    pub food_delivered: u64,
}

/// Complete colony snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonySnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub triggered_by: String,
    pub agents: Vec<AgentSnapshot>,
    pub pheromone: GridSnapshot<f64>,
    pub food: GridSnapshot<u32>,
    pub nest: GridSnapshot<bool>,
    #[serde(default)]
    pub metrics: ColonyMetrics,
}

impl ColonySnapshot {
    /// Finds an agent by ID.
    pub fn find_agent(&self, agent_id: u32) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.agent_id == agent_id)
    }

    /// Agents currently carrying food.
    pub fn carrying_agents(&self) -> impl Iterator<Item = &AgentSnapshot> {
        self.agents.iter().filter(|a| a.carrying)
    }

    /// Number of cells marked as nest.
    pub fn nest_cell_count(&self) -> usize {
        self.nest.cells.iter().filter(|c| **c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_snapshot_id() {
        assert_eq!(generate_snapshot_id(1), "snap_000001");
        assert_eq!(generate_snapshot_id(4237), "snap_004237");
        assert_eq!(generate_snapshot_id(999999), "snap_999999");
    }

    #[test]
    fn test_agent_snapshot_state() {
        let searching = AgentSnapshot::new(0, 1.0, 2.0, 0.5, false);
        assert_eq!(searching.state, ForagerState::Searching);

        let carrying = AgentSnapshot::new(1, 1.0, 2.0, 0.5, true);
        assert_eq!(carrying.state, ForagerState::Carrying);
    }

    #[test]
    fn test_grid_snapshot_row_major() {
        let grid = GridSnapshot::new(3, 2, vec![0u32, 1, 2, 3, 4, 5]);

        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(2, 0), Some(2));
        assert_eq!(grid.get(0, 1), Some(3));
        assert_eq!(grid.get(2, 1), Some(5));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);

        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells[4], (1, 1, 4));
    }

    #[test]
    fn test_metrics_default_when_missing() {
        let json = r#"{
            "snapshot_id": "snap_000000",
            "tick": 0,
            "triggered_by": "test",
            "agents": [],
            "pheromone": {"width": 1, "height": 1, "cells": [0.0]},
            "food": {"width": 1, "height": 1, "cells": [0]},
            "nest": {"width": 1, "height": 1, "cells": [true]}
        }"#;

        let snapshot: ColonySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.metrics, ColonyMetrics::default());
        assert_eq!(snapshot.nest_cell_count(), 1);
    }
}
