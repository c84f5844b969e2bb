//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // colony-events = { path = "../colony-events", features = ["test-fixtures"] }
//!
//! use colony_events::fixtures;
//!
//! let snapshot = fixtures::sample_snapshot();
//! ```

use crate::ColonySnapshot;

/// Returns a sample colony snapshot from the fixtures file.
///
/// Contains:
/// - a 4x3 grid with a two-cell nest at (1,1) and (2,1)
/// - 2 agents, one searching and one carrying
/// - a pheromone trail ending at the nest and 3 units of food
pub fn sample_snapshot() -> ColonySnapshot {
    let json = include_str!("../tests/fixtures/sample_snapshot.json");
    serde_json::from_str(json).expect("Failed to parse sample_snapshot.json")
}

/// Returns the carrying agent from the sample snapshot.
pub fn carrying_agent() -> crate::AgentSnapshot {
    sample_snapshot()
        .carrying_agents()
        .next()
        .cloned()
        .expect("sample snapshot has a carrying agent")
}
