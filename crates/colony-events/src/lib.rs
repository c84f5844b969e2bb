//! Shared observation types for the ant foraging simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! Renderers and reporting tools depend on it without pulling in the
//! simulation core.

pub mod event;
pub mod snapshot;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export event types
pub use event::{ActionCounts, ActionKind, TickSummary};

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, AgentSnapshot, ColonyMetrics, ColonySnapshot, ForagerState,
    GridSnapshot,
};
