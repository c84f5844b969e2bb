//! Output
//!
//! Snapshot generation for external consumers.

pub mod snapshot;

pub use snapshot::generate_snapshot;
