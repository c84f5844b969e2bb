//! World Setup
//!
//! Environment initialization and colony spawning.

pub mod agents;
pub mod world;

pub use agents::*;
pub use world::*;
