//! Movement
//!
//! Turning-angle samplers and the search kernels built from them.

pub mod kernel;
pub mod turning;

pub use kernel::MovementKernel;
pub use turning::{sample_elliptical, sample_von_mises, TurningSampler};
