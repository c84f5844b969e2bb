//! ECS Components
//!
//! The foraging agent component, the shared environment resource and the
//! spatial and grid types they are built on.

pub mod agent;
pub mod environment;
pub mod fields;
pub mod space;

pub use agent::*;
pub use environment::*;
pub use fields::*;
pub use space::*;
