//! Error Types
//!
//! Construction-time failures. Stepping a valid simulation cannot fail.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building a simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// A parameter lies outside its admissible range
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    /// The configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SimError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if this is a parameter error.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            SimError::InvalidParameter { parameter, .. } => Some(parameter),
            SimError::Config(_) => None,
        }
    }
}
