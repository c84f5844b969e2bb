//! Configuration System
//!
//! Simulation parameters, loadable from TOML. Every field has a default so a
//! partial file (or none at all) yields a runnable configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::error::SimError;

/// How an agent searches when it has neither food nor a trail to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Exponential free paths with elliptically distributed turns
    Boltzmann,
    /// Fixed-length steps with von Mises distributed turns
    #[default]
    RandomWalk,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Boltzmann => write!(f, "boltzmann"),
            SearchMode::RandomWalk => write!(f, "random_walk"),
        }
    }
}

/// Center of a food patch, as fractions of the domain extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    pub x: f64,
    pub y: f64,
}

impl FoodSource {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The three patches of the classic foraging layout: right, lower-left, upper-left.
pub fn default_food_sources() -> Vec<FoodSource> {
    vec![
        FoodSource::new(0.8, 0.5),
        FoodSource::new(0.2, 0.2),
        FoodSource::new(0.1, 0.9),
    ]
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Domain width in cells
    pub width: u32,
    /// Domain height in cells
    pub height: u32,
    /// Number of foragers, fixed for the run
    pub population: u32,
    pub search_mode: SearchMode,
    /// Mean of the exponential free-path length (Boltzmann mode)
    pub mean_free_path: f64,
    /// Turning asymmetry in (-1, 1) (Boltzmann mode)
    pub g: f64,
    /// Von Mises concentration (random-walk mode)
    pub kappa: f64,
    /// Step length for homing, trail following and random-walk search
    pub speed: f64,
    /// Percentage of each cell blended with its neighbourhood per tick
    pub diffusion_rate: f64,
    /// Percentage of pheromone lost per tick
    pub evaporation_rate: f64,
    /// Pheromone laid per homing tick
    pub deposit_amount: f64,
    /// Pheromone level above which an agent follows the trail
    pub follow_threshold: f64,
    pub nest_radius: f64,
    pub food_radius: f64,
    /// RNG seed; drawn from entropy when absent
    pub seed: Option<u64>,
    pub food_sources: Vec<FoodSource>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 101,
            height: 101,
            population: 125,
            search_mode: SearchMode::RandomWalk,
            mean_free_path: 5.0,
            g: 0.3,
            kappa: 5.0,
            speed: 1.0,
            diffusion_rate: 25.0,
            evaporation_rate: 5.0,
            deposit_amount: 60.0,
            follow_threshold: 0.05,
            nest_radius: 5.0,
            food_radius: 5.0,
            seed: None,
            food_sources: default_food_sources(),
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Renders the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_population(mut self, population: u32) -> Self {
        self.population = population;
        self
    }

    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Diffusion blend fraction in [0, 1].
    pub fn diffusion_coefficient(&self) -> f64 {
        self.diffusion_rate / 100.0
    }

    /// Multiplier applied to every pheromone cell after diffusion.
    pub fn evaporation_factor(&self) -> f64 {
        (100.0 - self.evaporation_rate) / 100.0
    }

    /// Checks every parameter, reporting the first violation.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::invalid(
                "width/height",
                format!("domain must be non-empty, got {}x{}", self.width, self.height),
            ));
        }
        if self.population == 0 {
            return Err(SimError::invalid("population", "must be positive, got 0"));
        }
        if !(self.g > -1.0 && self.g < 1.0) {
            return Err(SimError::invalid(
                "g",
                format!("must lie in (-1, 1), got {}", self.g),
            ));
        }
        require_positive("mean_free_path", self.mean_free_path)?;
        require_positive("speed", self.speed)?;
        require_non_negative("kappa", self.kappa)?;
        require_percentage("diffusion_rate", self.diffusion_rate)?;
        require_percentage("evaporation_rate", self.evaporation_rate)?;
        require_non_negative("deposit_amount", self.deposit_amount)?;
        require_non_negative("follow_threshold", self.follow_threshold)?;
        require_positive("nest_radius", self.nest_radius)?;
        require_positive("food_radius", self.food_radius)?;

        for source in &self.food_sources {
            let inside = (0.0..=1.0).contains(&source.x) && (0.0..=1.0).contains(&source.y);
            if !inside {
                return Err(SimError::invalid(
                    "food_sources",
                    format!(
                        "fractional center must lie in [0, 1], got ({}, {})",
                        source.x, source.y
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn require_positive(parameter: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(parameter, format!("must be positive, got {}", value)))
    }
}

fn require_non_negative(parameter: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(
            parameter,
            format!("must be non-negative, got {}", value),
        ))
    }
}

fn require_percentage(parameter: &'static str, value: f64) -> Result<(), SimError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::invalid(
            parameter,
            format!("must lie in [0, 100], got {}", value),
        ))
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Configuration rendering error
#[derive(Debug, Error)]
#[error("TOML serialization error: {0}")]
pub struct TomlSerializeError(#[source] pub toml::ser::Error);
