//! Search Kernels
//!
//! The uninformed search strategy an agent falls back on when it has
//! neither food underfoot nor a trail to follow.

use rand::Rng;
use rand_distr::{Distribution, Exp};

use super::turning::TurningSampler;
use crate::config::{SearchMode, SimConfig};
use crate::error::SimError;

/// Search strategy selected by configuration
#[derive(Debug, Clone, Copy)]
pub enum MovementKernel {
    /// Boltzmann-Walker: exponential free paths, elliptical turns
    Boltzmann {
        free_path: Exp<f64>,
        mean_free_path: f64,
        turning: TurningSampler,
    },
    /// Correlated random walk: fixed steps, von Mises turns
    RandomWalk { turning: TurningSampler },
}

impl MovementKernel {
    pub fn boltzmann(mean_free_path: f64, g: f64) -> Result<Self, SimError> {
        if !(mean_free_path.is_finite() && mean_free_path > 0.0) {
            return Err(SimError::invalid(
                "mean_free_path",
                format!("must be positive, got {}", mean_free_path),
            ));
        }
        let free_path = Exp::new(1.0 / mean_free_path)
            .map_err(|e| SimError::invalid("mean_free_path", e.to_string()))?;

        Ok(MovementKernel::Boltzmann {
            free_path,
            mean_free_path,
            turning: TurningSampler::elliptical(g)?,
        })
    }

    pub fn random_walk(kappa: f64) -> Result<Self, SimError> {
        Ok(MovementKernel::RandomWalk {
            turning: TurningSampler::von_mises(kappa)?,
        })
    }

    /// Kernel for the configured search mode.
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        match config.search_mode {
            SearchMode::Boltzmann => Self::boltzmann(config.mean_free_path, config.g),
            SearchMode::RandomWalk => Self::random_walk(config.kappa),
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            MovementKernel::Boltzmann { .. } => SearchMode::Boltzmann,
            MovementKernel::RandomWalk { .. } => SearchMode::RandomWalk,
        }
    }

    /// Length of the next search step. Random walks always step `speed`.
    pub fn step_length<R: Rng + ?Sized>(&self, speed: f64, rng: &mut R) -> f64 {
        match self {
            MovementKernel::Boltzmann { free_path, .. } => free_path.sample(rng),
            MovementKernel::RandomWalk { .. } => speed,
        }
    }

    /// Heading change applied after a search step.
    pub fn turn<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            MovementKernel::Boltzmann { turning, .. } | MovementKernel::RandomWalk { turning } => {
                turning.sample(rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_config_selects_mode() {
        let config = SimConfig::default().with_search_mode(SearchMode::Boltzmann);
        let kernel = MovementKernel::from_config(&config).unwrap();
        assert_eq!(kernel.mode(), SearchMode::Boltzmann);

        let config = SimConfig::default().with_search_mode(SearchMode::RandomWalk);
        let kernel = MovementKernel::from_config(&config).unwrap();
        assert_eq!(kernel.mode(), SearchMode::RandomWalk);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert_eq!(
            MovementKernel::boltzmann(0.0, 0.3).unwrap_err().parameter(),
            Some("mean_free_path")
        );
        assert_eq!(
            MovementKernel::boltzmann(5.0, 1.0).unwrap_err().parameter(),
            Some("g")
        );
        assert_eq!(
            MovementKernel::random_walk(-1.0).unwrap_err().parameter(),
            Some("kappa")
        );
    }

    #[test]
    fn test_random_walk_step_is_speed() {
        let kernel = MovementKernel::random_walk(5.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(kernel.step_length(1.5, &mut rng), 1.5);
        }
    }

    #[test]
    fn test_boltzmann_steps_are_exponential() {
        let kernel = MovementKernel::boltzmann(5.0, 0.3).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        let n = 20_000;
        let steps: Vec<f64> = (0..n).map(|_| kernel.step_length(1.0, &mut rng)).collect();

        assert!(steps.iter().all(|s| *s >= 0.0));
        let mean = steps.iter().sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.25, "mean step {}", mean);
        // Exponential: about e^-1 of steps exceed the mean
        let above = steps.iter().filter(|s| **s > 5.0).count() as f64 / n as f64;
        assert!((above - (-1.0f64).exp()).abs() < 0.02, "tail {}", above);
    }
}
