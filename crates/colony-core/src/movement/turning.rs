//! Turning Samplers
//!
//! Turning-angle distributions for correlated random walks. Samples are
//! heading *changes* in radians, centered on zero.

use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::SimError;

/// Below this concentration the von Mises distribution is treated as uniform.
const VON_MISES_UNIFORM_KAPPA: f64 = 1e-6;

/// A turning-angle distribution, validated at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurningSampler {
    /// Elliptical (Boltzmann-Walker) turns; holds `(1 - g) / (1 + g)`
    Elliptical { gratio: f64 },
    /// Circular-normal turns with concentration `kappa`
    VonMises { kappa: f64 },
}

impl TurningSampler {
    /// Elliptical sampler for asymmetry `g`, which must lie in (-1, 1).
    ///
    /// As `g` approaches 1 turns cluster near zero (ballistic paths); as it
    /// approaches -1 they cluster near +/-pi (frequent reversals).
    pub fn elliptical(g: f64) -> Result<Self, SimError> {
        if !(g > -1.0 && g < 1.0) {
            return Err(SimError::invalid(
                "g",
                format!("must lie in (-1, 1), got {}", g),
            ));
        }
        Ok(TurningSampler::Elliptical {
            gratio: (1.0 - g) / (1.0 + g),
        })
    }

    /// Von Mises sampler; `kappa` must be finite and non-negative.
    pub fn von_mises(kappa: f64) -> Result<Self, SimError> {
        if !(kappa.is_finite() && kappa >= 0.0) {
            return Err(SimError::invalid(
                "kappa",
                format!("must be non-negative, got {}", kappa),
            ));
        }
        Ok(TurningSampler::VonMises { kappa })
    }

    /// Draw one turning angle.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            TurningSampler::Elliptical { gratio } => sample_elliptical(gratio, rng),
            TurningSampler::VonMises { kappa } => sample_von_mises(kappa, rng),
        }
    }
}

/// Elliptical turn: `2 * sign(V) * atan(tan(U * pi/2) * gratio)` with
/// `U ~ U[0, 1)` and `V ~ U[-1, 1)`. `V == 0` counts as positive.
/// Result lies in (-pi, pi).
pub fn sample_elliptical<R: Rng + ?Sized>(gratio: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    let tmp = (u * FRAC_PI_2).tan() * gratio;
    let v: f64 = rng.gen_range(-1.0..1.0);
    let sign = if v >= 0.0 { 1.0 } else { -1.0 };
    2.0 * sign * tmp.atan()
}

/// Von Mises turn centered on zero, result in [-pi, pi].
///
/// Rejection sampler of Best & Fisher (1979).
pub fn sample_von_mises<R: Rng + ?Sized>(kappa: f64, rng: &mut R) -> f64 {
    if kappa <= VON_MISES_UNIFORM_KAPPA {
        return rng.gen::<f64>() * TAU - PI;
    }

    let s = 0.5 / kappa;
    let r = s + (1.0 + s * s).sqrt();

    let z = loop {
        let u1: f64 = rng.gen();
        let z = (PI * u1).cos();
        let d = z / (r + z);
        let u2: f64 = rng.gen();
        if u2 < 1.0 - d * d || u2 <= (1.0 - d) * d.exp() {
            break z;
        }
    };

    let q = 1.0 / r;
    let f = ((q + z) / (1.0 + q * z)).clamp(-1.0, 1.0);
    let u3: f64 = rng.gen();
    if u3 > 0.5 {
        f.acos()
    } else {
        -f.acos()
    }
}
