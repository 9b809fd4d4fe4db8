use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::SpeedRange;

/// User-tunable knobs, mutated by the parameter panel between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Particles in the explosion (applied on regeneration only)
    pub explosion_particle_count: u32,
    /// Multiplier applied to every frame delta before it reaches the explosion clock
    pub expansion_speed: f64,
    /// Particles in the galaxy (read once, when the galaxy spawns)
    pub galaxy_particle_count: u32,
    /// Radial thickness of the galaxy shell beyond the inner void
    pub galaxy_spread: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            explosion_particle_count: 2_000,
            expansion_speed: 1.0,
            galaxy_particle_count: 5_000,
            galaxy_spread: 200.0,
        }
    }
}

impl SimulationParameters {
    /// Reject values a tick cannot use meaningfully
    pub fn validate(&self) -> Result<(), String> {
        if !self.expansion_speed.is_finite() || self.expansion_speed <= 0.0 {
            return Err(format!(
                "expansion_speed must be finite and > 0 (got {})",
                self.expansion_speed
            ));
        }
        if !self.galaxy_spread.is_finite() || self.galaxy_spread <= 0.0 {
            return Err(format!(
                "galaxy_spread must be finite and > 0 (got {})",
                self.galaxy_spread
            ));
        }
        Ok(())
    }

    /// Copy of these parameters pulled into the ranges the panel exposes
    pub fn clamped(&self) -> Self {
        let speed = if self.expansion_speed.is_finite() {
            self.expansion_speed
        } else {
            1.0
        };
        let spread = if self.galaxy_spread.is_finite() {
            self.galaxy_spread
        } else {
            GALAXY_SPREAD_RANGE.0
        };
        Self {
            explosion_particle_count: self.explosion_particle_count.min(MAX_PARTICLE_COUNT),
            expansion_speed: speed.clamp(EXPANSION_SPEED_RANGE.0, EXPANSION_SPEED_RANGE.1),
            galaxy_particle_count: self.galaxy_particle_count.min(MAX_PARTICLE_COUNT),
            galaxy_spread: spread.clamp(GALAXY_SPREAD_RANGE.0, GALAXY_SPREAD_RANGE.1),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Random seed for deterministic runs
    pub seed: u64,
    /// Explosion particle speed range
    pub speed_range: SpeedRange,
    /// Explosion clock value that must be exceeded to spawn the galaxy
    pub galaxy_threshold: f64,
    /// Parameters in effect at startup
    pub parameters: SimulationParameters,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            speed_range: SpeedRange::default(),
            galaxy_threshold: GALAXY_THRESHOLD,
            parameters: SimulationParameters::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
        let config = SimConfig::default();
        assert_eq!(config.galaxy_threshold, 10.0);
        assert_eq!(config.speed_range.min, 2.0);
        assert_eq!(config.speed_range.max(), 7.0);
    }

    #[test]
    fn test_validate_rejects_bad_speed_and_spread() {
        let mut params = SimulationParameters::default();
        params.expansion_speed = 0.0;
        assert!(params.validate().is_err());
        params.expansion_speed = f64::NAN;
        assert!(params.validate().is_err());

        let mut params = SimulationParameters::default();
        params.galaxy_spread = -5.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_clamped_pulls_values_into_range() {
        let params = SimulationParameters {
            explosion_particle_count: 10_000_000,
            expansion_speed: 1e9,
            galaxy_particle_count: 0,
            galaxy_spread: f32::INFINITY,
        }
        .clamped();
        assert_eq!(params.explosion_particle_count, MAX_PARTICLE_COUNT);
        assert_eq!(params.expansion_speed, EXPANSION_SPEED_RANGE.1);
        assert_eq!(params.galaxy_particle_count, 0);
        assert_eq!(params.galaxy_spread, GALAXY_SPREAD_RANGE.0);
        assert!(params.validate().is_ok());
    }
}
