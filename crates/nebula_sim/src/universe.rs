use bevy::prelude::*;
use nebula_core::{Phase, SimConfig, SimulationParameters};
use nebula_physics::explosion::ExplosionPopulation;
use nebula_physics::galaxy::GalaxyPopulation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::phase::PhaseController;

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Explosion clock moved and positions were recomputed
    pub advanced: bool,
    /// This tick performed the one-time galaxy spawn
    pub galaxy_spawned: bool,
}

/// All mutable simulation state, tracked as a Bevy Resource
#[derive(Resource)]
pub struct Simulation {
    /// Whether simulation is paused
    pub paused: bool,
    explosion: ExplosionPopulation,
    /// Spawned at most once per run, never removed
    galaxy: Option<GalaxyPopulation>,
    phase: PhaseController,
    /// Single entropy source shared by both populations
    rng: ChaCha8Rng,
    /// Incremented when the explosion is replaced (render uses this)
    explosion_generation: u32,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let explosion = ExplosionPopulation::create(
            config.parameters.explosion_particle_count as usize,
            config.speed_range,
            &mut rng,
        );
        let phase = PhaseController::new(config.galaxy_threshold);

        Self {
            paused: false,
            explosion,
            galaxy: None,
            phase,
            rng,
            explosion_generation: 0,
        }
    }

    /// Advance the run by one frame. Parameters are read fresh on every call.
    pub fn tick(&mut self, delta: f64, params: &SimulationParameters) -> TickReport {
        let mut report = TickReport::default();
        if self.paused {
            return report;
        }

        report.advanced = self.explosion.tick(delta, params.expansion_speed);
        if !report.advanced {
            warn!(
                "Ignoring tick with delta {} at expansion speed {}",
                delta, params.expansion_speed
            );
        }

        if self.phase.observe(self.explosion.clock().elapsed()) {
            match self.spawn_galaxy(params) {
                Ok(()) => report.galaxy_spawned = true,
                Err(e) => warn!("{}", e),
            }
        }

        report
    }

    fn spawn_galaxy(&mut self, params: &SimulationParameters) -> Result<(), String> {
        if self.galaxy.is_some() {
            return Err("Galaxy already spawned for this run".to_string());
        }

        let galaxy = GalaxyPopulation::create(
            params.galaxy_particle_count as usize,
            params.galaxy_spread,
            &mut self.rng,
        );
        info!(
            "Phase transition: {} -> {} (clock: {:.3}, {} galaxy particles, spread {:.1})",
            Phase::PreGalaxy.name(),
            Phase::PostGalaxy.name(),
            self.explosion.clock().elapsed(),
            galaxy.len(),
            galaxy.spread()
        );
        self.galaxy = Some(galaxy);
        Ok(())
    }

    /// Throw away the explosion and start a fresh one with `count` particles.
    /// The phase latch and any spawned galaxy are left alone.
    pub fn regenerate_explosion(&mut self, count: u32) {
        let before = self.explosion.len();
        self.explosion.regenerate(count as usize, &mut self.rng);
        self.explosion_generation = self.explosion_generation.wrapping_add(1);
        info!("Regenerated explosion: {} -> {} particles", before, count);
    }

    /// Regenerate if the requested explosion size differs from the live one
    pub fn sync_explosion_count(&mut self, params: &SimulationParameters) -> bool {
        if params.explosion_particle_count as usize == self.explosion.len() {
            return false;
        }
        self.regenerate_explosion(params.explosion_particle_count);
        true
    }

    pub fn explosion(&self) -> &ExplosionPopulation {
        &self.explosion
    }

    pub fn galaxy(&self) -> Option<&GalaxyPopulation> {
        self.galaxy.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase.phase()
    }

    /// Clock value the explosion must exceed before the galaxy spawns
    pub fn galaxy_threshold(&self) -> f64 {
        self.phase.threshold()
    }

    /// Explosion clock value
    pub fn elapsed(&self) -> f64 {
        self.explosion.clock().elapsed()
    }

    pub fn explosion_generation(&self) -> u32 {
        self.explosion_generation
    }
}
