use nebula_core::{
    scale, ParticleBuffers, SpeedRange, EXPLOSION_COLOR, EXPLOSION_PARTICLE_SIZE,
    EXPLOSION_SEED_INNER, EXPLOSION_SEED_SPREAD,
};
use rand::Rng;

use crate::sampler;

/// Shared time accumulator for every explosion particle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExplosionClock {
    elapsed: f64,
}

impl ExplosionClock {
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance by `delta * speed`. Negative or non-finite steps are ignored
    /// and reported as `false`.
    pub fn advance(&mut self, delta: f64, speed: f64) -> bool {
        let step = delta * speed;
        if !delta.is_finite() || delta < 0.0 || !step.is_finite() || step < 0.0 {
            return false;
        }
        self.elapsed += step;
        true
    }
}

/// Radial burst of particles, each travelling along a fixed ray at a fixed
/// speed. Positions are a pure function of the shared clock:
/// `position = velocity * elapsed`.
#[derive(Debug, Clone)]
pub struct ExplosionPopulation {
    speed_range: SpeedRange,
    velocities: Vec<[f32; 3]>,
    buffers: ParticleBuffers,
    clock: ExplosionClock,
}

impl ExplosionPopulation {
    /// Seed `count` particles in a tiny cluster around the origin
    pub fn create(count: usize, speed_range: SpeedRange, rng: &mut impl Rng) -> Self {
        let mut velocities = Vec::with_capacity(count);
        let mut buffers = ParticleBuffers::with_capacity(count);

        for _ in 0..count {
            let pos = sampler::sample_shell(rng, EXPLOSION_SEED_INNER, EXPLOSION_SEED_SPREAD);

            // Direction of travel is sampled independently of the seed position
            let dir = sampler::random_direction(rng);
            let speed = speed_range.at(rng.gen_range(0.0..1.0f32));

            velocities.push(scale(dir, speed));
            buffers.push(pos, EXPLOSION_COLOR, EXPLOSION_PARTICLE_SIZE);
        }

        Self {
            speed_range,
            velocities,
            buffers,
            clock: ExplosionClock::default(),
        }
    }

    /// Advance the clock and recompute every position.
    /// Returns `false` (and changes nothing) for an unusable delta.
    pub fn tick(&mut self, delta: f64, expansion_speed: f64) -> bool {
        if !self.clock.advance(delta, expansion_speed) {
            return false;
        }

        let t = self.clock.elapsed() as f32;
        for (pos, vel) in self.buffers.positions.iter_mut().zip(&self.velocities) {
            *pos = scale(*vel, t);
        }
        true
    }

    /// Replace this population with a brand-new one of `count` particles.
    /// Nothing of the old velocities, buffers or clock survives.
    pub fn regenerate(&mut self, count: usize, rng: &mut impl Rng) {
        *self = Self::create(count, self.speed_range, rng);
    }

    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    pub fn clock(&self) -> &ExplosionClock {
        &self.clock
    }

    pub fn velocities(&self) -> &[[f32; 3]] {
        &self.velocities
    }

    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }
}
