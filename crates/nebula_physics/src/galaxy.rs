use nebula_core::{ParticleBuffers, GALAXY_COLOR, GALAXY_INNER_RADIUS, GALAXY_PARTICLE_SIZE};
use rand::Rng;

use crate::sampler;

/// Static background shell of particles around a clear central void.
/// Never updated after creation.
#[derive(Debug, Clone)]
pub struct GalaxyPopulation {
    spread: f32,
    buffers: ParticleBuffers,
}

impl GalaxyPopulation {
    pub fn create(count: usize, spread: f32, rng: &mut impl Rng) -> Self {
        let mut buffers = ParticleBuffers::with_capacity(count);
        for _ in 0..count {
            let pos = sampler::sample_shell(rng, GALAXY_INNER_RADIUS, spread);
            buffers.push(pos, GALAXY_COLOR, GALAXY_PARTICLE_SIZE);
        }
        Self { spread, buffers }
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }
}
