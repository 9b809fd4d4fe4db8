use serde::{Deserialize, Serialize};

use crate::constants::{EXPLOSION_SPEED_MIN, EXPLOSION_SPEED_WIDTH};

/// Speed magnitudes drawn as `min + width * u`, `u` uniform in [0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub width: f32,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self {
            min: EXPLOSION_SPEED_MIN,
            width: EXPLOSION_SPEED_WIDTH,
        }
    }
}

impl SpeedRange {
    pub fn max(&self) -> f32 {
        self.min + self.width
    }

    /// Map a unit sample onto this range
    pub fn at(&self, u: f32) -> f32 {
        self.min + self.width * u
    }
}

/// Render-facing particle data. The three vectors are index-aligned:
/// particle `i` owns `positions[i]`, `colors[i]` and `sizes[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleBuffers {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
}

impl ParticleBuffers {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
        }
    }

    pub fn push(&mut self, position: [f32; 3], color: [f32; 3], size: f32) {
        self.positions.push(position);
        self.colors.push(color);
        self.sizes.push(size);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as `x0, y0, z0, x1, ...`, ready for a vertex buffer upload
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Largest distance of any particle from the origin
    pub fn max_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| length(*p))
            .fold(0.0, f32::max)
    }
}

/// Simulation phase. `PostGalaxy` is terminal for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PreGalaxy,
    PostGalaxy,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreGalaxy => "Explosion",
            Self::PostGalaxy => "Galaxy",
        }
    }
}

pub fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn scale(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}
