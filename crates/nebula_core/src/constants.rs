// Simulation units are arbitrary: one time unit is one second of wall clock
// at expansion speed 1.0, one distance unit is one render unit.

/// Explosion clock value that must be strictly exceeded before the galaxy spawns
pub const GALAXY_THRESHOLD: f64 = 10.0;

/// Inner radius of the explosion seed cluster (near-singular, never exactly zero)
pub const EXPLOSION_SEED_INNER: f32 = 0.001;

/// Radial spread of the explosion seed cluster
pub const EXPLOSION_SEED_SPREAD: f32 = 0.1;

/// Slowest explosion particle speed
pub const EXPLOSION_SPEED_MIN: f32 = 2.0;

/// Width of the explosion speed range (max speed = min + width)
pub const EXPLOSION_SPEED_WIDTH: f32 = 5.0;

/// Void around the origin kept clear of galaxy particles
pub const GALAXY_INNER_RADIUS: f32 = 50.0;

/// Warm orange-white for explosion particles
pub const EXPLOSION_COLOR: [f32; 3] = [1.0, 0.62, 0.25];

/// Cool blue for galaxy particles
pub const GALAXY_COLOR: [f32; 3] = [0.45, 0.65, 1.0];

/// Render size of an explosion particle
pub const EXPLOSION_PARTICLE_SIZE: f32 = 0.35;

/// Render size of a galaxy particle
pub const GALAXY_PARTICLE_SIZE: f32 = 0.8;

/// Upper bound the parameter panel allows for either particle count
pub const MAX_PARTICLE_COUNT: u32 = 50_000;

/// Bounds the parameter panel allows for the expansion speed multiplier
pub const EXPANSION_SPEED_RANGE: (f64, f64) = (0.05, 20.0);

/// Bounds the parameter panel allows for the galaxy spread
pub const GALAXY_SPREAD_RANGE: (f32, f32) = (1.0, 1000.0);
