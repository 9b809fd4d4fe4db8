use rand::Rng;

/// Uniform random direction on the unit sphere.
/// Azimuth is uniform; the polar angle comes from `acos` of a uniform cosine
/// so directions don't bunch up at the poles.
pub fn random_direction(rng: &mut impl Rng) -> [f32; 3] {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let phi = rng.gen_range(-1.0..1.0f32).acos();

    [
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    ]
}

/// Random point in a spherical shell: uniform direction, radius uniform in
/// `[inner, inner + spread)`. A non-positive spread collapses the shell to `inner`.
pub fn sample_shell(rng: &mut impl Rng, inner: f32, spread: f32) -> [f32; 3] {
    let dir = random_direction(rng);
    let u = rng.gen_range(0.0..1.0f32);
    let radius = inner + spread.max(0.0) * u;

    [dir[0] * radius, dir[1] * radius, dir[2] * radius]
}
