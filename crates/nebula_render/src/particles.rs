use bevy::prelude::*;
use nebula_sim::universe::Simulation;
use std::collections::HashMap;

/// Marker for explosion point entities
#[derive(Component)]
pub struct ExplosionPoint {
    pub index: usize,
}

/// Marker for galaxy point entities
#[derive(Component)]
pub struct GalaxyPoint;

/// Mesh shared by every point entity, plus one material per particle color
#[derive(Resource)]
pub struct PointAssets {
    pub mesh: Handle<Mesh>,
    material_cache: HashMap<[u32; 3], Handle<StandardMaterial>>,
}

impl PointAssets {
    pub fn new(mesh: Handle<Mesh>) -> Self {
        Self {
            mesh,
            material_cache: HashMap::new(),
        }
    }

    /// Unlit emissive material for `rgb`, created on first use
    pub fn material_for(
        &mut self,
        materials: &mut Assets<StandardMaterial>,
        rgb: [f32; 3],
    ) -> Handle<StandardMaterial> {
        self.material_cache
            .entry(rgb.map(f32::to_bits))
            .or_insert_with(|| {
                let color = Color::srgb(rgb[0], rgb[1], rgb[2]);
                materials.add(StandardMaterial {
                    base_color: color,
                    emissive: LinearRgba::from(color) * 3.0,
                    unlit: true,
                    ..default()
                })
            })
            .clone()
    }
}

/// Tracks which simulation state the spawned visuals mirror
#[derive(Resource, Default)]
pub struct PopulationVisuals {
    pub explosion_generation: Option<u32>,
    pub galaxy_spawned: bool,
}

/// Maximum rendered particles per population
const MAX_RENDER_PARTICLES: usize = 20_000;

/// Stride that evenly samples `total` particles down to the render cap
pub fn render_stride(total: usize) -> usize {
    if total > MAX_RENDER_PARTICLES {
        total.div_ceil(MAX_RENDER_PARTICLES)
    } else {
        1
    }
}

pub fn setup_point_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    // Unit-diameter low-poly sphere; particle size becomes the transform scale
    let mesh = meshes.add(Sphere::new(0.5).mesh().uv(8, 6));
    commands.insert_resource(PointAssets::new(mesh));
}

/// Respawn explosion entities whenever the simulation regenerates the explosion
pub fn sync_explosion_visuals(
    mut commands: Commands,
    mut assets: ResMut<PointAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
    mut state: ResMut<PopulationVisuals>,
    query: Query<Entity, With<ExplosionPoint>>,
) {
    let generation = sim.explosion_generation();
    if state.explosion_generation == Some(generation) {
        return;
    }
    state.explosion_generation = Some(generation);

    for entity in query.iter() {
        commands.entity(entity).despawn();
    }

    let buffers = sim.explosion().buffers();
    let stride = render_stride(buffers.len());
    let mut spawned = 0;
    for index in (0..buffers.len()).step_by(stride) {
        let p = buffers.positions[index];
        let material = assets.material_for(&mut materials, buffers.colors[index]);
        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(p[0], p[1], p[2]).with_scale(Vec3::splat(buffers.sizes[index])),
            ExplosionPoint { index },
        ));
        spawned += 1;
    }

    info!(
        "Spawned {} explosion points from {} particles (generation {})",
        spawned,
        buffers.len(),
        generation
    );
}

/// Copy explosion positions into entity transforms
pub fn update_explosion_visuals(
    sim: Res<Simulation>,
    mut query: Query<(&mut Transform, &ExplosionPoint)>,
) {
    if !sim.is_changed() {
        return;
    }

    let positions = &sim.explosion().buffers().positions;
    for (mut transform, point) in query.iter_mut() {
        let Some(p) = positions.get(point.index) else {
            continue;
        };
        transform.translation = Vec3::from_array(*p);
    }
}

/// Spawn the galaxy's static points once it exists
pub fn spawn_galaxy_visuals(
    mut commands: Commands,
    mut assets: ResMut<PointAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
    mut state: ResMut<PopulationVisuals>,
) {
    if state.galaxy_spawned {
        return;
    }
    let Some(galaxy) = sim.galaxy() else {
        return;
    };
    state.galaxy_spawned = true;

    let buffers = galaxy.buffers();
    let stride = render_stride(buffers.len());
    for index in (0..buffers.len()).step_by(stride) {
        let p = buffers.positions[index];
        let material = assets.material_for(&mut materials, buffers.colors[index]);
        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(p[0], p[1], p[2]).with_scale(Vec3::splat(buffers.sizes[index])),
            GalaxyPoint,
        ));
    }

    info!("Spawned galaxy visuals for {} particles", buffers.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stride_caps_entity_count() {
        assert_eq!(render_stride(0), 1);
        assert_eq!(render_stride(MAX_RENDER_PARTICLES), 1);
        for total in [MAX_RENDER_PARTICLES + 1, 45_000, 50_000] {
            let stride = render_stride(total);
            let rendered = total.div_ceil(stride);
            assert!(rendered <= MAX_RENDER_PARTICLES, "total {} -> {}", total, rendered);
        }
    }

    #[test]
    fn test_materials_follow_particle_colors() {
        let mut materials = Assets::<StandardMaterial>::default();
        let mut assets = PointAssets::new(Handle::default());

        let warm = assets.material_for(&mut materials, [1.0, 0.62, 0.25]);
        let again = assets.material_for(&mut materials, [1.0, 0.62, 0.25]);
        assert_eq!(warm, again);
        assert_eq!(materials.len(), 1);

        let cool = assets.material_for(&mut materials, [0.45, 0.65, 1.0]);
        assert_ne!(warm, cool);
        assert_eq!(materials.len(), 2);
        let material = materials.get(&cool).expect("material stored");
        assert_eq!(material.base_color, Color::srgb(0.45, 0.65, 1.0));
        assert!(material.unlit);
    }
}
