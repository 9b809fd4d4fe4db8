use bevy::prelude::*;
use nebula_sim::pipeline::SimulationSet;

use super::camera;
use super::particles;
use super::ui;

/// Main render plugin: points, camera, lights and the parameter HUD
pub struct NebulaRenderPlugin;

impl Plugin for NebulaRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<particles::PopulationVisuals>()
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 150.0,
            })
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    spawn_lights,
                    ui::spawn_hud,
                    particles::setup_point_assets,
                ),
            )
            .add_systems(Update, ui::parameter_control_system.before(SimulationSet))
            .add_systems(
                Update,
                (
                    camera::orbit_camera_system,
                    particles::sync_explosion_visuals,
                    particles::update_explosion_visuals.after(particles::sync_explosion_visuals),
                    particles::spawn_galaxy_visuals,
                    ui::update_hud,
                )
                    .after(SimulationSet),
            );
    }
}

/// Warm light at the explosion origin
fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.85, 0.6),
            intensity: 2_000_000.0,
            range: 500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));
}
