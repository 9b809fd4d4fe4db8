use bevy::prelude::*;
use nebula_core::SimConfig;
use nebula_render::plugin::NebulaRenderPlugin;
use nebula_sim::pipeline::SimulationPlugin;

fn main() {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Nebula: Explosion to Galaxy".into(),
                resolution: (1600.0, 900.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
        .add_plugins(SimulationPlugin::new(config))
        .add_plugins(NebulaRenderPlugin)
        .run();
}
