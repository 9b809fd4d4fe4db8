use bevy::prelude::*;
use nebula_core::{SimConfig, SimulationParameters};

use super::universe::Simulation;

/// Externally tunable parameters (edited by the HUD panel)
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct Parameters(pub SimulationParameters);

/// Systems that mutate `Simulation` each frame; renderers run after this set
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin {
    pub config: SimConfig,
}

impl SimulationPlugin {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let mut config = self.config.clone();
        if let Err(e) = config.parameters.validate() {
            warn!("Invalid startup parameters, clamping: {}", e);
            config.parameters = config.parameters.clamped();
        }

        app.insert_resource(Parameters(config.parameters.clone()))
            .insert_resource(Simulation::new(config))
            .add_systems(
                Update,
                (
                    regenerate_on_count_change.run_if(resource_changed::<Parameters>),
                    simulation_tick,
                )
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}

/// Replace the explosion when the panel asks for a different particle count
fn regenerate_on_count_change(mut sim: ResMut<Simulation>, params: Res<Parameters>) {
    sim.sync_explosion_count(&params);
}

/// Main simulation tick
fn simulation_tick(mut sim: ResMut<Simulation>, params: Res<Parameters>, time: Res<Time>) {
    let dt = time.delta_secs_f64();
    sim.tick(dt, &params);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_core::Phase;
    use std::time::Duration;

    fn test_app() -> App {
        let mut config = SimConfig::default();
        config.parameters.explosion_particle_count = 32;
        config.parameters.galaxy_particle_count = 64;

        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(SimulationPlugin::new(config));
        app
    }

    #[test]
    fn test_frames_drive_the_clock_and_phase() {
        let mut app = test_app();
        app.update();
        assert_eq!(app.world().resource::<Simulation>().elapsed(), 0.0);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(6));
        app.update();
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.elapsed(), 6.0);
        assert_eq!(sim.phase(), Phase::PreGalaxy);

        // Time's delta is unchanged, so this frame ticks another 6 units
        app.update();
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.elapsed(), 12.0);
        assert_eq!(sim.galaxy().map(|g| g.len()), Some(64));
    }

    #[test]
    fn test_invalid_startup_parameters_are_clamped() {
        let mut config = SimConfig::default();
        config.parameters.explosion_particle_count = 8;
        config.parameters.expansion_speed = -1.0;
        config.parameters.galaxy_spread = f32::NAN;

        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(SimulationPlugin::new(config));

        let params = app.world().resource::<Parameters>();
        assert!(params.validate().is_ok());
        assert_eq!(params.explosion_particle_count, 8);

        // The clock now moves instead of rejecting every frame
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();
        assert!(app.world().resource::<Simulation>().elapsed() > 0.0);
    }

    #[test]
    fn test_count_change_regenerates() {
        let mut app = test_app();
        app.update();
        assert_eq!(app.world().resource::<Simulation>().explosion().len(), 32);

        app.world_mut()
            .resource_mut::<Parameters>()
            .explosion_particle_count = 5;
        app.update();
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.explosion().len(), 5);
        assert_eq!(sim.explosion_generation(), 1);
    }

    #[test]
    fn test_speed_change_applies_next_frame() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();
        app.world_mut().resource_mut::<Parameters>().expansion_speed = 4.0;
        app.update();
        assert_eq!(app.world().resource::<Simulation>().elapsed(), 5.0);
        // Speed edits alone never regenerate
        assert_eq!(app.world().resource::<Simulation>().explosion_generation(), 0);
    }
}
