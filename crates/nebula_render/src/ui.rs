use bevy::prelude::*;
use nebula_core::SimulationParameters;
use nebula_sim::pipeline::Parameters;
use nebula_sim::universe::Simulation;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

const SPEED_FACTOR: f64 = 1.25;
const EXPLOSION_COUNT_STEP: u32 = 500;
const GALAXY_COUNT_STEP: u32 = 1_000;
const SPREAD_STEP: f32 = 25.0;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Nebula"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 0.8, 0.5, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Format large numbers in human-readable form
fn fmt_count(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        format!("{}", n)
    }
}

/// Update HUD text every 10th frame
pub fn update_hud(
    sim: Res<Simulation>,
    params: Res<Parameters>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let paused = if sim.paused { " [PAUSED]" } else { "" };
    let galaxy = match sim.galaxy() {
        Some(g) => format!("{} particles | spread {:.0}", fmt_count(g.len()), g.spread()),
        None => format!("spawns when clock > {:.0}", sim.galaxy_threshold()),
    };

    **text = format!(
        "NEBULA | Phase: {}{}\n\
         Clock: {:.2} | Radius: {:.1}\n\
         Explosion: {} particles\n\
         Galaxy: {}\n\
         \n\
         Speed: {:.2}x | Explosion count: {}\n\
         Galaxy count: {} | Spread: {:.0}\n\
         \n\
         [RMB+Mouse] Orbit  [Scroll] Zoom\n\
         [Up/Down] Speed  [+/-] Explosion count  [R] Regenerate\n\
         [,/.] Galaxy count  [ [ / ] ] Spread  [Space] Pause",
        sim.phase().name(),
        paused,
        sim.elapsed(),
        sim.explosion().buffers().max_radius(),
        fmt_count(sim.explosion().len()),
        galaxy,
        params.expansion_speed,
        params.explosion_particle_count,
        params.galaxy_particle_count,
        params.galaxy_spread,
    );
}

/// Parameters after a single panel key press
pub fn adjust_parameters(params: &SimulationParameters, key: KeyCode) -> SimulationParameters {
    let mut next = params.clone();
    match key {
        KeyCode::ArrowUp => next.expansion_speed *= SPEED_FACTOR,
        KeyCode::ArrowDown => next.expansion_speed /= SPEED_FACTOR,
        KeyCode::Equal | KeyCode::NumpadAdd => {
            next.explosion_particle_count =
                next.explosion_particle_count.saturating_add(EXPLOSION_COUNT_STEP)
        }
        KeyCode::Minus | KeyCode::NumpadSubtract => {
            next.explosion_particle_count =
                next.explosion_particle_count.saturating_sub(EXPLOSION_COUNT_STEP)
        }
        KeyCode::Period => {
            next.galaxy_particle_count =
                next.galaxy_particle_count.saturating_add(GALAXY_COUNT_STEP)
        }
        KeyCode::Comma => {
            next.galaxy_particle_count =
                next.galaxy_particle_count.saturating_sub(GALAXY_COUNT_STEP)
        }
        KeyCode::BracketRight => next.galaxy_spread += SPREAD_STEP,
        KeyCode::BracketLeft => next.galaxy_spread -= SPREAD_STEP,
        _ => return next,
    }
    next.clamped()
}

/// Keyboard parameter panel. Only writes `Parameters` when a value actually
/// changes, so change detection (and regeneration) stays quiet otherwise.
pub fn parameter_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut params: ResMut<Parameters>,
    mut sim: ResMut<Simulation>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        sim.paused = !sim.paused;
        info!("Simulation {}", if sim.paused { "paused" } else { "resumed" });
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        sim.regenerate_explosion(params.explosion_particle_count);
    }

    let current = params.0.clone();
    let next = keyboard
        .get_just_pressed()
        .fold(current.clone(), |acc, key| adjust_parameters(&acc, *key));
    if next != current {
        params.0 = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_core::{EXPANSION_SPEED_RANGE, GALAXY_SPREAD_RANGE, MAX_PARTICLE_COUNT};

    #[test]
    fn test_fmt_count() {
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(2_500), "2.5K");
        assert_eq!(fmt_count(3_000_000), "3.0M");
    }

    #[test]
    fn test_speed_keys_stay_in_range() {
        let mut params = SimulationParameters::default();
        for _ in 0..100 {
            params = adjust_parameters(&params, KeyCode::ArrowUp);
        }
        assert_eq!(params.expansion_speed, EXPANSION_SPEED_RANGE.1);
        for _ in 0..100 {
            params = adjust_parameters(&params, KeyCode::ArrowDown);
        }
        assert_eq!(params.expansion_speed, EXPANSION_SPEED_RANGE.0);
    }

    #[test]
    fn test_count_keys_saturate() {
        let mut params = SimulationParameters::default();
        for _ in 0..10 {
            params = adjust_parameters(&params, KeyCode::Minus);
        }
        assert_eq!(params.explosion_particle_count, 0);
        for _ in 0..200 {
            params = adjust_parameters(&params, KeyCode::Period);
        }
        assert_eq!(params.galaxy_particle_count, MAX_PARTICLE_COUNT);
    }

    #[test]
    fn test_spread_keys_and_unbound_keys() {
        let params = SimulationParameters::default();
        let wider = adjust_parameters(&params, KeyCode::BracketRight);
        assert_eq!(wider.galaxy_spread, params.galaxy_spread + SPREAD_STEP);

        let mut narrow = params.clone();
        for _ in 0..50 {
            narrow = adjust_parameters(&narrow, KeyCode::BracketLeft);
        }
        assert_eq!(narrow.galaxy_spread, GALAXY_SPREAD_RANGE.0);

        assert_eq!(adjust_parameters(&params, KeyCode::KeyQ), params);
    }
}
