use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 2_000.0;
const MAX_PITCH: f32 = 1.5;

/// Camera that orbits the origin (where the explosion starts)
#[derive(Component)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub sensitivity: f32,
    /// Fraction of the distance covered by one scroll line
    pub zoom_step: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.4,
            distance: 120.0,
            sensitivity: 0.005,
            zoom_step: 0.1,
        }
    }
}

impl OrbitCamera {
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.sensitivity;
        self.pitch = (self.pitch + delta.y * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll * self.zoom_step).max(0.1);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Camera position on the orbit sphere
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let transform = orbit.transform();
    info!(
        "Camera spawned at ({:.0}, {:.0}, {:.0})",
        transform.translation.x, transform.translation.y, transform.translation.z
    );

    commands.spawn((Camera3d::default(), IsDefaultUiCamera, transform, orbit));
}

/// RMB drag orbits, scroll zooms
pub fn orbit_camera_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut orbit)) = query.get_single_mut() else {
        return;
    };

    let dragging = mouse_buttons.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO;
    let scrolling = mouse_scroll.delta.y != 0.0;
    if !dragging && !scrolling {
        return;
    }

    if dragging {
        orbit.orbit(mouse_motion.delta);
    }
    if scrolling {
        orbit.zoom(mouse_scroll.delta.y);
    }
    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_sits_on_orbit_sphere() {
        let mut orbit = OrbitCamera::default();
        for delta in [Vec2::new(40.0, 10.0), Vec2::new(-300.0, 80.0), Vec2::new(5.0, -900.0)] {
            orbit.orbit(delta);
            assert!((orbit.translation().length() - orbit.distance).abs() < 1e-2);
        }
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, 1e6));
        assert_eq!(orbit.pitch, MAX_PITCH);
        orbit.orbit(Vec2::new(0.0, -1e6));
        assert_eq!(orbit.pitch, -MAX_PITCH);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom(1.0);
        assert!(orbit.distance < 120.0);
        for _ in 0..200 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..200 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }
}
