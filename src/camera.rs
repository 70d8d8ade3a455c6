use glam::{Mat4, Vec3};

use crate::input::{Button, Controller};

pub const ORBIT_SENSITIVITY: f32 = 0.005;
pub const ZOOM_STEP: f32 = 0.9;
pub const MIN_DISTANCE: f32 = 3.0;
pub const MAX_DISTANCE: f32 = 80.0;
const MAX_PITCH: f32 = 1.45;

/// Orbit camera circling a target point; every scene starts from the same pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 1.5, 0.0),
            distance: 18.0,
            yaw: 0.6,
            pitch: 0.35,
            fov_y: 50f32.to_radians(),
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + offset * self.distance
    }

    /// Drag by `(dx, dy)` pixels
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Positive notches move closer
    pub fn zoom(&mut self, notches: f32) {
        self.distance = (self.distance * ZOOM_STEP.powf(notches)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, controller: &dyn Controller, mouse_delta: (f32, f32), scroll: f32) {
        if controller.is_down(Button::MouseLeft) {
            self.orbit(mouse_delta.0, mouse_delta.1);
        }
        if scroll != 0.0 {
            self.zoom(scroll);
        }
        if controller.was_pressed(Button::KeyR) {
            self.reset();
        }
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, aspect.max(0.01), 0.1, 500.0);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sits_at_distance() {
        let camera = Camera::new();
        assert!(((camera.eye() - camera.target).length() - camera.distance).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::new();
        camera.orbit(0.0, 100_000.0);
        assert!(camera.pitch <= MAX_PITCH);
        camera.orbit(0.0, -100_000.0);
        assert!(camera.pitch >= -MAX_PITCH);
    }

    #[test]
    fn zoom_respects_limits() {
        let mut camera = Camera::new();
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn reset_restores_default_pose() {
        let mut camera = Camera::new();
        camera.orbit(120.0, 40.0);
        camera.reset();
        assert_eq!(camera, Camera::default());
    }
}
