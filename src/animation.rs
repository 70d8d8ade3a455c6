//! Closed-form per-frame animators.
//!
//! Every formula here is a pure function of elapsed time `t` and constants
//! fixed when the scene was built. Nothing carries over between frames, so a
//! skipped frame simply resumes wherever `t` lands next.

use glam::{Mat4, Quat, Vec3};

use crate::math::{compose, euler_quat, Rgb};
use crate::placement::Placement;
use crate::scene::Material;

/// `amplitude * sin(t * speed + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl Wave {
    pub const fn new(amplitude: f32, speed: f32, phase: f32) -> Self {
        Self { amplitude, speed, phase }
    }

    pub fn sample(&self, t: f32) -> f32 {
        self.amplitude * (t * self.speed + self.phase).sin()
    }

    /// Remapped to [0, 1]
    pub fn unit(&self, t: f32) -> f32 {
        0.5 + 0.5 * (t * self.speed + self.phase).sin()
    }
}

/// Wraps `t * speed + offset` into `[0, period)`; the looping-motion primitive
pub fn wrap(t: f32, speed: f32, offset: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    (t * speed + offset).rem_euclid(period)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Vertical offset
    Bob(Wave),
    /// Rotation about `axis` by the wave angle
    Sway { axis: Vec3, wave: Wave },
    /// Continuous rotation about `axis`, radians per second
    Spin { axis: Vec3, speed: f32 },
    /// Replaces the position with a circle around `center` on the XZ plane
    Orbit {
        center: Vec3,
        radius: f32,
        speed: f32,
        phase: f32,
        height: f32,
    },
    /// Uniform scale multiplier `1 + wave`
    Breathe(Wave),
    /// Emissive intensity `base + wave`, floored at zero
    Pulse { base: f32, wave: Wave },
    /// Blend from the placement colour toward `to`
    ColorShift { to: Rgb, speed: f32, phase: f32 },
    /// Linear travel that snaps back every `period` seconds
    Drift { velocity: Vec3, period: f32 },
    /// Pendulum swing about a world-space hinge
    Swing { pivot: Vec3, axis: Vec3, wave: Wave },
    /// Continuous revolution about a world-space axis through `pivot`
    Revolve { pivot: Vec3, axis: Vec3, speed: f32 },
}

impl Animation {
    pub fn bob(amplitude: f32, speed: f32, phase: f32) -> Self {
        Animation::Bob(Wave::new(amplitude, speed, phase))
    }

    pub fn spin_y(speed: f32) -> Self {
        Animation::Spin { axis: Vec3::Y, speed }
    }

    pub fn sway(axis: Vec3, amplitude: f32, speed: f32, phase: f32) -> Self {
        Animation::Sway { axis, wave: Wave::new(amplitude, speed, phase) }
    }

    pub fn pulse(base: f32, amplitude: f32, speed: f32, phase: f32) -> Self {
        Animation::Pulse { base, wave: Wave::new(amplitude, speed, phase) }
    }
}

/// Derived per-frame state of an animated object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectState {
    pub transform: Mat4,
    pub color: Rgb,
    pub emissive: f32,
}

/// Applies `animations` in order to the base placement at time `t`.
/// Rotations compose on top of the placement's own rotation; offsets add.
pub fn animate(placement: &Placement, material: &Material, animations: &[Animation], t: f32) -> ObjectState {
    let mut position = placement.position;
    let mut rotation = euler_quat(placement.rotation);
    let mut scale = placement.scale;
    let mut color = placement.color;
    let mut emissive = material.emissive;

    for animation in animations {
        match *animation {
            Animation::Bob(wave) => position.y += wave.sample(t),
            Animation::Sway { axis, wave } => {
                rotation = Quat::from_axis_angle(axis.normalize_or_zero(), wave.sample(t)) * rotation;
            }
            Animation::Spin { axis, speed } => {
                // local spin: the object turns about its own axis
                rotation *= Quat::from_axis_angle(axis.normalize_or_zero(), speed * t);
            }
            Animation::Orbit { center, radius, speed, phase, height } => {
                let angle = t * speed + phase;
                position = center + Vec3::new(angle.cos() * radius, height, angle.sin() * radius);
            }
            Animation::Breathe(wave) => scale *= 1.0 + wave.sample(t),
            Animation::Pulse { base, wave } => emissive = (base + wave.sample(t)).max(0.0),
            Animation::ColorShift { to, speed, phase } => {
                let blend = Wave::new(1.0, speed, phase).unit(t);
                color = color.lerp(to, blend);
            }
            Animation::Drift { velocity, period } => {
                position += velocity * wrap(t, 1.0, 0.0, period);
            }
            Animation::Swing { pivot, axis, wave } => {
                let turn = Quat::from_axis_angle(axis.normalize_or_zero(), wave.sample(t));
                position = pivot + turn * (position - pivot);
                rotation = turn * rotation;
            }
            Animation::Revolve { pivot, axis, speed } => {
                let turn = Quat::from_axis_angle(axis.normalize_or_zero(), speed * t);
                position = pivot + turn * (position - pivot);
                rotation = turn * rotation;
            }
        }
    }

    ObjectState {
        transform: compose(position, rotation, scale),
        color,
        emissive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn wave_is_periodic() {
        let wave = Wave::new(2.0, 1.0, 0.0);
        assert!((wave.sample(0.0) - wave.sample(TAU)).abs() < 1e-5);
    }

    #[test]
    fn wrap_stays_in_period() {
        for i in 0..100 {
            let v = wrap(i as f32 * 0.37, 3.0, 1.0, 5.0);
            assert!((0.0..5.0).contains(&v));
        }
        assert_eq!(wrap(10.0, 1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn revolve_keeps_distance_to_pivot() {
        let pivot = Vec3::new(1.0, 2.0, 0.0);
        let placement = Placement::at(Vec3::new(4.0, 2.0, 0.0));
        let anims = [Animation::Revolve { pivot, axis: Vec3::Z, speed: 0.7 }];
        for i in 0..20 {
            let state = animate(&placement, &Material::default(), &anims, i as f32 * 0.3);
            let position = state.transform.w_axis.truncate();
            assert!((position.distance(pivot) - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn revolve_about_neg_y_tracks_orbit() {
        let orbit = [Animation::Orbit {
            center: Vec3::ZERO,
            radius: 5.0,
            speed: 0.4,
            phase: 0.0,
            height: 0.0,
        }];
        let revolve = [Animation::Revolve { pivot: Vec3::ZERO, axis: Vec3::NEG_Y, speed: 0.4 }];
        let placement = Placement::at(Vec3::new(5.0, 0.0, 0.0));
        for i in 0..10 {
            let t = i as f32 * 0.5;
            let a = animate(&placement, &Material::default(), &orbit, t).transform.w_axis;
            let b = animate(&placement, &Material::default(), &revolve, t).transform.w_axis;
            assert!((a - b).length() < 1e-4);
        }
    }

    #[test]
    fn swing_rests_at_zero_phase() {
        let placement = Placement::at(Vec3::new(0.0, -2.0, 0.0));
        let anims = [Animation::Swing {
            pivot: Vec3::ZERO,
            axis: Vec3::Z,
            wave: Wave::new(0.4, 2.0, 0.0),
        }];
        let state = animate(&placement, &Material::default(), &anims, 0.0);
        assert!((state.transform.w_axis.truncate() - placement.position).length() < 1e-6);
    }

    #[test]
    fn pulse_never_goes_negative() {
        let placement = Placement::at(Vec3::ZERO);
        let material = Material::default();
        let anims = [Animation::pulse(0.1, 1.0, 1.0, 0.0)];
        for i in 0..50 {
            let state = animate(&placement, &material, &anims, i as f32 * 0.2);
            assert!(state.emissive >= 0.0);
        }
    }

    #[test]
    fn drift_loops_every_period() {
        let placement = Placement::at(Vec3::new(0.0, 1.0, 0.0));
        let drift = [Animation::Drift { velocity: Vec3::X, period: 4.0 }];
        let x_at = |t: f32| animate(&placement, &Material::MATTE, &drift, t).transform.w_axis.x;

        assert!((x_at(0.0) - x_at(4.0)).abs() < 1e-5);
        assert!((x_at(1.5) - x_at(9.5)).abs() < 1e-4);
        for i in 0..100 {
            let x = x_at(i as f32 * 0.13);
            assert!((0.0..4.0).contains(&x), "x = {x}");
        }
    }
}
