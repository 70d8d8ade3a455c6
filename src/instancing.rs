//! Instanced batches: many copies of one mesh whose transforms are rebuilt
//! from scratch every frame.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::{Mat4, Quat, Vec3};
use rand::Rng;

use crate::animation::wrap;
use crate::math::{compose, yaw_towards, Rgb};
use crate::mesh::Primitive;
use crate::placement::SceneRng;
use crate::scene::Material;
use crate::types::InstanceRaw;

/// Constants drawn once per instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceParams {
    pub origin: Vec3,
    pub scale: f32,
    pub phase: f32,
    pub speed: f32,
    pub radius: f32,
    pub amplitude: f32,
    pub color: Rgb,
}

impl InstanceParams {
    pub fn at(origin: Vec3) -> Self {
        Self {
            origin,
            scale: 1.0,
            phase: 0.0,
            speed: 1.0,
            radius: 0.0,
            amplitude: 0.0,
            color: Rgb::WHITE,
        }
    }
}

/// Ranges used by [`InstanceParams::scatter`]
#[derive(Debug, Clone)]
pub struct ParamRanges {
    pub min: Vec3,
    pub max: Vec3,
    pub scale: Range<f32>,
    pub speed: Range<f32>,
    pub radius: Range<f32>,
    pub amplitude: Range<f32>,
}

impl ParamRanges {
    pub fn in_box(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            scale: 1.0..1.0,
            speed: 1.0..1.0,
            radius: 0.0..0.0,
            amplitude: 0.0..0.0,
        }
    }

    pub fn scale(mut self, range: Range<f32>) -> Self {
        self.scale = range;
        self
    }

    pub fn speed(mut self, range: Range<f32>) -> Self {
        self.speed = range;
        self
    }

    pub fn radius(mut self, range: Range<f32>) -> Self {
        self.radius = range;
        self
    }

    pub fn amplitude(mut self, range: Range<f32>) -> Self {
        self.amplitude = range;
        self
    }
}

fn draw(rng: &mut SceneRng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

impl InstanceParams {
    /// Draws `count` independent parameter sets
    pub fn scatter(rng: &mut SceneRng, count: usize, ranges: &ParamRanges, palette: &[Rgb]) -> Vec<Self> {
        (0..count)
            .map(|_| {
                let origin = Vec3::new(
                    draw(rng, &(ranges.min.x..ranges.max.x)),
                    draw(rng, &(ranges.min.y..ranges.max.y)),
                    draw(rng, &(ranges.min.z..ranges.max.z)),
                );
                let color = if palette.is_empty() {
                    Rgb::WHITE
                } else {
                    palette[rng.gen_range(0..palette.len())]
                };
                Self {
                    origin,
                    scale: draw(rng, &ranges.scale),
                    phase: rng.gen_range(0.0..TAU),
                    speed: draw(rng, &ranges.speed),
                    radius: draw(rng, &ranges.radius),
                    amplitude: draw(rng, &ranges.amplitude),
                    color,
                }
            })
            .collect()
    }
}

/// Closed-form motion shared by every instance of a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstanceMotion {
    Still,
    /// Descends from `top` to `bottom` and wraps; sways by `amplitude` and tumbles
    Fall { top: f32, bottom: f32 },
    /// Ascends from `bottom` to `top` and wraps; wobbles by `amplitude`
    Rise { bottom: f32, top: f32 },
    /// Travels along `direction` for `span` units then wraps back to the origin
    Stream { direction: Vec3, span: f32 },
    /// Circles `center` at each instance's radius; `origin.y` is the height
    Orbit { center: Vec3 },
    /// Lissajous drift of size `amplitude` around the origin
    Hover,
    /// Scale and glow pulse in place
    Twinkle,
    /// Height follows a travelling wave across the XZ plane
    Swell { wavelength: f32 },
    /// Rotates in place about Y
    Spin,
}

/// Per-instance output of a motion formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstancePose {
    pub transform: Mat4,
    pub glow: f32,
}

impl InstanceMotion {
    pub fn pose(&self, p: &InstanceParams, t: f32) -> InstancePose {
        let scale = Vec3::splat(p.scale);
        let angle = t * p.speed + p.phase;
        let (transform, glow) = match *self {
            InstanceMotion::Still => (compose(p.origin, Quat::from_rotation_y(p.phase), scale), 1.0),
            InstanceMotion::Fall { top, bottom } => {
                let (bottom, top) = (bottom.min(top), bottom.max(top));
                let span = (top - bottom).max(f32::EPSILON);
                let offset = p.phase / TAU * span + (top - p.origin.y).max(0.0);
                let y = top - wrap(t, p.speed, offset, span);
                let position = Vec3::new(
                    p.origin.x + p.amplitude * angle.sin(),
                    y,
                    p.origin.z + p.amplitude * (angle * 0.7).cos(),
                );
                let tumble = Quat::from_euler(glam::EulerRot::XYZ, angle, angle * 0.5, angle * 0.3);
                (compose(position, tumble, scale), 1.0)
            }
            InstanceMotion::Rise { bottom, top } => {
                let (bottom, top) = (bottom.min(top), bottom.max(top));
                let span = (top - bottom).max(f32::EPSILON);
                let offset = p.phase / TAU * span + (p.origin.y - bottom).max(0.0);
                let y = bottom + wrap(t, p.speed, offset, span);
                let position = Vec3::new(
                    p.origin.x + p.amplitude * (angle * 1.3).sin(),
                    y,
                    p.origin.z + p.amplitude * angle.cos(),
                );
                // fade out toward the top of the loop
                let glow = 1.0 - (y - bottom) / span;
                (compose(position, Quat::IDENTITY, scale), glow)
            }
            InstanceMotion::Stream { direction, span } => {
                let travel = wrap(t, p.speed, p.phase / TAU * span, span);
                let dir = direction.normalize_or_zero();
                let sway = Vec3::Y * p.amplitude * angle.sin();
                let position = p.origin + dir * travel + sway;
                let heading = Quat::from_rotation_y(yaw_towards(dir));
                (compose(position, heading, scale), 1.0)
            }
            InstanceMotion::Orbit { center } => {
                let position = Vec3::new(
                    center.x + angle.cos() * p.radius,
                    p.origin.y + p.amplitude * (angle * 2.0).sin(),
                    center.z + angle.sin() * p.radius,
                );
                // heading follows the tangent of the circle
                let tangent = Vec3::new(-angle.sin(), 0.0, angle.cos()) * p.speed.signum();
                let heading = Quat::from_rotation_y(yaw_towards(tangent));
                (compose(position, heading, scale), 1.0)
            }
            InstanceMotion::Hover => {
                let position = p.origin
                    + Vec3::new(
                        angle.sin(),
                        (angle * 1.7).sin() * 0.5,
                        (angle * 0.6).cos(),
                    ) * p.amplitude;
                let glow = 0.5 + 0.5 * (angle * 3.0).sin();
                (compose(position, Quat::IDENTITY, scale), glow)
            }
            InstanceMotion::Twinkle => {
                let pulse = 0.5 + 0.5 * angle.sin();
                (
                    compose(p.origin, Quat::IDENTITY, scale * (0.6 + 0.4 * pulse)),
                    pulse,
                )
            }
            InstanceMotion::Swell { wavelength } => {
                let k = TAU / wavelength.max(f32::EPSILON);
                let height = p.amplitude * ((p.origin.x + p.origin.z * 0.6) * k + t * p.speed).sin();
                let position = p.origin + Vec3::Y * height;
                (compose(position, Quat::IDENTITY, scale), 1.0)
            }
            InstanceMotion::Spin => (compose(p.origin, Quat::from_rotation_y(angle), scale), 1.0),
        };
        InstancePose { transform, glow }
    }
}

/// One mesh drawn many times; the buffer always holds one entry per parameter set
#[derive(Debug, Clone)]
pub struct InstancedBatch {
    label: String,
    primitive: Primitive,
    material: Material,
    motion: InstanceMotion,
    params: Vec<InstanceParams>,
    buffer: Vec<InstanceRaw>,
    dirty: bool,
}

impl InstancedBatch {
    pub fn new(
        label: impl Into<String>,
        primitive: Primitive,
        material: Material,
        motion: InstanceMotion,
        params: Vec<InstanceParams>,
    ) -> Self {
        let mut batch = Self {
            label: label.into(),
            primitive,
            material,
            motion,
            buffer: Vec::with_capacity(params.len()),
            params,
            dirty: true,
        };
        batch.update(0.0);
        batch
    }

    /// Rebuilds every instance transform for time `t` and marks the buffer for upload
    pub fn update(&mut self, t: f32) {
        let motion = self.motion;
        let material = self.material;
        self.buffer.clear();
        self.buffer.extend(self.params.iter().map(|p| {
            let pose = motion.pose(p, t);
            InstanceRaw::new(pose.transform, p.color, material.emissive * pose.glow, material.gloss)
        }));
        self.dirty = true;
    }

    /// Returns whether an upload is pending and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn params(&self) -> &[InstanceParams] {
        &self.params
    }

    pub fn instances(&self) -> &[InstanceRaw] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fall_stays_between_bounds() {
        let motion = InstanceMotion::Fall { top: 10.0, bottom: 0.0 };
        let mut p = InstanceParams::at(Vec3::new(0.0, 5.0, 0.0));
        p.speed = 2.0;
        for i in 0..200 {
            let pose = motion.pose(&p, i as f32 * 0.13);
            let y = pose.transform.w_axis.y;
            assert!(y > 0.0 - 1e-4 && y <= 10.0 + 1e-4, "y = {y}");
        }
    }

    #[test]
    fn twinkle_glow_is_unit_range() {
        let p = InstanceParams::at(Vec3::ZERO);
        for i in 0..100 {
            let glow = InstanceMotion::Twinkle.pose(&p, i as f32 * 0.1).glow;
            assert!((0.0..=1.0).contains(&glow));
        }
    }

    #[test]
    fn take_dirty_clears_flag() {
        let mut batch = InstancedBatch::new(
            "dust",
            Primitive::Sphere,
            Material::default(),
            InstanceMotion::Hover,
            vec![InstanceParams::at(Vec3::ZERO)],
        );
        assert!(batch.take_dirty());
        assert!(!batch.take_dirty());
        batch.update(1.0);
        assert!(batch.is_dirty());
    }

    #[test]
    fn swapped_bounds_keep_the_same_column() {
        let mut p = InstanceParams::at(Vec3::new(0.0, 5.0, 0.0));
        p.speed = 1.0;
        for motion in [InstanceMotion::Fall { top: 0.0, bottom: 10.0 }, InstanceMotion::Rise { bottom: 10.0, top: 0.0 }] {
            for i in 0..100 {
                let y = motion.pose(&p, i as f32 * 0.5).transform.w_axis.y;
                assert!((-1e-4..=10.0 + 1e-4).contains(&y), "{motion:?}: y = {y}");
            }
        }
    }

    #[test]
    fn stream_travel_wraps_within_span() {
        let motion = InstanceMotion::Stream { direction: Vec3::new(2.0, 0.0, 0.0), span: 12.0 };
        let mut p = InstanceParams::at(Vec3::new(-6.0, 1.0, 3.0));
        p.speed = 5.0;
        p.phase = 1.0;
        for i in 0..300 {
            let at = motion.pose(&p, i as f32 * 0.07).transform.w_axis.truncate();
            let travel = (at - p.origin).dot(Vec3::X);
            assert!((0.0..12.0).contains(&travel), "travel = {travel}");
        }
        // one full loop later the instance is back where it was
        let start = motion.pose(&p, 0.3).transform.w_axis;
        let looped = motion.pose(&p, 0.3 + 12.0 / 5.0).transform.w_axis;
        assert!((start - looped).length() < 1e-3);
    }

    #[test]
    fn spin_turns_in_place() {
        let mut p = InstanceParams::at(Vec3::new(1.0, 2.0, 3.0));
        p.speed = 3.0;
        for i in 0..20 {
            let at = InstanceMotion::Spin.pose(&p, i as f32 * 0.4).transform.w_axis.truncate();
            assert!((at - p.origin).length() < 1e-5);
        }
    }
}
