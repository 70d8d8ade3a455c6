use std::f32::consts::TAU;
use std::ops::Range;

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::Rng;

use crate::math::{compose, euler_quat, Rgb};

/// Seeded generator handed to every scene at mount time
pub type SceneRng = StdRng;

/// One placed object: where it sits, how it is turned and sized, what colour it is.
/// Generated once when a scene mounts and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// XYZ Euler angles in radians
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Rgb,
}

impl Placement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: Rgb::WHITE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.rotation.y = yaw;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        compose(self.position, euler_quat(self.rotation), self.scale)
    }
}

/// Shorthand for a placed, sized, coloured object
pub fn place(position: Vec3, scale: Vec3, color: Rgb) -> Placement {
    Placement::at(position).with_scale(scale).with_color(color)
}

// ============================================================================
// Closed-form layouts
// ============================================================================

/// Evenly spaced ring on the XZ plane; each entry is yawed to face the centre
pub fn ring(
    center: Vec3,
    radius: f32,
    count: usize,
    scale: Vec3,
    colors: impl Fn(usize) -> Rgb,
) -> Vec<Placement> {
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32) * TAU;
            let position = center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
            place(position, scale, colors(i)).with_yaw(-angle - TAU * 0.25)
        })
        .collect()
}

/// Concentric rings, count and scale chosen per ring
pub fn rings(
    center: Vec3,
    base_radius: f32,
    radius_step: f32,
    ring_count: usize,
    per_ring: impl Fn(usize) -> usize,
    scale: impl Fn(usize) -> Vec3,
    colors: impl Fn(usize, usize) -> Rgb,
) -> Vec<Placement> {
    (0..ring_count)
        .flat_map(|ring_idx| {
            let radius = base_radius + ring_idx as f32 * radius_step;
            ring(center, radius, per_ring(ring_idx), scale(ring_idx), |i| colors(ring_idx, i))
        })
        .collect()
}

/// Rising spiral around `center`
pub fn spiral(
    center: Vec3,
    start_radius: f32,
    end_radius: f32,
    height_per_turn: f32,
    turns: f32,
    per_turn: usize,
    scale: Vec3,
    colors: impl Fn(usize) -> Rgb,
) -> Vec<Placement> {
    let total = (turns * per_turn as f32) as usize;

    (0..total)
        .map(|i| {
            let t = i as f32 / total as f32;
            let angle = t * turns * TAU;
            let radius = start_radius + (end_radius - start_radius) * t;
            let position = center + Vec3::new(
                angle.cos() * radius,
                t * turns * height_per_turn,
                angle.sin() * radius,
            );
            place(position, scale, colors(i)).with_yaw(-angle)
        })
        .collect()
}

/// Lattice on the XZ plane centred on `center`
pub fn grid(
    center: Vec3,
    spacing: f32,
    count_x: usize,
    count_z: usize,
    scale: Vec3,
    colors: impl Fn(usize, usize) -> Rgb,
) -> Vec<Placement> {
    let offset_x = (count_x as f32 - 1.0) * spacing * 0.5;
    let offset_z = (count_z as f32 - 1.0) * spacing * 0.5;

    (0..count_x)
        .flat_map(|x| (0..count_z).map(move |z| (x, z)))
        .map(|(x, z)| {
            let position = Vec3::new(
                center.x + x as f32 * spacing - offset_x,
                center.y,
                center.z + z as f32 * spacing - offset_z,
            );
            place(position, scale, colors(x, z))
        })
        .collect()
}

/// `count` entries evenly spaced from `start` to `end` inclusive
pub fn line(
    start: Vec3,
    end: Vec3,
    count: usize,
    scale: Vec3,
    colors: impl Fn(usize) -> Rgb,
) -> Vec<Placement> {
    (0..count)
        .map(|i| {
            let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 };
            place(start.lerp(end, t), scale, colors(i))
        })
        .collect()
}

// ============================================================================
// Seeded-random layouts
// ============================================================================

fn pick(rng: &mut SceneRng, palette: &[Rgb]) -> Rgb {
    if palette.is_empty() {
        Rgb::WHITE
    } else {
        palette[rng.gen_range(0..palette.len())]
    }
}

fn sample(rng: &mut SceneRng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

/// Uniform random inside the box `min..max` with random yaw and uniform scale
pub fn scatter(
    rng: &mut SceneRng,
    count: usize,
    min: Vec3,
    max: Vec3,
    scale: Range<f32>,
    palette: &[Rgb],
) -> Vec<Placement> {
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                sample(rng, &(min.x..max.x)),
                sample(rng, &(min.y..max.y)),
                sample(rng, &(min.z..max.z)),
            );
            let size = sample(rng, &scale);
            let yaw = rng.gen_range(0.0..TAU);
            place(position, Vec3::splat(size), pick(rng, palette)).with_yaw(yaw)
        })
        .collect()
}

/// Uniform random inside an annulus on the XZ plane at `center.y`
pub fn scatter_disc(
    rng: &mut SceneRng,
    count: usize,
    center: Vec3,
    inner: f32,
    outer: f32,
    scale: Range<f32>,
    palette: &[Rgb],
) -> Vec<Placement> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            // sqrt keeps the density uniform over the area
            let radius = sample(rng, &(inner * inner..outer * outer)).sqrt();
            let position = center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
            let size = sample(rng, &scale);
            let yaw = rng.gen_range(0.0..TAU);
            place(position, Vec3::splat(size), pick(rng, palette)).with_yaw(yaw)
        })
        .collect()
}

/// Nudges every colour by up to `amount` in value, keeping hue
pub fn jitter_colors(rng: &mut SceneRng, placements: Vec<Placement>, amount: f32) -> Vec<Placement> {
    placements
        .into_iter()
        .map(|mut p| {
            let factor = 1.0 + rng.gen_range(-amount..=amount);
            p.color = p.color.scaled(factor);
            p
        })
        .collect()
}

// ============================================================================
// Transformers
// ============================================================================

pub fn translate(placements: Vec<Placement>, offset: Vec3) -> Vec<Placement> {
    placements
        .into_iter()
        .map(|mut p| {
            p.position += offset;
            p
        })
        .collect()
}

/// Scales positions and sizes about `center`
pub fn scale_about(placements: Vec<Placement>, center: Vec3, factor: f32) -> Vec<Placement> {
    placements
        .into_iter()
        .map(|mut p| {
            p.position = (p.position - center) * factor + center;
            p.scale *= factor;
            p
        })
        .collect()
}

// ============================================================================
// Colour generators
// ============================================================================

pub fn rainbow_gradient(total: usize) -> impl Fn(usize) -> Rgb {
    move |i| Rgb::from_hsv(i as f32 / total.max(1) as f32, 0.7, 0.9)
}

pub fn solid_color(color: Rgb) -> impl Fn(usize) -> Rgb {
    move |_| color
}

pub fn alternating_colors(first: Rgb, second: Rgb) -> impl Fn(usize) -> Rgb {
    move |i| if i % 2 == 0 { first } else { second }
}

pub fn gradient(from: Rgb, to: Rgb, steps: usize) -> impl Fn(usize) -> Rgb {
    move |i| from.lerp(to, (i % steps.max(1)) as f32 / steps.max(1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn ring_spacing_is_even() {
        let placements = ring(Vec3::ZERO, 4.0, 8, Vec3::ONE, solid_color(Rgb::WHITE));
        assert_eq!(placements.len(), 8);
        for p in &placements {
            assert!((p.position.length() - 4.0).abs() < 1e-4);
        }
        let first = placements[0].position;
        assert!((first - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn line_hits_both_ends() {
        let placements = line(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 3, Vec3::ONE, solid_color(Rgb::WHITE));
        assert_eq!(placements[0].position, Vec3::ZERO);
        assert_eq!(placements[1].position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(placements[2].position, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn sample_tolerates_empty_range() {
        let mut rng = SceneRng::seed_from_u64(1);
        assert_eq!(sample(&mut rng, &(2.0..2.0)), 2.0);
    }
}
