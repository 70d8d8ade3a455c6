use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::animation::{Animation, Wave};
use crate::math::{euler_quat, Rgb};
use crate::mesh::Primitive;
use crate::placement::{place, Placement};
use crate::scene::{Material, SceneBuilder};

const GOLDEN_RATIO_CONJUGATE: f32 = 0.618_034;

/// Rotation that stands a flat torus upright, facing +Z
pub const UPRIGHT: Vec3 = Vec3::new(TAU * 0.25, 0.0, 0.0);

/// Hue sequence that never clumps, one step per index
pub fn golden_hue(index: u32) -> f32 {
    (index as f32 * GOLDEN_RATIO_CONJUGATE) % 1.0
}

pub fn golden_color(index: u32, saturation: f32, value: f32) -> Rgb {
    Rgb::from_hsv(golden_hue(index), saturation, value)
}

/// `count` colours spread across `spread` of the hue wheel starting at `base`
pub fn hue_band(base: f32, spread: f32, count: usize, saturation: f32, value: f32) -> Vec<Rgb> {
    (0..count)
        .map(|i| Rgb::from_hsv(base + spread * i as f32 / count.max(1) as f32, saturation, value))
        .collect()
}

/// Square floor of side `size` at height `y`
pub fn ground(size: f32, y: f32, color: Rgb) -> Placement {
    place(Vec3::new(0.0, y, 0.0), Vec3::new(size, 1.0, size), color)
}

/// Cube spanning `min..max`
pub fn slab(min: Vec3, max: Vec3, color: Rgb) -> Placement {
    place((min + max) * 0.5, max - min, color)
}

/// Upright cylinder standing on `base`
pub fn post(base: Vec3, height: f32, radius: f32, color: Rgb) -> Placement {
    place(
        base + Vec3::Y * height * 0.5,
        Vec3::new(radius * 2.0, height, radius * 2.0),
        color,
    )
}

/// Points on a vertical circle in the XY plane around `center`
pub fn vertical_ring(center: Vec3, radius: f32, count: usize) -> impl Iterator<Item = Vec3> {
    (0..count).map(move |i| {
        let angle = i as f32 / count as f32 * TAU;
        center + Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
    })
}

/// Trunk plus a stacked-cone or round canopy
pub fn tree(
    builder: SceneBuilder,
    base: Vec3,
    height: f32,
    trunk: Rgb,
    canopy: Rgb,
    conifer: bool,
) -> SceneBuilder {
    let trunk_height = height * 0.4;
    let builder = builder.add(
        Primitive::Cylinder,
        post(base, trunk_height, height * 0.05, trunk),
        Material::MATTE,
    );
    if conifer {
        (0..3).fold(builder, |b, tier| {
            let width = height * (0.5 - tier as f32 * 0.12);
            let y = trunk_height + tier as f32 * height * 0.18 + height * 0.15;
            b.add(
                Primitive::Cone,
                place(base + Vec3::Y * y, Vec3::new(width, height * 0.3, width), canopy),
                Material::MATTE,
            )
        })
    } else {
        let size = height * 0.6;
        builder.add(
            Primitive::Sphere,
            place(base + Vec3::Y * (trunk_height + size * 0.35), Vec3::splat(size), canopy),
            Material::MATTE,
        )
    }
}

/// Curved trunk leaning toward `lean_yaw` with a crown of drooping fronds,
/// the whole palm swaying from its base
pub fn palm(builder: SceneBuilder, base: Vec3, height: f32, lean_yaw: f32, phase: f32) -> SceneBuilder {
    let turn = Quat::from_rotation_y(lean_yaw);
    let sway = Animation::Swing {
        pivot: base,
        axis: turn * Vec3::Z,
        wave: Wave::new(0.05, 0.8, phase),
    };
    let segments = 6;
    let trunk = (0..segments).map(|i| {
        let t = (i as f32 + 0.5) / segments as f32;
        let offset = turn * Vec3::new(t * t * height * 0.25, t * height, 0.0);
        place(base + offset, Vec3::new(0.35, height / segments as f32 * 1.15, 0.35), Rgb::hex(0x8a6a3e))
            .with_rotation(Vec3::new(0.0, lean_yaw, -t * 0.45))
    });

    let crown = base + turn * Vec3::new(height * 0.25, height, 0.0);
    let frond_length = height * 0.45;
    let fronds = (0..7).map(move |i| {
        let rotation = Vec3::new(0.0, i as f32 / 7.0 * TAU, 1.9);
        let reach = euler_quat(rotation) * Vec3::Y;
        place(crown + reach * frond_length * 0.5, Vec3::new(0.5, frond_length, 0.12), Rgb::hex(0x3f8a3a))
            .with_rotation(rotation)
    });

    builder
        .add_all_animated(Primitive::Cylinder, trunk, Material::MATTE, |_, _| vec![sway])
        .add_all_animated(Primitive::Cone, fronds, Material::glossy(0.2), |_, _| vec![sway])
        .add_animated(
            Primitive::Sphere,
            place(crown - Vec3::Y * 0.3, Vec3::splat(0.45), Rgb::hex(0x5a3e22)),
            Material::MATTE,
            vec![sway],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_hues_stay_in_unit_range() {
        for i in 0..200 {
            let h = golden_hue(i);
            assert!((0.0..1.0).contains(&h));
        }
    }

    #[test]
    fn slab_spans_corners() {
        let p = slab(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 3.0, 2.0), Rgb::WHITE);
        assert_eq!(p.position, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(p.scale, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn post_stands_on_base() {
        let p = post(Vec3::new(2.0, 1.0, 0.0), 4.0, 0.5, Rgb::WHITE);
        assert_eq!(p.position.y, 3.0);
        assert_eq!(p.scale, Vec3::new(1.0, 4.0, 1.0));
    }

    #[test]
    fn palm_sways_as_one_piece() {
        let content = palm(SceneBuilder::new("palm"), Vec3::ZERO, 6.0, 0.7, 0.0).build();
        assert_eq!(content.animated_count(), content.objects().len());
        assert!(content.object_instances().iter().all(|i| i.is_finite()));
    }
}
