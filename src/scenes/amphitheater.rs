use std::f32::consts::PI;

use glam::Vec3;

use super::common::{ground, post, slab};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::{yaw_towards, Rgb};
use crate::mesh::Primitive;
use crate::placement::{place, Placement, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STONE: Rgb = Rgb::hex(0xcbb89a);
const STAGE: Vec3 = Vec3::new(0.0, 0.0, -6.0);

/// One row of seats on an arc in front of the stage, each turned to face it
fn tier(row: usize) -> impl Iterator<Item = Placement> {
    let radius = 6.5 + row as f32 * 1.6;
    let count = 14 + row * 4;
    (0..count).map(move |i| {
        let angle = PI * (0.08 + 0.84 * i as f32 / (count - 1) as f32);
        let position = STAGE + Vec3::new(angle.cos() * radius, 0.4 + row as f32 * 0.8, angle.sin() * radius);
        place(position, Vec3::new(1.3, 0.8, 1.2), STONE).with_yaw(yaw_towards(STAGE - position))
    })
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Amphitheater")
        .background(Rgb::hex(0x1b1630))
        .fog(Rgb::hex(0x1b1630), 28.0, 75.0)
        .ambient(Rgb::hex(0x8a7fb0), 0.3)
        .sun(Vec3::new(0.3, -1.0, 0.5), Rgb::hex(0xffe2c0), 0.35)
        .add(Primitive::Plane, ground(70.0, 0.0, Rgb::hex(0x6b5a45)), Material::MATTE)
        .add(Primitive::Cylinder, post(STAGE, 0.5, 4.5, Rgb::hex(0x8a6a48)), Material::glossy(0.3));

    for row in 0..6 {
        builder = builder.add_all(Primitive::Cube, tier(row), Material::MATTE);
    }

    // colonnade and lintel behind the stage
    for i in 0..7 {
        let base = STAGE + Vec3::new(-6.0 + i as f32 * 2.0, 0.0, -4.0);
        builder = builder.add(Primitive::Cylinder, post(base, 6.5, 0.35, STONE), Material::glossy(0.2));
    }
    builder = builder.add(
        Primitive::Cube,
        slab(STAGE + Vec3::new(-6.8, 6.5, -4.6), STAGE + Vec3::new(6.8, 7.3, -3.4), STONE),
        Material::MATTE,
    );

    // dancers twirling
    for (i, x) in [-2.0f32, 0.0, 2.0].into_iter().enumerate() {
        let base = STAGE + Vec3::new(x, 0.5, 0.8);
        let step = Animation::bob(0.15, 3.0, i as f32);
        builder = builder
            .add_animated(
                Primitive::Cone,
                place(base + Vec3::Y * 0.7, Vec3::new(0.9, 1.4, 0.9), Rgb::from_hsv(0.85 + i as f32 * 0.07, 0.7, 0.9)),
                Material::glossy(0.4),
                vec![Animation::spin_y(2.0 + i as f32), step],
            )
            .add_animated(
                Primitive::Sphere,
                place(base + Vec3::Y * 1.7, Vec3::splat(0.5), Rgb::hex(0xf0c8a0)),
                Material::MATTE,
                vec![step],
            );
    }

    // braziers at the stage corners
    for x in [-4.0f32, 4.0] {
        let base = STAGE + Vec3::new(x, 0.5, 2.5);
        builder = builder
            .add(Primitive::Cylinder, post(base, 1.2, 0.15, Rgb::hex(0x3a2a1a)), Material::MATTE)
            .add_animated(
                Primitive::Cone,
                place(base + Vec3::Y * 1.6, Vec3::new(0.6, 0.8, 0.6), Rgb::hex(0xff8a2a)),
                Material::glowing(2.0),
                vec![Animation::Breathe(Wave::new(0.2, 9.0, x))],
            )
            .light(Light::point(base + Vec3::Y * 2.0, 10.0, Rgb::hex(0xff9a40), 1.2).with_flicker(Wave::new(0.3, 13.0, x)));
    }

    let confetti = InstanceParams::scatter(
        rng,
        200,
        &ParamRanges::in_box(STAGE + Vec3::new(-5.0, 0.0, -1.0), STAGE + Vec3::new(5.0, 9.0, 4.0))
            .scale(0.08..0.14)
            .speed(0.6..1.2)
            .amplitude(0.3..0.8),
        &[Rgb::hex(0xff4f7b), Rgb::hex(0xffd23f), Rgb::hex(0x3fc1ff), Rgb::hex(0x7cff6b)],
    );

    builder
        .point_light(STAGE + Vec3::new(0.0, 8.0, 4.0), 16.0, Rgb::hex(0xd0b0ff), 1.0)
        .batch(InstancedBatch::new(
            "confetti",
            Primitive::Plane,
            Material::glowing(0.4),
            InstanceMotion::Fall { top: 9.0, bottom: 0.5 },
            confetti,
        ))
        .build()
}
