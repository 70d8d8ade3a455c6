use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::ground;
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const GRANITE: Rgb = Rgb::hex(0x7d7b76);
const HEATH: Rgb = Rgb::hex(0x4f5e3a);
const RUNE: Rgb = Rgb::hex(0x6effd8);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Standing Stones")
        .background(Rgb::hex(0x2d3440))
        .fog(Rgb::hex(0x5a6472), 10.0, 55.0)
        .ambient(Rgb::hex(0xb0b8c8), 0.35)
        .sun(Vec3::new(0.5, -0.5, -0.7), Rgb::hex(0xffd6a0), 0.6)
        .add(Primitive::Plane, ground(100.0, 0.0, HEATH), Material::MATTE);

    // outer circle of uprights with lintels bridging every other pair
    let count = 12;
    let uprights = ring(Vec3::ZERO, 8.0, count, Vec3::ONE, solid_color(GRANITE));
    for (i, stone) in uprights.iter().enumerate() {
        let height = rng.gen_range(3.6..4.6);
        let lean = rng.gen_range(-0.06..0.06);
        builder = builder.add(
            Primitive::Cube,
            place(stone.position + Vec3::Y * height * 0.5, Vec3::new(1.4, height, 0.8), GRANITE.scaled(rng.gen_range(0.85..1.1)))
                .with_rotation(Vec3::new(lean, stone.rotation.y, 0.0)),
            Material::MATTE,
        );
        if i % 2 == 0 {
            let next = &uprights[(i + 1) % count];
            let mid = (stone.position + next.position) * 0.5;
            let yaw = (next.position - stone.position).x.atan2((next.position - stone.position).z);
            builder = builder.add(
                Primitive::Cube,
                place(mid + Vec3::Y * 4.7, Vec3::new(0.8, 0.6, 4.6), GRANITE).with_yaw(yaw),
                Material::MATTE,
            );
        }
    }

    // glowing runes on an inner ring of low stones
    let inner = ring(Vec3::ZERO, 4.0, 5, Vec3::new(1.0, 1.6, 0.6), solid_color(GRANITE));
    for (i, stone) in inner.into_iter().enumerate() {
        let yaw = stone.rotation.y;
        let facing = Vec3::new(yaw.sin(), 0.0, yaw.cos());
        builder = builder
            .add(Primitive::Cube, place(stone.position + Vec3::Y * 0.8, stone.scale, GRANITE).with_yaw(yaw), Material::MATTE)
            .add_animated(
                Primitive::Cube,
                place(stone.position + Vec3::Y * 1.0 - facing * 0.31, Vec3::new(0.3, 0.6, 0.02), RUNE).with_yaw(yaw),
                Material::glowing(0.0),
                vec![Animation::pulse(0.8, 1.0, 0.9, i as f32 / 5.0 * TAU)],
            );
    }

    // altar stone with a hovering orb
    builder = builder
        .add(Primitive::Cube, place(Vec3::new(0.0, 0.4, 0.0), Vec3::new(2.4, 0.8, 1.4), GRANITE), Material::MATTE)
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 1.8, 0.0), Vec3::splat(0.6), RUNE),
            Material::glowing(2.0),
            vec![Animation::bob(0.3, 0.8, 0.0), Animation::Breathe(Wave::new(0.1, 1.6, 0.0))],
        )
        .light(Light::point(Vec3::new(0.0, 2.0, 0.0), 10.0, RUNE, 1.2).with_flicker(Wave::new(0.3, 0.8, 0.0)));

    let heather = scatter_disc(rng, 60, Vec3::new(0.0, 0.1, 0.0), 10.0, 40.0, 0.4..1.0, &[Rgb::hex(0x7a5a8a), HEATH, Rgb::hex(0x5d6e44)]);
    builder = builder.add_all(
        Primitive::Sphere,
        heather.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.0, 0.5, 1.0))),
        Material::MATTE,
    );

    let wisps = InstanceParams::scatter(
        rng,
        12,
        &ParamRanges::in_box(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 3.0, 0.0))
            .scale(0.12..0.2)
            .speed(0.2..0.5)
            .radius(5.5..7.0)
            .amplitude(0.3..0.8),
        &[RUNE],
    );
    let mist = InstanceParams::scatter(
        rng,
        30,
        &ParamRanges::in_box(Vec3::new(-40.0, 0.3, -25.0), Vec3::new(-40.0, 1.2, 25.0))
            .scale(3.0..6.0)
            .speed(0.5..1.0)
            .amplitude(0.1..0.3),
        &[Rgb::hex(0x8a94a2)],
    );

    builder
        .batch(InstancedBatch::new(
            "wisps",
            Primitive::Sphere,
            Material::glowing(2.0),
            InstanceMotion::Orbit { center: Vec3::ZERO },
            wisps,
        ))
        .batch(InstancedBatch::new(
            "ground mist",
            Primitive::Sphere,
            Material::glowing(0.1),
            InstanceMotion::Stream { direction: Vec3::X, span: 80.0 },
            mist,
        ))
        .build()
}
