use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, post, tree};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, line, place, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const WHEAT: Rgb = Rgb::hex(0xe3c16f);
const FIELD: Rgb = Rgb::hex(0x7fa650);
const TOWER: Rgb = Rgb::hex(0xede6d6);
const SAIL: Rgb = Rgb::hex(0x8b5a3c);

/// Tower, cap and two crossed blades turning about the hub at `speed`
fn windmill(builder: SceneBuilder, base: Vec3, speed: f32) -> SceneBuilder {
    let hub = base + Vec3::new(0.0, 7.0, 1.6);
    let mut builder = builder
        .add(Primitive::Cylinder, post(base, 7.0, 1.4, TOWER), Material::MATTE)
        .add(Primitive::Cone, place(base + Vec3::Y * 8.0, Vec3::new(3.4, 2.0, 3.4), Rgb::hex(0x6b3e26)), Material::MATTE)
        .add(Primitive::Cube, place(base + Vec3::new(0.0, 1.0, 1.42), Vec3::new(0.9, 2.0, 0.05), Rgb::hex(0x5a3a20)), Material::MATTE);

    for k in 0..2 {
        builder = builder.add_animated(
            Primitive::Cube,
            place(hub, Vec3::new(8.8, 0.9, 0.1), SAIL).with_rotation(Vec3::new(0.0, 0.0, k as f32 * TAU * 0.25)),
            Material::MATTE,
            vec![Animation::Spin { axis: Vec3::Z, speed }],
        );
    }
    builder.add(Primitive::Sphere, place(hub, Vec3::splat(0.6), Rgb::hex(0x333333)), Material::glossy(0.4))
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Windmill Farm")
        .background(Rgb::hex(0xa7d3f2))
        .fog(Rgb::hex(0xcfe6f5), 30.0, 100.0)
        .ambient(Rgb::hex(0xfff8e8), 0.5)
        .sun(Vec3::new(-0.5, -0.9, -0.4), Rgb::hex(0xfff0d0), 1.0)
        .add(Primitive::Plane, ground(120.0, 0.0, FIELD), Material::MATTE);

    for (base, speed) in [(Vec3::new(-6.0, 0.0, -4.0), 0.9), (Vec3::new(7.0, 0.0, -9.0), 0.6)] {
        builder = windmill(builder, base, speed);
    }

    // wheat rows swaying in the wind
    let stalks = grid(Vec3::new(0.0, 0.6, 9.0), 0.8, 30, 10, Vec3::new(0.15, 1.2, 0.15), |_, _| WHEAT);
    builder = builder.add_all_animated(Primitive::Cylinder, stalks, Material::MATTE, |_, p| {
        vec![
            Animation::sway(Vec3::Z, 0.15, 1.6, p.position.x * 0.4),
            Animation::Breathe(Wave::new(0.03, 0.9, p.position.z)),
        ]
    });

    // fence and a few trees along the lane
    let fence = line(Vec3::new(-20.0, 0.5, 4.5), Vec3::new(20.0, 0.5, 4.5), 26, Vec3::new(0.15, 1.0, 0.15), solid_color(Rgb::hex(0x7a5a3a)));
    builder = builder
        .add_all(Primitive::Cube, fence, Material::MATTE)
        .add(Primitive::Cube, place(Vec3::new(0.0, 0.8, 4.5), Vec3::new(40.0, 0.1, 0.08), Rgb::hex(0x7a5a3a)), Material::MATTE);
    for i in 0..5 {
        let base = Vec3::new(-18.0 + i as f32 * 9.0 + rng.gen_range(-2.0..2.0), 0.0, -16.0 + rng.gen_range(-2.0..2.0));
        builder = tree(builder, base, rng.gen_range(4.0..6.0), Rgb::hex(0x5a3d26), Rgb::hex(0x4d8a3a), false);
    }

    let clouds = InstanceParams::scatter(
        rng,
        16,
        &ParamRanges::in_box(Vec3::new(-60.0, 18.0, -40.0), Vec3::new(-60.0, 26.0, 10.0))
            .scale(3.0..6.0)
            .speed(0.8..1.5)
            .amplitude(0.2..0.5),
        &[Rgb::WHITE],
    );
    let butterflies = InstanceParams::scatter(
        rng,
        20,
        &ParamRanges::in_box(Vec3::new(-10.0, 1.0, 6.0), Vec3::new(10.0, 2.5, 12.0))
            .scale(0.12..0.18)
            .speed(0.8..1.6)
            .amplitude(0.8..1.8),
        &[Rgb::hex(0xffffff), Rgb::hex(0xffd23f), Rgb::hex(0xff8fab)],
    );

    builder
        .batch(InstancedBatch::new(
            "clouds",
            Primitive::Sphere,
            Material::glowing(0.15),
            InstanceMotion::Stream { direction: Vec3::X, span: 120.0 },
            clouds,
        ))
        .batch(InstancedBatch::new(
            "butterflies",
            Primitive::Cube,
            Material::MATTE,
            InstanceMotion::Hover,
            butterflies,
        ))
        .build()
}
