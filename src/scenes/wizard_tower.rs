use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, post, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{gradient, place, spiral, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STONE: Rgb = Rgb::hex(0x6a6478);
const ARCANE: Rgb = Rgb::hex(0x9a5aff);
const HEIGHT: f32 = 16.0;

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Wizard Tower")
        .background(Rgb::hex(0x120a24))
        .fog(Rgb::hex(0x1a1030), 20.0, 70.0)
        .ambient(Rgb::hex(0x5a4a8a), 0.3)
        .sun(Vec3::new(0.3, -1.0, -0.4), Rgb::hex(0xb0a8ff), 0.3)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x2a3a2a)), Material::MATTE);

    // tapering stacked drums with a crooked hat
    let drums = 5;
    for i in 0..drums {
        let t = i as f32 / drums as f32;
        let height = HEIGHT / drums as f32;
        builder = builder.add(
            Primitive::Cylinder,
            place(Vec3::Y * (t * HEIGHT + height * 0.5), Vec3::new(4.0 - t, height, 4.0 - t), STONE.scaled(1.0 - t * 0.2)),
            Material::MATTE,
        );
    }
    let hat = Vec3::new(0.3, HEIGHT + 2.0, 0.0);
    builder = builder.add_animated(
        Primitive::Cone,
        place(hat, Vec3::new(5.0, 4.5, 5.0), Rgb::hex(0x2a1a6a)).with_rotation(Vec3::new(0.0, 0.0, -0.2)),
        Material::glossy(0.3),
        vec![Animation::Swing { pivot: hat - Vec3::Y * 2.0, axis: Vec3::Z, wave: Wave::new(0.04, 0.5, 0.0) }],
    );

    // glowing windows spiralling up the tower
    let windows = spiral(Vec3::Y * 1.5, 2.05, 1.75, 4.0, 3.5, 5, Vec3::new(0.1, 0.8, 0.5), gradient(Rgb::hex(0xffc060), ARCANE, 17));
    builder = builder.add_all_animated(Primitive::Cube, windows, Material::glowing(1.4), |i, _| {
        vec![Animation::pulse(1.4, 0.5, 1.0, i as f32 * 0.9)]
    });

    // orbiting runes and a spell ring
    builder = builder.add_all_animated(
        Primitive::Torus,
        (0..6).map(|i| place(Vec3::new(0.0, HEIGHT * 0.6, 0.0), Vec3::splat(0.8), Rgb::from_hsv(0.72 + i as f32 * 0.03, 0.6, 1.0)).with_rotation(UPRIGHT)),
        Material::glowing(1.8),
        |i, _| {
            vec![
                Animation::Orbit { center: Vec3::Y * HEIGHT * 0.6, radius: 5.0, speed: 0.7, phase: i as f32 / 6.0 * TAU, height: (i as f32 * 1.3).sin() * 2.0 },
                Animation::spin_y(2.0),
            ]
        },
    );
    builder = builder.add_animated(
        Primitive::Torus,
        place(Vec3::Y * 0.1, Vec3::new(14.0, 0.2, 14.0), ARCANE),
        Material::glowing(1.0),
        vec![Animation::spin_y(0.3), Animation::ColorShift { to: Rgb::hex(0x40c0ff), speed: 0.3, phase: 0.0 }],
    );

    // floating books around the base
    for i in 0..5 {
        let angle = i as f32 / 5.0 * TAU;
        let at = Vec3::new(angle.cos() * 4.0, 1.5 + i as f32 * 0.4, angle.sin() * 4.0);
        builder = builder.add_animated(
            Primitive::Cube,
            place(at, Vec3::new(0.7, 0.15, 0.5), Rgb::from_hsv(i as f32 * 0.18, 0.6, 0.7)).with_yaw(angle),
            Material::MATTE,
            vec![
                Animation::bob(0.3, 1.2, i as f32),
                Animation::Revolve { pivot: Vec3::ZERO, axis: Vec3::Y, speed: 0.2 },
            ],
        );
    }

    // scrying crystal on a plinth
    builder = builder
        .add(Primitive::Cylinder, post(Vec3::new(-6.0, 0.0, 4.0), 1.0, 0.5, STONE), Material::MATTE)
        .add_animated(
            Primitive::Cone,
            place(Vec3::new(-6.0, 1.8, 4.0), Vec3::new(0.6, 1.4, 0.6), ARCANE),
            Material::glowing(2.2),
            vec![Animation::spin_y(1.0), Animation::bob(0.2, 1.5, 0.0)],
        );

    let motes = InstanceParams::scatter(
        rng,
        180,
        &ParamRanges::in_box(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, HEIGHT, 0.0))
            .scale(0.05..0.12)
            .speed(0.3..0.8)
            .radius(3.0..8.0)
            .amplitude(0.2..1.0),
        &[ARCANE, Rgb::hex(0x60d0ff), Rgb::hex(0xffe080)],
    );

    builder
        .light(Light::point(Vec3::new(0.0, HEIGHT * 0.6, 0.0), 16.0, ARCANE, 1.2).with_flicker(Wave::new(0.3, 2.0, 0.0)))
        .point_light(Vec3::new(-6.0, 2.5, 4.0), 8.0, ARCANE, 0.9)
        .batch(InstancedBatch::new("motes", Primitive::Sphere, Material::glowing(1.6), InstanceMotion::Orbit { center: Vec3::ZERO }, motes))
        .build()
}
