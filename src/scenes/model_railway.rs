use glam::Vec3;
use rand::Rng;

use super::common::{golden_color, post, slab, tree};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const TABLE: f32 = 1.0;
const TRACK_RADIUS: f32 = 7.0;
const LOOP: Vec3 = Vec3::new(0.0, TABLE, 0.0);
const CHIMNEY: Vec3 = Vec3::new(9.8, TABLE + 2.0, 1.2);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Model Railway")
        .background(Rgb::hex(0x3a3a44))
        .fog(Rgb::hex(0x3a3a44), 25.0, 60.0)
        .ambient(Rgb::hex(0xf0e8e0), 0.45)
        .sun(Vec3::new(-0.3, -1.0, -0.2), Rgb::hex(0xfff4e0), 0.8)
        .add(Primitive::Cube, slab(Vec3::new(-11.0, 0.0, -11.0), Vec3::new(11.0, TABLE, 11.0), Rgb::hex(0x5a8a3a)), Material::MATTE);

    // sleepers and the rail
    let sleepers = ring(LOOP + Vec3::Y * 0.05, TRACK_RADIUS, 60, Vec3::new(0.25, 0.1, 1.2), |_| Rgb::hex(0x5a3a24));
    builder = builder
        .add_all(Primitive::Cube, sleepers, Material::MATTE)
        .add(Primitive::Torus, place(LOOP + Vec3::Y * 0.15, Vec3::new(TRACK_RADIUS * 2.0, 0.3, TRACK_RADIUS * 2.0), Rgb::hex(0x8a8a90)), Material::glossy(0.8));

    // locomotive and carriages: ring placement lays each along the track, the whole train turns about the loop
    let speed = 0.35;
    let cars = ring(LOOP + Vec3::Y * 0.6, TRACK_RADIUS, 24, Vec3::new(1.4, 0.8, 0.8), |i| {
        if i == 0 {
            Rgb::hex(0x1a1a1a)
        } else {
            golden_color(i as u32, 0.6, 0.85)
        }
    });
    let train = cars.into_iter().take(5).collect::<Vec<_>>();
    let loco = train[0];
    builder = builder.add_all_animated(Primitive::Cube, train, Material::glossy(0.5), |_, _| {
        vec![Animation::Revolve { pivot: LOOP, axis: Vec3::NEG_Y, speed }]
    });
    builder = builder.add_animated(
        Primitive::Cylinder,
        post(loco.position + Vec3::Y * 0.4, 0.5, 0.15, Rgb::hex(0x2a2a2a)),
        Material::MATTE,
        vec![Animation::Revolve { pivot: LOOP, axis: Vec3::NEG_Y, speed }],
    );

    // station, tunnel, level crossing
    builder = builder
        .add(Primitive::Cube, slab(Vec3::new(8.2, TABLE, -3.0), Vec3::new(10.0, TABLE + 0.4, 3.0), Rgb::hex(0xb0a898)), Material::MATTE)
        .add(Primitive::Cube, slab(Vec3::new(9.0, TABLE + 0.4, -2.0), Vec3::new(10.5, TABLE + 2.0, 2.0), Rgb::hex(0xc86a4a)), Material::MATTE)
        .add(Primitive::Cylinder, post(CHIMNEY, 0.9, 0.2, Rgb::hex(0x8a4a3a)), Material::MATTE)
        .add(Primitive::Sphere, place(Vec3::new(-TRACK_RADIUS, TABLE, 0.0), Vec3::new(5.0, 4.0, 6.0), Rgb::hex(0x6a7a5a)), Material::MATTE);
    let barrier_hinge = Vec3::new(0.0, TABLE + 0.9, TRACK_RADIUS + 1.5);
    builder = builder
        .add(Primitive::Cylinder, post(barrier_hinge - Vec3::Y * 0.9, 0.9, 0.08, Rgb::WHITE), Material::MATTE)
        .add_animated(
            Primitive::Cube,
            place(barrier_hinge + Vec3::X * 1.2, Vec3::new(2.4, 0.1, 0.1), Rgb::hex(0xe83a3a)),
            Material::MATTE,
            vec![Animation::Swing { pivot: barrier_hinge, axis: Vec3::Z, wave: Wave::new(0.7, 0.35, 0.0) }],
        );

    // village inside the loop
    for i in 0..6 {
        let at = Vec3::new(rng.gen_range(-4.0..4.0), TABLE, rng.gen_range(-4.0..4.0));
        let size = rng.gen_range(0.8..1.4);
        builder = builder
            .add(Primitive::Cube, place(at + Vec3::Y * size * 0.5, Vec3::splat(size), golden_color(i + 11, 0.25, 0.95)), Material::MATTE)
            .add(Primitive::Cone, place(at + Vec3::Y * size * 1.3, Vec3::new(size * 1.5, size * 0.6, size * 1.5), Rgb::hex(0xa04a3a)), Material::MATTE);
    }
    for i in 0..8 {
        let angle = i as f32 / 8.0 * std::f32::consts::TAU;
        let base = LOOP + Vec3::new(angle.cos(), 0.0, angle.sin()) * 9.5;
        builder = tree(builder, base, 1.8, Rgb::hex(0x4a3020), Rgb::hex(0x2f6a2a), i % 2 == 1);
    }

    let smoke = InstanceParams::scatter(
        rng,
        60,
        &ParamRanges::in_box(CHIMNEY, CHIMNEY)
            .scale(0.15..0.35)
            .speed(0.6..1.2)
            .amplitude(0.1..0.4),
        &[Rgb::hex(0xe8e8f0)],
    );

    builder
        .point_light(Vec3::new(9.0, TABLE + 3.0, 0.0), 6.0, Rgb::hex(0xffd090), 0.8)
        .batch(InstancedBatch::new(
            "chimney smoke",
            Primitive::Sphere,
            Material::glowing(0.2),
            InstanceMotion::Rise { bottom: CHIMNEY.y + 0.9, top: CHIMNEY.y + 5.0 },
            smoke,
        ))
        .build()
}
