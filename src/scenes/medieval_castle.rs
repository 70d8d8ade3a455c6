use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, post, slab, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{alternating_colors, line, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STONE: Rgb = Rgb::hex(0x9a948a);
const ROOF: Rgb = Rgb::hex(0x3a4a8a);
const HALF: f32 = 8.0;
const WALL_HEIGHT: f32 = 5.0;

/// Round tower with a conical roof and a pennant on top
fn tower(builder: SceneBuilder, base: Vec3, height: f32, phase: f32) -> SceneBuilder {
    let tip = base + Vec3::Y * (height + 3.2);
    builder
        .add(Primitive::Cylinder, post(base, height, 1.6, STONE), Material::MATTE)
        .add(Primitive::Cone, place(base + Vec3::Y * (height + 1.4), Vec3::new(4.0, 2.8, 4.0), ROOF), Material::glossy(0.3))
        .add(Primitive::Cylinder, post(tip - Vec3::Y * 0.4, 1.2, 0.04, Rgb::hex(0x333333)), Material::MATTE)
        .add_animated(
            Primitive::Cube,
            place(tip + Vec3::new(0.5, 0.5, 0.0), Vec3::new(1.0, 0.5, 0.04), Rgb::hex(0xd02a2a)),
            Material::MATTE,
            vec![Animation::Swing { pivot: tip + Vec3::Y * 0.5, axis: Vec3::Y, wave: Wave::new(0.5, 1.8, phase) }],
        )
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Medieval Castle")
        .background(Rgb::hex(0x9ab8d8))
        .fog(Rgb::hex(0xc8d8e8), 30.0, 100.0)
        .ambient(Rgb::hex(0xe8eef8), 0.45)
        .sun(Vec3::new(0.5, -0.8, -0.3), Rgb::hex(0xfff0d8), 1.0)
        .add(Primitive::Plane, ground(120.0, 0.0, Rgb::hex(0x6a9a4a)), Material::MATTE)
        // moat
        .add(Primitive::Torus, place(Vec3::ZERO, Vec3::new(36.0, 0.3, 36.0), Rgb::hex(0x3a6a8a)), Material::glossy(0.9));

    // curtain walls with crenellations
    for (start, end) in [
        (Vec3::new(-HALF, 0.0, -HALF), Vec3::new(HALF, 0.0, -HALF)),
        (Vec3::new(HALF, 0.0, -HALF), Vec3::new(HALF, 0.0, HALF)),
        (Vec3::new(HALF, 0.0, HALF), Vec3::new(-HALF, 0.0, HALF)),
        (Vec3::new(-HALF, 0.0, HALF), Vec3::new(-HALF, 0.0, -HALF)),
    ] {
        let low = start.min(end) - Vec3::new(0.6, 0.0, 0.6);
        let high = start.max(end) + Vec3::new(0.6, WALL_HEIGHT, 0.6);
        builder = builder.add(Primitive::Cube, slab(low, high, STONE), Material::MATTE);
        let merlons = line(start + Vec3::Y * (WALL_HEIGHT + 0.4), end + Vec3::Y * (WALL_HEIGHT + 0.4), 9, Vec3::new(0.8, 0.8, 0.8), |_| STONE);
        builder = builder.add_all(Primitive::Cube, merlons, Material::MATTE);
    }
    for (i, corner) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)].into_iter().enumerate() {
        builder = tower(builder, Vec3::new(corner.0 * HALF, 0.0, corner.1 * HALF), 8.0, i as f32);
    }

    // keep in the middle
    builder = builder
        .add(Primitive::Cube, slab(Vec3::new(-3.0, 0.0, -3.0), Vec3::new(3.0, 10.0, 3.0), STONE.scaled(0.9)), Material::MATTE);
    builder = tower(builder, Vec3::new(0.0, 10.0, 0.0), 3.0, 4.0);

    // gatehouse and a drawbridge that slowly lowers and rises
    let hinge = Vec3::new(0.0, 0.3, HALF + 0.6);
    builder = builder
        .add(Primitive::Cube, place(Vec3::new(0.0, 1.6, HALF + 0.65), Vec3::new(3.0, 3.2, 0.1), Rgb::hex(0x1a1410)), Material::MATTE)
        .add_animated(
            Primitive::Cube,
            place(hinge + Vec3::new(0.0, 0.0, 2.0), Vec3::new(3.0, 0.2, 4.0), Rgb::hex(0x7a5530)),
            Material::MATTE,
            vec![Animation::Swing { pivot: hinge, axis: Vec3::X, wave: Wave::new(0.35, 0.25, 0.0) }],
        );

    // banners hung either side of the gate
    let banners = line(
        Vec3::new(-6.0, WALL_HEIGHT - 1.5, HALF + 0.7),
        Vec3::new(6.0, WALL_HEIGHT - 1.5, HALF + 0.7),
        4,
        Vec3::new(1.0, 2.4, 0.05),
        alternating_colors(Rgb::hex(0xd02a2a), Rgb::hex(0xe8c040)),
    );
    builder = builder.add_all_animated(Primitive::Cube, banners, Material::MATTE, |i, p| {
        vec![Animation::Swing { pivot: p.position + Vec3::Y * 1.2, axis: Vec3::X, wave: Wave::new(0.06, 1.1, i as f32 * 1.3) }]
    });

    for i in 0..10 {
        let angle = i as f32 / 10.0 * TAU;
        let base = Vec3::new(angle.cos(), 0.0, angle.sin()) * 24.0;
        builder = tree(builder, base, 4.0 + (i % 3) as f32, Rgb::hex(0x4a3020), Rgb::hex(0x2f6a2a), i % 2 == 0);
    }

    let birds = InstanceParams::scatter(
        rng,
        18,
        &ParamRanges::in_box(Vec3::new(0.0, 16.0, 0.0), Vec3::new(0.0, 22.0, 0.0))
            .scale(0.25..0.4)
            .speed(0.3..0.6)
            .radius(6.0..14.0)
            .amplitude(0.4..1.0),
        &[Rgb::hex(0x202020)],
    );

    builder
        .light(Light::point(Vec3::new(0.0, 2.0, HALF + 2.0), 8.0, Rgb::hex(0xffa050), 0.8).with_flicker(Wave::new(0.2, 7.0, 0.0)))
        .batch(InstancedBatch::new("crows", Primitive::Cone, Material::MATTE, InstanceMotion::Orbit { center: Vec3::ZERO }, birds))
        .build()
}
