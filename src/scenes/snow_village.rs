use glam::Vec3;
use rand::Rng;

use super::common::{ground, post, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const SNOW: Rgb = Rgb::hex(0xeef3f8);
const WALL_COLORS: [Rgb; 4] = [
    Rgb::hex(0x9e4a3a),
    Rgb::hex(0x6b4f3a),
    Rgb::hex(0x3f5e7a),
    Rgb::hex(0x7a6b3f),
];
const WINDOW: Rgb = Rgb::hex(0xffc46b);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Snow Village")
        .background(Rgb::hex(0x1c2440))
        .fog(Rgb::hex(0x2a3455), 15.0, 60.0)
        .ambient(Rgb::hex(0xa8b8e0), 0.35)
        .sun(Vec3::new(0.2, -1.0, -0.4), Rgb::hex(0xc8d8ff), 0.4)
        .add(Primitive::Plane, ground(90.0, 0.0, SNOW), Material::glossy(0.2));

    // cottages around the square, each facing the centre
    let cottages = ring(Vec3::ZERO, 9.0, 7, Vec3::ONE, |i| WALL_COLORS[i % WALL_COLORS.len()]);
    for (i, cottage) in cottages.into_iter().enumerate() {
        let width = rng.gen_range(2.5..3.5);
        let depth = rng.gen_range(2.5..3.5);
        let yaw = cottage.rotation.y;
        let base = cottage.position;
        // local +Z points at the square
        let facing = Vec3::new(yaw.sin(), 0.0, yaw.cos());
        builder = builder
            .add(
                Primitive::Cube,
                place(base + Vec3::Y * 1.2, Vec3::new(width, 2.4, depth), cottage.color).with_yaw(yaw),
                Material::MATTE,
            )
            .add(
                Primitive::Cone,
                place(base + Vec3::Y * 3.2, Vec3::new(width * 1.5, 1.8, depth * 1.5), SNOW).with_yaw(yaw),
                Material::glossy(0.2),
            )
            .add_animated(
                Primitive::Cube,
                place(base + Vec3::Y * 1.3 + facing * (depth * 0.5 + 0.02), Vec3::new(0.7, 0.7, 0.05), WINDOW)
                    .with_yaw(yaw),
                Material::glowing(1.2),
                vec![Animation::pulse(1.2, 0.15, 3.0, i as f32 * 2.1)],
            )
            .add(
                Primitive::Cube,
                place(base + Vec3::new(width * 0.3, 3.6, 0.0), Vec3::new(0.4, 1.2, 0.4), Rgb::hex(0x555555)),
                Material::MATTE,
            );
    }

    // square: a decorated tree with orbiting ornaments
    builder = tree(builder, Vec3::ZERO, 6.0, Rgb::hex(0x4a3220), Rgb::hex(0x1e5a32), true);
    let ornaments = ring(Vec3::new(0.0, 3.0, 0.0), 1.3, 10, Vec3::splat(0.25), |i| {
        if i % 2 == 0 { Rgb::hex(0xff4040) } else { Rgb::hex(0xffd040) }
    });
    builder = builder
        .add_all_animated(Primitive::Sphere, ornaments, Material::glowing(0.9), |i, p| {
            vec![
                Animation::Orbit {
                    center: Vec3::ZERO,
                    radius: 1.3,
                    speed: 0.3,
                    phase: i as f32 / 10.0 * std::f32::consts::TAU,
                    height: p.position.y + (i % 3) as f32 * 0.7 - 0.7,
                },
                Animation::pulse(0.9, 0.5, 2.5, i as f32),
            ]
        })
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 6.3, 0.0), Vec3::splat(0.45), Rgb::hex(0xfff3a0)),
            Material::glowing(2.0),
            vec![Animation::Breathe(Wave::new(0.15, 2.0, 0.0))],
        )
        .light(Light::point(Vec3::new(0.0, 6.0, 0.0), 14.0, Rgb::hex(0xffe08a), 1.2));

    // street lamps
    for p in ring(Vec3::ZERO, 5.0, 4, Vec3::ONE, |_| Rgb::hex(0x2a2a2a)) {
        builder = builder
            .add(Primitive::Cylinder, post(p.position, 2.8, 0.06, p.color), Material::glossy(0.5))
            .add(
                Primitive::Sphere,
                place(p.position + Vec3::Y * 2.9, Vec3::splat(0.3), WINDOW),
                Material::glowing(1.6),
            );
    }

    let drifts = scatter_disc(rng, 18, Vec3::ZERO, 13.0, 30.0, 1.5..3.5, &[SNOW]);
    builder = builder.add_all(
        Primitive::Sphere,
        drifts.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.6, 0.4, 1.0))),
        Material::glossy(0.2),
    );

    let snowflakes = InstanceParams::scatter(
        rng,
        400,
        &ParamRanges::in_box(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 18.0, 20.0))
            .scale(0.05..0.1)
            .speed(0.8..1.6)
            .amplitude(0.2..0.6),
        &[Rgb::WHITE],
    );

    builder
        .batch(InstancedBatch::new(
            "snowfall",
            Primitive::Sphere,
            Material::glowing(0.3),
            InstanceMotion::Fall { top: 18.0, bottom: 0.0 },
            snowflakes,
        ))
        .build()
}
