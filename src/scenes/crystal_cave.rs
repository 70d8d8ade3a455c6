use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const ROCK: Rgb = Rgb::hex(0x2b2530);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let palette = hue_band(0.55, 0.3, 5, 0.6, 1.0);

    let mut builder = SceneBuilder::new("Crystal Cave")
        .background(Rgb::hex(0x08060d))
        .fog(Rgb::hex(0x08060d), 10.0, 38.0)
        .ambient(Rgb::hex(0x6050a0), 0.15)
        .add(Primitive::Plane, ground(50.0, 0.0, ROCK), Material::MATTE);

    // cave walls: a rough ring of squashed boulders
    for i in 0..28 {
        let angle = i as f32 / 28.0 * TAU;
        let radius = rng.gen_range(12.0..14.0);
        let size = rng.gen_range(3.0..6.0);
        builder = builder.add(
            Primitive::Sphere,
            place(
                Vec3::new(angle.cos() * radius, size * 0.4, angle.sin() * radius),
                Vec3::new(size, size * 1.6, size),
                ROCK,
            ),
            Material::MATTE,
        );
    }

    // crystal clusters: tilted elongated cones fanning out from a common root
    let clusters = scatter_disc(rng, 9, Vec3::ZERO, 2.0, 10.0, 0.8..1.5, &palette);
    for (c, cluster) in clusters.into_iter().enumerate() {
        let shards = rng.gen_range(3..7);
        for s in 0..shards {
            let height = cluster.scale.y * rng.gen_range(1.5..3.5);
            let tilt = rng.gen_range(-0.5..0.5);
            let yaw = rng.gen_range(0.0..TAU);
            let width = height * 0.25;
            builder = builder.add_animated(
                Primitive::Cone,
                place(cluster.position + Vec3::Y * height * 0.45, Vec3::new(width, height, width), cluster.color)
                    .with_rotation(Vec3::new(tilt, yaw, tilt * 0.5)),
                Material { emissive: 0.4, gloss: 0.9 },
                vec![Animation::Pulse {
                    base: 0.4,
                    wave: Wave::new(0.3, 0.9, c as f32 * 1.3 + s as f32 * 0.4),
                }],
            );
        }
    }

    // one large glowing geode at the centre
    builder = builder
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 1.2, 0.0), Vec3::splat(2.2), Rgb::hex(0xb388ff)),
            Material { emissive: 0.8, gloss: 1.0 },
            vec![
                Animation::spin_y(0.3),
                Animation::Breathe(Wave::new(0.05, 1.2, 0.0)),
                Animation::ColorShift { to: Rgb::hex(0x64ffda), speed: 0.3, phase: 0.0 },
            ],
        )
        .point_light(Vec3::new(0.0, 3.0, 0.0), 16.0, Rgb::hex(0xb388ff), 1.6)
        .point_light(Vec3::new(6.0, 2.0, 4.0), 10.0, Rgb::hex(0x64ffda), 0.9)
        .point_light(Vec3::new(-5.0, 2.0, -6.0), 10.0, Rgb::hex(0x82b1ff), 0.9);

    // stalactites hanging from the unseen ceiling
    let drips = scatter_disc(rng, 30, Vec3::new(0.0, 11.0, 0.0), 0.0, 11.0, 0.5..1.2, &[ROCK]);
    builder = builder.add_all(
        Primitive::Cone,
        drips.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.0, 4.0, 1.0)).with_rotation(Vec3::new(TAU * 0.5, 0.0, 0.0))),
        Material::MATTE,
    );

    let sparkles = InstanceParams::scatter(
        rng,
        90,
        &ParamRanges::in_box(Vec3::new(-10.0, 0.5, -10.0), Vec3::new(10.0, 8.0, 10.0))
            .scale(0.05..0.12)
            .speed(1.0..3.0),
        &palette,
    );

    builder
        .batch(InstancedBatch::new(
            "sparkles",
            Primitive::Sphere,
            Material::glowing(2.0),
            InstanceMotion::Twinkle,
            sparkles,
        ))
        .build()
}
