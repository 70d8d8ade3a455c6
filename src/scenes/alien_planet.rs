use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{jitter_colors, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const SKY: Rgb = Rgb::hex(0x2a0f3a);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let flora = hue_band(0.45, 0.35, 6, 0.9, 1.0);

    let mut builder = SceneBuilder::new("Alien Planet")
        .background(SKY)
        .fog(Rgb::hex(0x4a1f5a), 18.0, 80.0)
        .ambient(Rgb::hex(0xc070ff), 0.3)
        .sun(Vec3::new(0.4, -0.6, -0.7), Rgb::hex(0x90ffe0), 0.6)
        .add(Primitive::Plane, ground(90.0, 0.0, Rgb::hex(0x3a2050)), Material::glossy(0.2));

    // ringed gas giant and two moons hanging in the sky
    let giant = Vec3::new(-18.0, 26.0, -50.0);
    builder = builder
        .add_animated(Primitive::Sphere, place(giant, Vec3::splat(22.0), Rgb::hex(0xe08a50)), Material::glowing(0.3), vec![Animation::spin_y(0.05)])
        .add(
            Primitive::Torus,
            place(giant, Vec3::new(40.0, 8.0, 40.0), Rgb::hex(0xf0d0a0)).with_rotation(Vec3::new(0.35, 0.0, 0.2)),
            Material::glowing(0.4),
        );
    for (i, radius) in [18.0f32, 26.0].into_iter().enumerate() {
        builder = builder.add_animated(
            Primitive::Sphere,
            place(giant + Vec3::X * radius, Vec3::splat(2.0 + i as f32), Rgb::hex(0xd0d0e0)),
            Material::MATTE,
            vec![Animation::Orbit { center: giant, radius, speed: 0.12 / (i + 1) as f32, phase: i as f32 * 2.0, height: 0.0 }],
        );
    }

    // bulb plants: stalk plus glowing pod
    let bulbs = scatter_disc(rng, 24, Vec3::ZERO, 3.0, 20.0, 0.8..1.8, &flora);
    let bulbs = jitter_colors(rng, bulbs, 0.1);
    for (i, bulb) in bulbs.into_iter().enumerate() {
        let height = 2.5 * bulb.scale.y;
        let sway = Animation::Swing { pivot: bulb.position, axis: Vec3::X, wave: Wave::new(0.12, 0.7, i as f32 * 0.5) };
        builder = builder
            .add_animated(
                Primitive::Cylinder,
                place(bulb.position + Vec3::Y * height * 0.5, Vec3::new(0.15, height, 0.15), bulb.color.scaled(0.5)),
                Material::MATTE,
                vec![sway],
            )
            .add_animated(
                Primitive::Sphere,
                place(bulb.position + Vec3::Y * height, Vec3::splat(0.7 * bulb.scale.y), bulb.color),
                Material::glowing(1.3),
                vec![sway, Animation::Breathe(Wave::new(0.1, 1.8, i as f32))],
            );
    }

    // crystal arches
    for i in 0..3 {
        let angle = i as f32 / 3.0 * TAU + rng.gen_range(0.0..0.5);
        let center = Vec3::new(angle.cos(), 0.0, angle.sin()) * 12.0;
        builder = builder.add(
            Primitive::Torus,
            place(center, Vec3::splat(rng.gen_range(6.0..9.0)), Rgb::hex(0x7af0ff))
                .with_rotation(UPRIGHT + Vec3::new(0.0, angle, 0.0)),
            Material::glossy(0.9),
        );
    }

    // hovering saucer
    builder = builder
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(6.0, 7.0, 4.0), Vec3::new(4.0, 0.8, 4.0), Rgb::hex(0xb0b8c8)),
            Material::glossy(0.9),
            vec![Animation::bob(0.5, 0.8, 0.0), Animation::spin_y(1.5)],
        )
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(6.0, 7.5, 4.0), Vec3::splat(1.4), Rgb::hex(0x80ffb0)),
            Material::glowing(1.0),
            vec![Animation::bob(0.5, 0.8, 0.0)],
        )
        .add_animated(
            Primitive::Cone,
            place(Vec3::new(6.0, 3.5, 4.0), Vec3::new(3.0, 6.0, 3.0), Rgb::hex(0x80ffb0)),
            Material::glowing(0.5),
            vec![Animation::bob(0.5, 0.8, 0.0), Animation::pulse(0.5, 0.3, 4.0, 0.0)],
        );

    let spores = InstanceParams::scatter(
        rng,
        240,
        &ParamRanges::in_box(Vec3::new(-18.0, 0.0, -18.0), Vec3::new(18.0, 0.0, 18.0))
            .scale(0.06..0.12)
            .speed(0.2..0.6)
            .amplitude(0.3..0.9),
        &flora,
    );

    builder
        .point_light(Vec3::new(6.0, 6.0, 4.0), 14.0, Rgb::hex(0x80ffb0), 1.0)
        .point_light(Vec3::new(-6.0, 3.0, -4.0), 16.0, Rgb::hex(0xff70d0), 0.7)
        .batch(InstancedBatch::new(
            "spores",
            Primitive::Sphere,
            Material::glowing(1.2),
            InstanceMotion::Rise { bottom: 0.0, top: 14.0 },
            spores,
        ))
        .build()
}
