use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{jitter_colors, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const WATER: Rgb = Rgb::hex(0x0b3a5c);
const SAND: Rgb = Rgb::hex(0xc9b48a);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let coral_palette = hue_band(0.92, 0.25, 6, 0.7, 0.95);

    let mut builder = SceneBuilder::new("Coral Reef")
        .background(WATER)
        .fog(WATER, 8.0, 40.0)
        .ambient(Rgb::hex(0x5fa8c8), 0.4)
        .sun(Vec3::new(0.2, -1.0, 0.1), Rgb::hex(0xaee6ff), 0.9)
        .add(Primitive::Plane, ground(60.0, 0.0, SAND), Material::MATTE);

    // branching corals: a stalk with a few tilted branches each
    let stalks = scatter_disc(rng, 18, Vec3::ZERO, 1.5, 9.0, 0.8..1.6, &coral_palette);
    let stalks = jitter_colors(rng, stalks, 0.15);
    for (i, stalk) in stalks.into_iter().enumerate() {
        let height = stalk.scale.y * 2.0;
        let base = stalk.position;
        builder = builder.add_animated(
            Primitive::Cylinder,
            place(base + Vec3::Y * height * 0.5, Vec3::new(0.3, height, 0.3), stalk.color),
            Material::MATTE,
            vec![Animation::sway(Vec3::X, 0.06, 0.8, i as f32)],
        );
        let branches = rng.gen_range(2..5);
        for b in 0..branches {
            let yaw = b as f32 / branches as f32 * std::f32::consts::TAU + rng.gen_range(0.0..0.5);
            let tilt = rng.gen_range(0.4..0.9);
            let y = height * rng.gen_range(0.5..0.95);
            builder = builder.add_animated(
                Primitive::Cylinder,
                place(base + Vec3::Y * y, Vec3::new(0.18, height * 0.45, 0.18), stalk.color)
                    .with_rotation(Vec3::new(tilt, yaw, 0.0)),
                Material::MATTE,
                vec![Animation::sway(Vec3::Z, 0.1, 1.1, i as f32 + b as f32)],
            );
            builder = builder.add(
                Primitive::Sphere,
                place(base + Vec3::Y * (y + height * 0.25), Vec3::splat(0.3), stalk.color.scaled(1.1)),
                Material::glossy(0.3),
            );
        }
    }

    // brain corals and anemones
    let domes = scatter_disc(rng, 14, Vec3::ZERO, 2.0, 11.0, 0.8..1.8, &[Rgb::hex(0xe0a060), Rgb::hex(0xd77fa1)]);
    builder = builder.add_all(
        Primitive::Sphere,
        domes.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.0, 0.6, 1.0))),
        Material::glossy(0.2),
    );
    let anemones = scatter_disc(rng, 10, Vec3::ZERO, 1.0, 8.0, 0.4..0.7, &[Rgb::hex(0x9b5de5)]);
    builder = builder.add_all_animated(Primitive::Cone, anemones, Material::glowing(0.3), |i, _| {
        vec![Animation::Breathe(Wave::new(0.12, 1.5, i as f32 * 0.8))]
    });

    let fish = InstanceParams::scatter(
        rng,
        60,
        &ParamRanges::in_box(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, 6.0, 0.0))
            .scale(0.25..0.45)
            .speed(0.3..0.8)
            .radius(3.0..12.0)
            .amplitude(0.2..0.6),
        &[Rgb::hex(0xffa62b), Rgb::hex(0xf9f871), Rgb::hex(0x4cc9f0)],
    );
    let bubbles = InstanceParams::scatter(
        rng,
        80,
        &ParamRanges::in_box(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 0.0, 10.0))
            .scale(0.06..0.14)
            .speed(0.6..1.4)
            .amplitude(0.05..0.2),
        &[Rgb::hex(0xdff6ff)],
    );

    builder
        .point_light(Vec3::new(0.0, 6.0, 0.0), 18.0, Rgb::hex(0x66ffe0), 0.8)
        .batch(InstancedBatch::new(
            "fish school",
            Primitive::Cone,
            Material::glossy(0.5),
            InstanceMotion::Orbit { center: Vec3::ZERO },
            fish,
        ))
        .batch(InstancedBatch::new(
            "bubbles",
            Primitive::Sphere,
            Material::glowing(0.2),
            InstanceMotion::Rise { bottom: 0.0, top: 12.0 },
            bubbles,
        ))
        .build()
}
