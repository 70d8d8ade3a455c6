use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band, tree};
use crate::animation::Animation;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const NIGHT: Rgb = Rgb::hex(0x050a18);
const SNOW: Rgb = Rgb::hex(0xe6efff);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Aurora Tundra")
        .background(NIGHT)
        .fog(NIGHT, 30.0, 90.0)
        .ambient(Rgb::hex(0x3a5a8a), 0.3)
        .sun(Vec3::new(0.1, -1.0, 0.6), Rgb::hex(0x9fffd0), 0.35)
        .add(Primitive::Plane, ground(100.0, 0.0, SNOW), Material::glossy(0.4));

    // curtains of light: three wavering ribbons of tall thin panels
    let greens = hue_band(0.38, 0.2, 4, 0.8, 1.0);
    for band in 0..3 {
        let z = -18.0 - band as f32 * 6.0;
        let panels = line(
            Vec3::new(-30.0, 14.0 + band as f32 * 2.0, z),
            Vec3::new(30.0, 14.0 + band as f32 * 2.0, z),
            24,
            Vec3::new(2.6, 9.0, 0.1),
            |i| greens[(i + band) % greens.len()],
        );
        builder = builder.add_all_animated(Primitive::Cube, panels, Material::glowing(1.6), move |i, _| {
            let phase = i as f32 * 0.45 + band as f32;
            vec![
                Animation::bob(1.2, 0.4, phase),
                Animation::sway(Vec3::Y, 0.3, 0.3, phase),
                Animation::ColorShift { to: Rgb::hex(0xb04aff), speed: 0.15, phase },
            ]
        });
    }

    // sparse taiga and a few boulders
    for _ in 0..12 {
        let angle = rng.gen_range(0.0..TAU);
        let radius = rng.gen_range(8.0..22.0);
        let base = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
        builder = tree(builder, base, rng.gen_range(2.5..4.5), Rgb::hex(0x3a2a20), Rgb::hex(0x1e4030), true);
    }
    let boulders = scatter_disc(rng, 10, Vec3::ZERO, 4.0, 20.0, 0.6..1.6, &[Rgb::hex(0x8a92a0)]);
    builder = builder.add_all(Primitive::Sphere, boulders, Material::MATTE);

    // igloo with a warm doorway
    builder = builder
        .add(Primitive::Sphere, place(Vec3::new(3.0, 0.0, 2.0), Vec3::new(4.0, 3.2, 4.0), SNOW), Material::glossy(0.2))
        .add_animated(
            Primitive::Cylinder,
            place(Vec3::new(3.0, 0.6, 4.0), Vec3::new(1.2, 1.2, 0.6), Rgb::hex(0xffa040)),
            Material::glowing(1.4),
            vec![Animation::pulse(1.4, 0.3, 5.0, 0.0)],
        )
        .point_light(Vec3::new(3.0, 1.2, 4.6), 6.0, Rgb::hex(0xffa040), 1.0);

    let stars = InstanceParams::scatter(
        rng,
        350,
        &ParamRanges::in_box(Vec3::new(-60.0, 25.0, -60.0), Vec3::new(60.0, 45.0, -10.0))
            .scale(0.08..0.2)
            .speed(0.5..2.0),
        &[Rgb::WHITE, Rgb::hex(0xcfe0ff)],
    );
    let flurry = InstanceParams::scatter(
        rng,
        200,
        &ParamRanges::in_box(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 15.0, 20.0))
            .scale(0.04..0.08)
            .speed(0.4..0.9)
            .amplitude(0.3..1.0),
        &[SNOW],
    );

    builder
        .point_light(Vec3::new(0.0, 16.0, -24.0), 40.0, Rgb::hex(0x40ff9a), 0.9)
        .batch(InstancedBatch::new("stars", Primitive::Sphere, Material::glowing(1.5), InstanceMotion::Twinkle, stars))
        .batch(InstancedBatch::new(
            "flurry",
            Primitive::Sphere,
            Material::glowing(0.1),
            InstanceMotion::Fall { top: 15.0, bottom: 0.0 },
            flurry,
        ))
        .build()
}
