use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, scatter, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const DEEP: Rgb = Rgb::hex(0x020b1f);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let bells = hue_band(0.78, 0.3, 5, 0.6, 1.0);

    let mut builder = SceneBuilder::new("Jellyfish Bloom")
        .background(DEEP)
        .fog(DEEP, 10.0, 45.0)
        .ambient(Rgb::hex(0x1a3a6a), 0.25)
        .add(Primitive::Plane, ground(60.0, -6.0, Rgb::hex(0x0d1a2a)), Material::MATTE);

    // each jellyfish: a squashed bell that pulses, trailing tentacles that bob with it
    let jellies = scatter(rng, 16, Vec3::new(-12.0, 0.0, -12.0), Vec3::new(12.0, 10.0, 12.0), 0.7..1.5, &bells);
    for (i, jelly) in jellies.into_iter().enumerate() {
        let size = jelly.scale.x;
        let phase = rng.gen_range(0.0..std::f32::consts::TAU);
        let drift = Animation::Bob(Wave::new(0.8, 0.5, phase));
        let bell = place(jelly.position, Vec3::new(1.6, 1.0, 1.6) * size, jelly.color);
        builder = builder.add_animated(
            Primitive::Sphere,
            bell,
            Material::glowing(1.2),
            vec![drift, Animation::Breathe(Wave::new(0.12, 2.4, phase)), Animation::spin_y(0.2)],
        );
        let tentacles = (0..5).map(|k| {
            let angle = k as f32 / 5.0 * std::f32::consts::TAU;
            let offset = Vec3::new(angle.cos(), 0.0, angle.sin()) * 0.45 * size;
            place(jelly.position + offset - Vec3::Y * 1.1 * size, Vec3::new(0.05, 1.6, 0.05) * size, jelly.color.scaled(0.8))
        });
        builder = builder.add_all_animated(Primitive::Cylinder, tentacles, Material::glowing(0.6), move |k, p| {
            vec![
                drift,
                Animation::Swing { pivot: p.position + Vec3::Y * 0.8 * size, axis: Vec3::X, wave: Wave::new(0.25, 1.6, phase + k as f32) },
            ]
        });
        if i % 4 == 0 {
            builder = builder.add_animated(
                Primitive::Sphere,
                place(jelly.position, Vec3::splat(0.5 * size), Rgb::WHITE),
                Material::glowing(2.0),
                vec![drift, Animation::pulse(2.0, 1.0, 2.4, phase)],
            );
        }
    }

    let plankton = InstanceParams::scatter(
        rng,
        300,
        &ParamRanges::in_box(Vec3::new(-15.0, -5.0, -15.0), Vec3::new(15.0, 12.0, 15.0))
            .scale(0.04..0.09)
            .speed(0.5..1.5)
            .amplitude(0.2..0.6),
        &[Rgb::hex(0x7fe8ff), Rgb::hex(0xc0a0ff)],
    );
    let snow = InstanceParams::scatter(
        rng,
        120,
        &ParamRanges::in_box(Vec3::new(-15.0, -6.0, -15.0), Vec3::new(15.0, 12.0, 15.0))
            .scale(0.03..0.06)
            .speed(0.1..0.3)
            .amplitude(0.1..0.3),
        &[Rgb::hex(0xd0e0ff)],
    );

    builder
        .point_light(Vec3::new(0.0, 4.0, 0.0), 24.0, Rgb::hex(0xb080ff), 1.0)
        .point_light(Vec3::new(-8.0, 8.0, 6.0), 16.0, Rgb::hex(0x40d0ff), 0.7)
        .batch(InstancedBatch::new("plankton", Primitive::Sphere, Material::glowing(1.0), InstanceMotion::Hover, plankton))
        .batch(InstancedBatch::new(
            "marine snow",
            Primitive::Sphere,
            Material::glowing(0.2),
            InstanceMotion::Fall { top: 12.0, bottom: -6.0 },
            snow,
        ))
        .build()
}
