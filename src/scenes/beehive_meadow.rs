use glam::Vec3;

use super::common::{ground, hue_band, post, tree};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{jitter_colors, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const HONEY: Rgb = Rgb::hex(0xf0b030);
const HIVES: [Vec3; 3] = [Vec3::new(-3.0, 0.0, -2.0), Vec3::new(0.0, 0.0, -3.0), Vec3::new(3.0, 0.0, -2.0)];

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let flowers = hue_band(0.95, 0.4, 6, 0.6, 1.0);

    let mut builder = SceneBuilder::new("Beehive Meadow")
        .background(Rgb::hex(0xa8d8ff))
        .fog(Rgb::hex(0xd0ecff), 25.0, 80.0)
        .ambient(Rgb::hex(0xfff8e0), 0.55)
        .sun(Vec3::new(-0.4, -1.0, 0.3), Rgb::hex(0xfff2c8), 1.1)
        .add(Primitive::Plane, ground(90.0, 0.0, Rgb::hex(0x7ab84a)), Material::MATTE);

    // skep hives: stacked straw rings on a stand, each humming gently
    for (h, hive) in HIVES.into_iter().enumerate() {
        builder = builder.add(Primitive::Cylinder, post(hive, 0.8, 0.9, Rgb::hex(0x7a5a3a)), Material::MATTE);
        let hum = Animation::Breathe(Wave::new(0.02, 6.0, h as f32));
        for ring in 0..5 {
            let y = 1.0 + ring as f32 * 0.4;
            let width = 2.2 - ring as f32 * 0.3;
            builder = builder.add_animated(
                Primitive::Torus,
                place(hive + Vec3::Y * y, Vec3::new(width * 1.6, 1.6, width * 1.6), HONEY.scaled(1.0 - ring as f32 * 0.05)),
                Material::MATTE,
                vec![hum],
            );
        }
        builder = builder.add(Primitive::Sphere, place(hive + Vec3::new(0.0, 1.2, 1.3), Vec3::splat(0.3), Rgb::hex(0x1a1008)), Material::MATTE);
    }

    // wildflowers on stalks
    let blooms = scatter_disc(rng, 70, Vec3::ZERO, 4.0, 20.0, 0.6..1.2, &flowers);
    let blooms = jitter_colors(rng, blooms, 0.1);
    for (i, bloom) in blooms.into_iter().enumerate() {
        let height = 1.2 * bloom.scale.y;
        let nod = Animation::Swing { pivot: bloom.position, axis: Vec3::Z, wave: Wave::new(0.1, 1.0, i as f32 * 0.37) };
        builder = builder
            .add_animated(Primitive::Cylinder, post(bloom.position, height, 0.03, Rgb::hex(0x3a8a2a)), Material::MATTE, vec![nod])
            .add_animated(
                Primitive::Sphere,
                place(bloom.position + Vec3::Y * height, Vec3::new(0.5, 0.25, 0.5) * bloom.scale.x, bloom.color),
                Material::glossy(0.2),
                vec![nod],
            );
    }

    for (i, x) in [-14.0f32, 15.0].into_iter().enumerate() {
        builder = tree(builder, Vec3::new(x, 0.0, -10.0 + i as f32 * 4.0), 7.0, Rgb::hex(0x5a4028), Rgb::hex(0x4a8a3a), false);
    }

    // a couple of bees in close loops around each hive, the rest as a swarm batch
    for (h, hive) in HIVES.into_iter().enumerate() {
        builder = builder.add_all_animated(
            Primitive::Sphere,
            (0..2).map(|_| place(hive + Vec3::Y * 1.8, Vec3::new(0.25, 0.18, 0.18), Rgb::hex(0xffd020))),
            Material::glowing(0.3),
            move |k, _| {
                let phase = (h * 2 + k) as f32 * 1.9;
                vec![
                    Animation::Orbit { center: hive + Vec3::Y * 1.6, radius: 1.8 + k as f32 * 0.6, speed: 2.0 + k as f32, phase, height: 0.3 },
                    Animation::bob(0.3, 5.0, phase),
                ]
            },
        );
    }
    let swarm = InstanceParams::scatter(
        rng,
        140,
        &ParamRanges::in_box(Vec3::new(-16.0, 0.8, -16.0), Vec3::new(16.0, 2.5, 16.0))
            .scale(0.08..0.12)
            .speed(1.5..3.0)
            .amplitude(0.6..1.4),
        &[Rgb::hex(0xffd020)],
    );
    let pollen = InstanceParams::scatter(
        rng,
        120,
        &ParamRanges::in_box(Vec3::new(-18.0, 0.0, -18.0), Vec3::new(18.0, 0.0, 18.0))
            .scale(0.03..0.06)
            .speed(0.1..0.3)
            .amplitude(0.3..0.8),
        &[Rgb::hex(0xfff6b0)],
    );

    builder
        .batch(InstancedBatch::new("bees", Primitive::Sphere, Material::glowing(0.4), InstanceMotion::Hover, swarm))
        .batch(InstancedBatch::new(
            "pollen",
            Primitive::Sphere,
            Material::glowing(0.6),
            InstanceMotion::Rise { bottom: 0.0, top: 8.0 },
            pollen,
        ))
        .build()
}
