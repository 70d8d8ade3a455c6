use glam::Vec3;

use super::common::{golden_color, ground, post, slab};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, line, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BRICK: Rgb = Rgb::hex(0xa0503a);
const IRON: Rgb = Rgb::hex(0x2a3a34);
const LENGTH: f32 = 18.0;
const WIDTH: f32 = 10.0;

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Greenhouse")
        .background(Rgb::hex(0xdde8e0))
        .fog(Rgb::hex(0xe8f0ea), 20.0, 70.0)
        .ambient(Rgb::hex(0xf0fff4), 0.6)
        .sun(Vec3::new(-0.2, -1.0, -0.3), Rgb::hex(0xfffaf0), 1.0)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x8a7a64)), Material::MATTE);

    // open iron frame: posts along both sides carrying arched ribs
    let ribs = line(Vec3::new(0.0, 0.0, -LENGTH / 2.0), Vec3::new(0.0, 0.0, LENGTH / 2.0), 7, Vec3::ONE, |_| IRON);
    for rib in ribs {
        for x in [-WIDTH / 2.0, WIDTH / 2.0] {
            builder = builder.add(Primitive::Cylinder, post(rib.position + Vec3::X * x, 4.0, 0.1, IRON), Material::glossy(0.5));
        }
        for k in 0..9 {
            let a = k as f32 / 8.0 * std::f32::consts::PI;
            let offset = Vec3::new(-a.cos() * WIDTH / 2.0, 4.0 + a.sin() * 3.0, 0.0);
            builder = builder.add(Primitive::Sphere, place(rib.position + offset, Vec3::splat(0.2), IRON), Material::glossy(0.5));
        }
    }
    for x in [-WIDTH / 2.0, WIDTH / 2.0] {
        builder = builder.add(
            Primitive::Cube,
            slab(Vec3::new(x - 0.2, 0.0, -LENGTH / 2.0), Vec3::new(x + 0.2, 0.7, LENGTH / 2.0), BRICK),
            Material::MATTE,
        );
    }

    // potting benches with rows of flowers nodding in the vent draught
    for x in [-3.0f32, 3.0] {
        builder = builder.add(
            Primitive::Cube,
            slab(Vec3::new(x - 1.0, 0.9, -7.5), Vec3::new(x + 1.0, 1.1, 7.5), Rgb::hex(0x8a6040)),
            Material::MATTE,
        );
        let pots = grid(Vec3::new(x, 1.35, 0.0), 1.0, 2, 14, Vec3::new(0.5, 0.5, 0.5), |_, _| Rgb::hex(0xb85a3a));
        for (i, pot) in pots.into_iter().enumerate() {
            let nod = Animation::Swing { pivot: pot.position, axis: Vec3::X, wave: Wave::new(0.12, 1.3, i as f32 * 0.4 + x) };
            builder = builder
                .add(Primitive::Cylinder, pot, Material::MATTE)
                .add_animated(Primitive::Cylinder, post(pot.position, 0.9, 0.03, Rgb::hex(0x3a7a2a)), Material::MATTE, vec![nod])
                .add_animated(
                    Primitive::Sphere,
                    place(pot.position + Vec3::Y * 1.0, Vec3::splat(0.35), golden_color(i as u32, 0.6, 1.0)),
                    Material::glossy(0.3),
                    vec![nod, Animation::Breathe(Wave::new(0.08, 0.8, i as f32))],
                );
        }
    }

    // a ceiling fan and a watering can that tips
    builder = builder
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(0.0, 6.2, 0.0), Vec3::new(3.0, 0.05, 0.4), IRON),
            Material::glossy(0.6),
            vec![Animation::spin_y(3.0)],
        )
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(0.0, 6.2, 0.0), Vec3::new(0.4, 0.05, 3.0), IRON),
            Material::glossy(0.6),
            vec![Animation::spin_y(3.0)],
        )
        .add_animated(
            Primitive::Cylinder,
            place(Vec3::new(0.0, 0.5, -3.0), Vec3::new(0.7, 0.9, 0.7), Rgb::hex(0x5a8a9a)),
            Material::glossy(0.7),
            vec![Animation::Swing { pivot: Vec3::new(0.0, 0.0, -3.0), axis: Vec3::Z, wave: Wave::new(0.2, 0.6, 0.0) }],
        );

    let mist = InstanceParams::scatter(
        rng,
        160,
        &ParamRanges::in_box(Vec3::new(-4.5, 0.5, -8.5), Vec3::new(4.5, 6.0, 8.5))
            .scale(0.05..0.1)
            .speed(0.2..0.6)
            .amplitude(0.2..0.6),
        &[Rgb::WHITE, Rgb::hex(0xe0fff0)],
    );
    let butterflies = InstanceParams::scatter(
        rng,
        10,
        &ParamRanges::in_box(Vec3::new(-3.0, 2.5, -6.0), Vec3::new(3.0, 4.0, 6.0))
            .scale(0.2..0.3)
            .speed(1.0..2.0)
            .amplitude(0.8..1.6),
        &[Rgb::hex(0xffa030), Rgb::hex(0x6ab0ff)],
    );

    builder
        .batch(InstancedBatch::new("mist", Primitive::Sphere, Material::glowing(0.3), InstanceMotion::Hover, mist))
        .batch(InstancedBatch::new("butterflies", Primitive::Plane, Material::glossy(0.4), InstanceMotion::Hover, butterflies))
        .build()
}
