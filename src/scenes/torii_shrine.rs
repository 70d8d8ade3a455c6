use glam::Vec3;

use super::common::{ground, post, slab, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const VERMILION: Rgb = Rgb::hex(0xd8401f);
const BLACK_LACQUER: Rgb = Rgb::hex(0x1a1414);

fn gate(builder: SceneBuilder, center: Vec3, scale: f32) -> SceneBuilder {
    let span = 2.2 * scale;
    let height = 4.0 * scale;
    builder
        .add(Primitive::Cylinder, post(center - Vec3::X * span, height, 0.2 * scale, VERMILION), Material::glossy(0.4))
        .add(Primitive::Cylinder, post(center + Vec3::X * span, height, 0.2 * scale, VERMILION), Material::glossy(0.4))
        .add(
            Primitive::Cube,
            slab(
                center + Vec3::new(-span - 0.6 * scale, height * 0.78, -0.15 * scale),
                center + Vec3::new(span + 0.6 * scale, height * 0.86, 0.15 * scale),
                VERMILION,
            ),
            Material::glossy(0.4),
        )
        .add(
            Primitive::Cube,
            slab(
                center + Vec3::new(-span - 1.0 * scale, height, -0.25 * scale),
                center + Vec3::new(span + 1.0 * scale, height + 0.3 * scale, 0.25 * scale),
                BLACK_LACQUER,
            ),
            Material::glossy(0.6),
        )
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Torii Shrine")
        .background(Rgb::hex(0xf2d6c4))
        .fog(Rgb::hex(0xf2d6c4), 18.0, 70.0)
        .ambient(Rgb::hex(0xfff0e6), 0.5)
        .sun(Vec3::new(0.5, -0.8, -0.3), Rgb::hex(0xffe4c8), 0.9)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x7a8f5a)), Material::MATTE);

    // a corridor of gates climbing the path toward the shrine
    for i in 0..7 {
        let center = Vec3::new(0.0, i as f32 * 0.35, 10.0 - i as f32 * 2.6);
        builder = gate(builder, center, 1.0 - i as f32 * 0.03);
    }
    let steps = line(Vec3::new(0.0, 0.1, 11.0), Vec3::new(0.0, 2.4, -8.0), 20, Vec3::new(3.2, 0.2, 1.0), |_| Rgb::hex(0xb8b0a0));
    builder = builder.add_all(Primitive::Cube, steps, Material::MATTE);

    // the shrine itself
    let hall = Vec3::new(0.0, 2.4, -12.0);
    builder = builder
        .add(Primitive::Cube, slab(hall + Vec3::new(-4.0, 0.0, -3.0), hall + Vec3::new(4.0, 3.0, 3.0), Rgb::hex(0xe8dcc0)), Material::MATTE)
        .add(Primitive::Cone, place(hall + Vec3::Y * 4.2, Vec3::new(11.0, 2.4, 8.0), Rgb::hex(0x3a4048)), Material::glossy(0.3))
        .add_animated(
            Primitive::Cylinder,
            place(hall + Vec3::new(0.0, 2.4, 3.3), Vec3::new(0.5, 0.8, 0.5), Rgb::hex(0xd0a040)),
            Material::glossy(0.8),
            vec![Animation::Swing { pivot: hall + Vec3::new(0.0, 2.9, 3.3), axis: Vec3::X, wave: Wave::new(0.2, 1.5, 0.0) }],
        );

    // stone lanterns either side of the lowest gate
    for x in [-4.0f32, 4.0] {
        let base = Vec3::new(x, 0.0, 12.0);
        builder = builder
            .add(Primitive::Cylinder, post(base, 1.6, 0.2, Rgb::hex(0x9a968c)), Material::MATTE)
            .add_animated(
                Primitive::Cube,
                place(base + Vec3::Y * 1.9, Vec3::splat(0.6), Rgb::hex(0xffd890)),
                Material::glowing(1.5),
                vec![Animation::pulse(1.5, 0.2, 3.0, x)],
            )
            .add(Primitive::Cone, place(base + Vec3::Y * 2.5, Vec3::new(1.2, 0.6, 1.2), Rgb::hex(0x8a867c)), Material::MATTE)
            .light(Light::point(base + Vec3::Y * 1.9, 7.0, Rgb::hex(0xffc070), 0.9).with_flicker(Wave::new(0.15, 6.0, x)));
    }

    for (i, x) in [-9.0f32, -7.0, 8.0, 10.0].into_iter().enumerate() {
        builder = tree(builder, Vec3::new(x, 0.0, -2.0 - i as f32 * 3.0), 6.0, Rgb::hex(0x4a3526), Rgb::hex(0xf7b7c8), false);
    }

    let petals = InstanceParams::scatter(
        rng,
        220,
        &ParamRanges::in_box(Vec3::new(-14.0, 0.0, -16.0), Vec3::new(14.0, 10.0, 14.0))
            .scale(0.08..0.16)
            .speed(0.4..0.9)
            .amplitude(0.5..1.4),
        &[Rgb::hex(0xffc8d8), Rgb::hex(0xfff0f4)],
    );

    builder
        .batch(InstancedBatch::new(
            "petals",
            Primitive::Plane,
            Material::glowing(0.2),
            InstanceMotion::Fall { top: 10.0, bottom: 0.0 },
            petals,
        ))
        .build()
}
