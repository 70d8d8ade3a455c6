use glam::Vec3;

use super::common::slab;
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, scatter, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const GLASS: Rgb = Rgb::hex(0x9fd3e6);
const FRAME: Rgb = Rgb::hex(0x202428);
const GRAVEL: Rgb = Rgb::hex(0xb09a80);
const TANK_MIN: Vec3 = Vec3::new(-8.0, 1.0, -4.0);
const TANK_MAX: Vec3 = Vec3::new(8.0, 9.0, 4.0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Aquarium")
        .background(Rgb::hex(0x1c1f26))
        .ambient(Rgb::hex(0xd0e8ff), 0.35)
        .sun(Vec3::new(0.0, -1.0, -0.2), Rgb::hex(0xd8f0ff), 0.5)
        // cabinet, gravel bed, back panel
        .add(Primitive::Cube, slab(Vec3::new(-8.5, 0.0, -4.5), Vec3::new(8.5, 1.0, 4.5), FRAME), Material::glossy(0.4))
        .add(Primitive::Cube, slab(Vec3::new(-8.0, 1.0, -4.0), Vec3::new(8.0, 1.6, 4.0), GRAVEL), Material::MATTE)
        .add(Primitive::Cube, slab(Vec3::new(-8.0, 1.0, -4.2), Vec3::new(8.0, 9.0, -4.0), Rgb::hex(0x0f4c6a)), Material::glowing(0.2))
        .add(Primitive::Cube, slab(Vec3::new(-8.5, 9.0, -4.5), Vec3::new(8.5, 9.4, 4.5), FRAME), Material::glossy(0.4));

    // frame posts at the corners
    for x in [TANK_MIN.x, TANK_MAX.x] {
        for z in [TANK_MIN.z, TANK_MAX.z] {
            builder = builder.add(
                Primitive::Cube,
                slab(Vec3::new(x - 0.15, 1.0, z - 0.15), Vec3::new(x + 0.15, 9.0, z + 0.15), FRAME),
                Material::glossy(0.4),
            );
        }
    }

    // weed fronds rooted in the gravel
    let weeds = scatter(rng, 16, Vec3::new(-7.0, 1.6, -3.0), Vec3::new(7.0, 1.6, 0.0), 0.8..1.4, &[Rgb::hex(0x2e8b57), Rgb::hex(0x3cb371)]);
    builder = builder.add_all_animated(
        Primitive::Cone,
        weeds.into_iter().map(|mut p| {
            let height = p.scale.y * 3.0;
            p.position.y += height * 0.5;
            p.with_scale(Vec3::new(0.3, height, 0.3)).with_rotation(Vec3::ZERO)
        }),
        Material::MATTE,
        |i, _| vec![Animation::sway(Vec3::Z, 0.18, 1.2, i as f32 * 0.7)],
    );

    let pebbles = scatter(rng, 30, Vec3::new(-7.5, 1.7, -3.5), Vec3::new(7.5, 1.7, 3.5), 0.2..0.5, &[Rgb::hex(0xd0c4b0), Rgb::hex(0x8a7a6a), Rgb::hex(0xe8d8c0)]);
    builder = builder
        .add_all(Primitive::Sphere, pebbles, Material::glossy(0.5))
        // castle ornament with a bubbling chest
        .add(Primitive::Cylinder, place(Vec3::new(4.0, 3.0, -1.5), Vec3::new(1.4, 2.8, 1.4), Rgb::hex(0xc2b280)), Material::MATTE)
        .add(Primitive::Cone, place(Vec3::new(4.0, 4.9, -1.5), Vec3::new(1.7, 1.0, 1.7), Rgb::hex(0xa0522d)), Material::MATTE)
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(-3.5, 2.0, 1.0), Vec3::new(1.0, 0.7, 0.7), Rgb::hex(0x8b5a2b)),
            Material::MATTE,
            vec![Animation::sway(Vec3::Z, 0.05, 6.0, 0.0)],
        )
        // glass lid and the strip light under it
        .add(Primitive::Plane, place(Vec3::new(0.0, 9.05, 0.0), Vec3::new(16.0, 1.0, 8.0), GLASS.scaled(0.6)), Material::glossy(1.0))
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 8.6, 0.0), Vec3::new(10.0, 0.1, 1.0), Rgb::hex(0xe0f4ff)),
            Material::glowing(1.0),
            vec![Animation::Pulse { base: 1.0, wave: Wave::new(0.1, 0.5, 0.0) }],
        )
        .point_light(Vec3::new(0.0, 8.5, 0.0), 14.0, Rgb::hex(0xbfe8ff), 1.4);

    let swim_box = ParamRanges::in_box(TANK_MIN + Vec3::new(1.0, 1.5, 1.0), TANK_MAX - Vec3::new(1.0, 1.0, 1.0));
    let tetras = InstanceParams::scatter(
        rng,
        30,
        &swim_box.clone().scale(0.2..0.3).speed(0.3..0.7).amplitude(0.8..1.8),
        &[Rgb::hex(0x00bfff), Rgb::hex(0xff4500)],
    );
    let bubbles = InstanceParams::scatter(
        rng,
        40,
        &ParamRanges::in_box(Vec3::new(-3.7, 2.3, 0.8), Vec3::new(-3.3, 2.3, 1.2))
            .scale(0.08..0.16)
            .speed(1.0..1.8)
            .amplitude(0.05..0.15),
        &[Rgb::hex(0xf0fbff)],
    );

    builder
        .batch(InstancedBatch::new(
            "tetras",
            Primitive::Cone,
            Material::glossy(0.6),
            InstanceMotion::Hover,
            tetras,
        ))
        .batch(InstancedBatch::new(
            "bubbles",
            Primitive::Sphere,
            Material::glowing(0.3),
            InstanceMotion::Rise { bottom: 2.3, top: 8.8 },
            bubbles,
        ))
        .build()
}
