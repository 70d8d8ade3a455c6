use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, post, slab};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, ring, scatter_disc, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const SAND: Rgb = Rgb::hex(0xe2c08d);
const SANDSTONE: Rgb = Rgb::hex(0xc8955c);
const GOLD: Rgb = Rgb::hex(0xffcf40);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Desert Temple")
        .background(Rgb::hex(0xf4c27a))
        .fog(Rgb::hex(0xf4c27a), 30.0, 90.0)
        .ambient(Rgb::hex(0xffe0b0), 0.45)
        .sun(Vec3::new(-0.6, -0.7, -0.2), Rgb::hex(0xfff0d0), 1.1)
        .add(Primitive::Plane, ground(120.0, 0.0, SAND), Material::MATTE);

    // stepped pyramid
    for step in 0..6 {
        let half = 7.0 - step as f32 * 1.1;
        let y = step as f32 * 0.9;
        builder = builder.add(
            Primitive::Cube,
            slab(Vec3::new(-half, y, -half - 6.0), Vec3::new(half, y + 0.9, half - 6.0), SANDSTONE.scaled(1.0 - step as f32 * 0.04)),
            Material::MATTE,
        );
    }

    // colonnade leading up to it
    for x in [-3.0f32, 3.0] {
        let columns = line(
            Vec3::new(x, 0.0, 12.0),
            Vec3::new(x, 0.0, 2.0),
            5,
            Vec3::ONE,
            solid_color(SANDSTONE),
        );
        for p in columns {
            builder = builder
                .add(Primitive::Cylinder, post(p.position, 5.0, 0.45, SANDSTONE), Material::MATTE)
                .add(
                    Primitive::Cube,
                    place(p.position + Vec3::Y * 5.2, Vec3::new(1.3, 0.4, 1.3), SANDSTONE),
                    Material::MATTE,
                );
        }
    }

    // obelisks on the corners of the forecourt
    let obelisks = ring(Vec3::new(0.0, 0.0, 7.0), 8.5, 4, Vec3::ONE, solid_color(SANDSTONE));
    for (i, p) in obelisks.into_iter().enumerate() {
        let base = p.position;
        builder = builder
            .add(Primitive::Cube, place(base + Vec3::Y * 3.0, Vec3::new(0.9, 6.0, 0.9), SANDSTONE).with_yaw(i as f32 * TAU / 8.0), Material::MATTE)
            .add(Primitive::Cone, place(base + Vec3::Y * 6.4, Vec3::new(0.9, 0.8, 0.9), GOLD), Material::glossy(0.9));
    }

    // floating relic above the apex
    builder = builder
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(0.0, 7.5, -6.0), Vec3::splat(0.9), GOLD).with_rotation(Vec3::new(0.6, 0.0, 0.6)),
            Material { emissive: 0.6, gloss: 1.0 },
            vec![
                Animation::spin_y(0.8),
                Animation::bob(0.35, 1.1, 0.0),
                Animation::Pulse { base: 0.6, wave: Wave::new(0.3, 2.0, 0.0) },
            ],
        )
        .point_light(Vec3::new(0.0, 7.5, -6.0), 12.0, GOLD, 1.2);

    let dunes = scatter_disc(rng, 16, Vec3::ZERO, 25.0, 50.0, 4.0..9.0, &[SAND, Rgb::hex(0xd8b077)]);
    builder = builder.add_all(
        Primitive::Sphere,
        dunes.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(2.0, 0.35, 1.0))),
        Material::MATTE,
    );

    let dust = InstanceParams::scatter(
        rng,
        120,
        &ParamRanges::in_box(Vec3::new(-30.0, 0.2, -20.0), Vec3::new(-30.0, 3.0, 20.0))
            .scale(0.05..0.15)
            .speed(3.0..6.0)
            .amplitude(0.1..0.4),
        &[Rgb::hex(0xf0d9a8)],
    );

    builder
        .batch(InstancedBatch::new(
            "blowing sand",
            Primitive::Sphere,
            Material::MATTE,
            InstanceMotion::Stream { direction: Vec3::X, span: 60.0 },
            dust,
        ))
        .build()
}
