use glam::Vec3;
use rand::Rng;

use super::common::{golden_color, ground};
use crate::animation::Animation;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const ASPHALT: Rgb = Rgb::hex(0x15151c);
const TOWER: Rgb = Rgb::hex(0x23232e);
const NEON: [Rgb; 4] = [
    Rgb::hex(0xff2bd6),
    Rgb::hex(0x00f0ff),
    Rgb::hex(0xfff200),
    Rgb::hex(0x7c4dff),
];

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Neon City")
        .background(Rgb::hex(0x0b0614))
        .fog(Rgb::hex(0x1a0b2e), 15.0, 70.0)
        .ambient(Rgb::hex(0x6040a0), 0.2)
        .add(Primitive::Plane, ground(100.0, 0.0, ASPHALT), Material::glossy(0.8));

    // city blocks on a grid with avenues left open down the middle
    let lots = grid(Vec3::ZERO, 5.0, 9, 9, Vec3::ONE, |x, z| golden_color((x * 9 + z) as u32, 0.9, 1.0));
    for (i, lot) in lots.into_iter().enumerate() {
        if lot.position.x.abs() < 1.0 || lot.position.z.abs() < 1.0 {
            continue;
        }
        let height = rng.gen_range(4.0..18.0) * (1.0 - lot.position.length() / 40.0).max(0.3);
        let width = rng.gen_range(2.5..3.8);
        let base = lot.position;
        builder = builder.add(
            Primitive::Cube,
            place(base + Vec3::Y * height * 0.5, Vec3::new(width, height, width), TOWER),
            Material::glossy(0.6),
        );

        // glowing trim band and a rooftop sign
        let neon = NEON[i % NEON.len()];
        builder = builder.add_animated(
            Primitive::Cube,
            place(base + Vec3::Y * height * 0.8, Vec3::new(width + 0.05, 0.15, width + 0.05), neon),
            Material::glowing(1.8),
            vec![Animation::pulse(1.8, 0.6, rng.gen_range(1.0..4.0), rng.gen_range(0.0..6.0))],
        );
        if rng.gen_bool(0.35) {
            builder = builder.add_animated(
                Primitive::Cube,
                place(base + Vec3::Y * (height + 0.8), Vec3::new(width * 0.8, 1.0, 0.1), lot.color),
                Material::glowing(2.0),
                vec![
                    Animation::spin_y(rng.gen_range(0.2..0.6)),
                    Animation::ColorShift { to: neon, speed: 0.7, phase: i as f32 },
                ],
            );
        }
    }

    // a central spire with an orbiting halo
    builder = builder
        .add(Primitive::Cylinder, place(Vec3::new(0.0, 11.0, 0.0), Vec3::new(1.2, 22.0, 1.2), TOWER), Material::glossy(0.9))
        .add_animated(
            Primitive::Torus,
            place(Vec3::new(0.0, 18.0, 0.0), Vec3::new(5.0, 2.0, 5.0), NEON[1]),
            Material::glowing(2.0),
            vec![Animation::bob(2.0, 0.5, 0.0), Animation::sway(Vec3::X, 0.2, 0.7, 0.0)],
        )
        .point_light(Vec3::new(0.0, 18.0, 0.0), 30.0, NEON[1], 1.4)
        .point_light(Vec3::new(-12.0, 3.0, 8.0), 18.0, NEON[0], 1.2)
        .point_light(Vec3::new(12.0, 3.0, -8.0), 18.0, NEON[3], 1.2);

    // traffic streams along both avenues in both directions
    let lane = |rng: &mut SceneRng, origin: Vec3, direction: Vec3, color: Rgb| {
        let ranges = ParamRanges::in_box(origin, origin)
            .scale(0.35..0.45)
            .speed(6.0..12.0);
        let cars = InstanceParams::scatter(rng, 24, &ranges, &[color]);
        InstancedBatch::new("traffic", Primitive::Cube, Material::glowing(2.0), InstanceMotion::Stream { direction, span: 44.0 }, cars)
    };
    let lanes = [
        lane(rng, Vec3::new(-0.6, 0.25, -22.0), Vec3::Z, Rgb::hex(0xffffff)),
        lane(rng, Vec3::new(0.6, 0.25, 22.0), Vec3::NEG_Z, Rgb::hex(0xff3030)),
        lane(rng, Vec3::new(-22.0, 0.25, 0.6), Vec3::X, Rgb::hex(0xffffff)),
        lane(rng, Vec3::new(22.0, 0.25, -0.6), Vec3::NEG_X, Rgb::hex(0xff3030)),
    ];
    for batch in lanes {
        builder = builder.batch(batch);
    }

    let rain = InstanceParams::scatter(
        rng,
        300,
        &ParamRanges::in_box(Vec3::new(-25.0, 0.0, -25.0), Vec3::new(25.0, 25.0, 25.0))
            .scale(0.04..0.06)
            .speed(12.0..18.0),
        &[Rgb::hex(0x9aa6ff)],
    );

    builder
        .batch(InstancedBatch::new(
            "rain",
            Primitive::Cube,
            Material::glowing(0.4),
            InstanceMotion::Fall { top: 25.0, bottom: 0.0 },
            rain,
        ))
        .build()
}
