use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, slab, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BRASS: Rgb = Rgb::hex(0xc9a03c);
const COPPER: Rgb = Rgb::hex(0xb87333);
const STEEL: Rgb = Rgb::hex(0x9aa0a8);
const WOOD: Rgb = Rgb::hex(0x5a3a22);

/// Gear train on the back wall: (centre, radius, colour). Neighbours mesh, so
/// each turns opposite to the last at a rate inverse to its radius.
const GEARS: [(Vec3, f32, Rgb); 6] = [
    (Vec3::new(-5.0, 6.0, -5.6), 2.0, BRASS),
    (Vec3::new(-1.6, 7.6, -5.6), 1.4, COPPER),
    (Vec3::new(1.2, 5.6, -5.6), 1.8, BRASS),
    (Vec3::new(4.4, 7.4, -5.6), 1.2, STEEL),
    (Vec3::new(6.2, 4.6, -5.6), 1.0, COPPER),
    (Vec3::new(-2.2, 3.4, -5.6), 1.0, STEEL),
];

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Clockwork Workshop")
        .background(Rgb::hex(0x1a120c))
        .fog(Rgb::hex(0x1a120c), 15.0, 45.0)
        .ambient(Rgb::hex(0xffd8a0), 0.25)
        .add(Primitive::Plane, ground(40.0, 0.0, Rgb::hex(0x3a2a1c)), Material::MATTE)
        .add(Primitive::Cube, slab(Vec3::new(-10.0, 0.0, -6.2), Vec3::new(10.0, 11.0, -6.0), WOOD), Material::MATTE);

    let base_speed = 0.8;
    for (i, (center, radius, color)) in GEARS.into_iter().enumerate() {
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        let speed = direction * base_speed / radius;
        let size = radius * 2.0;
        // upright torus rim plus teeth riding around it
        builder = builder
            .add_animated(
                Primitive::Torus,
                place(center, Vec3::new(size, size * 0.8, size), color).with_rotation(UPRIGHT),
                Material::glossy(0.8),
                vec![Animation::Spin { axis: Vec3::Y, speed }],
            )
            .add(
                Primitive::Cylinder,
                place(center, Vec3::new(0.4, 0.6, 0.4), STEEL).with_rotation(UPRIGHT),
                Material::glossy(0.9),
            );
        let teeth = (radius * 8.0) as usize;
        for k in 0..teeth {
            let angle = k as f32 / teeth as f32 * TAU;
            let offset = Vec3::new(angle.cos(), angle.sin(), 0.0) * radius * 1.08;
            builder = builder.add_animated(
                Primitive::Cube,
                place(center + offset, Vec3::new(0.3, 0.25, 0.3), color).with_rotation(Vec3::new(0.0, 0.0, angle)),
                Material::glossy(0.8),
                vec![Animation::Revolve { pivot: center, axis: Vec3::Z, speed }],
            );
        }
    }

    // workbench with a ticking pendulum clock
    let pendulum = Animation::Swing {
        pivot: Vec3::new(6.5, 4.5, -1.7),
        axis: Vec3::Z,
        wave: Wave::new(0.35, 3.0, 0.0),
    };
    builder = builder
        .add(Primitive::Cube, slab(Vec3::new(-4.0, 1.8, -1.0), Vec3::new(4.0, 2.0, 1.5), WOOD), Material::glossy(0.3))
        .add_all(
            Primitive::Cube,
            [(-3.7, -0.8), (3.7, -0.8), (-3.7, 1.3), (3.7, 1.3)]
                .map(|(x, z)| place(Vec3::new(x, 0.9, z), Vec3::new(0.25, 1.8, 0.25), WOOD)),
            Material::MATTE,
        )
        .add(Primitive::Cube, slab(Vec3::new(5.5, 0.0, -3.0), Vec3::new(7.5, 6.0, -1.8), WOOD), Material::glossy(0.3))
        .add(
            Primitive::Cylinder,
            place(Vec3::new(6.5, 5.0, -1.75), Vec3::new(1.6, 0.1, 1.6), Rgb::hex(0xf4ead0)).with_rotation(UPRIGHT),
            Material::MATTE,
        )
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(6.5, 3.0, -1.7), Vec3::new(0.08, 3.0, 0.05), BRASS),
            Material::glossy(0.9),
            vec![pendulum],
        )
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(6.5, 1.6, -1.7), Vec3::splat(0.5), BRASS),
            Material::glossy(0.9),
            vec![pendulum],
        );

    // tools scattered on the bench
    let tools = ring(Vec3::new(0.0, 2.1, 0.2), 2.2, 7, Vec3::new(0.6, 0.15, 0.2), solid_color(STEEL));
    builder = builder.add_all(Primitive::Cube, tools, Material::glossy(0.7));

    // a small automaton whirring on the bench
    builder = builder
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 2.5, 0.2), Vec3::splat(0.8), COPPER),
            Material::glossy(0.9),
            vec![Animation::bob(0.1, 6.0, 0.0), Animation::spin_y(1.5)],
        )
        .add_animated(
            Primitive::Cone,
            place(Vec3::new(0.0, 3.1, 0.2), Vec3::new(0.3, 0.5, 0.3), BRASS),
            Material::glowing(0.4),
            vec![Animation::bob(0.1, 6.0, 0.0), Animation::pulse(0.4, 0.4, 5.0, 0.0)],
        )
        .light(Light::point(Vec3::new(0.0, 5.0, 1.0), 12.0, Rgb::hex(0xffc070), 1.6).with_flicker(Wave::new(0.15, 7.0, 0.0)))
        .point_light(Vec3::new(-6.0, 8.0, -3.0), 12.0, Rgb::hex(0xffa050), 0.8);

    let sparks = InstanceParams::scatter(
        rng,
        50,
        &ParamRanges::in_box(Vec3::new(-0.3, 2.2, 0.0), Vec3::new(0.3, 2.2, 0.4))
            .scale(0.03..0.06)
            .speed(1.5..3.0)
            .amplitude(0.2..0.6),
        &[Rgb::hex(0xffd070), Rgb::hex(0xffffff)],
    );
    let dust = InstanceParams::scatter(
        rng,
        80,
        &ParamRanges::in_box(Vec3::new(-8.0, 0.5, -5.0), Vec3::new(8.0, 9.0, 4.0))
            .scale(0.02..0.05)
            .speed(0.1..0.3)
            .amplitude(0.3..0.8),
        &[Rgb::hex(0xffe8c0)],
    );

    builder
        .batch(InstancedBatch::new(
            "sparks",
            Primitive::Sphere,
            Material::glowing(2.5),
            InstanceMotion::Rise { bottom: 2.2, top: 3.6 },
            sparks,
        ))
        .batch(InstancedBatch::new(
            "dust",
            Primitive::Sphere,
            Material::glowing(0.4),
            InstanceMotion::Hover,
            dust,
        ))
        .build()
}
