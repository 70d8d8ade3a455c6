use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{golden_color, post};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BRASS: Rgb = Rgb::hex(0xd4a84b);
const SUN: Rgb = Rgb::hex(0xffcc55);
const HUB: Vec3 = Vec3::new(0.0, 4.0, 0.0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Orrery")
        .background(Rgb::hex(0x0e0b16))
        .fog(Rgb::hex(0x0e0b16), 25.0, 70.0)
        .ambient(Rgb::hex(0xc0a070), 0.2)
        .add(Primitive::Cylinder, post(Vec3::Y * 0.6, 3.4, 0.25, BRASS), Material::glossy(0.9))
        .add_animated(
            Primitive::Sphere,
            place(HUB, Vec3::splat(2.0), SUN),
            Material::glowing(2.2),
            vec![
                Animation::spin_y(0.2),
                Animation::Pulse { base: 2.2, wave: Wave::new(0.3, 1.5, 0.0) },
            ],
        )
        .point_light(HUB, 40.0, SUN, 2.0);

    // planets on arms; the arm and everything it carries revolve together about the hub
    let planet_count = 6;
    for i in 0..planet_count {
        let radius = 3.0 + i as f32 * 1.9;
        // outer planets are slower
        let speed = 1.2 / (1.0 + i as f32 * 0.7);
        let start = rng.gen_range(0.0..TAU);
        let size = rng.gen_range(0.35..0.9);
        let color = golden_color(i as u32 + 1, 0.55, 0.95);
        let height = HUB.y - 0.4 - i as f32 * 0.08;
        let carry = Animation::Revolve { pivot: HUB, axis: Vec3::NEG_Y, speed };

        let direction = Vec3::new(start.cos(), 0.0, start.sin());
        let planet = Vec3::new(0.0, height, 0.0) + direction * radius;
        // the arm lies along its own local X; yaw turns local X onto `direction`
        let yaw = -start;
        builder = builder
            .add_animated(
                Primitive::Cube,
                place(Vec3::new(0.0, height - 0.5, 0.0) + direction * radius * 0.5, Vec3::new(radius, 0.08, 0.08), BRASS)
                    .with_yaw(yaw),
                Material::glossy(0.9),
                vec![carry],
            )
            .add_animated(
                Primitive::Cylinder,
                place(planet - Vec3::Y * 0.25, Vec3::new(0.06, 0.5, 0.06), BRASS),
                Material::glossy(0.9),
                vec![carry],
            )
            .add_animated(
                Primitive::Sphere,
                place(planet, Vec3::splat(size), color),
                Material::glossy(0.4),
                vec![Animation::spin_y(1.0), carry],
            );

        // a ring around the fourth planet, moons around the others
        if i == 3 {
            builder = builder.add_animated(
                Primitive::Torus,
                place(planet, Vec3::new(size * 2.6, size * 0.4, size * 2.6), Rgb::hex(0xe8d8b0))
                    .with_rotation(Vec3::new(0.4, 0.0, 0.2)),
                Material::glossy(0.6),
                vec![carry],
            );
        } else if i >= 2 {
            let moon_radius = size * 0.9 + 0.3;
            builder = builder.add_animated(
                Primitive::Sphere,
                place(planet, Vec3::splat(0.15), Rgb::hex(0xd0d0d0)),
                Material::MATTE,
                vec![
                    Animation::Orbit {
                        center: Vec3::new(planet.x, 0.0, planet.z),
                        radius: moon_radius,
                        speed: 2.0,
                        phase: i as f32,
                        height,
                    },
                    carry,
                ],
            );
        }
    }

    // orbit guides etched on the base plate
    let guides = (0..planet_count).map(|i| {
        let width = (3.0 + i as f32 * 1.9) * 2.0;
        place(Vec3::new(0.0, 0.62, 0.0), Vec3::new(width, 0.05, width), BRASS.scaled(0.6))
    });
    builder = builder
        .add(Primitive::Cylinder, post(Vec3::ZERO, 0.6, 14.0, Rgb::hex(0x1f1812)), Material::glossy(0.3))
        .add_all(Primitive::Torus, guides, Material::glossy(0.7));

    let stars = InstanceParams::scatter(
        rng,
        250,
        &ParamRanges::in_box(Vec3::splat(-60.0), Vec3::splat(60.0))
            .scale(0.1..0.3)
            .speed(0.5..2.0),
        &[Rgb::WHITE, Rgb::hex(0xffe6b0)],
    );

    builder
        .batch(InstancedBatch::new(
            "stars",
            Primitive::Sphere,
            Material::glowing(1.2),
            InstanceMotion::Twinkle,
            stars,
        ))
        .build()
}
