use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{golden_color, ground, post, vertical_ring, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{alternating_colors, place, ring, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const WHEEL: Vec3 = Vec3::new(-6.0, 9.0, -6.0);
const WHEEL_RADIUS: f32 = 7.0;
const CAROUSEL: Vec3 = Vec3::new(8.0, 0.0, 2.0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Carnival")
        .background(Rgb::hex(0x140c2a))
        .fog(Rgb::hex(0x140c2a), 30.0, 80.0)
        .ambient(Rgb::hex(0x6a4a9a), 0.3)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x3a3426)), Material::MATTE);

    // ferris wheel: A-frame legs, a turning rim, cabins that stay level
    let rim_speed = 0.25;
    for (x, z) in [(-3.0f32, -1.0f32), (3.0, -1.0), (-3.0, 1.0), (3.0, 1.0)] {
        let foot = WHEEL + Vec3::new(x, -WHEEL.y, z);
        let middle = (foot + WHEEL) * 0.5;
        let length = (WHEEL - foot).length();
        builder = builder.add(
            Primitive::Cylinder,
            place(middle, Vec3::new(0.3, length, 0.3), Rgb::hex(0xd0d0d8)).with_rotation(Vec3::new(0.0, 0.0, (x / WHEEL.y).atan())),
            Material::glossy(0.6),
        );
    }
    builder = builder.add_animated(
        Primitive::Torus,
        place(WHEEL, Vec3::splat(WHEEL_RADIUS * 2.0), Rgb::hex(0xff5aa0)).with_rotation(UPRIGHT),
        Material::glowing(0.8),
        vec![Animation::Spin { axis: Vec3::Y, speed: rim_speed }],
    );
    let cabins: Vec<_> = vertical_ring(WHEEL, WHEEL_RADIUS, 10)
        .enumerate()
        .map(|(i, p)| place(p - Vec3::Y * 0.8, Vec3::new(1.2, 1.0, 1.2), golden_color(i as u32, 0.7, 1.0)))
        .collect();
    builder = builder.add_all_animated(Primitive::Cube, cabins, Material::glossy(0.4), |_, _| {
        vec![
            Animation::Revolve { pivot: WHEEL, axis: Vec3::Z, speed: rim_speed },
            Animation::Spin { axis: Vec3::Z, speed: -rim_speed },
        ]
    });

    // carousel: canopy, poles and horses riding up and down as the deck turns
    let turn = Animation::Revolve { pivot: CAROUSEL, axis: Vec3::Y, speed: 0.6 };
    builder = builder
        .add_animated(Primitive::Cylinder, place(CAROUSEL + Vec3::Y * 0.2, Vec3::new(9.0, 0.4, 9.0), Rgb::hex(0xe8d0a0)), Material::glossy(0.3), vec![turn])
        .add(Primitive::Cylinder, post(CAROUSEL, 5.0, 0.4, Rgb::hex(0xd4af37)), Material::glossy(0.9))
        .add_animated(
            Primitive::Cone,
            place(CAROUSEL + Vec3::Y * 5.8, Vec3::new(10.0, 2.0, 10.0), Rgb::hex(0xe83a4a)),
            Material::glossy(0.4),
            vec![turn],
        );
    let stripes = ring(CAROUSEL + Vec3::Y * 4.7, 4.6, 16, Vec3::new(1.8, 0.4, 0.1), alternating_colors(Rgb::hex(0xe83a4a), Rgb::WHITE));
    builder = builder.add_all_animated(Primitive::Cube, stripes, Material::glowing(0.3), |_, _| vec![turn]);
    let horses = ring(CAROUSEL + Vec3::Y * 1.6, 3.2, 8, Vec3::new(1.4, 0.7, 0.4), |i| golden_color(i as u32 + 3, 0.3, 1.0));
    for (i, horse) in horses.into_iter().enumerate() {
        let ride = Animation::bob(0.4, 2.0, i as f32 * TAU / 4.0);
        builder = builder
            .add_animated(
                Primitive::Cylinder,
                post(horse.position - Vec3::Y * 1.2, 4.0, 0.05, Rgb::hex(0xd4af37)),
                Material::glossy(0.9),
                vec![turn],
            )
            .add_animated(Primitive::Cube, horse, Material::glossy(0.5), vec![ride, turn]);
    }

    // tents and string lights
    for (i, x) in [-14.0f32, 14.0].into_iter().enumerate() {
        let tent = Vec3::new(x, 0.0, 10.0);
        builder = builder
            .add(Primitive::Cylinder, post(tent, 2.5, 2.5, if i == 0 { Rgb::hex(0xe8c040) } else { Rgb::hex(0x40a0e8) }), Material::MATTE)
            .add(Primitive::Cone, place(tent + Vec3::Y * 3.6, Vec3::new(5.6, 2.2, 5.6), Rgb::hex(0xe83a4a)), Material::MATTE);
    }
    // sagging between the tent tops
    let bulbs = (0..25).map(|i| {
        let t = i as f32 / 24.0;
        let sag = (t * TAU * 0.5).sin() * 1.8;
        place(Vec3::new(-14.0 + t * 28.0, 6.5 - sag, 10.0), Vec3::splat(0.25), golden_color(i, 0.6, 1.0))
    });
    builder = builder.add_all_animated(Primitive::Sphere, bulbs, Material::glowing(2.0), |i, _| {
        vec![Animation::Pulse { base: 2.0, wave: Wave::new(1.2, 4.0, i as f32 * 0.8) }]
    });

    let balloons = InstanceParams::scatter(
        rng,
        24,
        &ParamRanges::in_box(Vec3::new(-10.0, 1.5, 0.0), Vec3::new(10.0, 1.5, 14.0))
            .scale(0.5..0.8)
            .speed(0.4..0.8)
            .amplitude(0.1..0.3),
        &[Rgb::hex(0xff4a4a), Rgb::hex(0x4affa0), Rgb::hex(0xffe04a), Rgb::hex(0x4ab0ff)],
    );

    builder
        .light(Light::point(WHEEL, 16.0, Rgb::hex(0xff5aa0), 1.0).with_flicker(Wave::new(0.2, 2.0, 0.0)))
        .point_light(CAROUSEL + Vec3::Y * 4.0, 12.0, Rgb::hex(0xffd890), 1.2)
        .point_light(Vec3::new(0.0, 6.0, 10.0), 14.0, Rgb::hex(0xffb060), 0.8)
        .batch(InstancedBatch::new(
            "escaped balloons",
            Primitive::Sphere,
            Material::glossy(0.7),
            InstanceMotion::Rise { bottom: 1.5, top: 30.0 },
            balloons,
        ))
        .build()
}
