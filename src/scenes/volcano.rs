use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::ground;
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BASALT: Rgb = Rgb::hex(0x2a2422);
const LAVA: Rgb = Rgb::hex(0xff5a1f);
const EMBER: Rgb = Rgb::hex(0xffa040);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Volcano")
        .background(Rgb::hex(0x1a0a08))
        .fog(Rgb::hex(0x2b1410), 20.0, 70.0)
        .ambient(Rgb::hex(0xff8060), 0.15)
        .sun(Vec3::new(0.0, -1.0, 0.3), Rgb::hex(0xffb090), 0.3)
        .add(Primitive::Plane, ground(120.0, 0.0, Rgb::hex(0x1c1614)), Material::MATTE)
        // mountain body with a crater lip
        .add(
            Primitive::Cone,
            place(Vec3::new(0.0, 6.0, 0.0), Vec3::new(24.0, 12.0, 24.0), BASALT),
            Material::MATTE,
        )
        .add(
            Primitive::Torus,
            place(Vec3::new(0.0, 10.6, 0.0), Vec3::new(7.0, 4.0, 7.0), BASALT),
            Material::MATTE,
        )
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 10.7, 0.0), Vec3::new(3.2, 0.6, 3.2), LAVA),
            Material::glowing(2.0),
            vec![
                Animation::Pulse { base: 2.0, wave: Wave::new(0.6, 1.3, 0.0) },
                Animation::ColorShift { to: Rgb::hex(0xffd040), speed: 0.8, phase: 0.0 },
            ],
        )
        .light(
            Light::point(Vec3::new(0.0, 13.0, 0.0), 30.0, LAVA, 2.0)
                .with_flicker(Wave::new(0.5, 3.7, 0.0)),
        );

    // lava rivers running down the flank
    for river in 0..4 {
        let yaw = river as f32 / 4.0 * TAU + rng.gen_range(-0.3..0.3);
        let dir = Vec3::new(yaw.cos(), 0.0, yaw.sin());
        for step in 0..8 {
            let t = step as f32 / 8.0;
            let position = dir * (1.6 + t * 10.0) + Vec3::Y * (10.2 - t * 10.0);
            builder = builder.add_animated(
                Primitive::Sphere,
                place(position, Vec3::new(1.2, 0.4, 1.2), LAVA.lerp(Rgb::hex(0x8a1a00), t)),
                Material::glowing(1.4 - t),
                vec![Animation::pulse(1.4 - t, 0.4, 2.0, step as f32 * 0.8 + river as f32)],
            );
        }
    }

    let boulders = scatter_disc(rng, 26, Vec3::new(0.0, 0.4, 0.0), 13.0, 40.0, 0.6..2.2, &[BASALT, Rgb::hex(0x3a302c)]);
    builder = builder.add_all(Primitive::Cube, boulders, Material::MATTE);

    let embers = InstanceParams::scatter(
        rng,
        150,
        &ParamRanges::in_box(Vec3::new(-2.5, 11.0, -2.5), Vec3::new(2.5, 11.0, 2.5))
            .scale(0.08..0.25)
            .speed(2.0..5.0)
            .amplitude(0.5..2.5),
        &[EMBER, LAVA, Rgb::hex(0xffe070)],
    );
    let smoke = InstanceParams::scatter(
        rng,
        40,
        &ParamRanges::in_box(Vec3::new(-1.5, 12.0, -1.5), Vec3::new(1.5, 12.0, 1.5))
            .scale(1.5..3.5)
            .speed(0.8..1.5)
            .amplitude(1.0..3.0),
        &[Rgb::hex(0x3a3330), Rgb::hex(0x4a403c)],
    );

    builder
        .batch(InstancedBatch::new(
            "embers",
            Primitive::Sphere,
            Material::glowing(2.5),
            InstanceMotion::Rise { bottom: 11.0, top: 22.0 },
            embers,
        ))
        .batch(InstancedBatch::new(
            "smoke",
            Primitive::Sphere,
            Material::MATTE,
            InstanceMotion::Rise { bottom: 12.0, top: 30.0 },
            smoke,
        ))
        .build()
}
