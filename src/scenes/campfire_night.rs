use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const NIGHT: Rgb = Rgb::hex(0x070a14);
const FIRE: Vec3 = Vec3::ZERO;

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Campfire Night")
        .background(NIGHT)
        .fog(NIGHT, 10.0, 45.0)
        .ambient(Rgb::hex(0x1a2440), 0.2)
        .sun(Vec3::new(0.2, -1.0, 0.4), Rgb::hex(0x8090c0), 0.15)
        .add(Primitive::Plane, ground(70.0, 0.0, Rgb::hex(0x2a2a1e)), Material::MATTE);

    // stone ring, crossed logs and layered flames
    let stones = ring(FIRE + Vec3::Y * 0.15, 1.6, 12, Vec3::new(0.5, 0.35, 0.5), |_| Rgb::hex(0x6a6660));
    builder = builder.add_all(Primitive::Sphere, stones, Material::MATTE);
    for k in 0..4 {
        let yaw = k as f32 / 4.0 * TAU * 0.5;
        builder = builder.add(
            Primitive::Cylinder,
            place(FIRE + Vec3::Y * 0.25, Vec3::new(0.25, 2.0, 0.25), Rgb::hex(0x4a3020)).with_rotation(Vec3::new(0.0, yaw, TAU / 4.0 - 0.3)),
            Material::MATTE,
        );
    }
    for (k, (height, color)) in [(1.8f32, Rgb::hex(0xff4a1a)), (1.3, Rgb::hex(0xff9a2a)), (0.8, Rgb::hex(0xffe060))].into_iter().enumerate() {
        builder = builder.add_animated(
            Primitive::Cone,
            place(FIRE + Vec3::Y * (0.3 + height * 0.5), Vec3::new(height * 0.6, height, height * 0.6), color),
            Material::glowing(2.5 + k as f32 * 0.5),
            vec![
                Animation::Breathe(Wave::new(0.12, 7.0 + k as f32 * 2.0, k as f32)),
                Animation::sway(Vec3::Z, 0.08, 3.0, k as f32 * 1.7),
                Animation::spin_y(1.0 + k as f32),
            ],
        );
    }

    // log seats, a tent, a guitar leaning on a seat
    // laid on their sides, lengthwise along the ring
    let seats = ring(FIRE + Vec3::Y * 0.35, 4.0, 4, Vec3::new(0.7, 2.2, 0.7), |_| Rgb::hex(0x5a3a22));
    builder = builder.add_all(
        Primitive::Cylinder,
        seats.into_iter().map(|seat| seat.with_rotation(seat.rotation + Vec3::new(0.0, 0.0, TAU / 4.0))),
        Material::MATTE,
    );
    builder = builder
        .add(
            Primitive::Cone,
            place(Vec3::new(-6.0, 1.3, -5.0), Vec3::new(3.6, 2.6, 3.6), Rgb::hex(0x3a7a6a)).with_rotation(Vec3::new(0.0, TAU / 8.0, 0.0)),
            Material::MATTE,
        )
        .add(
            Primitive::Sphere,
            place(Vec3::new(4.5, 0.9, 0.8), Vec3::new(0.7, 1.0, 0.25), Rgb::hex(0xb07a3a)).with_rotation(Vec3::new(0.0, 0.0, 0.3)),
            Material::glossy(0.6),
        );

    // marshmallow sticks held over the flames
    for k in 0..3 {
        let angle = k as f32 / 3.0 * TAU + 0.4;
        let grip = FIRE + Vec3::new(angle.cos() * 3.4, 1.0, angle.sin() * 3.4);
        let tip = FIRE + Vec3::new(angle.cos() * 0.9, 1.6, angle.sin() * 0.9);
        let mid = (grip + tip) * 0.5;
        let direction = (tip - grip).normalize_or_zero();
        let tilt = direction.y.asin();
        let wobble = Animation::Swing { pivot: grip, axis: Vec3::Y, wave: Wave::new(0.06, 1.5, k as f32) };
        builder = builder
            .add_animated(
                Primitive::Cylinder,
                place(mid, Vec3::new(0.05, (tip - grip).length(), 0.05), Rgb::hex(0x8a6a4a))
                    .with_rotation(Vec3::new(0.0, -angle, TAU / 4.0 - tilt)),
                Material::MATTE,
                vec![wobble],
            )
            .add_animated(
                Primitive::Cylinder,
                place(tip, Vec3::new(0.25, 0.3, 0.25), Rgb::hex(0xfff4e0)),
                Material::glowing(0.3),
                vec![wobble, Animation::ColorShift { to: Rgb::hex(0xc08040), speed: 0.2, phase: k as f32 }],
            );
    }

    for i in 0..14 {
        let angle = i as f32 / 14.0 * TAU + rng.gen_range(-0.1..0.1);
        let radius = rng.gen_range(11.0..18.0);
        let height = rng.gen_range(5.0..8.0);
        builder = tree(builder, Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius), height, Rgb::hex(0x2a2018), Rgb::hex(0x1a3020), true);
    }
    let rocks = scatter_disc(rng, 10, Vec3::ZERO, 6.0, 12.0, 0.3..0.9, &[Rgb::hex(0x4a4a50)]);
    builder = builder.add_all(Primitive::Sphere, rocks, Material::MATTE);

    let embers = InstanceParams::scatter(
        rng,
        140,
        &ParamRanges::in_box(FIRE - Vec3::new(0.6, 0.0, 0.6), FIRE + Vec3::new(0.6, 0.5, 0.6))
            .scale(0.03..0.07)
            .speed(0.8..1.8)
            .amplitude(0.2..0.7),
        &[Rgb::hex(0xffa030), Rgb::hex(0xff6020), Rgb::hex(0xffe080)],
    );
    let stars = InstanceParams::scatter(
        rng,
        300,
        &ParamRanges::in_box(Vec3::new(-60.0, 25.0, -60.0), Vec3::new(60.0, 45.0, 60.0))
            .scale(0.08..0.18)
            .speed(0.4..1.6),
        &[Rgb::WHITE, Rgb::hex(0xd0e0ff)],
    );

    builder
        .light(Light::point(FIRE + Vec3::Y * 1.2, 14.0, Rgb::hex(0xff8a30), 2.0).with_flicker(Wave::new(0.35, 11.0, 0.0)))
        .light(Light::point(FIRE + Vec3::Y * 0.6, 6.0, Rgb::hex(0xffc060), 1.0).with_flicker(Wave::new(0.25, 17.0, 1.3)))
        .batch(InstancedBatch::new("embers", Primitive::Sphere, Material::glowing(2.0), InstanceMotion::Rise { bottom: 0.3, top: 7.0 }, embers))
        .batch(InstancedBatch::new("stars", Primitive::Sphere, Material::glowing(1.4), InstanceMotion::Twinkle, stars))
        .build()
}
