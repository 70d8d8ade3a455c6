use glam::Vec3;

use super::common::UPRIGHT;
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STAR: Vec3 = Vec3::ZERO;
const ROCK: [Rgb; 3] = [Rgb::hex(0x6a625a), Rgb::hex(0x8a7a6a), Rgb::hex(0x4e4a46)];

pub fn build(rng: &mut SceneRng) -> SceneContent {
    // the belt is flattened by keeping every rock's origin height small
    let belt = InstanceParams::scatter(
        rng,
        500,
        &ParamRanges::in_box(Vec3::new(0.0, -0.8, 0.0), Vec3::new(0.0, 0.8, 0.0))
            .scale(0.15..0.7)
            .speed(0.05..0.14)
            .radius(14.0..22.0)
            .amplitude(0.0..0.3),
        &ROCK,
    );
    let outer = InstanceParams::scatter(
        rng,
        120,
        &ParamRanges::in_box(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 2.0, 0.0))
            .scale(0.4..1.2)
            .speed(0.02..0.05)
            .radius(30.0..34.0),
        &ROCK,
    );
    let stars = InstanceParams::scatter(
        rng,
        400,
        &ParamRanges::in_box(Vec3::splat(-90.0), Vec3::splat(90.0))
            .scale(0.1..0.3)
            .speed(0.3..1.5),
        &[Rgb::WHITE, Rgb::hex(0xffe8c0), Rgb::hex(0xc0d8ff)],
    );

    let mut builder = SceneBuilder::new("Asteroid Belt")
        .background(Rgb::hex(0x020208))
        .ambient(Rgb::hex(0x202840), 0.2)
        .light(Light::point(STAR, 80.0, Rgb::hex(0xfff0c0), 2.0).with_flicker(Wave::new(0.05, 2.0, 0.0)))
        .add_animated(
            Primitive::Sphere,
            place(STAR, Vec3::splat(5.0), Rgb::hex(0xffd070)),
            Material::glowing(2.5),
            vec![Animation::Breathe(Wave::new(0.03, 1.0, 0.0)), Animation::spin_y(0.1)],
        )
        .add_animated(
            Primitive::Sphere,
            place(STAR, Vec3::splat(6.5), Rgb::hex(0xff9040)),
            Material::glowing(0.6),
            vec![Animation::Breathe(Wave::new(0.08, 0.6, 1.0))],
        );

    // inner planets
    for (i, (radius, size, color)) in [(7.0f32, 0.8f32, Rgb::hex(0xb07050)), (10.5, 1.2, Rgb::hex(0x4a90d0))].into_iter().enumerate() {
        let orbit = Animation::Orbit { center: STAR, radius, speed: 0.4 / (i + 1) as f32, phase: i as f32 * 2.5, height: 0.0 };
        builder = builder.add_animated(
            Primitive::Sphere,
            place(STAR + Vec3::X * radius, Vec3::splat(size), color),
            Material::glossy(0.4),
            vec![orbit],
        );
    }

    // a mining rig drifting through the belt, its ring turning
    let rig = Vec3::new(0.0, 3.0, 18.0);
    let glide = Animation::Revolve { pivot: STAR, axis: Vec3::Y, speed: 0.08 };
    builder = builder
        .add_animated(Primitive::Cylinder, place(rig, Vec3::new(1.0, 3.0, 1.0), Rgb::hex(0xc0c4cc)), Material::glossy(0.7), vec![glide])
        .add_animated(
            Primitive::Torus,
            place(rig, Vec3::splat(3.5), Rgb::hex(0x9aa0aa)).with_rotation(UPRIGHT),
            Material::glossy(0.7),
            vec![glide, Animation::Spin { axis: Vec3::Y, speed: 0.8 }],
        )
        .add_animated(
            Primitive::Sphere,
            place(rig + Vec3::Y * 1.8, Vec3::splat(0.4), Rgb::hex(0x40ff80)),
            Material::glowing(2.0),
            vec![glide, Animation::pulse(2.0, 1.5, 4.0, 0.0)],
        );

    builder
        .batch(InstancedBatch::new("asteroids", Primitive::Sphere, Material::MATTE, InstanceMotion::Orbit { center: STAR }, belt))
        .batch(InstancedBatch::new("outer debris", Primitive::Cube, Material::MATTE, InstanceMotion::Orbit { center: STAR }, outer))
        .batch(InstancedBatch::new("stars", Primitive::Sphere, Material::glowing(1.5), InstanceMotion::Twinkle, stars))
        .build()
}
