use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, palm, post};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const SAND: Rgb = Rgb::hex(0xe3c48a);
const POOL: Vec3 = Vec3::new(0.0, 0.05, 0.0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Desert Oasis")
        .background(Rgb::hex(0xf4b26a))
        .fog(Rgb::hex(0xf6c48a), 25.0, 80.0)
        .ambient(Rgb::hex(0xffe0b0), 0.5)
        .sun(Vec3::new(0.6, -0.7, 0.3), Rgb::hex(0xffd59a), 1.1)
        .add(Primitive::Plane, ground(90.0, 0.0, SAND), Material::MATTE);

    // dunes
    let dunes = scatter_disc(rng, 12, Vec3::ZERO, 16.0, 32.0, 5.0..10.0, &[Rgb::hex(0xe8b878), Rgb::hex(0xd9a865)]);
    builder = builder.add_all(
        Primitive::Sphere,
        dunes.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(2.0, 0.35, 1.0))),
        Material::MATTE,
    );

    // the pool, rippling, with a rim of stones
    let ripples = (0..24)
        .map(|i| {
            let angle = i as f32 / 24.0 * TAU;
            let radius = 1.0 + (i % 3) as f32 * 1.5;
            let mut params = InstanceParams::at(POOL + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius));
            params.scale = 1.6;
            params.amplitude = 0.05;
            params.speed = 1.2;
            params.color = Rgb::hex(0x2a9fb8);
            params
        })
        .collect();
    builder = builder
        .add(Primitive::Cylinder, place(POOL, Vec3::new(10.0, 0.1, 10.0), Rgb::hex(0x1d7f9a)), Material::glossy(0.9))
        .add_all(Primitive::Sphere, ring(POOL, 5.3, 20, Vec3::new(0.7, 0.4, 0.7), |_| Rgb::hex(0xb8a27a)), Material::MATTE);

    for i in 0..6 {
        let angle = i as f32 / 6.0 * TAU + rng.gen_range(0.0..0.4);
        let base = Vec3::new(angle.cos(), 0.0, angle.sin()) * rng.gen_range(6.0..8.0);
        // lean out over the water
        let to_pool = POOL - base;
        let lean = (-to_pool.z).atan2(to_pool.x);
        builder = palm(builder, base, rng.gen_range(4.5..6.5), lean, i as f32 * 0.9);
    }

    // a resting caravan: camels with humps, a tent
    for (i, x) in [9.0f32, 11.0].into_iter().enumerate() {
        let body = Vec3::new(x, 1.6, 6.0);
        let breath = Animation::Breathe(Wave::new(0.03, 1.0, i as f32));
        builder = builder
            .add_animated(Primitive::Sphere, place(body, Vec3::new(2.0, 1.0, 0.9), Rgb::hex(0xb98a50)), Material::MATTE, vec![breath])
            .add_animated(Primitive::Sphere, place(body + Vec3::Y * 0.6, Vec3::splat(0.7), Rgb::hex(0xb98a50)), Material::MATTE, vec![breath])
            .add_animated(
                Primitive::Sphere,
                place(body + Vec3::new(1.3, 0.9, 0.0), Vec3::new(0.6, 0.4, 0.4), Rgb::hex(0xa97a42)),
                Material::MATTE,
                vec![Animation::sway(Vec3::Z, 0.15, 0.6, i as f32)],
            );
        for (dx, dz) in [(-0.6f32, -0.25f32), (-0.6, 0.25), (0.6, -0.25), (0.6, 0.25)] {
            builder = builder.add(Primitive::Cylinder, post(Vec3::new(x + dx, 0.0, 6.0 + dz), 1.3, 0.1, Rgb::hex(0xa97a42)), Material::MATTE);
        }
    }
    builder = builder.add(
        Primitive::Cone,
        place(Vec3::new(-9.0, 1.5, 7.0), Vec3::new(4.0, 3.0, 4.0), Rgb::hex(0xc84b31)),
        Material::MATTE,
    );

    let heat = InstanceParams::scatter(
        rng,
        90,
        &ParamRanges::in_box(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 0.0, 20.0))
            .scale(0.05..0.1)
            .speed(0.2..0.5)
            .amplitude(0.3..0.8),
        &[Rgb::hex(0xfff0c0)],
    );

    builder
        .batch(InstancedBatch::new("ripples", Primitive::Torus, Material::glossy(0.8), InstanceMotion::Swell { wavelength: 3.0 }, ripples))
        .batch(InstancedBatch::new(
            "heat shimmer",
            Primitive::Sphere,
            Material::glowing(0.3),
            InstanceMotion::Rise { bottom: 0.0, top: 6.0 },
            heat,
        ))
        .build()
}
