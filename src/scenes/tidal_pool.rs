use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::hue_band;
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const ROCK: Rgb = Rgb::hex(0x5a524a);
const WATER: Rgb = Rgb::hex(0x3a8aa0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Tidal Pool")
        .background(Rgb::hex(0xb8d8e8))
        .fog(Rgb::hex(0xc8e0ea), 15.0, 55.0)
        .ambient(Rgb::hex(0xe8f4ff), 0.55)
        .sun(Vec3::new(0.3, -1.0, -0.2), Rgb::hex(0xfff8e8), 1.0)
        .add(Primitive::Plane, place(Vec3::new(0.0, -0.6, 0.0), Vec3::new(60.0, 1.0, 60.0), Rgb::hex(0xd8c8a0)), Material::MATTE)
        .add(Primitive::Cylinder, place(Vec3::new(0.0, -0.2, 0.0), Vec3::new(12.0, 0.2, 10.0), WATER), Material::glossy(1.0));

    // boulders walling the pool
    let rim = ring(Vec3::new(0.0, -0.2, 0.0), 6.4, 22, Vec3::ONE, |_| ROCK);
    for rock in rim {
        let size = rng.gen_range(1.0..2.2);
        builder = builder.add(
            Primitive::Sphere,
            rock.with_scale(Vec3::new(size * 1.3, size * 0.8, size)).with_color(ROCK.scaled(rng.gen_range(0.8..1.2))),
            Material::glossy(0.2),
        );
    }

    // starfish lying on the bottom, slowly turning
    let stars = scatter_disc(rng, 7, Vec3::new(0.0, -0.15, 0.0), 0.5, 4.0, 0.4..0.7, &[Rgb::hex(0xe8603a), Rgb::hex(0xd84a8a)]);
    for (i, star) in stars.into_iter().enumerate() {
        let arms = (0..5).map(|k| {
            let angle = k as f32 / 5.0 * TAU;
            let reach = Vec3::new(angle.cos(), 0.0, angle.sin()) * 0.4 * star.scale.x;
            place(star.position + reach, Vec3::new(0.8, 0.12, 0.25) * star.scale.x, star.color).with_yaw(-angle)
        });
        builder = builder.add_all_animated(Primitive::Sphere, arms, Material::MATTE, move |_, _| {
            vec![Animation::Revolve { pivot: star.position, axis: Vec3::Y, speed: 0.05 + i as f32 * 0.02 }]
        });
    }

    // anemones waving, urchins, a crab scuttling sideways
    let anemones = scatter_disc(rng, 12, Vec3::new(0.0, -0.1, 0.0), 1.0, 5.0, 0.3..0.5, &hue_band(0.85, 0.3, 4, 0.7, 0.9));
    builder = builder.add_all_animated(Primitive::Cone, anemones, Material::glowing(0.3), |i, p| {
        vec![
            Animation::Swing { pivot: p.position, axis: Vec3::X, wave: Wave::new(0.2, 1.4, i as f32) },
            Animation::Breathe(Wave::new(0.1, 1.1, i as f32)),
        ]
    });
    let urchins = scatter_disc(rng, 8, Vec3::new(0.0, -0.05, 0.0), 2.0, 5.0, 0.25..0.4, &[Rgb::hex(0x2a1a3a)]);
    builder = builder.add_all(Primitive::Sphere, urchins, Material::glossy(0.3));
    let crab = Vec3::new(-2.0, 0.25, 2.0);
    let scuttle = Animation::Sway { axis: Vec3::Y, wave: Wave::new(0.3, 0.8, 0.0) };
    let walk = Animation::Drift { velocity: Vec3::X * 0.5, period: 8.0 };
    builder = builder
        .add_animated(Primitive::Sphere, place(crab, Vec3::new(0.9, 0.35, 0.6), Rgb::hex(0xd83a2a)), Material::glossy(0.5), vec![walk, scuttle])
        .add_all_animated(
            Primitive::Cone,
            [-0.5f32, 0.5].into_iter().map(|x| place(crab + Vec3::new(x, 0.15, 0.35), Vec3::splat(0.25), Rgb::hex(0xe84a3a))),
            Material::glossy(0.5),
            |i, _| vec![walk, scuttle, Animation::Breathe(Wave::new(0.3, 4.0, i as f32))],
        );

    // kelp streamers at the seaward end
    for i in 0..6 {
        let base = Vec3::new(-3.0 + i as f32 * 1.2, -0.2, -3.5);
        builder = builder.add_animated(
            Primitive::Cylinder,
            place(base + Vec3::Y * 1.2, Vec3::new(0.12, 2.4, 0.12), Rgb::hex(0x4a6a2a)),
            Material::MATTE,
            vec![Animation::Swing { pivot: base, axis: Vec3::X, wave: Wave::new(0.25, 0.7, i as f32 * 0.6) }],
        );
    }

    // a floating ring of foam where the surf breaks
    builder = builder.add_animated(
        Primitive::Torus,
        place(Vec3::new(0.0, -0.05, -14.0), Vec3::new(26.0, 0.5, 6.0), Rgb::WHITE),
        Material::glowing(0.3),
        vec![Animation::bob(0.15, 0.5, 0.0)],
    );

    let ripples = (0..40)
        .map(|i| {
            let angle = i as f32 / 40.0 * TAU * 3.0;
            let radius = 0.5 + i as f32 * 0.12;
            let mut params = InstanceParams::at(Vec3::new(angle.cos() * radius, -0.05, angle.sin() * radius * 0.8));
            params.scale = 0.8;
            params.amplitude = 0.05;
            params.speed = 1.5;
            params.color = WATER.scaled(1.3);
            params
        })
        .collect();
    let shrimp = InstanceParams::scatter(
        rng,
        30,
        &ParamRanges::in_box(Vec3::new(0.0, -0.15, 0.0), Vec3::new(0.0, 0.0, 0.0))
            .scale(0.1..0.15)
            .speed(0.5..1.2)
            .radius(1.0..4.5)
            .amplitude(0.02..0.08),
        &[Rgb::hex(0xffc0a0)],
    );

    builder
        .batch(InstancedBatch::new("ripples", Primitive::Plane, Material::glossy(0.9), InstanceMotion::Swell { wavelength: 2.0 }, ripples))
        .batch(InstancedBatch::new("shrimp", Primitive::Cone, Material::glowing(0.2), InstanceMotion::Orbit { center: Vec3::ZERO }, shrimp))
        .build()
}
