use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band, palm, slab};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{jitter_colors, line, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STONE: Rgb = Rgb::hex(0x8a8a6a);
const TIERS: usize = 6;
const TIER_HEIGHT: f32 = 1.6;

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Jungle Ziggurat")
        .background(Rgb::hex(0x8ab8a0))
        .fog(Rgb::hex(0x9ac8a8), 14.0, 60.0)
        .ambient(Rgb::hex(0xd8f0d0), 0.45)
        .sun(Vec3::new(0.3, -1.0, 0.4), Rgb::hex(0xfff4d0), 0.9)
        .add(Primitive::Plane, ground(90.0, 0.0, Rgb::hex(0x3a5a28)), Material::MATTE);

    // stepped pyramid, moss creeping up the lower tiers
    for tier in 0..TIERS {
        let half = 9.0 - tier as f32 * 1.4;
        let y = tier as f32 * TIER_HEIGHT;
        let color = STONE.lerp(Rgb::hex(0x4a7a3a), 0.5 - tier as f32 * 0.08);
        builder = builder.add(
            Primitive::Cube,
            slab(Vec3::new(-half, y, -half), Vec3::new(half, y + TIER_HEIGHT, half), color),
            Material::MATTE,
        );
    }
    let stairs = line(Vec3::new(0.0, 0.2, 9.3), Vec3::new(0.0, TIERS as f32 * TIER_HEIGHT - 0.2, 9.3 - (TIERS - 1) as f32 * 1.4), 18, Vec3::new(2.6, 0.35, 0.8), |_| STONE.scaled(1.1));
    builder = builder.add_all(Primitive::Cube, stairs, Material::MATTE);

    // shrine on top holding a pulsing jade idol
    let summit = Vec3::Y * TIERS as f32 * TIER_HEIGHT;
    builder = builder
        .add(Primitive::Cube, slab(summit + Vec3::new(-1.6, 0.0, -1.6), summit + Vec3::new(1.6, 2.4, 1.6), STONE.scaled(0.9)), Material::MATTE)
        .add_animated(
            Primitive::Sphere,
            place(summit + Vec3::Y * 3.2, Vec3::splat(1.0), Rgb::hex(0x3affa0)),
            Material::glowing(2.0),
            vec![Animation::spin_y(0.6), Animation::bob(0.2, 1.0, 0.0), Animation::pulse(2.0, 0.8, 1.5, 0.0)],
        )
        .light(Light::point(summit + Vec3::Y * 3.5, 18.0, Rgb::hex(0x3affa0), 1.2).with_flicker(Wave::new(0.15, 1.5, 0.0)));

    // palms and ferns around the base
    for i in 0..10 {
        let angle = i as f32 / 10.0 * TAU + rng.gen_range(-0.15..0.15);
        let radius = rng.gen_range(13.0..20.0);
        let height = rng.gen_range(5.0..8.0);
        builder = palm(builder, Vec3::new(angle.cos(), 0.0, angle.sin()) * radius, height, -angle + TAU / 2.0, i as f32);
    }
    let ferns = scatter_disc(rng, 40, Vec3::ZERO, 10.5, 22.0, 0.8..1.6, &hue_band(0.3, 0.1, 4, 0.7, 0.6));
    let ferns = jitter_colors(rng, ferns, 0.1);
    builder = builder.add_all_animated(
        Primitive::Cone,
        ferns.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.4, 0.9, 1.4))),
        Material::MATTE,
        |i, p| vec![Animation::Swing { pivot: p.position, axis: Vec3::Z, wave: Wave::new(0.08, 1.2, i as f32) }],
    );

    // vines hanging off the tier edges
    for (i, x) in [-5.5f32, -3.5, 3.5, 5.5].into_iter().enumerate() {
        let top = Vec3::new(x, 3.0 * TIER_HEIGHT, 9.0 - 2.0 * 1.4 + 0.1);
        builder = builder.add_animated(
            Primitive::Cylinder,
            place(top - Vec3::Y * 1.5, Vec3::new(0.08, 3.0, 0.08), Rgb::hex(0x2f6a2a)),
            Material::MATTE,
            vec![Animation::Swing { pivot: top, axis: Vec3::X, wave: Wave::new(0.1, 0.9, i as f32) }],
        );
    }

    let fireflies = InstanceParams::scatter(
        rng,
        120,
        &ParamRanges::in_box(Vec3::new(-20.0, 0.5, -20.0), Vec3::new(20.0, 6.0, 20.0))
            .scale(0.05..0.1)
            .speed(0.5..1.5)
            .amplitude(0.5..1.2),
        &[Rgb::hex(0xd8ff6a)],
    );
    let parrots = InstanceParams::scatter(
        rng,
        12,
        &ParamRanges::in_box(Vec3::new(0.0, 12.0, 0.0), Vec3::new(0.0, 16.0, 0.0))
            .scale(0.35..0.5)
            .speed(0.4..0.8)
            .radius(8.0..14.0)
            .amplitude(0.5..1.0),
        &[Rgb::hex(0xe83a2a), Rgb::hex(0x2a8ae8), Rgb::hex(0xe8d82a)],
    );

    builder
        .batch(InstancedBatch::new("fireflies", Primitive::Sphere, Material::glowing(1.5), InstanceMotion::Hover, fireflies))
        .batch(InstancedBatch::new("parrots", Primitive::Cone, Material::glossy(0.4), InstanceMotion::Orbit { center: summit }, parrots))
        .build()
}
