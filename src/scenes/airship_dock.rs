use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{post, slab};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BRASS: Rgb = Rgb::hex(0xc89b3c);
const TOWER: Vec3 = Vec3::ZERO;

/// Hull, gondola and a propeller on each side; everything shares the same motion
fn airship(builder: SceneBuilder, center: Vec3, hull: Rgb, motion: &[Animation]) -> SceneBuilder {
    let with = |extra: Option<Animation>| {
        let mut animations = motion.to_vec();
        animations.extend(extra);
        animations
    };
    let mut builder = builder
        .add_animated(Primitive::Sphere, place(center, Vec3::new(7.0, 2.4, 2.4), hull), Material::glossy(0.4), with(None))
        .add_animated(
            Primitive::Cube,
            place(center - Vec3::Y * 1.7, Vec3::new(2.4, 0.8, 1.0), Rgb::hex(0x6a4a2a)),
            Material::MATTE,
            with(None),
        )
        .add_animated(
            Primitive::Cone,
            place(center - Vec3::X * 3.6, Vec3::new(0.2, 1.4, 1.4), hull.scaled(0.8)),
            Material::MATTE,
            with(None),
        );
    for z in [-1.4f32, 1.4] {
        let hub = center + Vec3::new(-2.0, -1.2, z);
        builder = builder.add_animated(
            Primitive::Cube,
            place(hub, Vec3::new(0.08, 1.2, 0.12), BRASS),
            Material::glossy(0.8),
            with(Some(Animation::Spin { axis: Vec3::X, speed: 12.0 })),
        );
    }
    builder
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Airship Dock")
        .background(Rgb::hex(0x9cc4e4))
        .fog(Rgb::hex(0xd8e8f4), 30.0, 110.0)
        .ambient(Rgb::hex(0xf0f4ff), 0.5)
        .sun(Vec3::new(-0.5, -0.8, -0.4), Rgb::hex(0xfff0d8), 1.0)
        .add(Primitive::Cylinder, place(Vec3::new(0.0, -6.0, 0.0), Vec3::new(16.0, 2.0, 16.0), Rgb::hex(0x7a8a6a)), Material::MATTE)
        .add(Primitive::Cone, place(Vec3::new(0.0, -10.0, 0.0), Vec3::new(16.0, 6.0, 16.0), Rgb::hex(0x6a5a44)).with_rotation(Vec3::new(TAU / 2.0, 0.0, 0.0)), Material::MATTE);

    // mooring tower with a spinning beacon and a ring of landing platforms
    builder = builder
        .add(Primitive::Cylinder, post(TOWER - Vec3::Y * 5.0, 16.0, 0.6, Rgb::hex(0x5a5a62)), Material::glossy(0.5))
        .add_animated(
            Primitive::Torus,
            place(TOWER + Vec3::Y * 11.0, Vec3::splat(2.4), BRASS),
            Material::glossy(0.9),
            vec![Animation::spin_y(0.5)],
        )
        .add_animated(
            Primitive::Sphere,
            place(TOWER + Vec3::Y * 11.6, Vec3::splat(0.6), Rgb::hex(0xff5030)),
            Material::glowing(2.0),
            vec![Animation::pulse(2.0, 1.5, 3.0, 0.0)],
        );
    let platforms = ring(TOWER + Vec3::Y * 6.0, 4.0, 4, Vec3::new(3.0, 0.3, 2.0), |_| Rgb::hex(0x8a6a48));
    builder = builder.add_all(Primitive::Cube, platforms, Material::MATTE);
    builder = builder.add(
        Primitive::Cube,
        slab(Vec3::new(-1.0, 5.7, -8.0), Vec3::new(1.0, 6.0, -4.0), Rgb::hex(0x8a6a48)),
        Material::MATTE,
    );

    // one ship moored, bobbing; two circling the tower
    builder = airship(builder, Vec3::new(0.0, 8.5, -9.5), Rgb::hex(0xd04a3a), &[Animation::bob(0.3, 0.7, 0.0)]);
    for (i, radius) in [16.0f32, 22.0].into_iter().enumerate() {
        // hulls start on the Z axis so they lie along their path
        let center = TOWER + Vec3::new(0.0, 12.0 + i as f32 * 4.0, radius);
        let revolve = Animation::Revolve { pivot: TOWER, axis: Vec3::Y, speed: 0.15 - i as f32 * 0.04 };
        let hull = if i == 0 { Rgb::hex(0xe8d8b0) } else { Rgb::hex(0x5a7ab0) };
        builder = airship(builder, center, hull, &[revolve, Animation::bob(0.4, 0.5, i as f32)]);
    }

    // signal flags on the tower
    for (i, y) in [7.5f32, 8.5, 9.5].into_iter().enumerate() {
        builder = builder.add_animated(
            Primitive::Cube,
            place(TOWER + Vec3::new(0.9, y, 0.0), Vec3::new(1.0, 0.6, 0.05), Rgb::from_hsv(i as f32 * 0.3, 0.8, 0.95)),
            Material::MATTE,
            vec![Animation::Swing { pivot: TOWER + Vec3::new(0.6, y, 0.0), axis: Vec3::Y, wave: Wave::new(0.4, 2.0, i as f32) }],
        );
    }

    let clouds = InstanceParams::scatter(
        rng,
        40,
        &ParamRanges::in_box(Vec3::new(-50.0, -4.0, -50.0), Vec3::new(-30.0, 20.0, 50.0))
            .scale(2.0..5.0)
            .speed(0.5..1.0)
            .amplitude(0.2..0.6),
        &[Rgb::WHITE, Rgb::hex(0xe8eef4)],
    );

    builder
        .light(Light::point(TOWER + Vec3::Y * 11.6, 14.0, Rgb::hex(0xff6040), 0.8).with_flicker(Wave::new(0.5, 3.0, 0.0)))
        .batch(InstancedBatch::new(
            "clouds",
            Primitive::Sphere,
            Material::glossy(0.1),
            InstanceMotion::Stream { direction: Vec3::X, span: 100.0 },
            clouds,
        ))
        .build()
}
