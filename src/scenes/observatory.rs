use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, post, slab};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const DOME: Rgb = Rgb::hex(0xd0d4da);
const STONE: Rgb = Rgb::hex(0x8a8478);
const BRASS: Rgb = Rgb::hex(0xc9a24a);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Observatory")
        .background(Rgb::hex(0x05070f))
        .fog(Rgb::hex(0x05070f), 30.0, 90.0)
        .ambient(Rgb::hex(0x5060a0), 0.18)
        .sun(Vec3::new(0.3, -1.0, 0.2), Rgb::hex(0xaab8ff), 0.3)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x24302a)), Material::MATTE)
        .add(Primitive::Cylinder, post(Vec3::ZERO, 4.0, 4.0, STONE), Material::MATTE)
        // the dome turns slowly to track the sky
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 4.0, 0.0), Vec3::splat(7.6), DOME),
            Material::glossy(0.7),
            vec![Animation::spin_y(0.05)],
        )
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(0.0, 6.0, 2.0), Vec3::new(1.4, 4.0, 4.4), Rgb::hex(0x1a1a22)),
            Material::MATTE,
            vec![Animation::Orbit { center: Vec3::ZERO, radius: 2.0, speed: -0.05, phase: TAU * 0.25, height: 6.0 }, Animation::spin_y(0.05)],
        )
        // telescope peeking out of the slit
        .add_animated(
            Primitive::Cylinder,
            place(Vec3::new(0.0, 7.0, 2.5), Vec3::new(0.9, 5.0, 0.9), BRASS).with_rotation(Vec3::new(0.7, 0.0, 0.0)),
            Material::glossy(0.9),
            vec![Animation::sway(Vec3::Y, 0.25, 0.1, 0.0)],
        )
        .add(
            Primitive::Cube,
            slab(Vec3::new(-1.0, 0.0, 3.6), Vec3::new(1.0, 2.6, 4.2), Rgb::hex(0x3d2b1f)),
            Material::MATTE,
        )
        .point_light(Vec3::new(0.0, 1.3, 4.5), 6.0, Rgb::hex(0xffc070), 1.2);

    // low wall with lanterns
    let wall = ring(Vec3::new(0.0, 0.4, 0.0), 9.0, 36, Vec3::new(1.5, 0.8, 0.5), solid_color(STONE));
    builder = builder.add_all(Primitive::Cube, wall, Material::MATTE);
    let lanterns = ring(Vec3::new(0.0, 1.1, 0.0), 9.0, 6, Vec3::splat(0.35), solid_color(Rgb::hex(0xffd080)));
    builder = builder.add_all_animated(Primitive::Sphere, lanterns, Material::glowing(1.2), |i, _| {
        vec![Animation::Pulse { base: 1.2, wave: Wave::new(0.2, 2.0, i as f32) }]
    });

    let shrubs = scatter_disc(rng, 24, Vec3::new(0.0, 0.3, 0.0), 10.5, 25.0, 0.6..1.4, &[Rgb::hex(0x2f4a2a), Rgb::hex(0x3c5a30)]);
    builder = builder.add_all(Primitive::Sphere, shrubs, Material::MATTE);

    // a star dome above, plus the odd shooting star
    let mut stars = InstanceParams::scatter(
        rng,
        500,
        &ParamRanges::in_box(Vec3::new(-1.0, 0.15, -1.0), Vec3::new(1.0, 1.0, 1.0))
            .scale(0.12..0.35)
            .speed(0.4..2.5),
        &[Rgb::WHITE, Rgb::hex(0xbfd4ff), Rgb::hex(0xffe0b0)],
    );
    for star in &mut stars {
        star.origin = star.origin.normalize_or_zero() * 70.0;
    }
    let meteors = InstanceParams::scatter(
        rng,
        4,
        &ParamRanges::in_box(Vec3::new(-40.0, 30.0, -30.0), Vec3::new(-20.0, 40.0, -10.0))
            .scale(0.2..0.3)
            .speed(12.0..20.0),
        &[Rgb::hex(0xfff8e0)],
    );

    builder
        .batch(InstancedBatch::new(
            "star dome",
            Primitive::Sphere,
            Material::glowing(1.5),
            InstanceMotion::Twinkle,
            stars,
        ))
        .batch(InstancedBatch::new(
            "shooting stars",
            Primitive::Sphere,
            Material::glowing(3.0),
            InstanceMotion::Stream { direction: Vec3::new(1.0, -0.3, 0.4), span: 90.0 },
            meteors,
        ))
        .build()
}
