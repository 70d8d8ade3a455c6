use std::f32::consts::TAU;

use glam::Vec3;

use super::common::post;
use crate::animation::Animation;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{alternating_colors, line, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const ROCK: Rgb = Rgb::hex(0x4d4a45);
const SEA: Rgb = Rgb::hex(0x123a5a);
const BEAM: Rgb = Rgb::hex(0xfff6c8);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    // banded tower built from stacked drums
    let bands = line(
        Vec3::new(0.0, 2.75, 0.0),
        Vec3::new(0.0, 11.25, 0.0),
        6,
        Vec3::new(2.4, 1.7, 2.4),
        alternating_colors(Rgb::hex(0xf2f2f2), Rgb::hex(0xc0392b)),
    );

    let mut builder = SceneBuilder::new("Lighthouse")
        .background(Rgb::hex(0x0d1b2a))
        .fog(Rgb::hex(0x0d1b2a), 20.0, 80.0)
        .ambient(Rgb::hex(0x7090c0), 0.25)
        .sun(Vec3::new(-0.4, -0.6, 0.7), Rgb::hex(0xb0c4ff), 0.35)
        .add(Primitive::Sphere, place(Vec3::new(0.0, 0.0, 0.0), Vec3::new(12.0, 4.0, 10.0), ROCK), Material::MATTE)
        .add_all(Primitive::Cylinder, bands, Material::glossy(0.3))
        .add(Primitive::Cylinder, post(Vec3::new(0.0, 12.1, 0.0), 0.3, 1.6, Rgb::hex(0x222222)), Material::MATTE)
        .add(
            Primitive::Cylinder,
            post(Vec3::new(0.0, 12.4, 0.0), 1.4, 1.0, Rgb::hex(0xfff0b0)),
            Material::glowing(0.6),
        )
        .add(Primitive::Cone, place(Vec3::new(0.0, 14.3, 0.0), Vec3::new(2.4, 1.2, 2.4), Rgb::hex(0x222222)), Material::glossy(0.5))
        // lamp and two opposed sweeping beams
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 13.1, 0.0), Vec3::splat(0.8), BEAM),
            Material::glowing(3.0),
            vec![Animation::pulse(3.0, 0.3, 4.0, 0.0)],
        );

    // the beam's tip sits on the lamp; a local X spin reads as a world Y sweep
    // once the cone is laid on its side, and the orbit keeps the tip in place
    let sweep = 0.6;
    for k in 0..2 {
        let yaw = k as f32 * TAU * 0.5;
        builder = builder.add_animated(
            Primitive::Cone,
            place(Vec3::ZERO, Vec3::new(2.5, 14.0, 2.5), BEAM).with_rotation(Vec3::new(0.0, yaw, TAU * 0.25)),
            Material::glowing(0.7),
            vec![
                Animation::Spin { axis: Vec3::X, speed: sweep },
                Animation::Orbit {
                    center: Vec3::ZERO,
                    radius: 7.0,
                    speed: -sweep,
                    phase: -yaw,
                    height: 13.1,
                },
            ],
        );
    }

    let rocks = scatter_disc(rng, 20, Vec3::new(0.0, 0.0, 0.0), 6.0, 12.0, 0.8..2.0, &[ROCK, Rgb::hex(0x3b3935)]);
    builder = builder.add_all(Primitive::Sphere, rocks, Material::MATTE);

    let waves: Vec<_> = (0..48)
        .flat_map(|x| (0..48).map(move |z| (x, z)))
        .map(|(x, z)| {
            let mut p = InstanceParams::at(Vec3::new(x as f32 * 2.0 - 47.0, 0.2, z as f32 * 2.0 - 47.0));
            p.scale = 2.05;
            p.speed = 1.0;
            p.amplitude = 0.4;
            p.color = SEA;
            p
        })
        .collect();

    let gulls = InstanceParams::scatter(
        rng,
        9,
        &ParamRanges::in_box(Vec3::new(0.0, 9.0, 0.0), Vec3::new(0.0, 15.0, 0.0))
            .scale(0.3..0.45)
            .speed(0.25..0.5)
            .radius(6.0..14.0)
            .amplitude(0.4..1.2),
        &[Rgb::hex(0xf0f0f0)],
    );

    builder
        .point_light(Vec3::new(0.0, 13.1, 0.0), 25.0, BEAM, 1.8)
        .point_light(Vec3::new(0.0, 3.0, 8.0), 10.0, Rgb::hex(0xffb060), 0.6)
        .batch(InstancedBatch::new(
            "sea",
            Primitive::Plane,
            Material::glossy(0.8),
            InstanceMotion::Swell { wavelength: 12.0 },
            waves,
        ))
        .batch(InstancedBatch::new(
            "gulls",
            Primitive::Cone,
            Material::MATTE,
            InstanceMotion::Orbit { center: Vec3::ZERO },
            gulls,
        ))
        .build()
}
