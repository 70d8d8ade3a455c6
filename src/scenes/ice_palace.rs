use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, hue_band};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, rings, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const ICE: Rgb = Rgb::hex(0xbfe6ff);
const DEEP_ICE: Rgb = Rgb::hex(0x7fb8e0);
const FROST: Rgb = Rgb::hex(0xf4fbff);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let aurora = hue_band(0.33, 0.45, 6, 0.7, 1.0);

    let mut builder = SceneBuilder::new("Ice Palace")
        .background(Rgb::hex(0x06101f))
        .fog(Rgb::hex(0x0c1c33), 25.0, 90.0)
        .ambient(Rgb::hex(0x9fc8ff), 0.3)
        .sun(Vec3::new(-0.2, -1.0, 0.5), Rgb::hex(0xd0e4ff), 0.5)
        .add(Primitive::Plane, ground(120.0, 0.0, FROST), Material::glossy(0.9))
        // central keep
        .add(Primitive::Cylinder, place(Vec3::new(0.0, 5.0, 0.0), Vec3::new(5.0, 10.0, 5.0), ICE), Material::glossy(1.0))
        .add(Primitive::Cone, place(Vec3::new(0.0, 12.5, 0.0), Vec3::new(5.6, 5.0, 5.6), DEEP_ICE), Material::glossy(1.0))
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 15.6, 0.0), Vec3::splat(1.0), FROST),
            Material::glowing(1.5),
            vec![Animation::Breathe(Wave::new(0.2, 1.0, 0.0)), Animation::pulse(1.5, 0.5, 1.0, 0.0)],
        );

    // ring of spired towers joined by a wall
    let towers = ring(Vec3::ZERO, 10.0, 6, Vec3::ONE, |_| ICE);
    for (i, tower) in towers.iter().enumerate() {
        let height = 7.0 + (i % 2) as f32 * 2.0;
        builder = builder
            .add(Primitive::Cylinder, place(tower.position + Vec3::Y * height * 0.5, Vec3::new(2.4, height, 2.4), ICE), Material::glossy(1.0))
            .add(
                Primitive::Cone,
                place(tower.position + Vec3::Y * (height + 1.8), Vec3::new(2.8, 3.6, 2.8), DEEP_ICE),
                Material::glossy(1.0),
            )
            .add_animated(
                Primitive::Sphere,
                place(tower.position + Vec3::Y * (height + 3.8), Vec3::splat(0.35), FROST),
                Material::glowing(1.2),
                vec![Animation::pulse(1.2, 0.6, 1.5, i as f32 / 6.0 * TAU)],
            );
    }
    let wall = ring(Vec3::new(0.0, 1.5, 0.0), 10.0, 36, Vec3::new(1.9, 3.0, 0.8), |i| if i % 6 == 0 { DEEP_ICE } else { ICE });
    builder = builder.add_all(Primitive::Cube, wall, Material::glossy(0.9));

    // icicle clusters around the base
    let shards = rings(Vec3::new(0.0, 0.8, 0.0), 13.0, 1.5, 3, |r| 18 + r * 6, |r| Vec3::new(0.5, 1.6 - r as f32 * 0.4, 0.5), |_, _| ICE);
    builder = builder.add_all(Primitive::Cone, shards, Material::glossy(1.0));

    let snowbanks = scatter_disc(rng, 20, Vec3::ZERO, 18.0, 45.0, 2.0..5.0, &[FROST]);
    builder = builder.add_all(
        Primitive::Sphere,
        snowbanks.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.8, 0.35, 1.2))),
        Material::glossy(0.4),
    );

    // aurora: a ribbon of glowing blocks rippling high in the sky
    let curtain: Vec<_> = (0..60)
        .map(|i| {
            let mut p = InstanceParams::at(Vec3::new(-45.0 + i as f32 * 1.5, 28.0, -35.0 + (i as f32 * 0.2).sin() * 4.0));
            p.scale = 1.4;
            p.speed = 0.8;
            p.amplitude = 2.5;
            p.color = aurora[i % aurora.len()];
            p
        })
        .collect();
    let glints = InstanceParams::scatter(
        rng,
        120,
        &ParamRanges::in_box(Vec3::new(-14.0, 0.2, -14.0), Vec3::new(14.0, 12.0, 14.0))
            .scale(0.05..0.1)
            .speed(1.5..4.0),
        &[FROST, ICE],
    );

    builder
        .point_light(Vec3::new(0.0, 6.0, 7.0), 16.0, Rgb::hex(0x9fe0ff), 1.0)
        .point_light(Vec3::new(0.0, 26.0, -30.0), 50.0, aurora[0], 1.0)
        .batch(InstancedBatch::new(
            "aurora",
            Primitive::Cube,
            Material::glowing(1.4),
            InstanceMotion::Swell { wavelength: 20.0 },
            curtain,
        ))
        .batch(InstancedBatch::new(
            "ice glints",
            Primitive::Sphere,
            Material::glowing(2.0),
            InstanceMotion::Twinkle,
            glints,
        ))
        .build()
}
