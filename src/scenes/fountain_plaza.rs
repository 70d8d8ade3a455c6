use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, post, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, place, ring, rings, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const MARBLE: Rgb = Rgb::hex(0xe8e4dc);
const WATER: Rgb = Rgb::hex(0x5ab8e0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Fountain Plaza")
        .background(Rgb::hex(0x9ac8f0))
        .fog(Rgb::hex(0xd0e4f4), 30.0, 90.0)
        .ambient(Rgb::hex(0xf8f4f0), 0.5)
        .sun(Vec3::new(0.4, -1.0, -0.3), Rgb::hex(0xfff6e6), 1.0)
        .add(Primitive::Plane, ground(90.0, 0.0, Rgb::hex(0x7ab050)), Material::MATTE);

    // checkered paving around the basin
    let paving = grid(Vec3::new(0.0, 0.02, 0.0), 2.0, 14, 14, Vec3::new(1.95, 1.0, 1.95), |x, z| {
        if (x + z) % 2 == 0 { Rgb::hex(0xc8bca8) } else { Rgb::hex(0xa89c88) }
    });
    builder = builder.add_all(Primitive::Plane, paving, Material::MATTE);

    // tiered basins, each tier spilling into the next
    for (tier, (radius, y)) in [(5.0f32, 0.0f32), (2.6, 1.6), (1.2, 2.8)].into_iter().enumerate() {
        builder = builder
            .add(Primitive::Cylinder, place(Vec3::Y * (y + 0.4), Vec3::new(radius * 2.0, 0.8, radius * 2.0), MARBLE), Material::glossy(0.5))
            .add_animated(
                Primitive::Cylinder,
                place(Vec3::Y * (y + 0.82), Vec3::new(radius * 1.85, 0.05, radius * 1.85), WATER),
                Material::glossy(1.0),
                vec![Animation::Breathe(Wave::new(0.01, 2.0, tier as f32))],
            );
        if tier > 0 {
            builder = builder.add(Primitive::Cylinder, post(Vec3::Y * (y - 0.8), 0.8, 0.3, MARBLE), Material::glossy(0.5));
        }
    }

    // jet on top; droplets spill off the middle tier into the lowest basin
    builder = builder.add_animated(
        Primitive::Cylinder,
        post(Vec3::Y * 3.6, 2.0, 0.12, WATER.scaled(1.2)),
        Material::glowing(0.4),
        vec![Animation::Breathe(Wave::new(0.1, 5.0, 0.0))],
    );
    let spray = (0..48)
        .map(|i| {
            let angle = (i % 12) as f32 / 12.0 * TAU;
            let mut params = InstanceParams::at(Vec3::new(angle.cos() * 2.9, 2.4, angle.sin() * 2.9));
            params.scale = 0.12;
            params.speed = 1.4;
            params.phase = (i / 12) as f32 / 4.0 * TAU;
            params.amplitude = 0.05;
            params.color = WATER.scaled(1.3);
            params
        })
        .collect();

    // benches, lamp posts and planters in concentric rings
    let benches = ring(Vec3::Y * 0.4, 10.0, 6, Vec3::new(2.4, 0.3, 0.8), |_| Rgb::hex(0x8a5a34));
    builder = builder.add_all(Primitive::Cube, benches, Material::MATTE);
    let lamps = ring(Vec3::ZERO, 12.5, 6, Vec3::ONE, |_| Rgb::hex(0x2a2a2a));
    for (i, lamp) in lamps.into_iter().enumerate() {
        builder = builder
            .add(Primitive::Cylinder, post(lamp.position, 3.5, 0.08, lamp.color), Material::glossy(0.6))
            .add_animated(
                Primitive::Sphere,
                place(lamp.position + Vec3::Y * 3.7, Vec3::splat(0.45), Rgb::hex(0xfff0c0)),
                Material::glowing(1.0),
                vec![Animation::pulse(1.0, 0.1, 1.0, i as f32)],
            );
    }
    let flowers = rings(Vec3::Y * 0.3, 7.5, 0.8, 2, |r| 24 + r * 6, |_| Vec3::splat(0.5), |r, i| {
        if (i + r) % 3 == 0 { Rgb::hex(0xff5a7a) } else { Rgb::hex(0xffd04a) }
    });
    builder = builder.add_all_animated(Primitive::Sphere, flowers, Material::glossy(0.2), |i, _| {
        vec![Animation::Breathe(Wave::new(0.06, 1.2, i as f32 * 0.3))]
    });
    for i in 0..8 {
        let angle = i as f32 / 8.0 * TAU + TAU / 16.0;
        let base = Vec3::new(angle.cos(), 0.0, angle.sin()) * 17.0;
        builder = tree(builder, base, rng.gen_range(4.0..6.0), Rgb::hex(0x5a4028), Rgb::hex(0x3a7a30), false);
    }

    // pigeons pecking about
    let pigeons = grid(Vec3::new(0.0, 0.2, 7.0), 1.1, 4, 2, Vec3::ONE, |_, _| Rgb::hex(0x8a8a9a))
        .into_iter()
        .map(|p| {
            let mut params = InstanceParams::at(p.position + Vec3::new(rng.gen_range(-0.4..0.4), 0.0, rng.gen_range(-0.4..0.4)));
            params.scale = 0.35;
            params.speed = rng.gen_range(2.0..4.0);
            params.amplitude = 0.1;
            params.color = p.color;
            params
        })
        .collect();

    builder
        .light(Light::point(Vec3::Y * 5.0, 10.0, Rgb::hex(0xa0e0ff), 0.6).with_flicker(Wave::new(0.1, 3.0, 0.0)))
        .batch(InstancedBatch::new(
            "spray",
            Primitive::Sphere,
            Material::glowing(0.5),
            InstanceMotion::Fall { top: 2.4, bottom: 0.8 },
            spray,
        ))
        .batch(InstancedBatch::new("pigeons", Primitive::Sphere, Material::MATTE, InstanceMotion::Hover, pigeons))
        .build()
}
