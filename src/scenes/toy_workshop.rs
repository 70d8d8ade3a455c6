use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{golden_color, ground, post, slab};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, ring, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const WOOD: Rgb = Rgb::hex(0x9a6a3a);
const TABLE_TOP: f32 = 3.0;

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Toy Workshop")
        .background(Rgb::hex(0x2a1d14))
        .fog(Rgb::hex(0x2a1d14), 20.0, 50.0)
        .ambient(Rgb::hex(0xffd8a8), 0.3)
        .add(Primitive::Plane, ground(40.0, 0.0, Rgb::hex(0x5a3e28)), Material::MATTE)
        .add(
            Primitive::Cube,
            slab(Vec3::new(-8.0, TABLE_TOP - 0.4, -4.0), Vec3::new(8.0, TABLE_TOP, 4.0), WOOD),
            Material::glossy(0.3),
        );
    for x in [-7.4f32, 7.4] {
        for z in [-3.4f32, 3.4] {
            builder = builder.add(Primitive::Cube, slab(Vec3::new(x - 0.3, 0.0, z - 0.3), Vec3::new(x + 0.3, TABLE_TOP - 0.4, z + 0.3), WOOD), Material::MATTE);
        }
    }

    // toy soldiers standing to attention, rocking on their bases
    let soldiers = line(Vec3::new(-6.5, TABLE_TOP, 3.0), Vec3::new(-1.5, TABLE_TOP, 3.0), 6, Vec3::ONE, solid_color(Rgb::hex(0xc0282d)));
    for (i, s) in soldiers.into_iter().enumerate() {
        let rock = Animation::Swing { pivot: s.position, axis: Vec3::Z, wave: Wave::new(0.08, 2.0, i as f32 * 0.6) };
        builder = builder
            .add_animated(Primitive::Cylinder, post(s.position, 0.9, 0.2, s.color), Material::glossy(0.5), vec![rock])
            .add_animated(Primitive::Sphere, place(s.position + Vec3::Y * 1.1, Vec3::splat(0.35), Rgb::hex(0xf2c9a0)), Material::MATTE, vec![rock])
            .add_animated(Primitive::Cylinder, post(s.position + Vec3::Y * 1.25, 0.5, 0.16, Rgb::hex(0x111111)), Material::MATTE, vec![rock]);
    }

    // wind-up train circling the far end of the bench
    let hub = Vec3::new(3.5, TABLE_TOP, -1.0);
    builder = builder.add(Primitive::Torus, place(hub + Vec3::Y * 0.02, Vec3::new(5.0, 0.2, 5.0), Rgb::hex(0x444444)), Material::glossy(0.6));
    let cars = ring(hub + Vec3::Y * 0.35, 2.5, 12, Vec3::new(0.9, 0.5, 0.5), |i| golden_color(i as u32, 0.7, 0.9));
    builder = builder.add_all_animated(Primitive::Cube, cars.into_iter().take(4), Material::glossy(0.6), |_, _| {
        vec![Animation::Revolve { pivot: hub, axis: Vec3::NEG_Y, speed: 0.8 }]
    });

    // a mobile hanging from the rafters
    let hook = Vec3::new(-3.0, 9.0, -1.0);
    builder = builder.add(Primitive::Cylinder, post(hook - Vec3::Y * 1.5, 1.5, 0.03, Rgb::hex(0xdddddd)), Material::MATTE);
    let charms = ring(hook - Vec3::Y * 2.0, 1.5, 5, Vec3::splat(0.5), |i| golden_color(i as u32 + 7, 0.6, 1.0));
    builder = builder.add_all_animated(Primitive::Sphere, charms, Material::glowing(0.4), |i, _| {
        vec![
            Animation::Revolve { pivot: hook, axis: Vec3::Y, speed: 0.4 },
            Animation::bob(0.1, 1.2, i as f32 * TAU / 5.0),
        ]
    });

    // spinning tops scattered over the bench
    let mut tops = InstanceParams::scatter(
        rng,
        14,
        &ParamRanges::in_box(Vec3::new(-6.5, TABLE_TOP + 0.4, -3.0), Vec3::new(0.5, TABLE_TOP + 0.4, 1.5))
            .scale(0.5..0.9)
            .speed(6.0..14.0),
        &[Rgb::hex(0xff5e5e), Rgb::hex(0x5eb0ff), Rgb::hex(0xffd45e), Rgb::hex(0x7de07d)],
    );
    for top in &mut tops {
        top.origin.y = TABLE_TOP + top.scale * 0.5;
    }

    builder
        .light(Light::point(Vec3::new(0.0, 8.0, 2.0), 18.0, Rgb::hex(0xffd9a0), 1.4))
        .add_animated(
            Primitive::Cone,
            place(Vec3::new(0.0, 8.5, 2.0), Vec3::new(1.6, 0.8, 1.6), Rgb::hex(0x2f4f3f)),
            Material::glossy(0.5),
            vec![Animation::sway(Vec3::X, 0.05, 0.7, 0.0)],
        )
        .batch(InstancedBatch::new(
            "spinning tops",
            Primitive::Cone,
            Material::glossy(0.8),
            InstanceMotion::Spin,
            tops,
        ))
        .build()
}
