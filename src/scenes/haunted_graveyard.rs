use glam::Vec3;
use rand::Rng;

use super::common::{ground, post, slab, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, line, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const MIST: Rgb = Rgb::hex(0x1c1f2a);
const STONE: Rgb = Rgb::hex(0x7d7f86);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Haunted Graveyard")
        .background(Rgb::hex(0x0c0d14))
        .fog(MIST, 6.0, 40.0)
        .ambient(Rgb::hex(0x40508a), 0.2)
        .sun(Vec3::new(-0.2, -1.0, 0.5), Rgb::hex(0xb0c0ff), 0.3)
        .add(Primitive::Plane, ground(60.0, 0.0, Rgb::hex(0x2c3324)), Material::MATTE);

    // rows of headstones, each leaning a little
    for stone in grid(Vec3::new(0.0, 0.0, 1.0), 3.0, 5, 4, Vec3::ONE, |_, _| STONE) {
        let height = rng.gen_range(1.2..2.0);
        let lean = Vec3::new(rng.gen_range(-0.15..0.15), rng.gen_range(-0.3..0.3), rng.gen_range(-0.12..0.12));
        builder = builder.add(
            Primitive::Cube,
            place(stone.position + Vec3::Y * height * 0.45, Vec3::new(1.1, height, 0.25), stone.color.scaled(rng.gen_range(0.8..1.1)))
                .with_rotation(lean),
            Material::MATTE,
        );
    }

    // crypt at the back
    let crypt = Vec3::new(0.0, 0.0, -9.0);
    builder = builder
        .add(Primitive::Cube, slab(crypt + Vec3::new(-3.0, 0.0, -2.0), crypt + Vec3::new(3.0, 4.0, 2.0), STONE.scaled(0.8)), Material::MATTE)
        .add(Primitive::Cone, place(crypt + Vec3::Y * 5.0, Vec3::new(6.5, 2.0, 4.5), STONE.scaled(0.6)), Material::MATTE)
        .add_animated(
            Primitive::Cube,
            place(crypt + Vec3::new(0.0, 1.3, 2.05), Vec3::new(1.4, 2.6, 0.1), Rgb::hex(0x6aff9a)),
            Material::glowing(1.0),
            vec![Animation::pulse(1.0, 0.6, 1.3, 0.0)],
        );

    // iron fence along the front
    let pickets = line(Vec3::new(-9.0, 0.0, 8.0), Vec3::new(9.0, 0.0, 8.0), 19, Vec3::ONE, |_| Rgb::hex(0x222226));
    for picket in pickets {
        builder = builder
            .add(Primitive::Cylinder, post(picket.position, 2.0, 0.05, picket.color), Material::glossy(0.5))
            .add(Primitive::Cone, place(picket.position + Vec3::Y * 2.15, Vec3::splat(0.2), picket.color), Material::glossy(0.5));
    }

    // dead trees creaking in the wind
    for (i, x) in [-11.0f32, 10.0].into_iter().enumerate() {
        let base = Vec3::new(x, 0.0, -4.0);
        builder = tree(builder, base, 6.0, Rgb::hex(0x3a3028), Rgb::hex(0x2a2a22), true);
        builder = builder.transform(|object| {
            let offset = object.placement.position - base;
            if object.animations.is_empty() && offset.x.abs() < 0.5 && offset.z.abs() < 0.5 {
                object.animations.push(Animation::Swing { pivot: base, axis: Vec3::X, wave: Wave::new(0.03, 0.6, i as f32) });
            }
        });
    }

    // ghosts floating among the graves
    for i in 0..4 {
        let center = Vec3::new(0.0, 2.0, 1.0);
        let radius = 3.0 + i as f32 * 1.8;
        builder = builder.add_animated(
            Primitive::Cone,
            place(center + Vec3::X * radius, Vec3::new(1.0, 1.8, 1.0), Rgb::hex(0xe8f0ff)),
            Material::glowing(0.9),
            vec![
                Animation::Orbit { center, radius, speed: 0.3 + i as f32 * 0.07, height: 0.4 * i as f32, phase: i as f32 * 1.6 },
                Animation::bob(0.4, 1.1, i as f32),
                Animation::ColorShift { to: Rgb::hex(0x9affc0), speed: 0.5, phase: i as f32 },
            ],
        );
    }

    // lantern on the crypt
    builder = builder
        .add(Primitive::Sphere, place(crypt + Vec3::new(2.6, 3.2, 2.3), Vec3::splat(0.35), Rgb::hex(0xffcf6a)), Material::glowing(2.0))
        .light(Light::point(crypt + Vec3::new(2.6, 3.2, 2.6), 10.0, Rgb::hex(0xffb050), 1.1).with_flicker(Wave::new(0.35, 11.0, 0.0)));

    let wisps = InstanceParams::scatter(
        rng,
        60,
        &ParamRanges::in_box(Vec3::new(-10.0, 0.3, -8.0), Vec3::new(10.0, 3.0, 8.0))
            .scale(0.08..0.15)
            .speed(0.4..1.0)
            .amplitude(0.6..1.5),
        &[Rgb::hex(0x8affb8), Rgb::hex(0xb0c8ff)],
    );

    builder
        .point_light(Vec3::new(0.0, 3.0, 1.0), 16.0, Rgb::hex(0x6aff9a), 0.6)
        .batch(InstancedBatch::new("wisps", Primitive::Sphere, Material::glowing(1.4), InstanceMotion::Hover, wisps))
        .build()
}
