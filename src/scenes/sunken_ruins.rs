use glam::Vec3;
use rand::Rng;

use super::common::{ground, post, slab};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, scatter, scatter_disc, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const DEEP: Rgb = Rgb::hex(0x062a3a);
const MARBLE: Rgb = Rgb::hex(0xa8b4b0);
const KELP: Rgb = Rgb::hex(0x2f6b3a);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Sunken Ruins")
        .background(DEEP)
        .fog(DEEP, 6.0, 35.0)
        .ambient(Rgb::hex(0x3f8fa8), 0.35)
        .sun(Vec3::new(0.1, -1.0, 0.2), Rgb::hex(0x8fe0ff), 0.7)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x8a8068)), Material::MATTE);

    // a temple front, half its columns broken off at random heights
    let columns = line(Vec3::new(-7.0, 0.0, -4.0), Vec3::new(7.0, 0.0, -4.0), 8, Vec3::ONE, solid_color(MARBLE));
    for p in columns {
        let height = if rng.gen_bool(0.5) { 7.0 } else { rng.gen_range(1.5..5.0) };
        builder = builder.add(Primitive::Cylinder, post(p.position, height, 0.5, MARBLE), Material::glossy(0.2));
    }
    builder = builder
        .add(Primitive::Cube, slab(Vec3::new(-8.0, 0.0, -5.5), Vec3::new(8.0, 0.5, -2.5), MARBLE), Material::MATTE)
        .add(
            Primitive::Cube,
            place(Vec3::new(4.0, 0.8, 2.5), Vec3::new(6.0, 0.9, 1.4), MARBLE).with_rotation(Vec3::new(0.1, 0.5, 0.3)),
            Material::MATTE,
        );

    // toppled drums and rubble
    let drums = scatter(rng, 8, Vec3::new(-6.0, 0.5, -1.0), Vec3::new(6.0, 0.5, 6.0), 0.9..1.1, &[MARBLE]);
    builder = builder.add_all(
        Primitive::Cylinder,
        drums.into_iter().map(|p| p.with_rotation(Vec3::new(0.0, p.rotation.y, std::f32::consts::FRAC_PI_2))),
        Material::glossy(0.2),
    );
    let rubble = scatter_disc(rng, 40, Vec3::new(0.0, 0.2, 0.0), 2.0, 16.0, 0.2..0.7, &[MARBLE, Rgb::hex(0x7d8a86)]);
    builder = builder.add_all(Primitive::Cube, rubble, Material::MATTE);

    // a statue head half buried, staring up
    builder = builder
        .add(Primitive::Sphere, place(Vec3::new(-5.0, 0.8, 4.0), Vec3::new(2.0, 2.4, 2.0), MARBLE), Material::glossy(0.3))
        .add(Primitive::Cone, place(Vec3::new(-5.0, 2.3, 4.0), Vec3::new(1.2, 1.2, 1.2), Rgb::hex(0x8a9a60)), Material::MATTE);

    // kelp forest swaying in the current
    let kelp = scatter_disc(rng, 36, Vec3::ZERO, 6.0, 18.0, 4.0..9.0, &[KELP, Rgb::hex(0x3d7d45)]);
    for (i, p) in kelp.into_iter().enumerate() {
        let height = p.scale.y;
        let segments = 3;
        for s in 0..segments {
            let y = height * (s as f32 + 0.5) / segments as f32;
            builder = builder.add_animated(
                Primitive::Cube,
                place(p.position + Vec3::Y * y, Vec3::new(0.35, height / segments as f32, 0.06), p.color).with_yaw(p.rotation.y),
                Material::MATTE,
                vec![Animation::Swing {
                    pivot: p.position,
                    axis: Vec3::X,
                    wave: Wave::new(0.1 + s as f32 * 0.03, 0.7, i as f32 * 0.5 + s as f32 * 0.3),
                }],
            );
        }
    }

    // treasure glinting in a broken chest
    builder = builder
        .add(Primitive::Cube, place(Vec3::new(1.0, 0.4, 1.5), Vec3::new(1.4, 0.8, 0.9), Rgb::hex(0x5a3a1e)), Material::MATTE)
        .add_all_animated(
            Primitive::Sphere,
            (0..6).map(|k| place(Vec3::new(0.6 + k as f32 * 0.15, 0.85, 1.5), Vec3::splat(0.2), Rgb::hex(0xffd24a))),
            Material::glowing(0.6),
            |k, _| vec![Animation::pulse(0.6, 0.5, 3.0, k as f32)],
        )
        .point_light(Vec3::new(1.0, 2.0, 1.5), 8.0, Rgb::hex(0xffd24a), 0.9);

    let fish = InstanceParams::scatter(
        rng,
        40,
        &ParamRanges::in_box(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 7.0, 0.0))
            .scale(0.2..0.35)
            .speed(-0.6..0.6)
            .radius(4.0..14.0)
            .amplitude(0.2..0.8),
        &[Rgb::hex(0xc0d8e0), Rgb::hex(0xffa07a)],
    );
    let bubbles = InstanceParams::scatter(
        rng,
        60,
        &ParamRanges::in_box(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 0.0, 10.0))
            .scale(0.05..0.12)
            .speed(0.8..1.5)
            .amplitude(0.05..0.2),
        &[Rgb::hex(0xdff6ff)],
    );
    let caustics = InstanceParams::scatter(
        rng,
        50,
        &ParamRanges::in_box(Vec3::new(-14.0, 0.03, -14.0), Vec3::new(14.0, 0.03, 14.0))
            .scale(1.0..2.5)
            .speed(0.5..1.2),
        &[Rgb::hex(0x7fe8ff)],
    );

    builder
        .batch(InstancedBatch::new(
            "fish",
            Primitive::Cone,
            Material::glossy(0.5),
            InstanceMotion::Orbit { center: Vec3::ZERO },
            fish,
        ))
        .batch(InstancedBatch::new(
            "bubbles",
            Primitive::Sphere,
            Material::glowing(0.2),
            InstanceMotion::Rise { bottom: 0.0, top: 14.0 },
            bubbles,
        ))
        .batch(InstancedBatch::new(
            "caustics",
            Primitive::Plane,
            Material::glowing(0.3),
            InstanceMotion::Twinkle,
            caustics,
        ))
        .build()
}
