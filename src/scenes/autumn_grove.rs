use glam::Vec3;
use rand::Rng;

use super::common::{ground, hue_band, tree};
use crate::animation::Animation;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{jitter_colors, line, place, scatter_disc, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BARK: Rgb = Rgb::hex(0x4a3222);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let foliage = hue_band(0.0, 0.12, 5, 0.8, 0.85);

    let mut builder = SceneBuilder::new("Autumn Grove")
        .background(Rgb::hex(0xf3d9b1))
        .fog(Rgb::hex(0xf3d9b1), 18.0, 60.0)
        .ambient(Rgb::hex(0xffe6c0), 0.45)
        .sun(Vec3::new(-0.7, -0.6, -0.3), Rgb::hex(0xffd49a), 1.1)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x8a6a3a)), Material::MATTE);

    let trees = scatter_disc(rng, 26, Vec3::ZERO, 5.0, 20.0, 4.0..7.5, &foliage);
    let trees = jitter_colors(rng, trees, 0.12);
    for p in trees {
        builder = tree(builder, p.position, p.scale.y, BARK, p.color, false);
    }

    // leaf litter carpeting the floor
    let litter = scatter_disc(rng, 140, Vec3::new(0.0, 0.02, 0.0), 0.0, 22.0, 0.2..0.4, &foliage);
    builder = builder.add_all(
        Primitive::Cube,
        litter.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.0, 0.05, 1.0))),
        Material::MATTE,
    );

    // bench and path through the middle
    let path = line(Vec3::new(0.0, 0.03, -18.0), Vec3::new(0.0, 0.03, 18.0), 18, Vec3::new(1.8, 0.05, 1.6), solid_color(Rgb::hex(0xb8a88a)));
    builder = builder
        .add_all(Primitive::Cube, path, Material::MATTE)
        .add(Primitive::Cube, place(Vec3::new(2.2, 0.6, 0.0), Vec3::new(0.6, 0.1, 2.4), Rgb::hex(0x6b4a2a)), Material::MATTE)
        .add(Primitive::Cube, place(Vec3::new(2.5, 0.95, 0.0), Vec3::new(0.1, 0.6, 2.4), Rgb::hex(0x6b4a2a)), Material::MATTE);

    // a pumpkin patch with one gently glowing jack-o-lantern
    for i in 0..6 {
        let position = Vec3::new(-4.0 + rng.gen_range(-1.0..1.0), 0.35, -3.0 + i as f32 * 1.2);
        let animations = if i == 3 { vec![Animation::pulse(0.6, 0.4, 3.0, 0.0)] } else { Vec::new() };
        builder = builder.add_animated(
            Primitive::Sphere,
            place(position, Vec3::new(0.9, 0.7, 0.9), Rgb::hex(0xe8751a)),
            Material::glossy(0.3),
            animations,
        );
    }

    let falling = InstanceParams::scatter(
        rng,
        220,
        &ParamRanges::in_box(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 10.0, 20.0))
            .scale(0.15..0.3)
            .speed(0.4..0.9)
            .amplitude(0.5..1.5),
        &foliage,
    );

    builder
        .batch(InstancedBatch::new(
            "falling leaves",
            Primitive::Plane,
            Material::MATTE,
            InstanceMotion::Fall { top: 10.0, bottom: 0.0 },
            falling,
        ))
        .build()
}
