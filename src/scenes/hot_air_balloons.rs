use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use super::common::{golden_color, ground, tree};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const DAWN: Rgb = Rgb::hex(0xffc9a0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Hot Air Balloons")
        .background(DAWN)
        .fog(Rgb::hex(0xffd8b8), 30.0, 120.0)
        .ambient(Rgb::hex(0xffe8d8), 0.5)
        .sun(Vec3::new(-0.8, -0.4, 0.2), Rgb::hex(0xffb070), 1.0)
        .add(Primitive::Plane, ground(140.0, 0.0, Rgb::hex(0x7aa050)), Material::MATTE);

    // patchwork fields far below
    let fields = grid(Vec3::new(0.0, 0.02, 0.0), 12.0, 8, 8, Vec3::new(11.5, 1.0, 11.5), |x, z| {
        golden_color((x * 3 + z * 5) as u32, 0.35, 0.65)
    });
    builder = builder.add_all(Primitive::Plane, fields, Material::MATTE);
    for _ in 0..16 {
        let base = Vec3::new(rng.gen_range(-45.0..45.0), 0.0, rng.gen_range(-45.0..45.0));
        builder = tree(builder, base, rng.gen_range(2.5..4.0), Rgb::hex(0x4a3020), Rgb::hex(0x3a6a2a), false);
    }

    // each balloon: envelope, skirt, basket, a flickering burner; the group drifts and bobs together
    let envelopes = scatter_disc(rng, 9, Vec3::new(0.0, 14.0, 0.0), 4.0, 24.0, 2.6..3.6, &[]);
    for (i, envelope) in envelopes.into_iter().enumerate() {
        let size = envelope.scale.x;
        let top = envelope.position + Vec3::Y * rng.gen_range(0.0..12.0);
        let color = golden_color(i as u32, 0.75, 0.95);
        let period = rng.gen_range(50.0..80.0);
        let float = vec![
            Animation::Bob(Wave::new(0.8, 0.3, i as f32 * 1.7)),
            Animation::Drift { velocity: Vec3::new(0.5, 0.0, 0.2), period },
            Animation::sway(Vec3::Z, 0.03, 0.4, i as f32),
        ];
        let basket = top - Vec3::Y * size * 1.1;
        builder = builder
            .add_animated(Primitive::Sphere, place(top, Vec3::new(1.0, 1.15, 1.0) * size, color), Material::glossy(0.3), float.clone())
            .add_animated(
                Primitive::Cone,
                place(top - Vec3::Y * size * 0.6, Vec3::new(0.7, 0.6, 0.7) * size, color.scaled(0.8))
                    .with_rotation(Vec3::new(PI, 0.0, 0.0)),
                Material::MATTE,
                float.clone(),
            )
            .add_animated(Primitive::Cube, place(basket, Vec3::splat(0.3 * size), Rgb::hex(0x8a6a3a)), Material::MATTE, float.clone());
        let mut flame = float;
        flame.push(Animation::pulse(1.5, 1.0, 9.0, i as f32));
        builder = builder.add_animated(
            Primitive::Cone,
            place(basket + Vec3::Y * 0.35 * size, Vec3::splat(0.15 * size), Rgb::hex(0xffa030)),
            Material::glowing(1.5),
            flame,
        );
    }

    let birds = InstanceParams::scatter(
        rng,
        30,
        &ParamRanges::in_box(Vec3::new(0.0, 18.0, 0.0), Vec3::new(0.0, 26.0, 0.0))
            .scale(0.2..0.35)
            .speed(0.2..0.4)
            .radius(15.0..30.0)
            .amplitude(0.5..1.5),
        &[Rgb::hex(0x2a2a30)],
    );

    builder
        .light(Light::directional(Vec3::new(0.5, -0.3, -0.6), Rgb::hex(0xa0c0ff), 0.3))
        .batch(InstancedBatch::new("birds", Primitive::Cone, Material::MATTE, InstanceMotion::Orbit { center: Vec3::ZERO }, birds))
        .build()
}
