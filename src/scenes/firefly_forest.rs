use glam::Vec3;
use rand::Rng;

use super::common::{ground, tree};
use crate::animation::Animation;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const NIGHT: Rgb = Rgb::hex(0x0a1320);
const BARK: Rgb = Rgb::hex(0x3b2a1f);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Firefly Forest")
        .background(NIGHT)
        .fog(NIGHT, 10.0, 45.0)
        .ambient(Rgb::hex(0x304a78), 0.2)
        .sun(Vec3::new(0.3, -1.0, 0.6), Rgb::hex(0x9db4ff), 0.25)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x1d2b1a)), Material::MATTE);

    let trunks = scatter_disc(rng, 34, Vec3::ZERO, 4.0, 22.0, 4.0..8.0, &[Rgb::hex(0x1f4d2b), Rgb::hex(0x2d5e34), Rgb::hex(0x16402a)]);
    for p in trunks {
        let conifer = rng.gen_bool(0.6);
        builder = tree(builder, p.position, p.scale.y, BARK, p.color, conifer);
    }

    // glowing mushrooms at the clearing's edge
    let caps = scatter_disc(rng, 14, Vec3::new(0.0, 0.25, 0.0), 2.0, 5.0, 0.3..0.6, &[Rgb::hex(0x7cf5ff), Rgb::hex(0xa3ff7c)]);
    for (i, cap) in caps.into_iter().enumerate() {
        builder = builder
            .add(
                Primitive::Cylinder,
                place(cap.position - Vec3::Y * 0.1, Vec3::new(0.1, 0.35, 0.1), Rgb::hex(0xe8e0d0)),
                Material::MATTE,
            )
            .add_animated(
                Primitive::Sphere,
                cap.with_scale(cap.scale * Vec3::new(1.0, 0.45, 1.0)),
                Material::glowing(0.8),
                vec![Animation::pulse(0.8, 0.4, 0.7, i as f32)],
            );
    }

    let fireflies = InstanceParams::scatter(
        rng,
        160,
        &ParamRanges::in_box(Vec3::new(-16.0, 0.5, -16.0), Vec3::new(16.0, 5.0, 16.0))
            .scale(0.06..0.1)
            .speed(0.4..1.2)
            .amplitude(0.8..2.5),
        &[Rgb::hex(0xfff27a), Rgb::hex(0xd4ff5e)],
    );

    builder
        .point_light(Vec3::new(0.0, 2.0, 0.0), 12.0, Rgb::hex(0xe6ff8a), 0.8)
        .point_light(Vec3::new(0.0, 0.6, 0.0), 7.0, Rgb::hex(0x7cf5ff), 0.7)
        .batch(InstancedBatch::new(
            "fireflies",
            Primitive::Sphere,
            Material::glowing(2.0),
            InstanceMotion::Hover,
            fireflies,
        ))
        .build()
}
