use glam::Vec3;
use rand::Rng;

use super::common::{golden_color, ground};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, ring, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STEM: Rgb = Rgb::hex(0xf2e8d5);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Mushroom Grove")
        .background(Rgb::hex(0x140d24))
        .fog(Rgb::hex(0x1e1436), 12.0, 50.0)
        .ambient(Rgb::hex(0x8060c0), 0.22)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x2a2240)), Material::MATTE);

    // giant mushrooms: stem, domed cap, and spots
    let giants = scatter_disc(rng, 12, Vec3::ZERO, 3.0, 16.0, 3.0..7.0, &[]);
    for (i, giant) in giants.into_iter().enumerate() {
        let height = giant.scale.y;
        let cap_width = height * rng.gen_range(0.8..1.2);
        let cap_color = golden_color(i as u32 + 3, 0.7, 0.95);
        let top = giant.position + Vec3::Y * height;
        let tilt = Vec3::new(rng.gen_range(-0.1..0.1), 0.0, rng.gen_range(-0.1..0.1));
        builder = builder
            .add(
                Primitive::Cylinder,
                place(giant.position + Vec3::Y * height * 0.5, Vec3::new(height * 0.12, height, height * 0.12), STEM)
                    .with_rotation(tilt),
                Material::MATTE,
            )
            .add_animated(
                Primitive::Sphere,
                place(top, Vec3::new(cap_width, cap_width * 0.45, cap_width), cap_color),
                Material { emissive: 0.5, gloss: 0.4 },
                vec![
                    Animation::Pulse { base: 0.5, wave: Wave::new(0.35, 0.6, i as f32 * 0.9) },
                    Animation::Breathe(Wave::new(0.03, 0.6, i as f32 * 0.9)),
                ],
            )
            .add_all(
                Primitive::Sphere,
                ring(top + Vec3::Y * cap_width * 0.15, cap_width * 0.3, 5, Vec3::splat(cap_width * 0.1), |_| Rgb::WHITE),
                Material::glowing(0.6),
            );
    }

    // fairy ring of tiny toadstools
    let toadstools = ring(Vec3::new(0.0, 0.15, 0.0), 2.2, 14, Vec3::new(0.35, 0.15, 0.35), |i| golden_color(i as u32, 0.8, 1.0));
    builder = builder.add_all_animated(Primitive::Sphere, toadstools, Material::glowing(1.0), |i, _| {
        vec![Animation::pulse(1.0, 0.8, 2.0, i as f32 * 0.45)]
    });

    let spores = InstanceParams::scatter(
        rng,
        200,
        &ParamRanges::in_box(Vec3::new(-16.0, 0.0, -16.0), Vec3::new(16.0, 0.0, 16.0))
            .scale(0.04..0.09)
            .speed(0.3..0.7)
            .amplitude(0.3..0.9),
        &[Rgb::hex(0xd0a0ff), Rgb::hex(0x80ffe0), Rgb::hex(0xffe080)],
    );

    builder
        .point_light(Vec3::new(0.0, 1.0, 0.0), 8.0, Rgb::hex(0xff80e0), 1.0)
        .point_light(Vec3::new(8.0, 6.0, 4.0), 16.0, Rgb::hex(0x80ffe0), 0.9)
        .point_light(Vec3::new(-8.0, 6.0, -6.0), 16.0, Rgb::hex(0xc080ff), 0.9)
        .batch(InstancedBatch::new(
            "spores",
            Primitive::Sphere,
            Material::glowing(1.8),
            InstanceMotion::Rise { bottom: 0.0, top: 10.0 },
            spores,
        ))
        .build()
}
