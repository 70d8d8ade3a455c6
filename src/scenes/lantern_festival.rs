use glam::Vec3;
use rand::Rng;

use super::common::{ground, post};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const NIGHT: Rgb = Rgb::hex(0x0d0a1e);
const RIVER: Rgb = Rgb::hex(0x10203a);
const LANTERN: [Rgb; 3] = [Rgb::hex(0xff8a3a), Rgb::hex(0xffb347), Rgb::hex(0xff5a4a)];

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Lantern Festival")
        .background(NIGHT)
        .fog(NIGHT, 20.0, 70.0)
        .ambient(Rgb::hex(0x4a3a6a), 0.25)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x2a2a30)), Material::MATTE)
        .add(Primitive::Plane, place(Vec3::new(0.0, 0.02, 0.0), Vec3::new(80.0, 1.0, 8.0), RIVER), Material::glossy(0.9));

    // strings of paper lanterns between poles on both banks
    for z in [-7.0f32, 7.0] {
        for x in [-12.0f32, 0.0, 12.0] {
            builder = builder.add(Primitive::Cylinder, post(Vec3::new(x, 0.0, z), 5.0, 0.1, Rgb::hex(0x4a3020)), Material::MATTE);
        }
        let lanterns = line(Vec3::new(-12.0, 4.4, z), Vec3::new(12.0, 4.4, z), 13, Vec3::new(0.6, 0.8, 0.6), |i| LANTERN[i % LANTERN.len()]);
        builder = builder.add_all_animated(Primitive::Sphere, lanterns, Material::glowing(1.4), move |i, p| {
            vec![
                Animation::Swing { pivot: p.position + Vec3::Y * 0.6, axis: Vec3::X, wave: Wave::new(0.15, 1.2, i as f32 + z) },
                Animation::pulse(1.4, 0.3, 2.0, i as f32),
            ]
        });
    }

    // a footbridge arching over the river
    for i in 0..9 {
        let t = i as f32 / 8.0;
        let y = 0.4 + (t * std::f32::consts::PI).sin() * 1.6;
        builder = builder.add(Primitive::Cube, place(Vec3::new(0.0, y, -5.0 + t * 10.0), Vec3::new(2.4, 0.2, 1.3), Rgb::hex(0xb0402a)), Material::glossy(0.3));
    }

    // floating lanterns bobbing downstream
    for i in 0..14 {
        let start = Vec3::new(rng.gen_range(-30.0..-10.0), 0.3, rng.gen_range(-3.0..3.0));
        // staggered periods keep the lanterns from resetting together
        let drift = Animation::Drift { velocity: Vec3::X * 0.8, period: rng.gen_range(40.0..60.0) };
        let color = LANTERN[i % LANTERN.len()];
        let bob = Animation::bob(0.08, 1.5, i as f32);
        builder = builder
            .add_animated(Primitive::Cube, place(start, Vec3::new(0.6, 0.15, 0.6), Rgb::hex(0x8a6a40)), Material::MATTE, vec![drift, bob])
            .add_animated(Primitive::Sphere, place(start + Vec3::Y * 0.3, Vec3::splat(0.35), color), Material::glowing(2.0), vec![drift, bob]);
    }

    // sky lanterns rising
    let sky = InstanceParams::scatter(
        rng,
        160,
        &ParamRanges::in_box(Vec3::new(-25.0, 2.0, -25.0), Vec3::new(25.0, 2.0, 25.0))
            .scale(0.3..0.6)
            .speed(0.3..0.8)
            .amplitude(0.3..1.0),
        &LANTERN,
    );

    builder
        .light(Light::point(Vec3::new(-6.0, 4.0, -7.0), 12.0, Rgb::hex(0xff9a40), 1.0).with_flicker(Wave::new(0.2, 5.0, 0.0)))
        .light(Light::point(Vec3::new(6.0, 4.0, 7.0), 12.0, Rgb::hex(0xff9a40), 1.0).with_flicker(Wave::new(0.2, 5.0, 1.0)))
        .point_light(Vec3::new(0.0, 2.5, 0.0), 8.0, Rgb::hex(0xff6a40), 0.6)
        .batch(InstancedBatch::new(
            "sky lanterns",
            Primitive::Cylinder,
            Material::glowing(1.6),
            InstanceMotion::Rise { bottom: 2.0, top: 40.0 },
            sky,
        ))
        .build()
}
