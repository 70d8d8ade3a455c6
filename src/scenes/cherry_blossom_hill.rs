use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{post, slab};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{jitter_colors, place, scatter, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const BLOSSOM: [Rgb; 3] = [Rgb::hex(0xffb7c9), Rgb::hex(0xffd0dc), Rgb::hex(0xf59ab5)];
const BARK: Rgb = Rgb::hex(0x4a3028);

/// Trunk with a cloud of blossom clusters, all swaying from the root
fn sakura(builder: SceneBuilder, rng: &mut SceneRng, base: Vec3, height: f32, phase: f32) -> SceneBuilder {
    let sway = Animation::Swing { pivot: base, axis: Vec3::X, wave: Wave::new(0.03, 0.6, phase) };
    let crown = base + Vec3::Y * height;
    let clusters = scatter(rng, 9, crown - Vec3::new(1.8, 0.6, 1.8), crown + Vec3::new(1.8, 1.2, 1.8), 1.2..2.0, &BLOSSOM);
    let clusters = jitter_colors(rng, clusters, 0.08);
    builder
        .add_animated(Primitive::Cylinder, post(base, height, 0.25, BARK), Material::MATTE, vec![sway])
        .add_all_animated(Primitive::Sphere, clusters, Material::glossy(0.2), |_, _| vec![sway])
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Cherry Blossom Hill")
        .background(Rgb::hex(0xcfe6ff))
        .fog(Rgb::hex(0xf4e6f0), 25.0, 80.0)
        .ambient(Rgb::hex(0xfff4f8), 0.55)
        .sun(Vec3::new(-0.3, -0.9, -0.4), Rgb::hex(0xfff6ea), 1.0)
        .add(Primitive::Sphere, place(Vec3::new(0.0, -14.0, 0.0), Vec3::new(60.0, 30.0, 60.0), Rgb::hex(0x8ac06a)), Material::MATTE);

    // trees ringing the crest of the hill; surface height follows the ellipsoid
    for i in 0..9 {
        let angle = i as f32 / 9.0 * TAU + rng.gen_range(-0.2..0.2);
        let radius = rng.gen_range(6.0..14.0);
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = -14.0 + 15.0 * (1.0 - (x * x + z * z) / (30.0 * 30.0)).max(0.0).sqrt();
        let height = rng.gen_range(3.5..5.0);
        builder = sakura(builder, rng, Vec3::new(x, y - 0.2, z), height, i as f32 * 0.7);
    }

    // picnic blanket, a bench and a swing hung from a frame
    builder = builder
        .add(Primitive::Cube, place(Vec3::new(0.0, 1.02, 2.0), Vec3::new(3.0, 0.04, 2.4), Rgb::hex(0xd84a4a)), Material::MATTE)
        .add(Primitive::Cube, slab(Vec3::new(-4.5, 0.9, -1.0), Vec3::new(-2.0, 1.5, -0.4), Rgb::hex(0x8a6040)), Material::MATTE);
    let frame = Vec3::new(3.5, 0.8, -2.0);
    for x in [-1.2f32, 1.2] {
        builder = builder.add(Primitive::Cylinder, post(frame + Vec3::X * x, 3.5, 0.08, BARK), Material::MATTE);
    }
    let hinge = frame + Vec3::Y * 3.5;
    let swing = Animation::Swing { pivot: hinge, axis: Vec3::X, wave: Wave::new(0.45, 1.4, 0.0) };
    builder = builder
        .add(Primitive::Cube, slab(hinge + Vec3::new(-1.3, 0.0, -0.08), hinge + Vec3::new(1.3, 0.15, 0.08), BARK), Material::MATTE)
        .add_animated(Primitive::Cube, place(hinge - Vec3::Y * 2.6, Vec3::new(1.2, 0.1, 0.5), Rgb::hex(0xc08a50)), Material::MATTE, vec![swing]);
    for x in [-0.5f32, 0.5] {
        builder = builder.add_animated(
            Primitive::Cylinder,
            place(hinge + Vec3::new(x, -1.3, 0.0), Vec3::new(0.03, 2.6, 0.03), Rgb::hex(0xdddddd)),
            Material::MATTE,
            vec![swing],
        );
    }

    // kites on strings
    for (i, color) in [Rgb::hex(0xff5050), Rgb::hex(0x4aa0ff)].into_iter().enumerate() {
        let anchor = Vec3::new(-6.0 + i as f32 * 10.0, 14.0 + i as f32 * 3.0, -6.0);
        builder = builder.add_animated(
            Primitive::Cube,
            place(anchor, Vec3::new(1.4, 1.8, 0.05), color).with_rotation(Vec3::new(0.3, 0.0, TAU / 8.0)),
            Material::glossy(0.3),
            vec![
                Animation::sway(Vec3::Z, 0.25, 0.9, i as f32),
                Animation::Bob(Wave::new(1.0, 0.5, i as f32 * 2.0)),
            ],
        );
    }

    let petals = InstanceParams::scatter(
        rng,
        320,
        &ParamRanges::in_box(Vec3::new(-18.0, 0.0, -18.0), Vec3::new(18.0, 14.0, 18.0))
            .scale(0.07..0.14)
            .speed(0.5..1.1)
            .amplitude(0.6..1.6),
        &BLOSSOM,
    );

    builder
        .batch(InstancedBatch::new(
            "petals",
            Primitive::Plane,
            Material::glowing(0.15),
            InstanceMotion::Fall { top: 14.0, bottom: 0.0 },
            petals,
        ))
        .build()
}
