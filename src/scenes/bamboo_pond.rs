use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{ground, post, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{gradient, line, place, ring, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const WATER: Rgb = Rgb::hex(0x2f6f6a);
const BAMBOO: Rgb = Rgb::hex(0x8fb04a);
const BRIDGE: Rgb = Rgb::hex(0xb83a2a);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Bamboo Pond")
        .background(Rgb::hex(0xd8e8d0))
        .fog(Rgb::hex(0xd8e8d0), 18.0, 60.0)
        .ambient(Rgb::hex(0xf0fff0), 0.5)
        .sun(Vec3::new(0.4, -1.0, -0.3), Rgb::hex(0xfff6e0), 0.9)
        .add(Primitive::Plane, ground(80.0, 0.0, Rgb::hex(0x5d7a3c)), Material::MATTE)
        .add(Primitive::Cylinder, place(Vec3::new(0.0, 0.02, 0.0), Vec3::new(16.0, 0.04, 12.0), WATER), Material::glossy(1.0));

    // bamboo stands around the pond: segmented canes leaning with the breeze
    let clumps = scatter_disc(rng, 10, Vec3::ZERO, 10.0, 16.0, 1.0..1.0, &[]);
    for (c, clump) in clumps.into_iter().enumerate() {
        let canes = rng.gen_range(4..8);
        for k in 0..canes {
            let base = clump.position + Vec3::new(rng.gen_range(-1.0..1.0), 0.0, rng.gen_range(-1.0..1.0));
            let height = rng.gen_range(6.0..10.0);
            let segments = (height / 1.2) as usize;
            let shade = gradient(BAMBOO, Rgb::hex(0x5f8a2e), segments);
            let sway = Animation::Swing {
                pivot: base,
                axis: Vec3::new(1.0, 0.0, 0.4),
                wave: Wave::new(0.05, 0.9, c as f32 * 0.7 + k as f32 * 0.2),
            };
            let nodes = line(base + Vec3::Y * 0.6, base + Vec3::Y * (height - 0.6), segments, Vec3::new(0.22, 1.15, 0.22), shade);
            builder = builder.add_all_animated(Primitive::Cylinder, nodes, Material::glossy(0.3), |_, _| vec![sway]);
            builder = builder.add_animated(
                Primitive::Cone,
                place(base + Vec3::Y * height, Vec3::new(1.4, 1.0, 1.4), Rgb::hex(0x4f8a2a)),
                Material::MATTE,
                vec![sway],
            );
        }
    }

    // arched bridge across the pond
    let planks = (0..12).map(|i| {
        let t = i as f32 / 11.0;
        let angle = t * TAU * 0.5;
        place(Vec3::new(-5.5 + t * 11.0, 0.3 + angle.sin() * 1.4, -1.0), Vec3::new(1.0, 0.15, 2.0), BRIDGE)
            .with_rotation(Vec3::new(0.0, 0.0, angle.cos() * 0.45))
    });
    builder = builder.add_all(Primitive::Cube, planks, Material::glossy(0.4));
    for z in [-2.0f32, 0.0] {
        builder = builder.add(
            Primitive::Torus,
            place(Vec3::new(0.0, 0.3, z), Vec3::new(11.0, 0.4, 3.8), BRIDGE).with_rotation(UPRIGHT),
            Material::glossy(0.4),
        );
    }

    // lily pads, a few carrying blossoms, and koi beneath
    let pads = scatter_disc(rng, 22, Vec3::new(0.0, 0.06, 2.0), 1.0, 5.5, 0.6..1.1, &[Rgb::hex(0x3f8a3a), Rgb::hex(0x4f9a44)]);
    for (i, pad) in pads.into_iter().enumerate() {
        builder = builder.add_animated(
            Primitive::Cylinder,
            pad.with_scale(pad.scale * Vec3::new(1.0, 0.04, 1.0)),
            Material::glossy(0.4),
            vec![Animation::bob(0.03, 0.8, i as f32)],
        );
        if i % 4 == 0 {
            builder = builder.add_animated(
                Primitive::Cone,
                place(pad.position + Vec3::Y * 0.15, Vec3::new(0.35, 0.3, 0.35), Rgb::hex(0xf7b6d2)),
                Material::glowing(0.3),
                vec![Animation::bob(0.03, 0.8, i as f32)],
            );
        }
    }

    // stone lanterns at the water's edge
    for p in ring(Vec3::ZERO, 8.6, 3, Vec3::ONE, |_| Rgb::hex(0x8a8478)) {
        builder = builder
            .add(Primitive::Cylinder, post(p.position, 1.2, 0.15, p.color), Material::MATTE)
            .add_animated(
                Primitive::Cube,
                place(p.position + Vec3::Y * 1.45, Vec3::splat(0.5), Rgb::hex(0xffe0a0)),
                Material::glowing(1.0),
                vec![Animation::pulse(1.0, 0.2, 1.3, p.rotation.y)],
            );
    }

    let koi = InstanceParams::scatter(
        rng,
        9,
        &ParamRanges::in_box(Vec3::new(0.0, -0.05, 0.0), Vec3::new(0.0, -0.05, 0.0))
            .scale(0.35..0.5)
            .speed(0.3..0.6)
            .radius(1.5..5.0)
            .amplitude(0.0..0.02),
        &[Rgb::hex(0xff7a1a), Rgb::hex(0xffffff), Rgb::hex(0xd62828)],
    );
    let petals = InstanceParams::scatter(
        rng,
        60,
        &ParamRanges::in_box(Vec3::new(-12.0, 0.0, -12.0), Vec3::new(12.0, 9.0, 12.0))
            .scale(0.08..0.14)
            .speed(0.3..0.6)
            .amplitude(0.5..1.2),
        &[Rgb::hex(0xffd1e1), Rgb::hex(0xfff0f5)],
    );

    builder
        .point_light(Vec3::new(0.0, 3.0, 3.0), 10.0, Rgb::hex(0xffe0a0), 0.6)
        .batch(InstancedBatch::new(
            "koi",
            Primitive::Sphere,
            Material::glossy(0.7),
            InstanceMotion::Orbit { center: Vec3::new(0.0, 0.0, 1.0) },
            koi,
        ))
        .batch(InstancedBatch::new(
            "petals",
            Primitive::Plane,
            Material::glowing(0.2),
            InstanceMotion::Fall { top: 9.0, bottom: 0.0 },
            petals,
        ))
        .build()
}
