use glam::Vec3;

use super::common::{ground, post, slab, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STEEL: Rgb = Rgb::hex(0x8a9098);
const HAZARD: Rgb = Rgb::hex(0xf0c020);
const BELT_Z: f32 = 2.0;
const BELT_TOP: f32 = 1.2;

/// Arm bolted to the floor that swings down over the belt and back
fn welding_arm(builder: SceneBuilder, base: Vec3, phase: f32) -> SceneBuilder {
    let shoulder = base + Vec3::Y * 2.0;
    let reach = Animation::Swing { pivot: shoulder, axis: Vec3::X, wave: Wave::new(0.5, 1.2, phase) };
    builder
        .add(Primitive::Cylinder, post(base, 2.0, 0.4, HAZARD), Material::glossy(0.5))
        .add_animated(Primitive::Sphere, place(shoulder, Vec3::splat(0.7), STEEL), Material::glossy(0.8), vec![Animation::spin_y(0.5)])
        .add_animated(
            Primitive::Cube,
            place(shoulder + Vec3::new(0.0, 0.6, 1.0), Vec3::new(0.35, 0.35, 2.2), HAZARD),
            Material::glossy(0.5),
            vec![reach],
        )
        .add_animated(
            Primitive::Sphere,
            place(shoulder + Vec3::new(0.0, 0.6, 2.2), Vec3::splat(0.3), Rgb::hex(0x80e0ff)),
            Material::glowing(2.0),
            vec![reach, Animation::pulse(2.0, 2.0, 20.0, phase)],
        )
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Robot Factory")
        .background(Rgb::hex(0x1a1c22))
        .fog(Rgb::hex(0x1a1c22), 20.0, 60.0)
        .ambient(Rgb::hex(0xa0b0c8), 0.35)
        .sun(Vec3::new(0.2, -1.0, 0.3), Rgb::hex(0xe0e8ff), 0.5)
        .add(Primitive::Plane, ground(70.0, 0.0, Rgb::hex(0x3a3c42)), Material::glossy(0.3));

    // conveyor: frame, rollers turning in place, robots riding along
    builder = builder.add(
        Primitive::Cube,
        slab(Vec3::new(-14.0, 0.0, BELT_Z - 1.0), Vec3::new(14.0, BELT_TOP - 0.2, BELT_Z + 1.0), Rgb::hex(0x2a2c30)),
        Material::MATTE,
    );
    let rollers = line(Vec3::new(-13.5, BELT_TOP - 0.1, BELT_Z), Vec3::new(13.5, BELT_TOP - 0.1, BELT_Z), 28, Vec3::new(0.3, 2.0, 0.3), |_| STEEL);
    builder = builder.add_all_animated(
        Primitive::Cylinder,
        rollers.into_iter().map(|p| p.with_rotation(UPRIGHT)),
        Material::glossy(0.8),
        |_, _| vec![Animation::Spin { axis: Vec3::Y, speed: -3.0 }],
    );
    for i in 0..4 {
        // each robot loops back to its start as the one behind reaches it
        let start = Vec3::new(-13.0 + i as f32 * 6.5, BELT_TOP, BELT_Z);
        let ride = Animation::Drift { velocity: Vec3::X, period: 6.5 };
        let color = Rgb::from_hsv(i as f32 * 0.25, 0.5, 0.9);
        builder = builder
            .add_animated(Primitive::Cube, place(start + Vec3::Y * 0.6, Vec3::new(0.9, 1.2, 0.7), color), Material::glossy(0.6), vec![ride])
            .add_animated(Primitive::Cube, place(start + Vec3::Y * 1.5, Vec3::splat(0.6), STEEL), Material::glossy(0.8), vec![ride])
            .add_animated(
                Primitive::Sphere,
                place(start + Vec3::new(0.0, 1.55, 0.31), Vec3::new(0.35, 0.12, 0.05), Rgb::hex(0x40ff80)),
                Material::glowing(1.5),
                vec![ride, Animation::pulse(1.5, 1.0, 3.0, i as f32)],
            );
    }

    for (i, x) in [-6.0f32, 1.0, 8.0].into_iter().enumerate() {
        builder = welding_arm(builder, Vec3::new(x, 0.0, BELT_Z - 3.4), i as f32 * 2.1);
    }

    // gantry crane travelling back and forth overhead
    builder = builder
        .add(Primitive::Cube, slab(Vec3::new(-15.0, 8.0, -4.5), Vec3::new(15.0, 8.4, -4.0), HAZARD), Material::MATTE)
        .add(Primitive::Cube, slab(Vec3::new(-15.0, 8.0, 7.5), Vec3::new(15.0, 8.4, 8.0), HAZARD), Material::MATTE);
    let slide = Animation::Swing { pivot: Vec3::new(0.0, 40.0, 2.0), axis: Vec3::Z, wave: Wave::new(0.25, 0.2, 0.0) };
    builder = builder
        .add_animated(Primitive::Cube, place(Vec3::new(0.0, 7.8, 2.0), Vec3::new(1.2, 0.4, 12.6), STEEL), Material::glossy(0.6), vec![slide])
        .add_animated(Primitive::Cylinder, place(Vec3::new(0.0, 6.0, 2.0), Vec3::new(0.05, 3.6, 0.05), STEEL), Material::MATTE, vec![slide])
        .add_animated(Primitive::Cube, place(Vec3::new(0.0, 4.0, 2.0), Vec3::new(1.4, 0.6, 1.4), HAZARD), Material::glossy(0.5), vec![slide]);

    // warning beacons
    for x in [-14.5f32, 14.5] {
        builder = builder
            .add(Primitive::Cylinder, post(Vec3::new(x, 0.0, BELT_Z + 1.6), 2.5, 0.08, STEEL), Material::MATTE)
            .add_animated(
                Primitive::Sphere,
                place(Vec3::new(x, 2.7, BELT_Z + 1.6), Vec3::splat(0.35), Rgb::hex(0xff7020)),
                Material::glowing(2.0),
                vec![Animation::pulse(2.0, 2.0, 6.0, x)],
            )
            .light(Light::point(Vec3::new(x, 2.9, BELT_Z + 1.6), 8.0, Rgb::hex(0xff7020), 0.8).with_flicker(Wave::new(0.8, 6.0, x)));
    }

    let sparks = InstanceParams::scatter(
        rng,
        150,
        &ParamRanges::in_box(Vec3::new(-7.0, BELT_TOP + 0.5, BELT_Z - 1.0), Vec3::new(9.0, BELT_TOP + 2.5, BELT_Z + 1.0))
            .scale(0.03..0.07)
            .speed(1.5..3.0)
            .amplitude(0.2..0.6),
        &[Rgb::hex(0xfff0a0), Rgb::hex(0x80e0ff)],
    );

    builder
        .point_light(Vec3::new(0.0, 7.0, 2.0), 20.0, Rgb::hex(0xe0e8ff), 1.0)
        .batch(InstancedBatch::new(
            "sparks",
            Primitive::Sphere,
            Material::glowing(2.0),
            InstanceMotion::Fall { top: BELT_TOP + 2.5, bottom: 0.0 },
            sparks,
        ))
        .build()
}
