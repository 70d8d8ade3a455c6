use std::f32::consts::TAU;

use glam::Vec3;

use super::common::golden_color;
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, ring, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const HULL: Rgb = Rgb::hex(0xc8ccd4);
const PANEL: Rgb = Rgb::hex(0x1d3b72);
const HUB_Y: f32 = 3.0;

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let hub = Vec3::new(0.0, HUB_Y, 0.0);
    let station_spin = 0.15;

    // modules around the habitat ring share the ring's rotation by orbiting with it
    let pods: Vec<_> = ring(hub, 6.0, 8, Vec3::new(1.2, 1.0, 1.8), |i| golden_color(i as u32, 0.3, 0.9));
    // ring entries face the hub, so a cube stretched along local Z reaches it
    let spokes = ring(hub, 3.0, 4, Vec3::new(0.3, 0.3, 6.0), solid_color(HULL));

    let mut builder = SceneBuilder::new("Space Station")
        .background(Rgb::hex(0x020208))
        .ambient(Rgb::hex(0x8090b0), 0.15)
        .sun(Vec3::new(1.0, -0.3, -0.4), Rgb::hex(0xfff4e0), 1.4)
        .add_animated(
            Primitive::Torus,
            place(hub, Vec3::new(12.0, 3.0, 12.0), HULL),
            Material::glossy(0.6),
            vec![Animation::spin_y(station_spin)],
        )
        .add_animated(
            Primitive::Cylinder,
            place(hub, Vec3::new(1.6, 5.0, 1.6), HULL),
            Material::glossy(0.6),
            vec![Animation::spin_y(station_spin)],
        )
        .add_all_animated(Primitive::Cube, pods, Material::glossy(0.4), |i, p| {
            let phase = i as f32 / 8.0 * TAU;
            vec![
                Animation::Spin { axis: Vec3::Y, speed: station_spin },
                Animation::Orbit {
                    center: Vec3::new(0.0, p.position.y, 0.0),
                    radius: 6.0,
                    speed: -station_spin,
                    phase,
                    height: 0.0,
                },
            ]
        })
        .add_all_animated(Primitive::Cube, spokes, Material::glossy(0.4), |i, _| {
            vec![
                Animation::Spin { axis: Vec3::Y, speed: station_spin },
                Animation::Orbit {
                    center: Vec3::new(0.0, HUB_Y, 0.0),
                    radius: 3.0,
                    speed: -station_spin,
                    phase: i as f32 / 4.0 * TAU,
                    height: 0.0,
                },
            ]
        });

    // solar arrays above and below the hub
    for y in [HUB_Y + 4.5, HUB_Y - 4.5] {
        let panels = line(
            Vec3::new(-7.0, y, 0.0),
            Vec3::new(7.0, y, 0.0),
            6,
            Vec3::new(2.0, 0.05, 3.5),
            solid_color(PANEL),
        );
        builder = builder.add_all_animated(Primitive::Cube, panels, Material::glossy(0.9), |_, _| {
            vec![Animation::Sway { axis: Vec3::X, wave: Wave::new(0.2, 0.3, 0.0) }]
        });
    }

    // docking beacons
    let beacons = ring(hub + Vec3::Y * 2.6, 0.9, 4, Vec3::splat(0.25), |i| {
        if i % 2 == 0 { Rgb::hex(0xff3344) } else { Rgb::hex(0x33ff77) }
    });
    builder = builder.add_all_animated(Primitive::Sphere, beacons, Material::glowing(1.5), |i, _| {
        vec![Animation::pulse(1.0, 1.0, 4.0, i as f32 * TAU * 0.25)]
    });

    let stars = InstanceParams::scatter(
        rng,
        300,
        &ParamRanges::in_box(Vec3::splat(-80.0), Vec3::splat(80.0))
            .scale(0.1..0.35)
            .speed(0.5..2.0),
        &[Rgb::WHITE, Rgb::hex(0xcfe0ff), Rgb::hex(0xffe8c0)],
    );
    let shuttles = InstanceParams::scatter(
        rng,
        6,
        &ParamRanges::in_box(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 6.0, 0.0))
            .scale(0.4..0.6)
            .speed(0.2..0.4)
            .radius(10.0..16.0)
            .amplitude(0.5..1.5),
        &[HULL],
    );

    builder
        .point_light(hub, 14.0, Rgb::hex(0x9fd8ff), 0.9)
        .batch(InstancedBatch::new(
            "starfield",
            Primitive::Sphere,
            Material::glowing(1.2),
            InstanceMotion::Twinkle,
            stars,
        ))
        .batch(InstancedBatch::new(
            "shuttles",
            Primitive::Cone,
            Material::glossy(0.5),
            InstanceMotion::Orbit { center: Vec3::ZERO },
            shuttles,
        ))
        .build()
}
