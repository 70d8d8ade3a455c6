use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::common::{post, slab};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, solid_color, Placement, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const HULL: Rgb = Rgb::hex(0x5b3a1e);
const DECK: Rgb = Rgb::hex(0x9c6b3c);
const SAIL: Rgb = Rgb::hex(0xf1ead8);
const SEA: Rgb = Rgb::hex(0x1b4f72);

/// Every part of the ship rocks together
fn rocking(extra: &[Animation]) -> Vec<Animation> {
    let mut animations = vec![
        Animation::sway(Vec3::Z, 0.06, 0.7, 0.0),
        Animation::sway(Vec3::X, 0.03, 0.5, 1.0),
        Animation::bob(0.25, 0.7, 0.4),
    ];
    animations.extend_from_slice(extra);
    animations
}

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let hull_parts = [
        slab(Vec3::new(-1.8, 0.0, -5.0), Vec3::new(1.8, 1.8, 5.0), HULL),
        slab(Vec3::new(-1.4, 1.8, 3.2), Vec3::new(1.4, 3.0, 5.0), HULL),
        slab(Vec3::new(-1.7, 1.8, -5.0), Vec3::new(1.7, 1.9, 3.2), DECK),
    ];
    let bow = place(Vec3::new(0.0, 1.0, -5.8), Vec3::new(3.2, 1.8, 1.8), HULL).with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));

    let masts = [
        post(Vec3::new(0.0, 1.9, -2.5), 8.0, 0.18, DECK),
        post(Vec3::new(0.0, 1.9, 1.5), 9.0, 0.2, DECK),
    ];
    let sails: Vec<Placement> = [(-2.5, 6.5, 4.5), (1.5, 7.5, 5.2)]
        .into_iter()
        .flat_map(|(z, top, width)| {
            line(
                Vec3::new(0.0, top - 3.0, z),
                Vec3::new(0.0, top, z),
                2,
                Vec3::new(width, 2.2, 0.1),
                solid_color(SAIL),
            )
        })
        .collect();

    let mut builder = SceneBuilder::new("Pirate Ship")
        .background(Rgb::hex(0x1a2238))
        .fog(Rgb::hex(0x1a2238), 20.0, 70.0)
        .ambient(Rgb::hex(0x8fa3c7), 0.3)
        .sun(Vec3::new(0.4, -0.8, 0.5), Rgb::hex(0xe3ecff), 0.6)
        .add_all_animated(Primitive::Cube, hull_parts, Material::MATTE, |_, _| rocking(&[]))
        .add_animated(Primitive::Cone, bow, Material::MATTE, rocking(&[]))
        .add_all_animated(Primitive::Cylinder, masts, Material::MATTE, |_, _| rocking(&[]))
        .add_all_animated(Primitive::Cube, sails, Material::MATTE, |i, _| {
            rocking(&[Animation::Breathe(Wave::new(0.04, 1.8, i as f32))])
        })
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(0.0, 11.2, 1.5), Vec3::new(1.2, 0.7, 0.05), Rgb::hex(0x111111)),
            Material::MATTE,
            rocking(&[Animation::sway(Vec3::Y, 0.4, 2.5, 0.0)]),
        )
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 3.4, 4.6), Vec3::splat(0.3), Rgb::hex(0xffb84d)),
            Material::glowing(1.8),
            rocking(&[Animation::pulse(1.8, 0.4, 6.0, 0.0)]),
        )
        .light(
            Light::point(Vec3::new(0.0, 3.6, 4.6), 10.0, Rgb::hex(0xffb84d), 1.3)
                .with_flicker(Wave::new(0.2, 6.0, 0.0)),
        )
        .point_light(Vec3::new(-12.0, 14.0, -8.0), 40.0, Rgb::hex(0xdfe8ff), 0.5);

    // cannons along both flanks
    for x in [-1.85f32, 1.85] {
        let cannons = line(
            Vec3::new(x, 1.2, -3.0),
            Vec3::new(x, 1.2, 2.0),
            4,
            Vec3::new(0.35, 0.9, 0.35),
            solid_color(Rgb::hex(0x222222)),
        )
        .into_iter()
        .map(|p| p.with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2)));
        builder = builder.add_all_animated(Primitive::Cylinder, cannons, Material::glossy(0.6), |_, _| rocking(&[]));
    }

    // open sea as a swell of flat tiles
    let tiles: Vec<_> = (0..40)
        .flat_map(|x| (0..40).map(move |z| (x, z)))
        .map(|(x, z)| {
            let mut p = InstanceParams::at(Vec3::new(x as f32 * 1.5 - 30.0, -0.3, z as f32 * 1.5 - 30.0));
            p.scale = 1.55;
            p.speed = 1.2;
            p.amplitude = 0.35;
            p.color = SEA;
            p
        })
        .collect();

    let gulls = InstanceParams::scatter(
        rng,
        7,
        &ParamRanges::in_box(Vec3::new(0.0, 12.0, 0.0), Vec3::new(0.0, 16.0, 0.0))
            .scale(0.25..0.4)
            .speed(0.3..0.6)
            .radius(5.0..11.0)
            .amplitude(0.3..1.0),
        &[Rgb::hex(0xf5f5f5)],
    );

    builder
        .batch(InstancedBatch::new(
            "gulls",
            Primitive::Cone,
            Material::MATTE,
            InstanceMotion::Orbit { center: Vec3::ZERO },
            gulls,
        ))
        .batch(InstancedBatch::new(
            "ocean swell",
            Primitive::Plane,
            Material::glossy(0.7),
            InstanceMotion::Swell { wavelength: 9.0 },
            tiles,
        ))
        .build()
}
