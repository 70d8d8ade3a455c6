use glam::Vec3;

use super::common::{ground, post};
use crate::animation::{Animation, Wave};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const GRAVEL: Rgb = Rgb::hex(0xd9d4c5);
const RAKE_LINE: Rgb = Rgb::hex(0xbdb7a6);
const MOSS: Rgb = Rgb::hex(0x5d7a3a);
const LANTERN: Rgb = Rgb::hex(0x8a8478);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    // raked ripples around each rock
    let rocks = [
        (Vec3::new(-3.0, 0.0, -2.0), 1.6),
        (Vec3::new(3.5, 0.0, 1.5), 1.1),
        (Vec3::new(0.5, 0.0, 4.0), 0.8),
    ];

    let mut builder = SceneBuilder::new("Zen Garden")
        .background(Rgb::hex(0xe8ecef))
        .fog(Rgb::hex(0xe8ecef), 25.0, 70.0)
        .ambient(Rgb::hex(0xfff7e8), 0.55)
        .sun(Vec3::new(-0.5, -1.0, -0.3), Rgb::hex(0xfff1d6), 0.8)
        .add(Primitive::Plane, ground(24.0, 0.0, GRAVEL), Material::MATTE);

    // straight rake marks across the bed
    let marks = grid(Vec3::new(0.0, 0.01, 0.0), 0.8, 1, 26, Vec3::new(20.0, 0.02, 0.08), |_, _| RAKE_LINE);
    builder = builder.add_all(Primitive::Cube, marks, Material::MATTE);

    for (center, size) in rocks {
        builder = builder
            .add(
                Primitive::Sphere,
                place(center + Vec3::Y * size * 0.3, Vec3::new(size * 1.4, size, size * 1.2), Rgb::hex(0x6b6660)),
                Material::glossy(0.15),
            )
            .add_all(
                Primitive::Torus,
                (1..4).map(|k| {
                    let width = size * 2.0 + k as f32 * 1.2;
                    place(center + Vec3::Y * 0.02, Vec3::new(width, 0.2, width), RAKE_LINE)
                }),
                Material::MATTE,
            );
    }

    let moss = scatter_disc(rng, 20, Vec3::new(0.0, 0.05, 0.0), 9.0, 11.5, 0.5..1.2, &[MOSS, Rgb::hex(0x476b2c)]);
    builder = builder.add_all(
        Primitive::Sphere,
        moss.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.0, 0.35, 1.0))),
        Material::MATTE,
    );

    // stone lantern with a softly breathing light
    let lantern_base = Vec3::new(-7.0, 0.0, 6.0);
    builder = builder
        .add(Primitive::Cylinder, post(lantern_base, 1.6, 0.2, LANTERN), Material::MATTE)
        .add(
            Primitive::Cube,
            place(lantern_base + Vec3::Y * 1.9, Vec3::new(0.8, 0.6, 0.8), LANTERN),
            Material::MATTE,
        )
        .add(
            Primitive::Cone,
            place(lantern_base + Vec3::Y * 2.5, Vec3::new(1.4, 0.6, 1.4), LANTERN),
            Material::MATTE,
        )
        .add_animated(
            Primitive::Sphere,
            place(lantern_base + Vec3::Y * 1.9, Vec3::splat(0.35), Rgb::hex(0xffd27a)),
            Material::glowing(1.2),
            vec![Animation::Pulse { base: 1.2, wave: Wave::new(0.3, 0.8, 0.0) }],
        )
        .point_light(lantern_base + Vec3::Y * 2.0, 7.0, Rgb::hex(0xffc86b), 1.0);

    // a single maple leaf drifting across the garden
    builder
        .add_animated(
            Primitive::Cube,
            place(Vec3::new(-8.0, 4.0, -3.0), Vec3::new(0.3, 0.02, 0.3), Rgb::hex(0xd1495b)),
            Material::MATTE,
            vec![
                Animation::Drift { velocity: Vec3::new(1.0, -0.2, 0.4), period: 16.0 },
                Animation::sway(Vec3::Z, 0.8, 2.0, 0.0),
                Animation::bob(0.3, 1.5, 0.0),
            ],
        )
        .build()
}
