use glam::Vec3;

use super::common::{ground, post, slab, vertical_ring, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::environment::Light;
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{line, place, rainbow_gradient, solid_color, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const STONE: Rgb = Rgb::hex(0x57525e);
const DARK_STONE: Rgb = Rgb::hex(0x3a3640);
const CANDLE_WAX: Rgb = Rgb::hex(0xf0e6d0);
const FLAME: Rgb = Rgb::hex(0xffb347);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let column_scale = Vec3::new(0.9, 9.0, 0.9);
    let mut columns = line(
        Vec3::new(-4.0, 4.5, -12.0),
        Vec3::new(-4.0, 4.5, 10.0),
        7,
        column_scale,
        solid_color(STONE),
    );
    columns.extend(line(
        Vec3::new(4.0, 4.5, -12.0),
        Vec3::new(4.0, 4.5, 10.0),
        7,
        column_scale,
        solid_color(STONE),
    ));

    let arches = line(
        Vec3::new(0.0, 9.0, -12.0),
        Vec3::new(0.0, 9.0, 10.0),
        7,
        Vec3::new(8.0, 3.0, 8.0),
        solid_color(DARK_STONE),
    )
    .into_iter()
    .map(|p| p.with_rotation(UPRIGHT));

    let rose_window: Vec<_> = vertical_ring(Vec3::new(0.0, 10.0, -14.2), 2.2, 12)
        .enumerate()
        .map(|(i, position)| place(position, Vec3::splat(0.9), rainbow_gradient(12)(i)))
        .collect();

    let mut builder = SceneBuilder::new("Gothic Cathedral")
        .background(Rgb::hex(0x141019))
        .fog(Rgb::hex(0x141019), 18.0, 55.0)
        .ambient(Rgb::hex(0x6a6aa8), 0.22)
        .sun(Vec3::new(-0.3, -1.0, -0.4), Rgb::hex(0xb4b8ff), 0.35)
        .add(Primitive::Plane, ground(40.0, 0.0, DARK_STONE), Material::MATTE)
        .add_all(Primitive::Cylinder, columns, Material::MATTE)
        .add_all(Primitive::Torus, arches, Material::MATTE)
        .add(
            Primitive::Cube,
            slab(Vec3::new(-7.0, 0.0, -14.5), Vec3::new(7.0, 14.0, -14.0), STONE),
            Material::MATTE,
        )
        .add(
            Primitive::Cube,
            slab(Vec3::new(-7.5, 0.0, -14.0), Vec3::new(-7.0, 11.0, 12.0), STONE),
            Material::MATTE,
        )
        .add(
            Primitive::Cube,
            slab(Vec3::new(7.0, 0.0, -14.0), Vec3::new(7.5, 11.0, 12.0), STONE),
            Material::MATTE,
        )
        .add(
            Primitive::Cube,
            slab(Vec3::new(-1.8, 0.0, -11.0), Vec3::new(1.8, 1.2, -9.8), Rgb::hex(0xd8d0c0)),
            Material::glossy(0.4),
        )
        .add_all_animated(
            Primitive::Sphere,
            rose_window,
            Material::glowing(0.9),
            |i, _| vec![Animation::pulse(0.9, 0.35, 1.2, i as f32 * 0.5)],
        )
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 10.0, -14.2), Vec3::splat(1.6), Rgb::hex(0xff4466)),
            Material::glowing(1.0),
            vec![Animation::ColorShift {
                to: Rgb::hex(0x4466ff),
                speed: 0.4,
                phase: 0.0,
            }],
        );

    // candles flanking the altar
    for (i, x) in [-1.4f32, -0.7, 0.7, 1.4].into_iter().enumerate() {
        let base = Vec3::new(x, 1.2, -10.4);
        builder = builder
            .add(Primitive::Cylinder, post(base, 0.6, 0.08, CANDLE_WAX), Material::MATTE)
            .add_animated(
                Primitive::Sphere,
                place(base + Vec3::Y * 0.7, Vec3::new(0.12, 0.2, 0.12), FLAME),
                Material::glowing(1.5),
                vec![
                    Animation::pulse(1.5, 0.4, 9.0, i as f32 * 1.7),
                    Animation::Breathe(Wave::new(0.15, 7.0, i as f32)),
                ],
            );
    }

    let motes = InstanceParams::scatter(
        rng,
        140,
        &ParamRanges::in_box(Vec3::new(-6.0, 1.0, -12.0), Vec3::new(6.0, 10.0, 10.0))
            .scale(0.03..0.07)
            .speed(0.1..0.3)
            .amplitude(0.3..1.0),
        &[Rgb::hex(0xfff2cc)],
    );

    builder
        .light(
            Light::point(Vec3::new(0.0, 2.5, -10.0), 9.0, FLAME, 1.6)
                .with_flicker(Wave::new(0.25, 11.0, 0.0)),
        )
        .point_light(Vec3::new(0.0, 9.0, -12.5), 14.0, Rgb::hex(0xc080ff), 1.2)
        .batch(InstancedBatch::new(
            "dust motes",
            Primitive::Sphere,
            Material::glowing(0.6),
            InstanceMotion::Hover,
            motes,
        ))
        .build()
}
