use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{ground, post, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{alternating_colors, grid, line, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const FROSTING: Rgb = Rgb::hex(0xffe4f1);
const CHOCOLATE: Rgb = Rgb::hex(0x5a3320);
const GUMDROPS: [Rgb; 5] = [
    Rgb::hex(0xff5e7e),
    Rgb::hex(0xffb347),
    Rgb::hex(0x9bf06b),
    Rgb::hex(0x6bc8ff),
    Rgb::hex(0xc58bff),
];

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Candy Land")
        .background(Rgb::hex(0xfbd3e9))
        .fog(Rgb::hex(0xfbd3e9), 25.0, 70.0)
        .ambient(Rgb::hex(0xfff0f8), 0.6)
        .sun(Vec3::new(-0.4, -1.0, -0.2), Rgb::WHITE, 0.8)
        .add(Primitive::Plane, ground(70.0, 0.0, FROSTING), Material::glossy(0.3));

    // candy canes: striped stacks with a hook on top
    for (i, base) in [Vec3::new(-7.0, 0.0, -3.0), Vec3::new(6.0, 0.0, -5.0), Vec3::new(-2.0, 0.0, -9.0)]
        .into_iter()
        .enumerate()
    {
        let stripes = line(
            base + Vec3::Y * 0.4,
            base + Vec3::Y * 6.0,
            8,
            Vec3::new(0.6, 0.8, 0.6),
            alternating_colors(Rgb::hex(0xe8202a), Rgb::WHITE),
        );
        builder = builder
            .add_all(Primitive::Cylinder, stripes, Material::glossy(0.8))
            .add_animated(
                Primitive::Torus,
                place(base + Vec3::new(0.6, 6.4, 0.0), Vec3::new(2.0, 1.2, 2.0), Rgb::hex(0xe8202a)).with_rotation(UPRIGHT),
                Material::glossy(0.8),
                vec![Animation::sway(Vec3::Y, 0.1, 0.5, i as f32)],
            );
    }

    // lollipops turning slowly on their sticks
    let pops = scatter_disc(rng, 9, Vec3::ZERO, 4.0, 12.0, 1.0..1.8, &GUMDROPS);
    for (i, pop) in pops.into_iter().enumerate() {
        let height = 3.0 * pop.scale.x;
        builder = builder
            .add(Primitive::Cylinder, post(pop.position, height, 0.08, Rgb::WHITE), Material::MATTE)
            .add_animated(
                Primitive::Cylinder,
                place(pop.position + Vec3::Y * (height + 0.6), Vec3::new(1.6, 0.25, 1.6) * pop.scale.x, pop.color)
                    .with_rotation(UPRIGHT),
                Material::glossy(0.9),
                vec![Animation::Spin { axis: Vec3::Y, speed: 0.6 + i as f32 * 0.1 }],
            );
    }

    // gumdrop field
    let drops = scatter_disc(rng, 40, Vec3::new(0.0, 0.3, 0.0), 2.0, 16.0, 0.5..1.0, &GUMDROPS);
    builder = builder.add_all_animated(
        Primitive::Cone,
        drops.into_iter().map(|p| p.with_scale(p.scale * Vec3::new(1.0, 0.8, 1.0))),
        Material::glossy(0.6),
        |i, _| vec![Animation::Breathe(Wave::new(0.05, 2.0, i as f32))],
    );

    // chocolate river with wafer stepping stones
    let wafers = line(Vec3::new(-1.5, 0.15, 4.0), Vec3::new(1.5, 0.15, 8.0), 4, Vec3::new(1.0, 0.3, 1.0), |_| Rgb::hex(0xe0b070));
    builder = builder.add_all(Primitive::Cube, wafers, Material::MATTE);
    let river = grid(Vec3::new(0.0, 0.05, 6.0), 1.0, 30, 4, Vec3::new(1.0, 1.0, 1.0), |_, _| CHOCOLATE)
        .into_iter()
        .map(|p| {
            let mut params = InstanceParams::at(p.position);
            params.color = p.color;
            params.amplitude = 0.08;
            params.speed = 1.5;
            params
        })
        .collect();

    let sprinkles = InstanceParams::scatter(
        rng,
        260,
        &ParamRanges::in_box(Vec3::new(-15.0, 0.0, -15.0), Vec3::new(15.0, 12.0, 15.0))
            .scale(0.06..0.12)
            .speed(0.8..1.6)
            .amplitude(0.2..0.6),
        &GUMDROPS,
    );

    builder
        .point_light(Vec3::new(0.0, 6.0, 0.0), 20.0, Rgb::hex(0xffc0e0), 0.7)
        .batch(InstancedBatch::new(
            "chocolate river",
            Primitive::Plane,
            Material::glossy(1.0),
            InstanceMotion::Swell { wavelength: 5.0 },
            river,
        ))
        .batch(InstancedBatch::new(
            "sprinkles",
            Primitive::Cylinder,
            Material::glowing(0.3),
            InstanceMotion::Fall { top: 12.0, bottom: 0.0 },
            sprinkles,
        ))
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(0.0, 14.0, -20.0), Vec3::splat(5.0), Rgb::hex(0xfff3a0)),
            Material::glowing(1.0),
            vec![Animation::Spin { axis: Vec3::Y, speed: TAU / 30.0 }],
        )
        .build()
}
