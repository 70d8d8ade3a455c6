use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{palm, post, UPRIGHT};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{grid, place, scatter_disc, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const SEA: Rgb = Rgb::hex(0x1f9fc4);
const SAND: Rgb = Rgb::hex(0xf2dfb0);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Tropical Island")
        .background(Rgb::hex(0x7fd3ff))
        .fog(Rgb::hex(0xb8e8ff), 30.0, 90.0)
        .ambient(Rgb::hex(0xe8f8ff), 0.55)
        .sun(Vec3::new(-0.3, -1.0, 0.4), Rgb::hex(0xfff2d0), 1.2)
        .add(Primitive::Sphere, place(Vec3::new(0.0, -1.2, 0.0), Vec3::new(18.0, 3.0, 14.0), SAND), Material::MATTE)
        .add(Primitive::Sphere, place(Vec3::new(-2.0, -0.4, -1.5), Vec3::new(8.0, 2.4, 6.0), Rgb::hex(0x6cbf54)), Material::MATTE);

    for i in 0..5 {
        let angle = i as f32 / 5.0 * TAU + 0.3;
        let base = Vec3::new(angle.cos() * 5.5, 0.2, angle.sin() * 4.0);
        builder = palm(builder, base, rng.gen_range(4.0..6.0), -angle, i as f32 * 1.3);
    }

    // hut on stilts
    let hut = Vec3::new(4.0, 0.0, -3.0);
    for (dx, dz) in [(-1.0f32, -1.0f32), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
        builder = builder.add(Primitive::Cylinder, post(hut + Vec3::new(dx, 0.0, dz), 1.6, 0.1, Rgb::hex(0x7a5532)), Material::MATTE);
    }
    builder = builder
        .add(Primitive::Cube, place(hut + Vec3::Y * 2.3, Vec3::new(2.4, 1.4, 2.4), Rgb::hex(0xd8b27a)), Material::MATTE)
        .add(Primitive::Cone, place(hut + Vec3::Y * 3.6, Vec3::new(3.6, 1.4, 3.6), Rgb::hex(0xc49a4c)), Material::MATTE);

    // floating ring buoy and a bobbing boat
    builder = builder
        .add_animated(
            Primitive::Torus,
            place(Vec3::new(12.0, 0.1, 6.0), Vec3::splat(1.4), Rgb::hex(0xff5a3a)),
            Material::glossy(0.5),
            vec![Animation::bob(0.15, 1.2, 0.0), Animation::spin_y(0.2)],
        )
        .add_animated(
            Primitive::Sphere,
            place(Vec3::new(-12.0, 0.2, 8.0), Vec3::new(3.2, 0.6, 1.2), Rgb::hex(0x8a5a34)),
            Material::glossy(0.3),
            vec![Animation::bob(0.2, 0.9, 1.0), Animation::sway(Vec3::X, 0.08, 0.9, 0.0)],
        )
        .add_animated(
            Primitive::Cone,
            place(Vec3::new(-12.0, 1.8, 8.0), Vec3::new(1.6, 2.6, 0.1), Rgb::WHITE),
            Material::MATTE,
            vec![Animation::bob(0.2, 0.9, 1.0), Animation::sway(Vec3::X, 0.08, 0.9, 0.0)],
        );

    // shells along the beach
    let shells = scatter_disc(rng, 18, Vec3::new(0.0, 0.3, 0.0), 6.5, 8.0, 0.2..0.35, &[Rgb::hex(0xffc4d0), Rgb::hex(0xfff3e0)]);
    builder = builder.add_all(Primitive::Sphere, shells, Material::glossy(0.6));

    // the sun setting behind the island, a standing ring as its halo
    builder = builder
        .add(Primitive::Sphere, place(Vec3::new(0.0, 10.0, -40.0), Vec3::splat(8.0), Rgb::hex(0xffe08a)), Material::glowing(1.5))
        .add_animated(
            Primitive::Torus,
            place(Vec3::new(0.0, 10.0, -40.0), Vec3::splat(16.0), Rgb::hex(0xffb060)).with_rotation(UPRIGHT),
            Material::glowing(0.6),
            vec![Animation::Breathe(Wave::new(0.04, 0.4, 0.0))],
        );

    let waves = grid(Vec3::ZERO, 1.6, 36, 36, Vec3::ONE, |_, _| SEA)
        .into_iter()
        .filter(|p| (p.position.x / 10.0).powi(2) + (p.position.z / 8.0).powi(2) > 1.0)
        .map(|p| {
            let mut params = InstanceParams::at(p.position);
            params.scale = 1.6;
            params.amplitude = 0.2;
            params.speed = 1.1;
            params.color = p.color;
            params
        })
        .collect();

    builder
        .point_light(Vec3::new(4.0, 3.0, -3.0), 8.0, Rgb::hex(0xffb070), 0.8)
        .batch(InstancedBatch::new("waves", Primitive::Plane, Material::glossy(0.9), InstanceMotion::Swell { wavelength: 9.0 }, waves))
        .build()
}
