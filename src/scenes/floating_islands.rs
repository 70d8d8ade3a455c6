use glam::Vec3;
use rand::Rng;

use super::common::{golden_color, tree};
use crate::animation::{Animation, Wave};
use crate::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::{place, spiral, SceneRng};
use crate::scene::{Material, SceneBuilder, SceneContent};

const SKY: Rgb = Rgb::hex(0x8ec9f0);
const GRASS: Rgb = Rgb::hex(0x6abf4b);
const EARTH: Rgb = Rgb::hex(0x7a5230);

pub fn build(rng: &mut SceneRng) -> SceneContent {
    let mut builder = SceneBuilder::new("Floating Islands")
        .background(SKY)
        .fog(Rgb::hex(0xcfe8f7), 25.0, 90.0)
        .ambient(Rgb::hex(0xeaf6ff), 0.5)
        .sun(Vec3::new(-0.4, -1.0, -0.2), Rgb::hex(0xfff5e0), 1.0);

    // islands on a rising spiral; each bobs on its own phase with everything it carries
    let islands = spiral(Vec3::new(0.0, -2.0, 0.0), 4.0, 12.0, 3.0, 1.5, 6, Vec3::ONE, |i| golden_color(i as u32, 0.15, 0.9));
    let summit = islands.last().map_or(Vec3::ZERO, |p| p.position);
    for (i, island) in islands.into_iter().enumerate() {
        let radius = rng.gen_range(1.8..3.2);
        let bob = Animation::Bob(Wave::new(0.5, 0.6, i as f32 * 1.1));
        let top = island.position;
        builder = builder
            .add_animated(
                Primitive::Cylinder,
                place(top - Vec3::Y * 0.2, Vec3::new(radius * 2.0, 0.4, radius * 2.0), GRASS),
                Material::MATTE,
                vec![bob],
            )
            .add_animated(
                Primitive::Cone,
                place(top - Vec3::Y * 2.0, Vec3::new(radius * 2.0, 3.2, radius * 2.0), EARTH)
                    .with_rotation(Vec3::new(std::f32::consts::PI, 0.0, 0.0)),
                Material::MATTE,
                vec![bob],
            );

        // a tree or a little house on top
        if i % 3 == 2 {
            builder = builder
                .add_animated(
                    Primitive::Cube,
                    place(top + Vec3::Y * 0.6, Vec3::new(1.2, 1.2, 1.2), island.color),
                    Material::MATTE,
                    vec![bob],
                )
                .add_animated(
                    Primitive::Cone,
                    place(top + Vec3::Y * 1.6, Vec3::new(1.8, 0.9, 1.8), Rgb::hex(0xb5523b)),
                    Material::MATTE,
                    vec![bob],
                );
        } else {
            builder = tree(builder, top, rng.gen_range(2.0..3.2), EARTH, Rgb::hex(0x3f8f3a), false);
            // everything else is already animated, so only the new tree is still static
            builder = builder.transform(|object| {
                if object.animations.is_empty() {
                    object.animations.push(bob);
                }
            });
        }
    }

    // waterfall spilling off the highest island
    let spray = InstanceParams::scatter(
        rng,
        70,
        &ParamRanges::in_box(summit + Vec3::new(1.8, -8.0, -0.4), summit + Vec3::new(2.4, 0.0, 0.4))
            .scale(0.1..0.2)
            .speed(3.0..5.0)
            .amplitude(0.05..0.15),
        &[Rgb::hex(0xcdefff), Rgb::WHITE],
    );
    let birds = InstanceParams::scatter(
        rng,
        12,
        &ParamRanges::in_box(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, 10.0, 0.0))
            .scale(0.2..0.35)
            .speed(0.3..0.7)
            .radius(6.0..18.0)
            .amplitude(0.5..1.5),
        &[Rgb::hex(0x303030)],
    );
    let clouds = InstanceParams::scatter(
        rng,
        24,
        &ParamRanges::in_box(Vec3::new(-50.0, -8.0, -30.0), Vec3::new(-50.0, 12.0, 30.0))
            .scale(2.0..5.0)
            .speed(0.6..1.2)
            .amplitude(0.2..0.6),
        &[Rgb::WHITE, Rgb::hex(0xf0f4f8)],
    );

    builder
        .batch(InstancedBatch::new(
            "waterfall",
            Primitive::Sphere,
            Material::glossy(0.6),
            InstanceMotion::Fall { top: summit.y, bottom: summit.y - 8.0 },
            spray,
        ))
        .batch(InstancedBatch::new(
            "birds",
            Primitive::Cone,
            Material::MATTE,
            InstanceMotion::Orbit { center: Vec3::ZERO },
            birds,
        ))
        .batch(InstancedBatch::new(
            "clouds",
            Primitive::Sphere,
            Material::glowing(0.2),
            InstanceMotion::Stream { direction: Vec3::X, span: 100.0 },
            clouds,
        ))
        .build()
}
