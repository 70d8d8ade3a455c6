use glam::Vec3;
use rand::SeedableRng;

use diorama_gallery::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use diorama_gallery::math::Rgb;
use diorama_gallery::mesh::Primitive;
use diorama_gallery::placement::SceneRng;
use diorama_gallery::scene::Material;

fn motions() -> Vec<InstanceMotion> {
    vec![
        InstanceMotion::Still,
        InstanceMotion::Fall { top: 10.0, bottom: 0.0 },
        InstanceMotion::Rise { bottom: 0.0, top: 8.0 },
        InstanceMotion::Stream { direction: Vec3::X, span: 30.0 },
        InstanceMotion::Orbit { center: Vec3::ZERO },
        InstanceMotion::Hover,
        InstanceMotion::Twinkle,
        InstanceMotion::Swell { wavelength: 6.0 },
        InstanceMotion::Spin,
    ]
}

fn params(count: usize) -> Vec<InstanceParams> {
    let mut rng = SceneRng::seed_from_u64(11);
    InstanceParams::scatter(
        &mut rng,
        count,
        &ParamRanges::in_box(Vec3::splat(-5.0), Vec3::splat(5.0))
            .scale(0.1..0.4)
            .speed(0.5..2.0)
            .radius(1.0..6.0)
            .amplitude(0.1..1.0),
        &[Rgb::hex(0xff8800), Rgb::hex(0x0088ff)],
    )
}

#[cfg(test)]
mod instancing_tests {
    use super::*;

    #[test]
    fn test_buffer_is_full_from_the_first_frame() {
        for motion in motions() {
            let batch = InstancedBatch::new("sample", Primitive::Sphere, Material::glowing(1.0), motion, params(64));
            assert_eq!(batch.len(), 64);
            assert_eq!(batch.instances().len(), 64, "{motion:?}");
            assert!(batch.is_dirty());
        }
    }

    #[test]
    fn test_buffer_length_survives_ticks() {
        for motion in motions() {
            let mut batch = InstancedBatch::new("sample", Primitive::Cube, Material::MATTE, motion, params(37));
            for frame in 0..120 {
                batch.update(frame as f32 / 60.0);
                assert_eq!(batch.instances().len(), 37);
            }
            assert!(batch.instances().iter().all(|i| i.is_finite()), "{motion:?}");
        }
    }

    #[test]
    fn test_empty_batch_stays_empty() {
        let mut batch = InstancedBatch::new("none", Primitive::Cube, Material::MATTE, InstanceMotion::Hover, Vec::new());
        batch.update(5.0);
        assert!(batch.is_empty());
        assert!(batch.instances().is_empty());
    }

    #[test]
    fn test_rise_loops_inside_its_column() {
        let motion = InstanceMotion::Rise { bottom: 1.0, top: 6.0 };
        for p in params(40) {
            for step in 0..50 {
                let y = motion.pose(&p, step as f32 * 0.33).transform.w_axis.y;
                assert!((1.0..=6.0 + 1e-4).contains(&y), "y = {y}");
            }
        }
    }

    #[test]
    fn test_scatter_is_seeded() {
        assert_eq!(params(20), params(20));
    }

    #[test]
    fn test_orbit_keeps_each_radius() {
        let motion = InstanceMotion::Orbit { center: Vec3::new(2.0, 0.0, -3.0) };
        for p in params(10) {
            let at = motion.pose(&p, 4.2).transform.w_axis;
            let flat = glam::Vec2::new(at.x - 2.0, at.z + 3.0).length();
            assert!((flat - p.radius).abs() < 1e-3);
        }
    }
}
