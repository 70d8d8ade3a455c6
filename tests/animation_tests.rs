use std::f32::consts::TAU;

use glam::Vec3;

use diorama_gallery::animation::{animate, Animation, Wave};
use diorama_gallery::math::Rgb;
use diorama_gallery::placement::place;
use diorama_gallery::scene::Material;

fn assert_close(a: glam::Mat4, b: glam::Mat4) {
    let (a, b) = (a.to_cols_array(), b.to_cols_array());
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() < 1e-3, "element {i}: {} vs {}", a[i], b[i]);
    }
}

/// Every geometric animator at one radian per second
fn unit_speed() -> Vec<Animation> {
    vec![
        Animation::bob(0.5, 1.0, 0.3),
        Animation::sway(Vec3::Z, 0.2, 1.0, 0.0),
        Animation::Spin { axis: Vec3::Y, speed: 1.0 },
        Animation::Orbit { center: Vec3::ZERO, radius: 4.0, speed: 1.0, phase: 0.5, height: 2.0 },
        Animation::Breathe(Wave::new(0.1, 1.0, 0.0)),
        Animation::Swing { pivot: Vec3::new(0.0, 5.0, 0.0), axis: Vec3::X, wave: Wave::new(0.4, 1.0, 0.0) },
        Animation::Revolve { pivot: Vec3::ZERO, axis: Vec3::NEG_Y, speed: 1.0 },
    ]
}

#[cfg(test)]
mod animation_tests {
    use super::*;

    #[test]
    fn test_animate_is_pure_in_time() {
        let placement = place(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE, Rgb::hex(0x3366cc));
        let material = Material::glowing(0.5);
        let animations = unit_speed();

        let first = animate(&placement, &material, &animations, 3.7);
        // evaluating other times in between must not change the answer
        let _ = animate(&placement, &material, &animations, 100.0);
        let second = animate(&placement, &material, &animations, 3.7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unit_speed_animators_repeat_every_turn() {
        let placement = place(Vec3::new(2.0, 0.0, -1.0), Vec3::splat(1.5), Rgb::WHITE);
        let material = Material::MATTE;

        for animation in unit_speed() {
            let a = animate(&placement, &material, &[animation], 1.25);
            let b = animate(&placement, &material, &[animation], 1.25 + TAU);
            assert_close(a.transform, b.transform);
        }
    }

    #[test]
    fn test_no_animations_reproduce_placement() {
        let placement = place(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 1.0, 2.0), Rgb::hex(0xabcdef))
            .with_yaw(0.8);
        let state = animate(&placement, &Material::glowing(0.4), &[], 12.0);

        assert_close(state.transform, placement.matrix());
        assert_eq!(state.color, placement.color);
        assert_eq!(state.emissive, 0.4);
    }

    #[test]
    fn test_orbit_keeps_radius_and_height() {
        let placement = place(Vec3::ZERO, Vec3::ONE, Rgb::WHITE);
        let orbit = Animation::Orbit { center: Vec3::new(1.0, 0.0, 1.0), radius: 3.0, speed: 0.7, phase: 0.0, height: 4.0 };

        for step in 0..20 {
            let state = animate(&placement, &Material::MATTE, &[orbit], step as f32 * 0.37);
            let position = state.transform.w_axis.truncate();
            assert!((position.y - 4.0).abs() < 1e-4);
            let flat = Vec3::new(position.x - 1.0, 0.0, position.z - 1.0);
            assert!((flat.length() - 3.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_color_shift_stays_between_endpoints() {
        let placement = place(Vec3::ZERO, Vec3::ONE, Rgb::BLACK);
        let shift = Animation::ColorShift { to: Rgb::WHITE, speed: 1.3, phase: 0.0 };

        for step in 0..30 {
            let state = animate(&placement, &Material::MATTE, &[shift], step as f32 * 0.21);
            assert!((0.0..=1.0).contains(&state.color.r));
        }
    }
}
