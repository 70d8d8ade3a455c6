use glam::Vec3;
use rand::SeedableRng;

use diorama_gallery::math::Rgb;
use diorama_gallery::placement::{
    gradient, grid, rainbow_gradient, ring, scale_about, scatter, scatter_disc, spiral, translate, SceneRng,
};

const PALETTE: [Rgb; 3] = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0), Rgb::new(0.0, 0.0, 1.0)];

#[cfg(test)]
mod placement_tests {
    use super::*;

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = SceneRng::seed_from_u64(99);
        let mut b = SceneRng::seed_from_u64(99);
        let first = scatter(&mut a, 50, Vec3::splat(-10.0), Vec3::splat(10.0), 0.5..2.0, &PALETTE);
        let second = scatter(&mut b, 50, Vec3::splat(-10.0), Vec3::splat(10.0), 0.5..2.0, &PALETTE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_layout() {
        let mut a = SceneRng::seed_from_u64(1);
        let mut b = SceneRng::seed_from_u64(2);
        let first = scatter_disc(&mut a, 20, Vec3::ZERO, 1.0, 5.0, 1.0..2.0, &PALETTE);
        let second = scatter_disc(&mut b, 20, Vec3::ZERO, 1.0, 5.0, 1.0..2.0, &PALETTE);
        assert_ne!(first, second);
    }

    #[test]
    fn test_scatter_stays_in_box() {
        let mut rng = SceneRng::seed_from_u64(5);
        let min = Vec3::new(-3.0, 0.0, 2.0);
        let max = Vec3::new(4.0, 1.0, 9.0);
        for p in scatter(&mut rng, 200, min, max, 1.0..1.5, &PALETTE) {
            assert!(p.position.cmpge(min).all() && p.position.cmple(max).all());
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_scatter_disc_stays_in_annulus() {
        let mut rng = SceneRng::seed_from_u64(8);
        let center = Vec3::new(1.0, 2.0, 3.0);
        for p in scatter_disc(&mut rng, 200, center, 2.0, 6.0, 0.5..0.6, &[]) {
            let r = (p.position - center).length();
            assert!((2.0 - 1e-4..=6.0 + 1e-4).contains(&r));
            assert_eq!(p.position.y, center.y);
            assert_eq!(p.color, Rgb::WHITE);
        }
    }

    #[test]
    fn test_ring_faces_centre() {
        for p in ring(Vec3::ZERO, 5.0, 12, Vec3::ONE, |_| Rgb::WHITE) {
            let facing = Vec3::new(p.rotation.y.sin(), 0.0, p.rotation.y.cos());
            let inward = -p.position.normalize();
            assert!(facing.dot(inward) > 0.999);
        }
    }

    #[test]
    fn test_grid_is_centred() {
        let cells = grid(Vec3::new(0.0, 1.0, 0.0), 2.0, 4, 3, Vec3::ONE, |_, _| Rgb::WHITE);
        assert_eq!(cells.len(), 12);
        let sum: Vec3 = cells.iter().map(|p| p.position).sum();
        let mean = sum / cells.len() as f32;
        assert!((mean - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_spiral_climbs() {
        let steps = spiral(Vec3::ZERO, 1.0, 3.0, 2.0, 2.0, 10, Vec3::ONE, rainbow_gradient(20));
        assert_eq!(steps.len(), 20);
        assert!(steps.windows(2).all(|w| w[1].position.y > w[0].position.y));
    }

    #[test]
    fn test_transformers_move_everything() {
        let base = ring(Vec3::ZERO, 2.0, 4, Vec3::ONE, gradient(Rgb::BLACK, Rgb::WHITE, 4));
        let moved = translate(base.clone(), Vec3::Y * 3.0);
        assert!(moved.iter().zip(&base).all(|(m, b)| m.position == b.position + Vec3::Y * 3.0));

        let doubled = scale_about(base.clone(), Vec3::ZERO, 2.0);
        assert!(doubled.iter().all(|p| (p.position.length() - 4.0).abs() < 1e-4 && p.scale == Vec3::splat(2.0)));
    }
}
