use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::SeedableRng;

use diorama_gallery::instancing::{InstanceMotion, InstanceParams, InstancedBatch, ParamRanges};
use diorama_gallery::math::Rgb;
use diorama_gallery::mesh::Primitive;
use diorama_gallery::placement::SceneRng;
use diorama_gallery::scene::Material;
use diorama_gallery::CATALOG;

fn batch(count: usize, motion: InstanceMotion) -> InstancedBatch {
    let mut rng = SceneRng::seed_from_u64(7);
    let params = InstanceParams::scatter(
        &mut rng,
        count,
        &ParamRanges::in_box(Vec3::splat(-20.0), Vec3::splat(20.0))
            .scale(0.1..0.5)
            .speed(0.5..2.0)
            .radius(2.0..15.0)
            .amplitude(0.1..1.0),
        &[Rgb::WHITE],
    );
    InstancedBatch::new("bench", Primitive::Sphere, Material::glowing(1.0), motion, params)
}

/// Benchmark: rebuilding one batch buffer per frame at several sizes
fn bench_batch_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_update");

    for count in [100, 1_000, 10_000] {
        for (name, motion) in [
            ("fall", InstanceMotion::Fall { top: 20.0, bottom: 0.0 }),
            ("orbit", InstanceMotion::Orbit { center: Vec3::ZERO }),
            ("swell", InstanceMotion::Swell { wavelength: 8.0 }),
        ] {
            let mut b = batch(count, motion);
            let mut t = 0.0f32;
            group.bench_with_input(BenchmarkId::new(name, count), &count, |bench, _| {
                bench.iter(|| {
                    t += 1.0 / 60.0;
                    b.update(black_box(t));
                    black_box(b.instances().len())
                })
            });
        }
    }

    group.finish();
}

/// Benchmark: one full frame of animation for every catalogue scene
fn bench_scene_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_tick");

    for entry in CATALOG {
        let mut content = entry.instantiate(0x5eed);
        let mut t = 0.0f32;
        group.bench_function(entry.name, |bench| {
            bench.iter(|| {
                t += 1.0 / 60.0;
                content.tick(black_box(t));
            })
        });
    }

    group.finish();
}

/// Benchmark: building a scene from scratch, as happens on every switch
fn bench_scene_mount(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_mount");
    for entry in CATALOG.iter().take(4) {
        group.bench_function(entry.name, |bench| bench.iter(|| black_box(entry.instantiate(black_box(1)))));
    }
    group.finish();
}

criterion_group!(benches, bench_batch_update, bench_scene_tick, bench_scene_mount);
criterion_main!(benches);
