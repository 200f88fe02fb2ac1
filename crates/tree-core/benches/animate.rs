//! Benchmarks for the per-frame animation pass.
//!
//! Run with: `cargo bench -p tree-core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::layout::{self, Category};
use tree_core::{FrameTime, LayoutParams, MorphState, Scene, SceneConfig};

fn bench_scene_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_update");

    for state in [MorphState::Scattered, MorphState::Assembled] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{state:?}")),
            &state,
            |b, &state| {
                let mut scene = Scene::new(&SceneConfig::default().with_seed(7)).unwrap();
                scene.set_state(state);
                let mut elapsed = 0.0;
                b.iter(|| {
                    elapsed += 1.0 / 60.0;
                    scene.update(black_box(FrameTime::fixed(1.0 / 60.0, elapsed)));
                })
            },
        );
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_generate");

    for count in [200usize, 4500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let params = LayoutParams::new(count, 5.0, 15.0, 25.0);
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(layout::generate(&params, Category::Leaf, &mut rng).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scene_update, bench_layout);
criterion_main!(benches);
