//! Benchmarks for vne-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use vne_core::GraphicsApi;
use vne_math::{Mat3, Mat4, Vec3, simd};
use vne_scene::TransformGraph;

fn sample_mat4() -> Mat4 {
    Mat4::translate_xyz(1.0, -2.0, 0.5)
        * Mat4::rotate(0.7, Vec3::new(0.3, 1.0, -0.2))
        * Mat4::scale_xyz(1.5, 0.5, 2.0)
}

/// Benchmark core matrix algebra.
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    let a = sample_mat4();
    let b = Mat4::perspective(1.0, 1.5, 0.1, 100.0);
    let m3 = Mat3::rotate_xyz(0.3, -0.7, 1.1) * Mat3::scale_xyz(2.0, 1.0, 0.5);

    group.bench_function("mat4_mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("mat4_inverse", |bench| {
        bench.iter(|| black_box(a).inverse())
    });

    group.bench_function("mat4_determinant", |bench| {
        bench.iter(|| black_box(a).determinant())
    });

    group.bench_function("mat4_normal_matrix", |bench| {
        bench.iter(|| black_box(a).normal_matrix())
    });

    group.bench_function("mat3_inverse", |bench| {
        bench.iter(|| black_box(m3).inverse())
    });

    group.bench_function("perspective_for_vulkan", |bench| {
        bench.iter(|| {
            Mat4::perspective_for(black_box(1.0), 1.5, 0.1, 100.0, GraphicsApi::Vulkan)
        })
    });

    group.finish();
}

/// Benchmark scalar vs SIMD batch point transforms.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_transform");
    let m = sample_mat4();

    for size in [1000, 10000, 100000].iter() {
        let points: Vec<Vec3> = (0..*size)
            .map(|i| {
                let t = i as f32 / *size as f32;
                Vec3::new(t, 1.0 - t, t * 0.5)
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("scalar_points", size), &points, |b, p| {
            b.iter(|| p.iter().map(|&v| m.transform_point(black_box(v))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("simd_points", size), &points, |b, p| {
            b.iter(|| simd::transform_points(&m, black_box(p)))
        });

        group.bench_with_input(BenchmarkId::new("simd_vectors", size), &points, |b, p| {
            b.iter(|| simd::transform_vectors(&m, black_box(p)))
        });
    }

    group.finish();
}

/// Benchmark subtree refresh over a wide, shallow hierarchy.
fn bench_hierarchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy");

    for fanout in [10, 50, 200].iter() {
        let mut graph = TransformGraph::with_capacity(fanout * fanout + 1);
        let root = graph.create_node_with(sample_mat4());
        for i in 0..*fanout {
            let mid = graph.create_node_with(Mat4::translate_xyz(i as f32, 0.0, 0.0));
            let _ = graph.set_parent(mid, Some(root));
            for j in 0..*fanout {
                let leaf = graph.create_node_with(Mat4::rotate_y(j as f32 * 0.01));
                let _ = graph.set_parent(leaf, Some(mid));
            }
        }

        group.throughput(Throughput::Elements(graph.len() as u64));

        group.bench_function(BenchmarkId::new("update_subtree", fanout), |b| {
            b.iter(|| graph.update_subtree(black_box(root)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_batch, bench_hierarchy);
criterion_main!(benches);
