use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use std::hint::black_box;

use posecloud_3d::{
    io::{
        ply::{write_ply_to, PlyEncoding},
        poses::PoseRecord,
    },
    pose,
};

fn make_poses(num_poses: usize) -> Vec<PoseRecord> {
    (0..num_poses)
        .map(|i| {
            let (s, c) = (i as f64 * 0.01).sin_cos();
            PoseRecord {
                timestamp: i as f64,
                file_prefix: format!("{i:06}"),
                translation: [i as f64, 1.0, -2.0],
                rotation: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
            }
        })
        .collect()
}

fn bench_camera_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_vertices_from_poses");

    for num_poses in [1000, 10000, 100000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_poses as u64));
        let poses = make_poses(*num_poses);

        group.bench_with_input(
            BenchmarkId::new("camera_vertices_from_poses", num_poses),
            &poses,
            |b, poses| {
                b.iter(|| black_box(pose::camera_vertices_from_poses(poses)));
            },
        );
    }
}

fn bench_write_ply(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_ply");

    let vertices = pose::camera_vertices_from_poses(&make_poses(10000));
    let mut buffer = Vec::with_capacity(1 << 20);

    for encoding in [PlyEncoding::Ascii, PlyEncoding::BinaryLittleEndian] {
        group.bench_function(BenchmarkId::new("write_ply", encoding.as_str()), |b| {
            b.iter(|| {
                buffer.clear();
                write_ply_to(&mut buffer, &vertices, encoding).unwrap();
                black_box(buffer.len());
            });
        });
    }
}

criterion_group!(benches, bench_camera_vertices, bench_write_ply);
criterion_main!(benches);
