// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks for the Boolean CSG driver.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csgkernel::{boolean, load_mesh, BooleanOp, Mesh};

fn tetrahedron() -> Mesh {
    load_mesh(
        &[-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3],
    )
}

fn unit_cube(center: [f64; 3]) -> Mesh {
    let (cx, cy, cz) = (center[0], center[1], center[2]);
    let h = 0.5;
    let verts = vec![
        cx - h, cy - h, cz - h, // 0
        cx + h, cy - h, cz - h, // 1
        cx + h, cy + h, cz - h, // 2
        cx - h, cy + h, cz - h, // 3
        cx - h, cy - h, cz + h, // 4
        cx + h, cy - h, cz + h, // 5
        cx + h, cy + h, cz + h, // 6
        cx - h, cy + h, cz + h, // 7
    ];
    let tris = vec![
        0, 2, 1, 0, 3, 2, // bottom (z-)
        4, 5, 6, 4, 6, 7, // top (z+)
        0, 1, 5, 0, 5, 4, // front (y-)
        1, 2, 6, 1, 6, 5, // right (x+)
        2, 3, 7, 2, 7, 6, // back (y+)
        3, 0, 4, 3, 4, 7, // left (x-)
    ];
    load_mesh(&verts, &tris)
}

fn bench_boolean(c: &mut Criterion) {
    let mut group = c.benchmark_group("boolean");

    let a = tetrahedron();
    let b = tetrahedron();
    group.bench_with_input(
        BenchmarkId::new("union", "tetrahedra"),
        &(a.clone(), b.clone()),
        |bencher, (a, b)| {
            bencher.iter(|| boolean(black_box(BooleanOp::Union), black_box(a), black_box(b)).unwrap());
        },
    );

    let cube_a = unit_cube([0.0, 0.0, 0.0]);
    let cube_b = unit_cube([0.4, 0.0, 0.0]);
    group.bench_with_input(
        BenchmarkId::new("union", "offset_cubes"),
        &(cube_a.clone(), cube_b.clone()),
        |bencher, (a, b)| {
            bencher.iter(|| boolean(black_box(BooleanOp::Union), black_box(a), black_box(b)).unwrap());
        },
    );
    group.bench_with_input(
        BenchmarkId::new("intersection", "offset_cubes"),
        &(cube_a.clone(), cube_b.clone()),
        |bencher, (a, b)| {
            bencher.iter(|| {
                boolean(black_box(BooleanOp::Intersection), black_box(a), black_box(b)).unwrap()
            });
        },
    );
    group.bench_with_input(
        BenchmarkId::new("difference", "offset_cubes"),
        &(cube_a, cube_b),
        |bencher, (a, b)| {
            bencher.iter(|| {
                boolean(black_box(BooleanOp::Difference), black_box(a), black_box(b)).unwrap()
            });
        },
    );

    group.finish();
}

criterion_group!(benches, bench_boolean);
criterion_main!(benches);
