// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end scenarios over the public API: load, validate, combine.

use csgkernel::{boolean, load_mesh, validate, BooleanOp, Mesh, MeshError};

fn tetrahedron() -> Mesh {
    load_mesh(
        &[-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3],
    )
}

fn offset_tetrahedron(dx: f64) -> Mesh {
    load_mesh(
        &[
            -1.0 + dx, -1.0, 0.0,
            1.0 + dx, -1.0, 0.0,
            0.0 + dx, 1.0, 0.0,
            0.0 + dx, 0.0, 1.0,
        ],
        &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3],
    )
}

fn unit_cube(center: [f64; 3]) -> Mesh {
    let (cx, cy, cz) = (center[0], center[1], center[2]);
    let h = 0.5;
    let verts = vec![
        cx - h, cy - h, cz - h,
        cx + h, cy - h, cz - h,
        cx + h, cy + h, cz - h,
        cx - h, cy + h, cz - h,
        cx - h, cy - h, cz + h,
        cx + h, cy - h, cz + h,
        cx + h, cy + h, cz + h,
        cx - h, cy + h, cz + h,
    ];
    let tris = vec![
        0, 2, 1, 0, 3, 2,
        4, 5, 6, 4, 6, 7,
        0, 1, 5, 0, 5, 4,
        1, 2, 6, 1, 6, 5,
        2, 3, 7, 2, 7, 6,
        3, 0, 4, 3, 4, 7,
    ];
    load_mesh(&verts, &tris)
}

#[test]
fn tetrahedron_is_a_valid_closed_manifold() {
    assert!(validate(&tetrahedron()).is_ok());
}

#[test]
fn loose_vertex_is_rejected() {
    let mut verts = vec![-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    verts.extend_from_slice(&[5.0, 5.0, 5.0]);
    let mesh = load_mesh(&verts, &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3]);
    assert_eq!(validate(&mesh), Err(MeshError::LooseVertices));
}

#[test]
fn zero_area_triangle_is_rejected() {
    let mesh = load_mesh(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0], &[0, 1, 2]);
    assert!(matches!(validate(&mesh), Err(MeshError::ZeroAreaTriangle(_))));
}

#[test]
fn union_of_touching_tetrahedra_is_closed() {
    let a = tetrahedron();
    let b = offset_tetrahedron(1.5);
    let out = boolean(BooleanOp::Union, &a, &b).unwrap();
    assert!(validate(&out).is_ok());
}

#[test]
fn intersection_of_offset_cubes_is_closed_and_bounded() {
    let a = unit_cube([0.0, 0.0, 0.0]);
    let b = unit_cube([0.4, 0.0, 0.0]);
    let out = boolean(BooleanOp::Intersection, &a, &b).unwrap();
    assert!(validate(&out).is_ok());
    for i in 0..out.vertex_count() {
        let v = out.vertex(i);
        assert!(v.x >= -0.1 - 1e-6 && v.x <= 0.6 + 1e-6);
    }
}

#[test]
fn difference_of_offset_cubes_is_closed() {
    let a = unit_cube([0.0, 0.0, 0.0]);
    let b = unit_cube([0.4, 0.0, 0.0]);
    let out = boolean(BooleanOp::Difference, &a, &b).unwrap();
    assert!(validate(&out).is_ok());
}

#[test]
fn invalid_operand_is_rejected_before_combining() {
    let bad = load_mesh(&[0.0, 0.0], &[0, 1, 2]);
    let good = tetrahedron();
    assert!(boolean(BooleanOp::Union, &bad, &good).is_err());
}
