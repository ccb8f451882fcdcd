// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh-sanity validator: degeneracy checks, directed-edge adjacency proving
//! manifoldness and orientability, and the Euler characteristic bound.

use std::collections::HashMap;

use log::debug;

use super::mesh::Mesh;
use super::vector::{is_zero, points_eq, EPS1};
use crate::error::MeshError;

/// One entry in the directed-edge adjacency dictionary: the triangle that
/// contributed the edge in this direction (left neighbour) and, once found,
/// the triangle that contributed it in the opposite direction (right neighbour).
struct EdgeEntry {
    right: Option<usize>,
}

/// Validate every invariant of §3/§4.2: layout, loose vertices, degeneracy,
/// manifoldness, orientability, and the Euler characteristic bound, in that
/// order. Returns the first violated invariant.
pub fn validate(mesh: &Mesh) -> Result<(), MeshError> {
    if mesh.raw_vertex_len() % 3 != 0 || mesh.raw_triangle_len() % 3 != 0 {
        return Err(MeshError::BadLayout);
    }

    let v_count = mesh.vertex_count();
    let f_count = mesh.triangle_count();
    debug!("validating mesh: {v_count} vertices, {f_count} triangles");

    check_loose_vertices(mesh, v_count, f_count)?;
    check_degeneracy(mesh, f_count)?;

    let edges = build_edge_adjacency(mesh, f_count)?;
    check_closure(&edges)?;
    check_euler(v_count, edges.len(), f_count)
}

fn check_loose_vertices(mesh: &Mesh, v_count: usize, f_count: usize) -> Result<(), MeshError> {
    let mut referenced = vec![false; v_count];
    for f in 0..f_count {
        for &vi in &mesh.triangle(f) {
            if vi >= v_count {
                return Err(MeshError::LooseVertices);
            }
            referenced[vi] = true;
        }
    }
    if referenced.iter().any(|&r| !r) {
        return Err(MeshError::LooseVertices);
    }
    Ok(())
}

fn check_degeneracy(mesh: &Mesh, f_count: usize) -> Result<(), MeshError> {
    for f in 0..f_count {
        let t = mesh.triangle(f);
        let (a, b, c) = (mesh.vertex(t[0]), mesh.vertex(t[1]), mesh.vertex(t[2]));
        if points_eq(&a, &b, EPS1) || points_eq(&b, &c, EPS1) || points_eq(&c, &a, EPS1) {
            return Err(MeshError::ZeroLengthEdge(f));
        }
        let cross = (b - a).cross(&(c - a));
        if is_zero(&cross, EPS1) {
            return Err(MeshError::ZeroAreaTriangle(f));
        }
    }
    Ok(())
}

/// Build the directed-edge adjacency dictionary, failing fast on the first
/// non-manifold or misoriented edge found.
fn build_edge_adjacency(
    mesh: &Mesh,
    f_count: usize,
) -> Result<HashMap<(usize, usize), EdgeEntry>, MeshError> {
    let mut edges: HashMap<(usize, usize), EdgeEntry> = HashMap::new();
    for f in 0..f_count {
        let t = mesh.triangle(f);
        for i in 0..3 {
            let j = (i + 1) % 3;
            let (vi, vj) = (t[i], t[j]);
            if let Some(entry) = edges.get_mut(&(vj, vi)) {
                if entry.right.is_some() {
                    return Err(MeshError::NonManifold(f));
                }
                entry.right = Some(f);
            } else if edges.contains_key(&(vi, vj)) {
                return Err(MeshError::NonManifold(f));
            } else {
                edges.insert((vi, vj), EdgeEntry { right: None });
            }
        }
    }
    Ok(edges)
}

fn check_closure(edges: &HashMap<(usize, usize), EdgeEntry>) -> Result<(), MeshError> {
    for (&(i, j), entry) in edges {
        if entry.right.is_none() {
            return Err(MeshError::OpenSurface(i, j));
        }
    }
    Ok(())
}

fn check_euler(v_count: usize, e_count: usize, f_count: usize) -> Result<(), MeshError> {
    let chi = v_count as i64 - e_count as i64 + f_count as i64;
    if chi % 2 != 0 || !(2..100).contains(&chi) {
        return Err(MeshError::EulerViolation(chi));
    }
    Ok(())
}
