// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Composes BSP build/clip/invert to realize union, intersection, and
//! difference, then synthesizes a fresh output mesh from the survivors.

use std::collections::HashMap;

use log::info;

use super::bsp::BspTree;
use super::clip::{clip_to, gather};
use super::mesh::Mesh;
use super::validate::validate;
use crate::error::MeshError;

/// Which Boolean combination to realize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
}

/// Validate both operands, then realize `op` over them, returning a fresh
/// output mesh. Neither input mesh is mutated.
pub fn boolean(op: BooleanOp, mesh_a: &Mesh, mesh_b: &Mesh) -> Result<Mesh, MeshError> {
    validate(mesh_a)?;
    validate(mesh_b)?;

    info!(
        "boolean {:?}: a={}v/{}f, b={}v/{}f",
        op,
        mesh_a.vertex_count(),
        mesh_a.triangle_count(),
        mesh_b.vertex_count(),
        mesh_b.triangle_count()
    );

    let handle_a = mesh_a.clone().into_handle();
    let handle_b = mesh_b.clone().into_handle();
    let tris_a: Vec<usize> = (0..mesh_a.triangle_count()).collect();
    let tris_b: Vec<usize> = (0..mesh_b.triangle_count()).collect();

    let mut a = BspTree::build(handle_a.clone(), tris_a)?;
    let mut b = BspTree::build(handle_b.clone(), tris_b)?;

    match op {
        BooleanOp::Union => {
            clip_to(&mut a, &b)?;
            clip_to(&mut b, &a)?;
            b = b.invert();
            clip_to(&mut b, &a)?;
            b = b.invert();
        }
        BooleanOp::Intersection => {
            a = a.invert();
            clip_to(&mut b, &a)?;
            b = b.invert();
            clip_to(&mut a, &b)?;
            clip_to(&mut b, &a)?;
            a = a.invert();
            b = b.invert();
        }
        BooleanOp::Difference => {
            clip_to(&mut a, &b)?;
            b = b.invert();
            clip_to(&mut b, &a)?;
            b = b.invert();
        }
    }

    let survivors_a = gather(&a);
    let survivors_b = gather(&b);
    info!(
        "boolean {:?} result: {} triangles from a, {} from b",
        op,
        survivors_a.len(),
        survivors_b.len()
    );

    Ok(synthesize(&handle_a, &survivors_a, &handle_b, &survivors_b))
}

/// Build a fresh output mesh from the surviving triangles of each operand,
/// remapping vertices into a contiguous array referencing only what survived.
fn synthesize(
    mesh_a: &super::mesh::MeshHandle,
    survivors_a: &[usize],
    mesh_b: &super::mesh::MeshHandle,
    survivors_b: &[usize],
) -> Mesh {
    let mut out = Mesh::new();
    let mut remap_a: HashMap<usize, usize> = HashMap::new();
    let mut remap_b: HashMap<usize, usize> = HashMap::new();

    for &iface in survivors_a {
        let t = mesh_a.borrow().triangle(iface);
        let mapped = t.map(|vi| {
            *remap_a
                .entry(vi)
                .or_insert_with(|| out.append_vertex(mesh_a.borrow().vertex(vi)))
        });
        out.append_triangle(mapped, None);
    }
    for &iface in survivors_b {
        let t = mesh_b.borrow().triangle(iface);
        let mapped = t.map(|vi| {
            *remap_b
                .entry(vi)
                .or_insert_with(|| out.append_vertex(mesh_b.borrow().vertex(vi)))
        });
        out.append_triangle(mapped, None);
    }

    out
}
