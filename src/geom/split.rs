// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle-against-plane splitting: classify a triangle relative to a plane
//! and, when it spans the plane, cut it into front and back fragments.

use super::mesh::MeshHandle;
use super::vector::{lerp, Plane, EPS2};
use crate::error::MeshError;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Result of splitting one triangle against one plane. All fields are index
/// lists: triangle indices for the first four, new vertex indices for the last.
#[derive(Debug, Default)]
pub struct SplitOutcome {
    pub coplanar_front: Vec<usize>,
    pub coplanar_back: Vec<usize>,
    pub front: Vec<usize>,
    pub back: Vec<usize>,
    pub new_cut_verts: Vec<usize>,
}

fn classify(distance: f64) -> u8 {
    if distance < -EPS2 {
        BACK
    } else if distance > EPS2 {
        FRONT
    } else {
        COPLANAR
    }
}

/// Split triangle `iface` of `mesh` against `plane`, appending any new
/// vertices and child triangles to `mesh`. `iface` itself is left untouched;
/// the caller must consume only the returned index lists.
pub fn split(mesh: &MeshHandle, iface: usize, plane: &Plane) -> Result<SplitOutcome, MeshError> {
    let mut out = SplitOutcome::default();

    let tri = mesh.borrow().triangle(iface);
    let verts = [
        mesh.borrow().vertex(tri[0]),
        mesh.borrow().vertex(tri[1]),
        mesh.borrow().vertex(tri[2]),
    ];
    let classes = [
        classify(plane.signed_distance(&verts[0])),
        classify(plane.signed_distance(&verts[1])),
        classify(plane.signed_distance(&verts[2])),
    ];
    let aggregate = classes[0] | classes[1] | classes[2];

    match aggregate {
        COPLANAR => {
            let same_direction = Plane::from_triangle(&verts[0], &verts[1], &verts[2])
                .map(|own| own.normal.dot(&plane.normal) > 0.0)
                .unwrap_or(true);
            if same_direction {
                out.coplanar_front.push(iface);
            } else {
                out.coplanar_back.push(iface);
            }
        }
        FRONT => out.front.push(iface),
        BACK => out.back.push(iface),
        _ => split_spanning(mesh, iface, plane, &tri, &verts, &classes, &mut out)?,
    }

    Ok(out)
}

#[allow(clippy::too_many_arguments)]
fn split_spanning(
    mesh: &MeshHandle,
    iface: usize,
    plane: &Plane,
    tri: &[usize; 3],
    verts: &[nalgebra::Point3<f64>; 3],
    classes: &[u8; 3],
    out: &mut SplitOutcome,
) -> Result<(), MeshError> {
    let mut front_verts = Vec::with_capacity(4);
    let mut back_verts = Vec::with_capacity(4);

    for i in 0..3 {
        let j = (i + 1) % 3;
        let (ti, tj) = (classes[i], classes[j]);
        let (vi, vj) = (tri[i], tri[j]);

        if ti != BACK {
            front_verts.push(vi);
        }
        if ti != FRONT {
            back_verts.push(vi);
        }
        if ti | tj == SPANNING {
            let (pi, pj) = (verts[i], verts[j]);
            let t = (plane.d - plane.normal.dot(&pi.coords)) / plane.normal.dot(&(pj - pi));
            let cut = lerp(&pi, &pj, t);
            let cut_idx = mesh.borrow_mut().append_vertex(cut);
            front_verts.push(cut_idx);
            back_verts.push(cut_idx);
            out.new_cut_verts.push(cut_idx);
        }
    }

    emit_side(mesh, iface, &front_verts, &mut out.front)?;
    emit_side(mesh, iface, &back_verts, &mut out.back)?;
    Ok(())
}

fn emit_side(
    mesh: &MeshHandle,
    parent: usize,
    verts: &[usize],
    target: &mut Vec<usize>,
) -> Result<(), MeshError> {
    match verts.len() {
        3 => {
            let idx = mesh
                .borrow_mut()
                .append_triangle([verts[0], verts[1], verts[2]], Some(parent));
            target.push(idx);
        }
        4 => {
            let t0 = mesh
                .borrow_mut()
                .append_triangle([verts[0], verts[1], verts[2]], Some(parent));
            let t1 = mesh
                .borrow_mut()
                .append_triangle([verts[0], verts[2], verts[3]], Some(parent));
            target.push(t0);
            target.push(t1);
        }
        n => return Err(MeshError::SplitInternal(n)),
    }
    Ok(())
}
