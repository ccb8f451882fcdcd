// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL reader/writer. Treated by the core as an opaque serializer of
//! `(vertices, triangles)` tuples; this module never touches BSP/split state.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::debug;
use nalgebra::{Point3, Vector3};

use crate::error::StlError;
use crate::geom::{load_mesh, Mesh, EPS1};

/// Quantized-coordinate key for the vertex spatial hash, replacing the
/// source's O(N^2) coincident-vertex dedup with a hash lookup.
#[derive(Hash, PartialEq, Eq)]
struct PointKey(i64, i64, i64);

impl PointKey {
    fn quantize(p: &Point3<f64>, eps: f64) -> Self {
        let scale = 1.0 / eps;
        Self(
            (p.x * scale).round() as i64,
            (p.y * scale).round() as i64,
            (p.z * scale).round() as i64,
        )
    }
}

/// Merge coincident vertices (within `eps`) of a raw vertex soup, returning
/// the deduplicated points and a remap from original index to deduplicated index.
fn dedup_vertices(raw: &[[f32; 3]], eps: f64) -> (Vec<Point3<f64>>, Vec<usize>) {
    let mut unique = Vec::new();
    let mut seen: HashMap<PointKey, usize> = HashMap::new();
    let mut remap = Vec::with_capacity(raw.len());
    for v in raw {
        let p = Point3::new(v[0] as f64, v[1] as f64, v[2] as f64);
        let key = PointKey::quantize(&p, eps);
        let idx = *seen.entry(key).or_insert_with(|| {
            unique.push(p);
            unique.len() - 1
        });
        remap.push(idx);
    }
    (unique, remap)
}

/// Read an STL file (binary or ASCII) into a [`Mesh`], deduplicating
/// coincident vertices with a spatial hash keyed by coordinates quantized to
/// `EPS1`.
pub fn read_stl<P: AsRef<Path>>(path: P) -> Result<Mesh, StlError> {
    let mut file = File::open(path)?;
    let raw = stl_io::read_stl(&mut file)?;
    if raw.faces.is_empty() {
        return Err(StlError::Empty);
    }

    let (unique, remap) = dedup_vertices(&raw.vertices, EPS1);
    debug!(
        "read_stl: {} raw vertices deduplicated to {}",
        raw.vertices.len(),
        unique.len()
    );

    let mut verts = Vec::with_capacity(unique.len() * 3);
    for p in &unique {
        verts.extend_from_slice(&[p.x, p.y, p.z]);
    }

    let mut tris = Vec::with_capacity(raw.faces.len() * 3);
    for face in &raw.faces {
        for &vi in &face.vertices {
            tris.push(remap[vi]);
        }
    }

    Ok(load_mesh(&verts, &tris))
}

/// Write `mesh` to an STL file, computing a face normal per triangle.
pub fn write_stl<P: AsRef<Path>>(path: P, mesh: &Mesh) -> Result<(), StlError> {
    let mut file = File::create(path)?;
    let triangles: Vec<stl_io::Triangle> = (0..mesh.triangle_count())
        .map(|f| {
            let t = mesh.triangle(f);
            let (a, b, c) = (mesh.vertex(t[0]), mesh.vertex(t[1]), mesh.vertex(t[2]));
            let normal = face_normal(&a, &b, &c);
            stl_io::Triangle {
                normal: [normal.x as f32, normal.y as f32, normal.z as f32],
                vertices: [
                    [a.x as f32, a.y as f32, a.z as f32],
                    [b.x as f32, b.y as f32, b.z as f32],
                    [c.x as f32, c.y as f32, c.z as f32],
                ],
            }
        })
        .collect();
    stl_io::write_stl(&mut file, triangles.iter())?;
    Ok(())
}

fn face_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len > 1e-12 {
        n / len
    } else {
        Vector3::new(0.0, 0.0, 1.0)
    }
}
