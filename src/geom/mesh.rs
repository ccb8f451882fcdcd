// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! The indexed triangle mesh store: flat vertex/triangle arrays, append-only
//! during splitting, with parent -> children lineage of split triangles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use nalgebra::Point3;

/// A handle to a mesh shared by every BSP node built over it. Single-threaded
/// interior mutability: BSP construction and splitting append to the mesh
/// while multiple nodes hold a reference to it (see the crate's concurrency
/// notes in the design document).
pub type MeshHandle = Rc<RefCell<Mesh>>;

/// An indexed triangle mesh: flat vertex coordinates, flat triangle vertex
/// indices, and the split lineage of each triangle.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<f64>,
    triangles: Vec<usize>,
    children: HashMap<usize, Vec<usize>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `self` in a shared handle for use by the BSP/clip machinery.
    pub fn into_handle(self) -> MeshHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Raw flat vertex length, used by the validator's layout check.
    pub fn raw_vertex_len(&self) -> usize {
        self.vertices.len()
    }

    /// Raw flat triangle-index length, used by the validator's layout check.
    pub fn raw_triangle_len(&self) -> usize {
        self.triangles.len()
    }

    pub fn append_vertex(&mut self, v: Point3<f64>) -> usize {
        let idx = self.vertex_count();
        self.vertices.extend_from_slice(&[v.x, v.y, v.z]);
        idx
    }

    /// Append a triangle. `parent` records the triangle this one was split
    /// from, if any; leaves appended directly (e.g. by `load_mesh`) pass `None`.
    pub fn append_triangle(&mut self, t: [usize; 3], parent: Option<usize>) -> usize {
        let idx = self.triangle_count();
        self.triangles.extend_from_slice(&t);
        if let Some(p) = parent {
            self.children.entry(p).or_default().push(idx);
        }
        idx
    }

    pub fn vertex(&self, i: usize) -> Point3<f64> {
        Point3::new(self.vertices[3 * i], self.vertices[3 * i + 1], self.vertices[3 * i + 2])
    }

    pub fn triangle(&self, iface: usize) -> [usize; 3] {
        [
            self.triangles[3 * iface],
            self.triangles[3 * iface + 1],
            self.triangles[3 * iface + 2],
        ]
    }

    pub fn set_triangle(&mut self, iface: usize, t: [usize; 3]) {
        self.triangles[3 * iface..3 * iface + 3].copy_from_slice(&t);
    }

    /// Reverse a triangle's winding, negating its plane normal.
    pub fn flip(&mut self, iface: usize) {
        self.triangles.swap(3 * iface, 3 * iface + 2);
    }

    /// The direct children created when `iface` was split, if any.
    pub fn children(&self, iface: usize) -> &[usize] {
        self.children.get(&iface).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The transitive closure of `children`.
    pub fn descendants(&self, iface: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.children(iface).to_vec();
        while let Some(c) = stack.pop() {
            out.push(c);
            stack.extend_from_slice(self.children(c));
        }
        out
    }
}

/// Construct an unvalidated mesh from flat vertex and triangle arrays. Call
/// [`crate::validate`] before trusting the result.
pub fn load_mesh(vertices: &[f64], triangles: &[usize]) -> Mesh {
    Mesh {
        vertices: vertices.to_vec(),
        triangles: triangles.to_vec(),
        children: HashMap::new(),
    }
}
