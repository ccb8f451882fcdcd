// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary space partition tree: recursively divides a set of triangles by
//! planes, each node's plane taken from its own first (partitioning) triangle.
//!
//! Nodes live in a flat arena (`Vec<BspNode>`) addressed by index rather than
//! as boxed pointers, so construction can be driven by an explicit work stack
//! instead of native recursion (see the crate's concurrency design notes).

use log::trace;

use super::mesh::MeshHandle;
use super::split::split;
use super::vector::Plane;
use crate::error::MeshError;

/// One node of a BSP tree: the plane of its partitioning triangle, every
/// triangle coplanar to that plane, and the front/back subtrees (by arena index).
pub struct BspNode {
    pub plane: Plane,
    pub coplanar: Vec<usize>,
    pub front: Option<usize>,
    pub back: Option<usize>,
}

/// A BSP tree together with the mesh it was built over.
pub struct BspTree {
    pub mesh: MeshHandle,
    pub nodes: Vec<BspNode>,
    pub root: Option<usize>,
}

/// Where a newly built node's arena index should be recorded once it exists.
enum Slot {
    Root,
    Front(usize),
    Back(usize),
}

impl BspTree {
    /// Build a tree over `triangles` (indices into `mesh`). Uses an explicit
    /// work stack rather than native recursion so stack depth does not grow
    /// with the number of triangles.
    pub fn build(mesh: MeshHandle, triangles: Vec<usize>) -> Result<Self, MeshError> {
        let mut tree = BspTree { mesh: mesh.clone(), nodes: Vec::new(), root: None };
        if triangles.is_empty() {
            return Ok(tree);
        }

        let mut stack: Vec<(Vec<usize>, Slot)> = vec![(triangles, Slot::Root)];

        while let Some((mut tris, slot)) = stack.pop() {
            if tris.is_empty() {
                continue;
            }
            let first = tris.remove(0);
            let plane = {
                let m = mesh.borrow();
                let t = m.triangle(first);
                Plane::from_triangle(&m.vertex(t[0]), &m.vertex(t[1]), &m.vertex(t[2]))
                    .ok_or(MeshError::SplitInternal(first))?
            };
            trace!("bsp node: partitioning triangle {first}, {} remaining", tris.len());

            let mut front_list = Vec::new();
            let mut back_list = Vec::new();
            for t in tris {
                let outcome = split(&mesh, t, &plane)?;
                front_list.extend(outcome.coplanar_front);
                front_list.extend(outcome.front);
                back_list.extend(outcome.coplanar_back);
                back_list.extend(outcome.back);
            }

            let idx = tree.nodes.len();
            tree.nodes.push(BspNode { plane, coplanar: vec![first], front: None, back: None });
            match slot {
                Slot::Root => tree.root = Some(idx),
                Slot::Front(parent) => tree.nodes[parent].front = Some(idx),
                Slot::Back(parent) => tree.nodes[parent].back = Some(idx),
            }

            if !back_list.is_empty() {
                stack.push((back_list, Slot::Back(idx)));
            }
            if !front_list.is_empty() {
                stack.push((front_list, Slot::Front(idx)));
            }
        }

        Ok(tree)
    }

    /// Produce a deep clone of this tree with every triangle's winding
    /// flipped and every front/back pair swapped. Shares the underlying mesh
    /// handle; the Boolean driver discards the pre-invert tree immediately,
    /// so the in-place winding flip on shared storage is safe.
    pub fn invert(&self) -> Self {
        let mut mesh = self.mesh.borrow_mut();
        let nodes: Vec<BspNode> = self
            .nodes
            .iter()
            .map(|n| {
                for &t in &n.coplanar {
                    mesh.flip(t);
                }
                BspNode {
                    plane: n.plane.flipped(),
                    coplanar: n.coplanar.clone(),
                    front: n.back,
                    back: n.front,
                }
            })
            .collect();
        drop(mesh);
        BspTree { mesh: self.mesh.clone(), nodes, root: self.root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::clip::gather;
    use crate::geom::mesh::load_mesh;

    fn tetrahedron() -> MeshHandle {
        load_mesh(
            &[-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3],
        )
        .into_handle()
    }

    #[test]
    fn build_over_empty_list_has_no_root() {
        let mesh = tetrahedron();
        let tree = BspTree::build(mesh, vec![]).unwrap();
        assert!(tree.root.is_none());
    }

    #[test]
    fn build_partitions_all_triangles() {
        let mesh = tetrahedron();
        let tris: Vec<usize> = (0..mesh.borrow().triangle_count()).collect();
        let tree = BspTree::build(mesh, tris).unwrap();
        assert!(tree.root.is_some());
        assert_eq!(gather(&tree).len(), 4);
    }

    #[test]
    fn invert_is_involutive_in_size() {
        let mesh = tetrahedron();
        let tris: Vec<usize> = (0..mesh.borrow().triangle_count()).collect();
        let tree = BspTree::build(mesh, tris).unwrap();
        let inverted = tree.invert();
        let twice = inverted.invert();
        assert_eq!(gather(&tree).len(), gather(&twice).len());
    }
}
