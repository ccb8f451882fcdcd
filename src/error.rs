// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error taxonomy for mesh validation and the splitting machinery.

use thiserror::Error;

/// Every failure mode the validator or splitter can raise.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("vertex or triangle array length is not a multiple of 3")]
    BadLayout,

    #[error("mesh has unreferenced vertices or a triangle index out of range")]
    LooseVertices,

    #[error("triangle {0} has a zero-length edge")]
    ZeroLengthEdge(usize),

    #[error("triangle {0} is degenerate (zero area)")]
    ZeroAreaTriangle(usize),

    #[error("surface is non-manifold at triangle {0}")]
    NonManifold(usize),

    #[error("surface is not closed: edge ({0}, {1}) has no matching opposite")]
    OpenSurface(usize, usize),

    #[error("Euler characteristic {0} is not an even integer in [2, 100)")]
    EulerViolation(i64),

    #[error("triangle split produced {0} vertices on one side, expected 3 or 4")]
    SplitInternal(usize),
}

/// Failures from the STL codec, kept separate from [`MeshError`] since it is
/// an I/O failure domain rather than a geometric one.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("STL file contains no triangles")]
    Empty,
}
