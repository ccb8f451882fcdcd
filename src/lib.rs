// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! A Boolean CSG kernel for closed, orientable triangle meshes.
//!
//! The core (mesh store, validator, splitting-plane/BSP machinery, clipper
//! and Boolean driver) lives in [`geom`]. STL serialization is handled by
//! [`io`] and communicates with the core only through [`geom::Mesh`].

pub mod error;
pub mod geom;
pub mod io;

pub use error::{MeshError, StlError};
pub use geom::{boolean, load_mesh, validate, BooleanOp, Mesh};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_validate_boolean_round_trip() {
        let tetrahedron = load_mesh(
            &[-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            &[2, 1, 0, 0, 1, 3, 1, 2, 3, 2, 0, 3],
        );
        assert!(validate(&tetrahedron).is_ok());

        let result = boolean(BooleanOp::Union, &tetrahedron, &tetrahedron).unwrap();
        assert!(validate(&result).is_ok());
    }
}
