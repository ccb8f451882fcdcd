// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! The CSG core: mesh store, validator, splitter, BSP tree, clipper and
//! Boolean driver (§2 of the design document, components A-H).

mod boolean;
mod bsp;
mod clip;
mod mesh;
mod split;
mod validate;
mod vector;

pub use boolean::{boolean, BooleanOp};
pub use bsp::{BspNode, BspTree};
pub use mesh::{load_mesh, Mesh, MeshHandle};
pub use split::{split, SplitOutcome};
pub use validate::validate;
pub use vector::{Plane, EPS1, EPS2};
