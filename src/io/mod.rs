// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module: the STL codec, the sole external collaborator of the core.

mod stl;

pub use stl::{read_stl, write_stl};
