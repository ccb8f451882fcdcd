// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vector and plane primitives shared by the splitter, BSP builder and clipper.

use nalgebra::{Point3, Vector3};

/// Tolerance for vector equality and zero-tests.
pub const EPS1: f64 = 1e-7;

/// Tolerance for point-vs-plane classification. Larger than [`EPS1`] because
/// classification must stay robust to drift accumulated across repeated splits.
pub const EPS2: f64 = 1e-5;

/// True if every component of `v` has absolute value below `eps`.
pub fn is_zero(v: &Vector3<f64>, eps: f64) -> bool {
    v.x.abs() < eps && v.y.abs() < eps && v.z.abs() < eps
}

/// Componentwise tolerant equality between two points.
pub fn points_eq(a: &Point3<f64>, b: &Point3<f64>, eps: f64) -> bool {
    is_zero(&(b - a), eps)
}

/// Linear interpolation between two points: `a + (b - a) * t`.
pub fn lerp(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords + (b - a) * t)
}

/// An oriented plane represented implicitly as `{p : n . p = d}`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub d: f64,
}

impl Plane {
    /// Derive the plane of an oriented triangle `(a, b, c)`. Returns `None` if
    /// the triangle is degenerate under [`EPS1`].
    pub fn from_triangle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Option<Self> {
        let cross = (b - a).cross(&(c - a));
        if is_zero(&cross, EPS1) {
            return None;
        }
        let normal = cross.normalize();
        let d = normal.dot(&a.coords);
        Some(Self { normal, d })
    }

    /// Signed distance of `p` from this plane: positive on the front side.
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        self.normal.dot(&p.coords) - self.d
    }

    /// The plane with the opposite orientation.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
        }
    }
}
