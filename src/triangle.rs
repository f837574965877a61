//! The `Triangle` record: a 1-based input id plus three vertices.
//!
//! Splitting a triangle against a BSP plane produces several
//! sub-triangle records that all carry the *same* `id` — the id is what
//! gets reported to a query's caller, not any particular sub-triangle's
//! geometry (spec §3). Collapsing the teacher's `Polygon<S>` generic
//! metadata slot to a concrete `id: u32` field reflects that every
//! triangle in this domain always carries exactly this one payload.

use crate::float_types::Real;
use nalgebra::Point3;

/// A triangle (or sub-triangle fragment) bearing its originating input
/// triangle's 1-based id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub id: u32,
    pub vertices: [Point3<Real>; 3],
}

impl Triangle {
    pub const fn new(id: u32, vertices: [Point3<Real>; 3]) -> Self {
        Triangle { id, vertices }
    }

    /// Signed area times two (the magnitude of `(v1-v0) x (v2-v0)`),
    /// used by splitter tests to confirm area is preserved across a
    /// split (spec §8 invariant 5).
    pub fn double_area(&self) -> Real {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a)).norm()
    }
}
