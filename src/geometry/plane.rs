//! Plane construction and point/triangle classification.
//!
//! A `Plane` here is stored as the four raw coefficients of
//! `a*x + b*y + c*z + d = 0`, not as three defining points or a unit
//! normal — this is what lets classification stay a direct evaluation
//! of the plane equation against [`BSP_EPSILON`], matching the spec's
//! fixed-tolerance model (and the original Python source) rather than
//! an exact-predicate orientation test.

use crate::float_types::{BSP_EPSILON, Real};
use crate::triangle::Triangle;
use nalgebra::Point3;

/// Triangle/point lies exactly in the plane (within `BSP_EPSILON`).
pub const COPLANAR: i8 = 0;
/// Triangle/point lies strictly on the side the normal points toward.
pub const POSITIVE: i8 = 1;
/// Triangle/point lies strictly on the side opposite the normal.
pub const NEGATIVE: i8 = 2;
/// A triangle that straddles the plane (some vertices positive, some
/// negative). Equal to `POSITIVE | NEGATIVE`, reusing the same trick
/// the teacher's `FRONT | BACK == SPANNING` bitmask relies on.
pub const CROSSING: i8 = 3;

/// A plane `a*x + b*y + c*z + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
}

impl Plane {
    /// Build the plane through three points, oriented so that `normal =
    /// (p1-p0) x (p2-p0)`. Returns `None` when the three points are
    /// (near-)colinear, i.e. every component of the cross product falls
    /// below `BSP_EPSILON` — a degenerate source triangle.
    pub fn from_points(p0: Point3<Real>, p1: Point3<Real>, p2: Point3<Real>) -> Option<Plane> {
        let v1 = p1 - p0;
        let v2 = p2 - p0;
        let n = v1.cross(&v2);

        if n.x.abs() < BSP_EPSILON && n.y.abs() < BSP_EPSILON && n.z.abs() < BSP_EPSILON {
            return None;
        }

        let d = -n.dot(&p0.coords);
        Some(Plane { a: n.x, b: n.y, c: n.z, d })
    }

    /// Classify a single point against this plane.
    pub fn classify_point(&self, p: &Point3<Real>) -> i8 {
        let value = self.a * p.x + self.b * p.y + self.c * p.z + self.d;
        if value.abs() < BSP_EPSILON {
            COPLANAR
        } else if value > 0.0 {
            POSITIVE
        } else {
            NEGATIVE
        }
    }

    /// Classify a triangle: the bitwise-OR of its vertices' per-point
    /// classifications. All-`COPLANAR` stays `COPLANAR`; a mix of
    /// `POSITIVE`/`NEGATIVE` (with or without coplanar vertices mixed
    /// in) becomes `CROSSING` via `POSITIVE | NEGATIVE`.
    pub fn classify_triangle(&self, tri: &Triangle) -> i8 {
        tri.vertices
            .iter()
            .fold(0i8, |acc, v| acc | self.classify_point(v))
    }

    /// Intersection of edge `p -> q` with this plane, parameterized by
    /// `t = -(a*p.x+b*p.y+c*p.z+d) / denom`. Returns `p` unchanged when
    /// the edge is (near-)parallel to the plane (`|denom| < BSP_EPSILON`)
    /// — a graceful fallback, not an error, per spec §7. Callers only
    /// invoke this on edges already known to straddle the plane, so `t`
    /// is intentionally not clamped to `[0, 1]`.
    pub fn intersect_edge(&self, p: Point3<Real>, q: Point3<Real>) -> Point3<Real> {
        let dir = q - p;
        let denom = self.a * dir.x + self.b * dir.y + self.c * dir.z;
        if denom.abs() < BSP_EPSILON {
            return p;
        }
        let num = -(self.a * p.x + self.b * p.y + self.c * p.z + self.d);
        let t = num / denom;
        p + dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_from_points_rejects_colinear() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(1.0, 1.0, 1.0);
        let p2 = Point3::new(2.0, 2.0, 2.0);
        assert_eq!(Plane::from_points(p0, p1, p2), None);
    }

    #[test]
    fn plane_classifies_points() {
        // z = 0 plane
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        assert_eq!(plane.classify_point(&Point3::new(5.0, 5.0, 0.0)), COPLANAR);
        assert_eq!(
            plane.classify_point(&Point3::new(0.0, 0.0, 1.0)),
            POSITIVE
        );
        assert_eq!(
            plane.classify_point(&Point3::new(0.0, 0.0, -1.0)),
            NEGATIVE
        );
    }

    #[test]
    fn intersect_edge_parallel_returns_p() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        let p = Point3::new(0.0, 0.0, 5.0);
        let q = Point3::new(1.0, 0.0, 5.0);
        assert_eq!(plane.intersect_edge(p, q), p);
    }
}
