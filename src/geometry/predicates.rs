//! Point/triangle/segment predicates (spec §4.2).
//!
//! These mirror `original_source/bsp.py`'s `point_in_triangle`,
//! `point_on_segment`, `segments_intersect_2d`, and
//! `intersect_segment_triangle` almost line for line, rewritten against
//! `nalgebra::Point3`/`Vector3` in the teacher's idiom (`.cross(&v)`,
//! `.dot(&v)`) instead of raw tuples.

use crate::float_types::{BSP_EPSILON, Real};
use crate::geometry::plane::Plane;
use crate::triangle::Triangle;
use nalgebra::Point3;

/// Is `p` inside (or on the boundary of) triangle `A, B, C`, treating
/// both as lying in the same plane?
///
/// Computes the triangle's own normal `n = (B-A) x (C-A)` and three
/// sub-normals at `p`; `p` is inside when `n . n_i` is consistently
/// non-negative or consistently non-positive for all three sub-normals.
pub fn point_in_triangle(p: Point3<Real>, a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> bool {
    let n = (b - a).cross(&(c - a));

    let n1 = (b - p).cross(&(c - p));
    let n2 = (c - p).cross(&(a - p));
    let n3 = (a - p).cross(&(b - p));

    let d1 = n.dot(&n1);
    let d2 = n.dot(&n2);
    let d3 = n.dot(&n3);

    (d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0) || (d1 <= 0.0 && d2 <= 0.0 && d3 <= 0.0)
}

/// Is `p` colinear with, and between, `a` and `b`?
pub fn point_on_segment(p: Point3<Real>, a: Point3<Real>, b: Point3<Real>) -> bool {
    let ap = p - a;
    let ab = b - a;
    let cross = ap.cross(&ab);
    if cross.x.abs() > BSP_EPSILON || cross.y.abs() > BSP_EPSILON || cross.z.abs() > BSP_EPSILON {
        return false;
    }
    let pb = p - b;
    ap.dot(&pb) <= BSP_EPSILON
}

fn sign(x: Real) -> i8 {
    if x > BSP_EPSILON {
        1
    } else if x < -BSP_EPSILON {
        -1
    } else {
        0
    }
}

fn cross2(o: (Real, Real), a: (Real, Real), b: (Real, Real)) -> Real {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

fn on_segment_2d(a: (Real, Real), b: (Real, Real), c: (Real, Real)) -> bool {
    c.0 >= a.0.min(b.0) && c.0 <= a.0.max(b.0) && c.1 >= a.1.min(b.1) && c.1 <= a.1.max(b.1)
}

/// Standard CCW-sign segment/segment intersection test in 2D, with a
/// collinear-on-segment fallback for touching/overlapping endpoints.
pub fn segments_intersect_2d(
    s1p1: (Real, Real),
    s1p2: (Real, Real),
    s2p1: (Real, Real),
    s2p2: (Real, Real),
) -> bool {
    let d1 = cross2(s1p1, s1p2, s2p1);
    let d2 = cross2(s1p1, s1p2, s2p2);
    let d3 = cross2(s2p1, s2p2, s1p1);
    let d4 = cross2(s2p1, s2p2, s1p2);

    if sign(d1) * sign(d2) < 0 && sign(d3) * sign(d4) < 0 {
        return true;
    }
    if d1.abs() < BSP_EPSILON && on_segment_2d(s1p1, s1p2, s2p1) {
        return true;
    }
    if d2.abs() < BSP_EPSILON && on_segment_2d(s1p1, s1p2, s2p2) {
        return true;
    }
    if d3.abs() < BSP_EPSILON && on_segment_2d(s2p1, s2p2, s1p1) {
        return true;
    }
    if d4.abs() < BSP_EPSILON && on_segment_2d(s2p1, s2p2, s1p2) {
        return true;
    }
    false
}

/// Project a 3D point onto the coordinate plane orthogonal to `axis`
/// (0 = x, 1 = y, 2 = z), i.e. drop that coordinate.
fn project(p: Point3<Real>, axis: usize) -> (Real, Real) {
    match axis {
        0 => (p.y, p.z),
        1 => (p.x, p.z),
        _ => (p.x, p.y),
    }
}

/// Composite segment-vs-triangle intersection test (spec §4.2).
pub fn intersect_segment_triangle(p0: Point3<Real>, p1: Point3<Real>, tri: &Triangle) -> bool {
    let [a, b, c] = tri.vertices;
    let Some(plane) = Plane::from_points(a, b, c) else {
        return false;
    };

    let dir = p1 - p0;
    let denom = plane.a * dir.x + plane.b * dir.y + plane.c * dir.z;

    if denom.abs() < BSP_EPSILON {
        // Parallel case.
        use crate::geometry::plane::COPLANAR;
        let coplanar0 = plane.classify_point(&p0) == COPLANAR;
        let coplanar1 = plane.classify_point(&p1) == COPLANAR;

        if coplanar0 && point_in_triangle(p0, a, b, c) {
            return true;
        }
        if coplanar1 && point_in_triangle(p1, a, b, c) {
            return true;
        }
        for &q in &[a, b, c] {
            if point_on_segment(q, p0, p1) {
                return true;
            }
        }

        if coplanar0 && coplanar1 {
            let abs_normal = [plane.a.abs(), plane.b.abs(), plane.c.abs()];
            let axis = if abs_normal[0] >= abs_normal[1] && abs_normal[0] >= abs_normal[2] {
                0
            } else if abs_normal[1] >= abs_normal[2] {
                1
            } else {
                2
            };

            let seg_proj = [project(p0, axis), project(p1, axis)];
            let tri_proj = [project(a, axis), project(b, axis), project(c, axis)];
            let edges = [
                (tri_proj[0], tri_proj[1]),
                (tri_proj[1], tri_proj[2]),
                (tri_proj[2], tri_proj[0]),
            ];
            for (e0, e1) in edges {
                if segments_intersect_2d(seg_proj[0], seg_proj[1], e0, e1) {
                    return true;
                }
            }
        }

        return false;
    }

    let t = -(plane.a * p0.x + plane.b * p0.y + plane.c * p0.z + plane.d) / denom;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    let hit = p0 + dir * t;
    point_in_triangle(hit, a, b, c)
}
