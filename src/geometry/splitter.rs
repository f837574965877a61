//! Triangle splitting against a BSP plane (spec §4.3).
//!
//! This specializes the teacher's general n-gon Sutherland–Hodgman loop
//! (`Plane::split_polygon`, which walks an arbitrary vertex ring) down
//! to the fixed 3-vertex case table the spec gives, since every input
//! here is already a triangle: partition the three vertices into
//! `pos`/`neg`/`cop` buckets by classification and dispatch on their
//! sizes.

use crate::geometry::plane::{COPLANAR, NEGATIVE, POSITIVE, Plane};
use crate::triangle::Triangle;
use nalgebra::Point3;

/// Split `tri` against `plane`. `tri` must already be classified as
/// `CROSSING` (or a straddle involving a coplanar vertex) — callers
/// that pass a triangle entirely on one side, or entirely coplanar,
/// get it back unchanged as a single-element vec (the table's
/// "otherwise" row).
pub fn split_triangle(tri: &Triangle, plane: &Plane) -> Vec<Triangle> {
    let mut pos: Vec<Point3<_>> = Vec::with_capacity(3);
    let mut neg: Vec<Point3<_>> = Vec::with_capacity(3);
    let mut cop: Vec<Point3<_>> = Vec::with_capacity(3);

    for &v in &tri.vertices {
        match plane.classify_point(&v) {
            POSITIVE => pos.push(v),
            NEGATIVE => neg.push(v),
            COPLANAR => cop.push(v),
            _ => unreachable!("classify_point only returns COPLANAR/POSITIVE/NEGATIVE"),
        }
    }

    let id = tri.id;
    match (pos.len(), neg.len(), cop.len()) {
        (1, 2, 0) => {
            let p = pos[0];
            let (n1, n2) = (neg[0], neg[1]);
            let i1 = plane.intersect_edge(p, n1);
            let i2 = plane.intersect_edge(p, n2);
            vec![
                Triangle::new(id, [p, i1, i2]),
                Triangle::new(id, [n1, i1, i2]),
                Triangle::new(id, [n1, i2, n2]),
            ]
        },
        (2, 1, 0) => {
            let n = neg[0];
            let (p1, p2) = (pos[0], pos[1]);
            let i1 = plane.intersect_edge(n, p1);
            let i2 = plane.intersect_edge(n, p2);
            vec![
                Triangle::new(id, [n, i1, i2]),
                Triangle::new(id, [i1, p1, i2]),
                Triangle::new(id, [i1, i2, p2]),
            ]
        },
        (1, 1, 1) => {
            let p = pos[0];
            let n = neg[0];
            let c = cop[0];
            let i = plane.intersect_edge(p, n);
            vec![Triangle::new(id, [p, c, i]), Triangle::new(id, [n, c, i])]
        },
        _ => vec![*tri],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::plane::{CROSSING, Plane};

    fn z_plane() -> Plane {
        Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn splits_one_positive_two_negative() {
        let plane = z_plane();
        let tri = Triangle::new(
            7,
            [
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(1.0, 0.0, -5.0),
                Point3::new(0.0, 1.0, -5.0),
            ],
        );
        assert_eq!(plane.classify_triangle(&tri), CROSSING);
        let parts = split_triangle(&tri, &plane);
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.id == 7));
        // area preserved (up to floating point)
        let total: f64 = parts.iter().map(Triangle::double_area).sum();
        assert!((total - tri.double_area()).abs() < 1e-8);
        // no sub-triangle straddles the plane
        for p in &parts {
            let c = plane.classify_triangle(p);
            assert_ne!(c, CROSSING);
        }
    }

    #[test]
    fn splits_two_positive_one_negative() {
        let plane = z_plane();
        let tri = Triangle::new(
            1,
            [
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(1.0, 0.0, 5.0),
                Point3::new(0.0, 1.0, -5.0),
            ],
        );
        let parts = split_triangle(&tri, &plane);
        assert_eq!(parts.len(), 3);
        let total: f64 = parts.iter().map(Triangle::double_area).sum();
        assert!((total - tri.double_area()).abs() < 1e-8);
    }

    #[test]
    fn splits_with_one_coplanar_vertex() {
        let plane = z_plane();
        let tri = Triangle::new(
            1,
            [
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(1.0, 0.0, -5.0),
                Point3::new(0.5, 0.5, 0.0),
            ],
        );
        let parts = split_triangle(&tri, &plane);
        assert_eq!(parts.len(), 2);
        let total: f64 = parts.iter().map(Triangle::double_area).sum();
        assert!((total - tri.double_area()).abs() < 1e-8);
    }

    #[test]
    fn non_crossing_triangle_is_returned_whole() {
        let plane = z_plane();
        let tri = Triangle::new(
            1,
            [
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(1.0, 0.0, 5.0),
                Point3::new(0.0, 1.0, 5.0),
            ],
        );
        let parts = split_triangle(&tri, &plane);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], tri);
    }
}
