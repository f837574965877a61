//! Binary space partition tree over a triangle soup (spec §4.4–§4.5).
//!
//! Structurally this mirrors the teacher's `mesh::bsp::Node`: an
//! `Option<Plane>` splitter, owned `Option<Box<Node>>` children, and a
//! bucket of triangles coplanar with this node's own plane. The build
//! and traversal strategies themselves diverge from the teacher, which
//! chooses its splitting plane by a sampled cost heuristic
//! (`pick_best_splitting_plane`, balancing span count against subtree
//! balance). The spec is explicit that pivot choice here is "the
//! simplest possible" — always the first non-degenerate triangle of the
//! subset — so `build` below has no heuristic at all.

use crate::float_types::Real;
use crate::geometry::plane::{COPLANAR, CROSSING, NEGATIVE, POSITIVE, Plane};
use crate::geometry::splitter::split_triangle;
use crate::triangle::Triangle;
use nalgebra::Point3;
use std::collections::BTreeSet;

/// A node of the BSP tree. A leaf is a node with no plane and no
/// children — everything routed to it lives in `coplanar` (which, for a
/// leaf produced by `build`, is always empty: a subset with no usable
/// pivot has every one of its triangles discarded, per spec §4.4).
pub struct Node {
    plane: Option<Plane>,
    coplanar: Vec<Triangle>,
    positive: Option<Box<Node>>,
    negative: Option<Box<Node>>,
}

impl Node {
    /// Build a BSP tree over `triangles` (spec §4.4).
    ///
    /// Pivot selection: scan the subset in order for the first triangle
    /// whose own three points are not (near-)colinear (i.e.
    /// `Plane::from_points` succeeds). That triangle's plane becomes
    /// this node's splitter. Every degenerate triangle encountered while
    /// scanning for a pivot is discarded outright — never stored in any
    /// node — exactly as `original_source/bsp.py:build_bsp` drops the
    /// head of its list and recurses on the tail when the head is
    /// degenerate. A degenerate triangle has no plane of its own, so
    /// there is no sound classification of it against the eventual
    /// pivot's plane; filing it into that node's `coplanar` bucket
    /// regardless (as an earlier version of this function did) would
    /// violate the tree invariant that every triangle there is actually
    /// `COPLANAR` w.r.t. the node's plane. If no triangle in the subset
    /// is usable as a pivot, the whole subset is discarded and the
    /// result is an empty leaf.
    pub fn build(triangles: Vec<Triangle>) -> Node {
        if triangles.is_empty() {
            return Node { plane: None, coplanar: Vec::new(), positive: None, negative: None };
        }

        let mut discarded = 0usize;
        let mut rest = triangles.into_iter();
        let mut pivot_plane = None;
        let mut pivot_tri = None;

        for tri in &mut rest {
            let [a, b, c] = tri.vertices;
            if let Some(plane) = Plane::from_points(a, b, c) {
                pivot_plane = Some(plane);
                pivot_tri = Some(tri);
                break;
            }
            discarded += 1;
        }

        let Some(plane) = pivot_plane else {
            // every triangle in this subset is degenerate; all discarded
            log::trace!("subset of {discarded} triangle(s) is entirely degenerate; discarded, empty leaf");
            return Node { plane: None, coplanar: Vec::new(), positive: None, negative: None };
        };
        let pivot = pivot_tri.unwrap();

        if discarded > 0 {
            log::trace!("discarded {discarded} degenerate triangle(s) before picking a pivot");
        }

        let mut coplanar = Vec::new();
        coplanar.push(pivot);
        let mut positive_tris = Vec::new();
        let mut negative_tris = Vec::new();

        for tri in rest {
            match plane.classify_triangle(&tri) {
                COPLANAR => coplanar.push(tri),
                POSITIVE => positive_tris.push(tri),
                NEGATIVE => negative_tris.push(tri),
                CROSSING => {
                    for part in split_triangle(&tri, &plane) {
                        match plane.classify_triangle(&part) {
                            COPLANAR => coplanar.push(part),
                            POSITIVE => positive_tris.push(part),
                            NEGATIVE => negative_tris.push(part),
                            _ => {
                                // A split sub-triangle should never still
                                // straddle its own splitting plane; treat
                                // it as coplanar rather than recursing
                                // forever if floating point noise puts it
                                // here anyway.
                                coplanar.push(part);
                            },
                        }
                    }
                },
                _ => unreachable!(),
            }
        }

        log::debug!(
            "node plane picked from triangle id {}: {} coplanar, {} positive, {} negative",
            pivot.id,
            coplanar.len(),
            positive_tris.len(),
            negative_tris.len(),
        );

        let positive = if positive_tris.is_empty() { None } else { Some(Box::new(Node::build(positive_tris))) };
        let negative = if negative_tris.is_empty() { None } else { Some(Box::new(Node::build(negative_tris))) };

        Node { plane: Some(plane), coplanar, positive, negative }
    }

    /// Does segment `p0 -> p1` intersect any triangle stored at or below
    /// this node? Results (by originating triangle id) are accumulated
    /// into `hits`, a `BTreeSet` so the caller gets sorted-ascending,
    /// deduplicated ids for free at emission time (spec §4.5/§8
    /// "ordering" and "uniqueness" invariants) without a separate sort
    /// pass over a plain `Vec` or hash-based set.
    ///
    /// Traversal (spec §4.5): at an internal node, the coplanar bucket
    /// is always tested directly against the segment (regardless of
    /// which side the segment's endpoints fall on — a coplanar triangle
    /// has no "side" of its own plane to route through). Then the
    /// segment's two endpoints are classified against this node's
    /// plane to decide which child subtree(s) to recurse into:
    /// both endpoints positive -> positive child only; both negative ->
    /// negative child only; otherwise (straddling, or either endpoint
    /// exactly on the plane) -> both children. Endpoints exactly on the
    /// plane favor the positive side in addition to always also
    /// visiting the negative side, matching the coplanar-endpoint
    /// tie-break the traversal gives no other special casing.
    pub fn query(&self, p0: Point3<Real>, p1: Point3<Real>, hits: &mut BTreeSet<u32>) {
        use crate::geometry::predicates::intersect_segment_triangle;

        for tri in &self.coplanar {
            if intersect_segment_triangle(p0, p1, tri) {
                hits.insert(tri.id);
            }
        }

        let Some(plane) = &self.plane else { return };

        let c0 = plane.classify_point(&p0);
        let c1 = plane.classify_point(&p1);

        let in_pos_or_cop = |c: i8| c == POSITIVE || c == COPLANAR;
        let in_neg_or_cop = |c: i8| c == NEGATIVE || c == COPLANAR;

        // Precedence matters: both-COPLANAR matches the first arm and is
        // a deliberate tie-break toward the positive side (spec §4.5's
        // "Note on the overlap"), not an ambiguous case to be resolved
        // by visiting both children.
        let (go_positive, go_negative) = if in_pos_or_cop(c0) && in_pos_or_cop(c1) {
            (true, false)
        } else if in_neg_or_cop(c0) && in_neg_or_cop(c1) {
            (false, true)
        } else {
            (true, true)
        };

        if go_positive {
            if let Some(node) = &self.positive {
                node.query(p0, p1, hits);
            }
        }
        if go_negative {
            if let Some(node) = &self.negative {
                node.query(p0, p1, hits);
            }
        }
    }

    /// Collect every triangle stored anywhere in the tree, via an
    /// explicit stack rather than recursion — mirroring the teacher's
    /// `all_polygons`, which flattens the tree iteratively for exactly
    /// this reason (an unbalanced, very deep tree must not blow the
    /// call stack on a read-only walk).
    #[cfg(test)]
    pub fn all_triangles(&self) -> Vec<Triangle> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = vec![self];
        while let Some(node) = stack.pop() {
            out.extend_from_slice(&node.coplanar);
            if let Some(n) = &node.positive {
                stack.push(n);
            }
            if let Some(n) = &node.negative {
                stack.push(n);
            }
        }
        out
    }
}
