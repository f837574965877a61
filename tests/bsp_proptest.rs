//! Property-based cross-check (spec §8): for random integer-coordinate
//! triangle soups and segments, the BSP tree's query results must match
//! a brute-force oracle that simply tests every segment against every
//! original triangle directly.

use nalgebra::Point3;
use std::collections::BTreeSet;
use proptest::collection::vec as pvec;
use proptest::prelude::*;
use trisoup::bsp::Node;
use trisoup::geometry::predicates::intersect_segment_triangle;
use trisoup::triangle::Triangle;

fn coord() -> impl Strategy<Value = f64> {
    (-20i32..=20i32).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point3<f64>> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn triangle(id: u32) -> impl Strategy<Value = Triangle> {
    (point(), point(), point()).prop_map(move |(a, b, c)| Triangle::new(id, [a, b, c]))
}

fn segment() -> impl Strategy<Value = (Point3<f64>, Point3<f64>)> {
    (point(), point())
}

fn brute_force(triangles: &[Triangle], p0: Point3<f64>, p1: Point3<f64>) -> Vec<u32> {
    let mut ids: Vec<u32> = triangles
        .iter()
        .filter(|tri| intersect_segment_triangle(p0, p1, tri))
        .map(|tri| tri.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn bsp_matches_brute_force_oracle(
        triangle_count in 1usize..20,
        segments in pvec(segment(), 1..10),
        seed in 0u32..u32::MAX,
    ) {
        // Derive triangles deterministically from `triangle_count` and
        // `seed` via a small LCG-style expansion so the strategy stays a
        // single composed closure rather than needing its own generic
        // collection combinator per id.
        let mut state = seed as u64;
        let mut next_coord = || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) % 41) as f64 - 20.0
        };
        let mut triangles = Vec::with_capacity(triangle_count);
        for id in 1..=triangle_count as u32 {
            let a = Point3::new(next_coord(), next_coord(), next_coord());
            let b = Point3::new(next_coord(), next_coord(), next_coord());
            let c = Point3::new(next_coord(), next_coord(), next_coord());
            triangles.push(Triangle::new(id, [a, b, c]));
        }

        let tree = Node::build(triangles.clone());

        for (p0, p1) in segments {
            let mut tree_hits = BTreeSet::new();
            tree.query(p0, p1, &mut tree_hits);
            let tree_ids: Vec<u32> = tree_hits.into_iter().collect();

            let oracle_ids = brute_force(&triangles, p0, p1);
            prop_assert_eq!(tree_ids, oracle_ids);
        }
    }

    #[test]
    fn query_output_ids_are_strictly_ascending_and_unique(
        triangles in pvec(triangle(0), 1..15).prop_map(|tris| {
            tris.into_iter().enumerate().map(|(i, mut t)| { t.id = (i + 1) as u32; t }).collect::<Vec<_>>()
        }),
        (p0, p1) in segment(),
    ) {
        let tree = Node::build(triangles);
        let mut hits = BTreeSet::new();
        tree.query(p0, p1, &mut hits);
        let ids: Vec<u32> = hits.into_iter().collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        prop_assert_eq!(&ids, &deduped);
    }
}
