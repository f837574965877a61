//! End-to-end scenarios S1–S6 (spec §8), driven through the library's
//! public `io::bsp_io` parsing/formatting exactly as the `bsp_query`
//! binary does, rather than re-deriving the wire format here.

use trisoup::bsp::Node;
use trisoup::io::bsp_io;

fn run(input: &str) -> String {
    let scene = bsp_io::parse_scene(input).expect("valid scene");
    let tree = Node::build(scene.triangles.clone());
    let mut out = Vec::new();
    bsp_io::run_queries(&tree, &scene, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn s1_single_triangle_direct_hit() {
    let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 3\n2 2 -5 2 2 5\n";
    assert_eq!(run(input), "1 1\n");
}

#[test]
fn s2_single_triangle_miss() {
    let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 3\n20 20 -5 20 20 5\n";
    assert_eq!(run(input), "0 \n");
}

#[test]
fn s3_coplanar_segment_touching_edge() {
    let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 3\n0 0 0 10 0 0\n";
    assert_eq!(run(input), "1 1\n");
}

#[test]
fn s4_two_triangles_one_segment_hitting_both() {
    let input = "6 2 1\n0 0 0\n10 0 0\n0 10 0\n0 0 5\n10 0 5\n0 10 5\n1 2 3\n4 5 6\n2 2 -1 2 2 6\n";
    assert_eq!(run(input), "2 1 2\n");
}

#[test]
fn s5_parallel_coplanar_endpoints_inside() {
    let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 3\n1 1 0 2 2 0\n";
    assert_eq!(run(input), "1 1\n");
}

#[test]
fn s6_degenerate_triangle_is_skipped() {
    let input = "3 1 1\n0 0 0\n1 1 1\n2 2 2\n1 2 3\n0 0 0 5 5 5\n";
    assert_eq!(run(input), "0 \n");
}
