//! Stdin parsing and stdout formatting for the BSP query program
//! (spec §6).
//!
//! The teacher has no analogous stdin/stdout CLI layer (`main.rs` there
//! writes STL files from hard-coded shapes); this is grounded on
//! `original_source/bsp.py`'s `main()`, which tokenizes the whole input
//! stream up front rather than parsing line by line, reporting the
//! first missing or malformed token as a collaborator-contract failure
//! (spec §7) rather than trying to recover from it.

use crate::bsp::Node;
use crate::errors::ParseError;
use crate::triangle::Triangle;
use nalgebra::Point3;
use std::io::Write;

/// A parsed scene: the triangle soup plus the query segments to run
/// against it.
pub struct Scene {
    pub triangles: Vec<Triangle>,
    pub segments: Vec<(Point3<f64>, Point3<f64>)>,
}

/// Thin wrapper over `str::split_whitespace` that turns "ran out
/// early" and "not an integer" into `ParseError`.
struct TokenStream<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenStream<'a> {
    fn new(input: &'a str) -> Self {
        TokenStream { tokens: input.split_whitespace() }
    }

    fn next_i64(&mut self) -> Result<i64, ParseError> {
        let token = self.tokens.next().ok_or(ParseError::UnexpectedEof { expected: 1 })?;
        token
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger { token: token.to_string() })
    }

    fn next_usize(&mut self) -> Result<usize, ParseError> {
        let v = self.next_i64()?;
        usize::try_from(v).map_err(|_| ParseError::InvalidInteger { token: v.to_string() })
    }
}

/// Parse a full scene from `input` (spec §6's BSP input grammar:
/// header `N T L`, then `N` point lines, `T` triangle-index lines,
/// `L` segment lines).
pub fn parse_scene(input: &str) -> Result<Scene, ParseError> {
    let mut tokens = TokenStream::new(input);

    let n = tokens.next_usize()?;
    let t = tokens.next_usize()?;
    let l = tokens.next_usize()?;

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x = tokens.next_i64()? as f64;
        let y = tokens.next_i64()? as f64;
        let z = tokens.next_i64()? as f64;
        points.push(Point3::new(x, y, z));
    }

    let mut triangles = Vec::with_capacity(t);
    for tri_idx in 0..t {
        let i = tokens.next_i64()?;
        let j = tokens.next_i64()?;
        let k = tokens.next_i64()?;
        let lookup = |idx: i64| -> Result<Point3<f64>, ParseError> {
            if idx < 1 || (idx as usize) > n {
                return Err(ParseError::PointIndexOutOfRange { index: idx, point_count: n });
            }
            Ok(points[idx as usize - 1])
        };
        let vertices = [lookup(i)?, lookup(j)?, lookup(k)?];
        triangles.push(Triangle::new((tri_idx + 1) as u32, vertices));
    }

    let mut segments = Vec::with_capacity(l);
    for _ in 0..l {
        let x0 = tokens.next_i64()? as f64;
        let y0 = tokens.next_i64()? as f64;
        let z0 = tokens.next_i64()? as f64;
        let x1 = tokens.next_i64()? as f64;
        let y1 = tokens.next_i64()? as f64;
        let z1 = tokens.next_i64()? as f64;
        segments.push((Point3::new(x0, y0, z0), Point3::new(x1, y1, z1)));
    }

    Ok(Scene { triangles, segments })
}

/// Run every segment of `scene` against `tree` and write one result
/// line per segment, in input order, formatted per spec §6: the hit
/// count, a space, then ascending ids space-separated (a bare `"0 "`
/// when nothing is hit).
pub fn run_queries(tree: &Node, scene: &Scene, out: &mut impl Write) -> std::io::Result<()> {
    for &(p0, p1) in &scene.segments {
        let mut hits = std::collections::BTreeSet::new();
        tree.query(p0, p1, &mut hits);

        write!(out, "{} ", hits.len())?;
        for (i, id) in hits.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{id}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::Node;

    #[test]
    fn parses_s1_header_and_round_trips_query() {
        let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 3\n2 2 -5 2 2 5\n";
        let scene = parse_scene(input).unwrap();
        assert_eq!(scene.triangles.len(), 1);
        assert_eq!(scene.segments.len(), 1);

        let tree = Node::build(scene.triangles.clone());
        let mut out = Vec::new();
        run_queries(&tree, &scene, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 1\n");
    }

    #[test]
    fn s2_miss_formats_as_zero_with_trailing_space() {
        let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 3\n20 20 -5 20 20 5\n";
        let scene = parse_scene(input).unwrap();
        let tree = Node::build(scene.triangles.clone());
        let mut out = Vec::new();
        run_queries(&tree, &scene, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 \n");
    }

    #[test]
    fn truncated_input_reports_unexpected_eof() {
        let input = "3 1 1\n0 0 0\n";
        assert!(matches!(parse_scene(input), Err(ParseError::UnexpectedEof { .. })));
    }

    #[test]
    fn non_integer_token_is_rejected() {
        let input = "3 1 1\n0 0 0\n10 0 0\nx 10 0\n";
        assert!(matches!(parse_scene(input), Err(ParseError::InvalidInteger { .. })));
    }

    #[test]
    fn out_of_range_point_index_is_rejected() {
        let input = "3 1 1\n0 0 0\n10 0 0\n0 10 0\n1 2 9\n0 0 0 0 0 1\n";
        assert!(matches!(
            parse_scene(input),
            Err(ParseError::PointIndexOutOfRange { index: 9, point_count: 3 })
        ));
    }
}
