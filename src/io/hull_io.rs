//! Stdin parsing and stdout formatting for the convex hull program
//! (spec §6), grounded on `original_source/convex.py`'s `read_input`
//! and `write_output`.

use crate::errors::ParseError;
use crate::hull::Face;
use nalgebra::Point3;
use std::io::Write;

/// Parse the hull input grammar: a single integer `n`, then `n` lines
/// of three integer coordinates.
pub fn parse_points(input: &str) -> Result<Vec<Point3<f64>>, ParseError> {
    let mut tokens = input.split_whitespace();

    let mut next_i64 = |tokens: &mut std::str::SplitWhitespace| -> Result<i64, ParseError> {
        let token = tokens.next().ok_or(ParseError::UnexpectedEof { expected: 1 })?;
        token
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger { token: token.to_string() })
    };

    let n = next_i64(&mut tokens)?;
    let n = usize::try_from(n).map_err(|_| ParseError::InvalidInteger { token: n.to_string() })?;

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x = next_i64(&mut tokens)? as f64;
        let y = next_i64(&mut tokens)? as f64;
        let z = next_i64(&mut tokens)? as f64;
        points.push(Point3::new(x, y, z));
    }
    Ok(points)
}

/// Write the hull in spec §6's output format: distinct referenced
/// vertices (ascending by original index, compacted to 0-based), then
/// faces as `v0 v1 v2  n0 n1 n2` with `-1` for an absent neighbour.
pub fn write_hull(
    points: &[Point3<f64>],
    faces: &[Face],
    out: &mut impl Write,
) -> std::io::Result<()> {
    let mut referenced: Vec<usize> = faces.iter().flat_map(|f| f.verts).collect();
    referenced.sort_unstable();
    referenced.dedup();

    let mut vertex_map = hashbrown::HashMap::with_capacity(referenced.len());
    for (new_idx, &old_idx) in referenced.iter().enumerate() {
        vertex_map.insert(old_idx, new_idx);
    }

    writeln!(out, "{}", referenced.len())?;
    for &old_idx in &referenced {
        let p = points[old_idx];
        writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
    }

    writeln!(out, "{}", faces.len())?;
    for face in faces {
        let [v0, v1, v2] = face.verts.map(|v| vertex_map[&v]);
        let n = face.neighbors.map(|n| n.map_or(-1i64, |i| i as i64));
        writeln!(out, "{} {} {}  {} {} {}", v0, v1, v2, n[0], n[1], n[2])?;
    }
    Ok(())
}
