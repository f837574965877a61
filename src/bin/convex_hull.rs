//! CLI driver for the incremental convex hull program (spec §6). Reads
//! a point list from stdin, computes the hull, and writes the compacted
//! vertex/face listing to stdout.

use std::io::{self, Read, Write};
use trisoup::hull;
use trisoup::io::hull_io;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let points = hull_io::parse_points(&input).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });

    log::info!("parsed {} points", points.len());

    let faces = hull::compute(&points);
    log::info!("hull has {} faces", faces.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    hull_io::write_hull(&points, &faces, &mut out)?;
    out.flush()
}
