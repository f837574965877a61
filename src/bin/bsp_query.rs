//! CLI driver for the BSP triangle-soup / segment intersection query
//! program (spec §6). Reads the whole scene from stdin, builds one BSP
//! tree, runs every segment against it, and writes results to stdout.
//! No flags, no environment variables, no on-disk state.

use std::io::{self, Read, Write};
use trisoup::bsp::Node;
use trisoup::io::bsp_io;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let scene = bsp_io::parse_scene(&input).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });

    log::info!(
        "parsed scene: {} triangles, {} segments",
        scene.triangles.len(),
        scene.segments.len()
    );

    let tree = Node::build(scene.triangles.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bsp_io::run_queries(&tree, &scene, &mut out)?;
    out.flush()
}
