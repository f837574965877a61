//! Stdin/stdout encodings for the two CLI drivers (spec §6). Kept
//! separate from the core algorithms so the geometry kernel, BSP tree,
//! and hull builder stay pure functions of in-memory data.

pub mod bsp_io;
pub mod hull_io;
