//! BSP-accelerated line-segment vs. triangle-soup intersection queries,
//! plus an incremental 3D convex hull builder.
//!
//! The two subsystems share only the scalar type and tolerances
//! ([`float_types`]) and the geometry kernel's point/plane primitives;
//! otherwise they are independent: [`bsp`] answers "which triangles
//! does this segment cross", and [`hull`] answers "what is the convex
//! hull of this point set". Each has its own stdin/stdout encoding
//! under [`io`] and its own binary under `src/bin`.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bsp;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod hull;
pub mod io;
pub mod triangle;
