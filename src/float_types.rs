//! Scalar type and named tolerances shared across the crate.
//!
//! Unlike a general CSG kernel, this crate does not need to support both
//! `f32` and `f64` behind feature flags — every query in the spec is
//! defined over integer input coordinates promoted to `f64`, so `Real` is
//! fixed rather than feature-gated.

/// The scalar type used throughout the crate.
pub type Real = f64;

/// Absolute tolerance on the plane-equation value `a*x + b*y + c*z + d`,
/// used uniformly for plane classification, degenerate-normal detection,
/// edge/plane parallelism, colinearity, the 2D orientation sign, and
/// between-ness tests in the BSP subsystem.
///
/// A single epsilon is used at all of these call sites by design (see
/// DESIGN.md's "Tolerance coupling" note) — it is given one name per
/// call site rather than one constant, so each use documents *why* it
/// needs a tolerance rather than just reusing a bare number.
pub const BSP_EPSILON: Real = 1e-10;

/// Visibility tolerance for the convex hull subsystem: a face is
/// considered visible from a point when `normal . (point - face.v0)`
/// exceeds this value.
pub const HULL_EPSILON: Real = 1e-7;
