//! Error types for the stdin-parsing boundary.
//!
//! The core algorithms (geometry kernel, splitter, BSP build/traversal,
//! hull) never fail: degenerate triangles and parallel edges are
//! recovered locally per spec §7. The only fallible boundary is parsing
//! untrusted stdin into the in-memory scene, so this is the only place
//! an error type is needed.

use thiserror::Error;

/// Failure to parse a whitespace-delimited integer scene from stdin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token stream ended before all the fields the header promised
    /// were read.
    #[error("unexpected end of input: expected {expected} more token(s)")]
    UnexpectedEof {
        /// How many more tokens the current record still needed.
        expected: usize,
    },

    /// A token that should have been an integer wasn't.
    #[error("invalid integer token {token:?}")]
    InvalidInteger {
        /// The offending raw token.
        token: String,
    },

    /// A triangle line referenced a point index outside `1..=n`.
    #[error("triangle references point index {index}, but only {point_count} points were given")]
    PointIndexOutOfRange {
        /// The 1-based index as written in the input.
        index: i64,
        /// The number of points actually read.
        point_count: usize,
    },
}
