//! Convex 2D shapes and their Minkowski differences.
//!
//! Purpose
//! - `Shape2D` is the input type of the GJK search: a world-space center plus
//!   local offsets, queried only through `support`.
//! - `graham_scan` turns the pairwise vertex differences of two shapes into
//!   an explicit convex polygon, used for display and for cross-checks.
//!
//! Code cross-refs: `gjk::GjkSearch`, `sat::separation`

mod hull;
mod types;

pub use hull::{graham_scan, is_convex, turn};
pub use types::Shape2D;

#[cfg(test)]
mod tests;
