//! 2D GJK intersection with step-through debugging.
//!
//! Layout
//! - `vector`: nalgebra aliases and z-embedded cross helpers.
//! - `shape`: `Shape2D` (support, rotate) and the Graham-scan Minkowski difference.
//! - `gjk`: simplex, resumable search, tri-state verdicts, debug snapshots.
//! - `sat`: brute-force separating-axis check for cross-validation.
//! - `rand`: seeded random convex shapes for tests, benches and demos.
//!
//! Coordinates are `f64` in whatever units the host uses (pixels in the
//! step-through demo). Nothing here allocates per step or keeps global state.

pub mod gjk;
pub mod rand;
pub mod sat;
pub mod shape;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use vector::Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gjk::{
        intersects, minkowski_support, DebugData, GjkOutput, GjkSearch, SearchCfg, SearchState,
        Simplex, SimplexShape, Termination, Verdict,
    };
    pub use crate::rand::{draw_center, draw_shape_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::sat::{separated_by_axes, separation};
    pub use crate::shape::{graham_scan, is_convex, turn, Shape2D};
    pub use crate::vector::Vec2;
}
