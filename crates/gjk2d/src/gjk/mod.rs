//! GJK intersection test in 2D with step-through support.
//!
//! Purpose
//! - Decide whether two convex `Shape2D`s overlap by searching the Minkowski
//!   difference for the origin with a point/segment/triangle simplex.
//! - Expose the search as a resumable state machine (`GjkSearch`) so hosts
//!   can advance it a few steps per frame and draw `DebugData`.
//!
//! Answers are tri-state (`Verdict`): a search cut short by its step budget
//! is `Inconclusive` rather than a guessed boolean.
//!
//! Code cross-refs: `shape::Shape2D`, `sat::separation` (brute-force cross-check)

mod debug;
mod search;
mod simplex;

pub use debug::DebugData;
pub use search::{
    intersects, minkowski_support, GjkOutput, GjkSearch, SearchCfg, SearchState, Termination,
    Verdict,
};
pub use simplex::{Simplex, SimplexShape, SIMPLEX_CAPACITY};
