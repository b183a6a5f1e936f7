//! `Shape2D`: a center plus local offsets, queried through its support function.
//!
//! - `support`: furthest world point along a direction (first match wins on ties).
//! - `rotate`: in-place rotation of the local offsets about the center.
//! - `minkowski_difference`: pairwise differences reduced by `graham_scan`.

use nalgebra::Rotation2;

use super::hull::{graham_scan, is_convex};
use crate::vector::Vec2;

/// Point set with a world-space center and local-space offsets.
///
/// Invariants:
/// - `points` are offsets from `center`; their order is free until a
///   Minkowski rebuild, after which they follow the hull order.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape2D {
    pub center: Vec2,
    pub points: Vec<Vec2>,
}

impl Shape2D {
    #[inline]
    pub fn new(center: Vec2, points: Vec<Vec2>) -> Self {
        Self { center, points }
    }

    /// Degenerate point shape; its support is always `center`.
    #[inline]
    pub fn point(center: Vec2) -> Self {
        Self {
            center,
            points: Vec::new(),
        }
    }

    /// Axis-aligned rectangle, corners listed (-,-), (+,-), (+,+), (-,+).
    pub fn rectangle(center: Vec2, half_extents: Vec2) -> Self {
        let (hx, hy) = (half_extents.x, half_extents.y);
        Self {
            center,
            points: vec![
                Vec2::new(-hx, -hy),
                Vec2::new(hx, -hy),
                Vec2::new(hx, hy),
                Vec2::new(-hx, hy),
            ],
        }
    }

    /// World-space vertices in stored order.
    pub fn world_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(move |p| self.center + p)
    }

    /// Support point: `center + points[argmax p·direction]`.
    ///
    /// Ties keep the first maximum so replays are reproducible. A zero
    /// direction therefore yields `center + points[0]`.
    pub fn support(&self, direction: Vec2) -> Vec2 {
        let Some((first, rest)) = self.points.split_first() else {
            return self.center;
        };
        let mut best = *first;
        let mut best_dot = first.dot(&direction);
        for p in rest {
            let d = p.dot(&direction);
            if d > best_dot {
                best_dot = d;
                best = *p;
            }
        }
        self.center + best
    }

    /// Rotate the local offsets in place; `center` stays put.
    ///
    /// The axis is `-z`: positive angles turn clockwise in a y-up frame,
    /// which reads as counter-clockwise on a y-down screen.
    pub fn rotate(&mut self, angle: f64) {
        let rot = Rotation2::new(-angle);
        for p in &mut self.points {
            *p = rot * *p;
        }
    }

    /// Rotated copy; keeps `self` as the unrotated source.
    pub fn rotated(&self, angle: f64) -> Self {
        let mut out = self.clone();
        out.rotate(angle);
        out
    }

    /// Move the center by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Convex polygon of `{a - b}` with its center at the origin.
    pub fn minkowski_difference(a: &Shape2D, b: &Shape2D) -> Shape2D {
        let mut out = Shape2D::point(Vec2::zeros());
        out.rebuild_as_minkowski_difference(a, b);
        out
    }

    /// Replace `points` by the hull of the pairwise world differences `a_i - b_j`.
    /// `center` is kept, so it acts as a display offset for the difference.
    pub fn rebuild_as_minkowski_difference(&mut self, a: &Shape2D, b: &Shape2D) {
        let mut diffs = Vec::with_capacity(a.points.len() * b.points.len());
        for pa in a.world_points() {
            for pb in b.world_points() {
                diffs.push(pa - pb);
            }
        }
        self.points = graham_scan(&diffs);
    }

    /// Whether the stored order is a convex loop (turns `>= -tol`).
    pub fn is_convex(&self, tol: f64) -> bool {
        is_convex(&self.points, tol)
    }
}
