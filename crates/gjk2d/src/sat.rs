//! Brute-force separating-axis check, used to cross-check GJK answers.
//!
//! Axes are the edge normals of both shapes' hulls plus the center-to-center
//! direction. Touching counts as separated, matching the strict origin test
//! of the GJK search.

use crate::shape::{graham_scan, Shape2D};
use crate::vector::{perp, try_normalize, Vec2};

fn hull_world(s: &Shape2D) -> Vec<Vec2> {
    if s.points.is_empty() {
        return vec![s.center];
    }
    let pts: Vec<Vec2> = s.world_points().collect();
    graham_scan(&pts)
}

fn edge_axes(hull: &[Vec2], out: &mut Vec<Vec2>) {
    let n = hull.len();
    if n < 2 {
        return;
    }
    for k in 0..n {
        let edge = hull[(k + 1) % n] - hull[k];
        if let Some(axis) = try_normalize(perp(edge)) {
            out.push(axis);
        }
    }
}

fn project(hull: &[Vec2], axis: Vec2) -> (f64, f64) {
    hull.iter()
        .map(|p| p.dot(&axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

/// Largest gap between the two projections over all tested axes.
///
/// Positive: separated by at least that much along some axis. Zero: touching.
/// Negative: overlapping on every axis (magnitude is the smallest overlap).
/// None when there is no usable axis (two coincident points).
pub fn separation(a: &Shape2D, b: &Shape2D) -> Option<f64> {
    let ha = hull_world(a);
    let hb = hull_world(b);
    let mut axes = Vec::with_capacity(ha.len() + hb.len() + 1);
    edge_axes(&ha, &mut axes);
    edge_axes(&hb, &mut axes);
    if let Some(axis) = try_normalize(b.center - a.center) {
        axes.push(axis);
    }
    axes.into_iter()
        .map(|axis| {
            let (lo_a, hi_a) = project(&ha, axis);
            let (lo_b, hi_b) = project(&hb, axis);
            (lo_b - hi_a).max(lo_a - hi_b)
        })
        .reduce(f64::max)
}

/// True when some tested axis separates the shapes (touching included).
pub fn separated_by_axes(a: &Shape2D, b: &Shape2D) -> bool {
    separation(a, b).is_none_or(|gap| gap >= 0.0)
}
