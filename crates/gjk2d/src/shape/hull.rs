//! Graham-scan convex hull.
//!
//! Order convention: the sweep sorts by `atan2(-dy, dx)` around the start
//! point, i.e. angles are measured on a y-down (screen) frame. The output is
//! counter-clockwise on that frame and every consecutive triple satisfies
//! `turn(c, b, a) >= 0`.

use std::cmp::Ordering;

use crate::vector::{cross_z, Vec2};

/// Turn value of the path `c → b → a`: z of `(a - b) × (b - c)`.
/// Non-negative means counter-clockwise (screen frame) or straight.
#[inline]
pub fn turn(c: Vec2, b: Vec2, a: Vec2) -> f64 {
    cross_z(a - b, b - c)
}

/// Convex boundary of `points`, start point first.
///
/// - Start: largest y, ties broken by smallest x.
/// - Exact duplicates are dropped.
/// - Collinear boundary points are kept ("straight" turns pass the sweep).
/// - Fewer than three distinct points come back sorted but unpruned.
pub fn graham_scan(points: &[Vec2]) -> Vec<Vec2> {
    if points.is_empty() {
        return Vec::new();
    }
    let ordered = sort_around_start(points);
    if ordered.len() < 3 {
        return ordered;
    }

    let mut hull: Vec<Vec2> = Vec::with_capacity(ordered.len());
    hull.push(ordered[0]);
    hull.push(ordered[1]);
    for &a in &ordered[2..] {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], a) < 0.0 {
            hull.pop();
        }
        hull.push(a);
    }
    hull
}

/// Closed-loop convexity check: every cyclic triple has `turn >= -tol`.
pub fn is_convex(points: &[Vec2], tol: f64) -> bool {
    let n = points.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let c = points[(i + n - 1) % n];
        let b = points[i];
        let a = points[(i + 1) % n];
        turn(c, b, a) >= -tol
    })
}

fn start_index(points: &[Vec2]) -> usize {
    let mut best = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        let q = points[best];
        if p.y > q.y || (p.y == q.y && p.x < q.x) {
            best = i;
        }
    }
    best
}

fn sort_around_start(points: &[Vec2]) -> Vec<Vec2> {
    let start = points[start_index(points)];
    let mut keyed: Vec<(f64, f64, Vec2)> = points
        .iter()
        .filter(|p| **p != start)
        .map(|p| {
            let v = *p - start;
            ((-v.y).atan2(v.x), v.norm_squared(), *p)
        })
        .collect();
    // Coordinates last, so copies of one point end up adjacent.
    keyed.sort_by(|x, y| {
        let by = |l: f64, r: f64| l.partial_cmp(&r).unwrap_or(Ordering::Equal);
        by(x.0, y.0)
            .then(by(x.1, y.1))
            .then(by(x.2.x, y.2.x))
            .then(by(x.2.y, y.2.y))
    });
    keyed.dedup_by(|x, y| x.2 == y.2);

    // The last ray walks back to the start, so its points go far-to-near.
    if let Some(&(last_angle, _, _)) = keyed.last() {
        let run = keyed.iter().rev().take_while(|k| k.0 == last_angle).count();
        if run < keyed.len() {
            let from = keyed.len() - run;
            keyed[from..].reverse();
        }
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(start);
    out.extend(keyed.into_iter().map(|(_, _, p)| p));
    out
}
