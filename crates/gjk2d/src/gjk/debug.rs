//! Snapshot of the search for visualization hosts.

use super::simplex::Simplex;
use crate::shape::Shape2D;
use crate::vector::Vec2;

/// Current simplex and search direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugData {
    pub simplex: Simplex,
    pub direction: Vec2,
}

impl DebugData {
    /// Support points of `a` along `direction` and of `b` against it,
    /// i.e. the two vertices whose difference the next step would test.
    pub fn support_pair(&self, a: &Shape2D, b: &Shape2D) -> (Vec2, Vec2) {
        (a.support(self.direction), b.support(-self.direction))
    }

    /// Simplex vertices shifted by a display `offset`, oldest first.
    pub fn simplex_at(&self, offset: Vec2) -> Vec<Vec2> {
        self.simplex.points().iter().map(|p| offset + p).collect()
    }

    /// Closed outline of the simplex shifted by `offset`: each vertex joined
    /// to its predecessor. A point yields one zero-length edge.
    pub fn simplex_edges(&self, offset: Vec2) -> Vec<(Vec2, Vec2)> {
        let pts = self.simplex_at(offset);
        let n = pts.len();
        (0..n).map(|i| (pts[i], pts[(i + n - 1) % n])).collect()
    }
}
