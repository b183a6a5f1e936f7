//! Fixed-capacity simplex (point, segment or triangle).
//!
//! Points are stored oldest first; `a` is always the newest vertex, `b` and
//! `c` the older ones. Region tests read it through `Simplex::shape`.

use crate::vector::Vec2;

pub const SIMPLEX_CAPACITY: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simplex {
    points: [Vec2; SIMPLEX_CAPACITY],
    len: usize,
}

/// Borrowed view of a simplex by dimension, newest vertex first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimplexShape {
    Empty,
    Point { a: Vec2 },
    Segment { a: Vec2, b: Vec2 },
    Triangle { a: Vec2, b: Vec2, c: Vec2 },
}

impl Default for Simplex {
    fn default() -> Self {
        Self::empty()
    }
}

impl Simplex {
    #[inline]
    pub fn empty() -> Self {
        Self {
            points: [Vec2::zeros(); SIMPLEX_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn point(a: Vec2) -> Self {
        let mut s = Self::empty();
        s.points[0] = a;
        s.len = 1;
        s
    }

    /// Segment with `a` as the newest vertex.
    #[inline]
    pub fn segment(a: Vec2, b: Vec2) -> Self {
        let mut s = Self::empty();
        s.points[0] = b;
        s.points[1] = a;
        s.len = 2;
        s
    }

    /// Append a new newest vertex. Returns false (and leaves `self` alone) when full.
    #[inline]
    pub fn push(&mut self, p: Vec2) -> bool {
        if self.len == SIMPLEX_CAPACITY {
            return false;
        }
        self.points[self.len] = p;
        self.len += 1;
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Valid vertices, oldest first.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    /// Newest vertex.
    #[inline]
    pub fn a(&self) -> Option<Vec2> {
        self.len.checked_sub(1).map(|i| self.points[i])
    }

    #[inline]
    pub fn b(&self) -> Option<Vec2> {
        self.len.checked_sub(2).map(|i| self.points[i])
    }

    #[inline]
    pub fn c(&self) -> Option<Vec2> {
        self.len.checked_sub(3).map(|i| self.points[i])
    }

    pub fn shape(&self) -> SimplexShape {
        match *self.points() {
            [] => SimplexShape::Empty,
            [a] => SimplexShape::Point { a },
            [b, a] => SimplexShape::Segment { a, b },
            [c, b, a] => SimplexShape::Triangle { a, b, c },
            _ => unreachable!("simplex holds at most {SIMPLEX_CAPACITY} points"),
        }
    }
}
