//! Step-limited GJK boolean search over the Minkowski difference `A - B`.
//!
//! Model
//! - The difference is never materialized: support points are
//!   `A.support(d) - B.support(-d)`.
//! - One step = one support query, one simplex append, one region test
//!   (plus one more support query when the origin lands on a triangle edge).
//! - A support point must pass the origin strictly (`s·d > 0`), so vertex
//!   contact ends as separated.
//! - Edge contact leaves the origin exactly on a triangle edge; one more
//!   support query along that edge's outward normal tells a shared boundary
//!   (separated) from an interior chord (enclosed).
//! - The step budget bounds the refinement loop so hosts can animate the
//!   search; running out of steps is reported as its own termination.
//!
//! Code cross-refs: `Simplex`, `DebugData`, `Shape2D::support`

use super::debug::DebugData;
use super::simplex::{Simplex, SimplexShape};
use crate::shape::Shape2D;
use crate::vector::{cross_z, embed, flatten, perp, try_normalize, Vec2};

/// Search parameters.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// First support direction (need not be unit length, must be non-zero).
    pub initial_direction: Vec2,
    /// Refinement steps allowed after the initial support query.
    pub max_steps: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            initial_direction: Vec2::new(1.0, 0.0),
            max_steps: 32,
        }
    }
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The triangle simplex contains the origin.
    OriginEnclosed,
    /// A support point failed to pass the origin: a separating direction exists.
    SupportBehindOrigin,
    /// The origin lies on a triangle edge and nothing beyond that edge passes
    /// it: the shapes touch along an edge.
    OriginOnBoundary,
    /// No usable search direction (zero initial direction or a flat triangle).
    NoSearchDirection,
    StepBudgetExhausted,
}

/// Tri-state answer derived from a `Termination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Intersecting,
    Separated,
    Inconclusive,
}

impl Termination {
    pub fn verdict(self) -> Verdict {
        match self {
            Termination::OriginEnclosed => Verdict::Intersecting,
            Termination::SupportBehindOrigin | Termination::OriginOnBoundary => Verdict::Separated,
            Termination::NoSearchDirection | Termination::StepBudgetExhausted => {
                Verdict::Inconclusive
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Terminated(Termination),
}

/// Final report of a search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GjkOutput {
    pub termination: Termination,
    /// Completed (non-terminal) refinement steps.
    pub steps: usize,
    pub debug: DebugData,
}

impl GjkOutput {
    #[inline]
    pub fn verdict(&self) -> Verdict {
        self.termination.verdict()
    }

    #[inline]
    pub fn is_intersecting(&self) -> bool {
        self.verdict() == Verdict::Intersecting
    }

    /// Boolean as reported by the step-through visualizer: only a proven
    /// separation is `false`; an exhausted or directionless search stays `true`.
    pub fn reference_bool(&self) -> bool {
        self.verdict() != Verdict::Separated
    }
}

/// Support point of the Minkowski difference `a - b` along `direction`.
#[inline]
pub fn minkowski_support(a: &Shape2D, b: &Shape2D, direction: Vec2) -> Vec2 {
    a.support(direction) - b.support(-direction)
}

#[inline]
fn passes_origin(point: Vec2, direction: Vec2) -> bool {
    point.dot(&direction) > 0.0
}

/// Resumable search state; shapes are borrowed read-only.
#[derive(Clone, Debug)]
pub struct GjkSearch<'s> {
    shape_a: &'s Shape2D,
    shape_b: &'s Shape2D,
    simplex: Simplex,
    direction: Vec2,
    steps: usize,
    max_steps: usize,
    state: SearchState,
}

impl<'s> GjkSearch<'s> {
    /// Run the initial support query. With `max_steps == 0` that query is
    /// the whole search.
    pub fn new(shape_a: &'s Shape2D, shape_b: &'s Shape2D, cfg: SearchCfg) -> Self {
        let mut search = Self {
            shape_a,
            shape_b,
            simplex: Simplex::empty(),
            direction: cfg.initial_direction,
            steps: 0,
            max_steps: cfg.max_steps,
            state: SearchState::Searching,
        };
        let Some(d) = try_normalize(cfg.initial_direction) else {
            search.finish(Termination::NoSearchDirection);
            return search;
        };
        let first = minkowski_support(shape_a, shape_b, d);
        if !passes_origin(first, d) {
            search.finish(Termination::SupportBehindOrigin);
            return search;
        }
        search.simplex = Simplex::point(first);
        // `first·d > 0` rules out the zero vector here.
        search.direction = try_normalize(-first).unwrap_or(-d);
        if search.max_steps == 0 {
            search.finish(Termination::StepBudgetExhausted);
        }
        search
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn simplex(&self) -> &Simplex {
        &self.simplex
    }

    /// Direction of the next support query (unit length once searching).
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn debug_data(&self) -> DebugData {
        DebugData {
            simplex: self.simplex,
            direction: self.direction,
        }
    }

    /// Advance by one step; a terminated search is left unchanged.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Searching {
            return self.state;
        }
        if self.steps >= self.max_steps {
            self.finish(Termination::StepBudgetExhausted);
            return self.state;
        }

        let d = self.direction;
        let support = minkowski_support(self.shape_a, self.shape_b, d);
        if !passes_origin(support, d) {
            self.finish(Termination::SupportBehindOrigin);
            return self.state;
        }
        if !self.simplex.push(support) {
            // region tests always shrink a triangle before the next append
            self.finish(Termination::NoSearchDirection);
            return self.state;
        }
        tracing::trace!(
            step = self.steps,
            simplex_len = self.simplex.len(),
            sx = support.x,
            sy = support.y,
            "gjk_step"
        );

        if let Some(t) = self.refine() {
            self.finish(t);
            return self.state;
        }

        self.steps += 1;
        if self.steps >= self.max_steps {
            self.finish(Termination::StepBudgetExhausted);
        }
        self.state
    }

    /// Step until terminated.
    pub fn run(mut self) -> GjkOutput {
        while self.step() == SearchState::Searching {}
        self.output()
    }

    /// One snapshot after construction and after each step, until terminated.
    pub fn trace(mut self) -> (GjkOutput, Vec<DebugData>) {
        let mut frames = vec![self.debug_data()];
        while self.state == SearchState::Searching {
            self.step();
            frames.push(self.debug_data());
        }
        (self.output(), frames)
    }

    /// Report for the current state; a search still running reads as out of budget.
    pub fn output(&self) -> GjkOutput {
        let termination = match self.state {
            SearchState::Terminated(t) => t,
            SearchState::Searching => Termination::StepBudgetExhausted,
        };
        GjkOutput {
            termination,
            steps: self.steps,
            debug: self.debug_data(),
        }
    }

    fn finish(&mut self, t: Termination) {
        tracing::debug!(termination = ?t, steps = self.steps, "gjk_done");
        self.state = SearchState::Terminated(t);
    }

    /// Region test on the freshly extended simplex. Updates simplex and
    /// direction; returns a termination when the search is decided.
    fn refine(&mut self) -> Option<Termination> {
        match self.simplex.shape() {
            SimplexShape::Segment { a, b } => self.refine_segment(a, b),
            SimplexShape::Triangle { a, b, c } => self.refine_triangle(a, b, c),
            // the constructor seeds one point and every step appends one
            SimplexShape::Empty | SimplexShape::Point { .. } => Some(Termination::NoSearchDirection),
        }
    }

    fn refine_segment(&mut self, a: Vec2, b: Vec2) -> Option<Termination> {
        let ao = -a;
        let ab = b - a;
        let ab_x_ao = embed(ab).cross(&embed(ao));
        if ab_x_ao.norm_squared() == 0.0 {
            // Origin on the line through a and b.
            let len_sq = ab.norm_squared();
            let t = if len_sq > 0.0 { ao.dot(&ab) / len_sq } else { 0.0 };
            if t > 0.0 && t < 1.0 {
                // Strictly inside the segment: collapsing to `a` would
                // bounce between the two ends forever, so look sideways.
                self.direction = perp(ab).normalize();
                return None;
            }
            // `a` passed the origin strictly, so it is not the origin.
            self.simplex = Simplex::point(a);
            self.direction = ao.normalize();
            return None;
        }
        match try_normalize(flatten(ab_x_ao.cross(&embed(ab)))) {
            Some(d) => {
                self.direction = d;
                None
            }
            None => Some(Termination::NoSearchDirection),
        }
    }

    fn refine_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) -> Option<Termination> {
        let ao = -a;
        let ab = b - a;
        let ac = c - a;
        let ab_x_ac = embed(ab).cross(&embed(ac));
        if ab_x_ac.z == 0.0 {
            return Some(Termination::NoSearchDirection);
        }

        // Outward edge normals, unnormalized so the side tests stay exact.
        let n_ab = flatten(embed(ab).cross(&ab_x_ac));
        if n_ab.dot(&ao) > 0.0 {
            self.keep_edge(a, b, ab, ao, n_ab);
            return None;
        }
        let n_ac = flatten(ab_x_ac.cross(&embed(ac)));
        if n_ac.dot(&ao) > 0.0 {
            self.keep_edge(a, c, ac, ao, n_ac);
            return None;
        }

        // The origin is in the closed triangle. No vertex is the origin, so
        // it lies on at most one edge.
        let bc = c - b;
        let mut n_bc = perp(bc);
        if n_bc.dot(&(a - b)) > 0.0 {
            n_bc = -n_bc;
        }
        for (edge, from, normal) in [(ab, a, n_ab), (ac, a, n_ac), (bc, b, n_bc)] {
            if cross_z(edge, -from) == 0.0 {
                return Some(self.settle_on_edge(normal));
            }
        }
        Some(Termination::OriginEnclosed)
    }

    /// Origin on a triangle edge: enclosed only if the difference reaches
    /// strictly past that edge.
    fn settle_on_edge(&mut self, normal: Vec2) -> Termination {
        let beyond = minkowski_support(self.shape_a, self.shape_b, normal);
        if passes_origin(beyond, normal) {
            Termination::OriginEnclosed
        } else {
            self.direction = normal.normalize();
            Termination::OriginOnBoundary
        }
    }

    /// Origin is outside edge `a-far`: keep the edge, or just `far` when the
    /// origin projects beyond it.
    fn keep_edge(&mut self, a: Vec2, far: Vec2, edge: Vec2, ao: Vec2, normal: Vec2) {
        let len = edge.norm();
        let proj = edge.dot(&ao) / len;
        if proj >= len {
            self.simplex = Simplex::point(far);
            self.direction = (-far).normalize();
        } else {
            self.simplex = Simplex::segment(a, far);
            self.direction = normal.normalize();
        }
    }
}

/// Boolean GJK test of `a` against `b`.
///
/// `max_steps` bounds the refinement loop; see `Termination` for how the
/// search can end and `GjkOutput::verdict` for the tri-state answer.
pub fn intersects(
    a: &Shape2D,
    b: &Shape2D,
    initial_direction: Vec2,
    max_steps: usize,
) -> GjkOutput {
    GjkSearch::new(
        a,
        b,
        SearchCfg {
            initial_direction,
            max_steps,
        },
    )
    .run()
}
