//! Host-side UI state for the step-through demo.
//!
//! The geometry core is stateless; everything the interactive demo mutates
//! between frames (step budget, edit mode, which shape is selected, shape
//! poses) lives here and is passed into the core explicitly each frame.
//!
//! Key bindings
//! - `2` / `1`: raise / lower the step budget (never below zero).
//! - `t` / `r`: translate / rotate mode.
//! - `A` / `B`: select the shape being edited.
//! - `h` `j` `k` `l`: nudge left/down/up/right (translate mode, y-down screen),
//!   or turn by `-`/`-`/`+`/`+` one angle increment (rotate mode).

use gjk2d::prelude::*;
use serde::Serialize;

use crate::scene::{to_pair, Scene};

pub const NUDGE: f64 = 10.0;
pub const TURN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EditMode {
    Translate,
    Rotate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Selection {
    A,
    B,
}

/// Per-frame host state. Shapes are kept unrotated; the pose is re-applied
/// each frame so repeated turns do not accumulate rounding.
#[derive(Clone, Debug)]
pub struct HostState {
    pub max_steps: usize,
    pub mode: EditMode,
    pub selected: Selection,
    pub source_a: Shape2D,
    pub source_b: Shape2D,
    pub rotation_a: f64,
    pub rotation_b: f64,
    pub initial_direction: Vec2,
    pub display_center: Vec2,
}

/// What a renderer needs for one frame, in plain serializable form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub key: Option<char>,
    pub max_steps: usize,
    pub mode: EditMode,
    pub selected: Selection,
    pub verdict: String,
    pub termination: String,
    pub steps: usize,
    /// Simplex vertices shifted to the display center, oldest first.
    pub simplex: Vec<[f64; 2]>,
    pub direction: [f64; 2],
    pub support_a: [f64; 2],
    pub support_b: [f64; 2],
}

impl HostState {
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            max_steps: 0,
            mode: EditMode::Translate,
            selected: Selection::A,
            source_a: scene.shape_a.source(),
            source_b: scene.shape_b.source(),
            rotation_a: scene.shape_a.rotation,
            rotation_b: scene.shape_b.rotation,
            initial_direction: scene.initial_direction(),
            display_center: scene.display_center(),
        }
    }

    /// Apply one key press. Returns false for unbound keys.
    pub fn apply_key(&mut self, key: char) -> bool {
        match key {
            '2' => self.max_steps += 1,
            '1' => self.max_steps = self.max_steps.saturating_sub(1),
            't' => self.mode = EditMode::Translate,
            'r' => self.mode = EditMode::Rotate,
            'A' => self.selected = Selection::A,
            'B' => self.selected = Selection::B,
            'h' | 'j' | 'k' | 'l' => self.nudge(key),
            _ => return false,
        }
        true
    }

    fn nudge(&mut self, key: char) {
        match self.mode {
            EditMode::Translate => {
                let delta = match key {
                    'h' => Vec2::new(-NUDGE, 0.0),
                    'j' => Vec2::new(0.0, NUDGE),
                    'k' => Vec2::new(0.0, -NUDGE),
                    _ => Vec2::new(NUDGE, 0.0),
                };
                self.selected_source_mut().translate(delta);
            }
            EditMode::Rotate => {
                let turn = if matches!(key, 'h' | 'j') { -TURN } else { TURN };
                match self.selected {
                    Selection::A => self.rotation_a += turn,
                    Selection::B => self.rotation_b += turn,
                }
            }
        }
    }

    fn selected_source_mut(&mut self) -> &mut Shape2D {
        match self.selected {
            Selection::A => &mut self.source_a,
            Selection::B => &mut self.source_b,
        }
    }

    pub fn posed_shapes(&self) -> (Shape2D, Shape2D) {
        (
            self.source_a.rotated(self.rotation_a),
            self.source_b.rotated(self.rotation_b),
        )
    }

    /// Run the search with the current budget and package the debug view.
    pub fn frame(&self, key: Option<char>) -> FrameReport {
        let (a, b) = self.posed_shapes();
        let out = intersects(&a, &b, self.initial_direction, self.max_steps);
        let (support_a, support_b) = out.debug.support_pair(&a, &b);
        FrameReport {
            key,
            max_steps: self.max_steps,
            mode: self.mode,
            selected: self.selected,
            verdict: format!("{:?}", out.verdict()),
            termination: format!("{:?}", out.termination),
            steps: out.steps,
            simplex: out
                .debug
                .simplex_at(self.display_center)
                .into_iter()
                .map(to_pair)
                .collect(),
            direction: to_pair(out.debug.direction),
            support_a: to_pair(support_a),
            support_b: to_pair(support_b),
        }
    }
}
