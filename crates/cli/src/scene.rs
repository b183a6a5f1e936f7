use anyhow::{Context, Result};
use gjk2d::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One shape as written in a scene file: unrotated offsets plus a pose angle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub center: [f64; 2],
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub rotation: f64,
}

impl ShapeSpec {
    /// Unrotated source shape.
    pub fn source(&self) -> Shape2D {
        Shape2D::new(
            to_vec2(self.center),
            self.points.iter().copied().map(to_vec2).collect(),
        )
    }

    /// Source shape turned by `rotation`.
    pub fn posed(&self) -> Shape2D {
        self.source().rotated(self.rotation)
    }
}

/// Two shapes and the search setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub shape_a: ShapeSpec,
    pub shape_b: ShapeSpec,
    #[serde(default = "default_direction")]
    pub initial_direction: [f64; 2],
    /// Where a renderer draws the Minkowski difference (screen center in the demo).
    #[serde(default)]
    pub display_center: [f64; 2],
}

fn default_direction() -> [f64; 2] {
    [1.0, 0.0]
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Scene file if given, else the built-in demo.
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::demo()),
        }
    }

    /// Pentagon against a rotated 160x100 box on an 800x600 screen.
    pub fn demo() -> Self {
        Self {
            shape_a: ShapeSpec {
                center: [100.0, 120.0],
                points: vec![
                    [-20.0, -45.0],
                    [-50.0, 0.0],
                    [-10.0, 30.0],
                    [30.0, 20.0],
                    [50.0, -10.0],
                ],
                rotation: 0.375,
            },
            shape_b: ShapeSpec {
                center: [200.0, 100.0],
                points: vec![[80.0, -50.0], [-80.0, -50.0], [-80.0, 50.0], [80.0, 50.0]],
                rotation: std::f64::consts::PI * 0.125,
            },
            initial_direction: default_direction(),
            display_center: [400.0, 300.0],
        }
    }

    pub fn posed_shapes(&self) -> (Shape2D, Shape2D) {
        (self.shape_a.posed(), self.shape_b.posed())
    }

    pub fn initial_direction(&self) -> Vec2 {
        to_vec2(self.initial_direction)
    }

    pub fn display_center(&self) -> Vec2 {
        to_vec2(self.display_center)
    }
}

#[inline]
pub fn to_vec2(p: [f64; 2]) -> Vec2 {
    Vec2::new(p[0], p[1])
}

#[inline]
pub fn to_pair(v: Vec2) -> [f64; 2] {
    [v.x, v.y]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_minimal_scene_with_defaults() {
        let json = r#"{
            "shape_a": {"center": [0, 0], "points": [[-1, -1], [1, -1], [1, 1], [-1, 1]]},
            "shape_b": {"center": [0.5, 0], "points": [[-1, -1], [1, -1], [1, 1]], "rotation": 0.5}
        }"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.initial_direction, [1.0, 0.0]);
        assert_eq!(scene.display_center, [0.0, 0.0]);
        assert_eq!(scene.shape_a.rotation, 0.0);
        let (a, b) = scene.posed_shapes();
        assert_eq!(a.points.len(), 4);
        assert_ne!(b, scene.shape_b.source());
        assert_eq!(b.center, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn load_reports_path_on_error() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        let err = Scene::load(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        assert!(Scene::load(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn demo_round_trips_through_json() {
        let demo = Scene::demo();
        let text = serde_json::to_string(&demo).unwrap();
        let back: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(back, demo);
        let (a, b) = demo.posed_shapes();
        let out = intersects(&a, &b, demo.initial_direction(), 64);
        assert_ne!(out.verdict(), Verdict::Inconclusive);
    }
}
