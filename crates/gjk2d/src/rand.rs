//! Random convex shapes (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, then keep the Graham-scan hull of the resulting offsets.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a failing pair in a randomized test can be replayed by its index.
//!
//! Code cross-refs: `Shape2D`, `graham_scan`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::{graham_scan, Shape2D};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 50.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a convex shape centered at `center`.
///
/// The offsets are the hull of the jittered radial samples, so the result
/// already satisfies the Minkowski-rebuild ordering invariant.
pub fn draw_shape_radial(cfg: RadialCfg, tok: ReplayToken, center: Vector2<f64>) -> Shape2D {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Shape2D::new(center, graham_scan(&pts))
}

/// Uniform center in the axis-aligned box `[-half, half]²`.
pub fn draw_center(tok: ReplayToken, half: f64) -> Vector2<f64> {
    let mut rng = tok.to_std_rng();
    let half = half.abs();
    if half == 0.0 {
        return Vector2::zeros();
    }
    Vector2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = RadialCfg::default();
        let tok = ReplayToken::new(7, 3);
        let s1 = draw_shape_radial(cfg, tok, Vector2::zeros());
        let s2 = draw_shape_radial(cfg, tok, Vector2::zeros());
        assert_eq!(s1, s2);
        let s3 = draw_shape_radial(cfg, ReplayToken::new(7, 4), Vector2::zeros());
        assert_ne!(s1, s3);
    }

    #[test]
    fn drawn_shapes_are_convex_and_bounded() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            ..RadialCfg::default()
        };
        for i in 0..50 {
            let s = draw_shape_radial(cfg, ReplayToken::new(11, i), Vector2::new(5.0, -5.0));
            assert!(s.points.len() >= 3);
            assert!(s.is_convex(1e-9));
            for p in &s.points {
                assert!(p.norm() <= cfg.base_radius * (1.0 + cfg.radial_jitter) + 1e-9);
            }
        }
    }
}
