//! Vector primitives shared by the shape, hull and GJK code.
//!
//! - Points and directions are nalgebra `Vector2<f64>` (`Vec2`).
//! - 2D cross products embed into 3D with `z = 0` (`embed`) so the full 3D
//!   cross is available when an in-plane perpendicular is needed; `cross_z`
//!   is the scalar shortcut for the z component.

use nalgebra::{Vector2, Vector3};

pub type Vec2 = Vector2<f64>;
pub type Vec3 = Vector3<f64>;

/// Lift a 2D vector into the `z = 0` plane.
#[inline]
pub fn embed(v: Vec2) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Drop the z component.
#[inline]
pub fn flatten(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// z component of `embed(a) × embed(b)`.
/// Positive for a→b counterclockwise in a y-up frame.
#[inline]
pub fn cross_z(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `v / |v|`, or None when the length is zero or not finite.
#[inline]
pub fn try_normalize(v: Vec2) -> Option<Vec2> {
    let norm = v.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return None;
    }
    Some(v / norm)
}

/// `v` turned by +90° in a y-up frame.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn cross_z_matches_embedded_cross() {
        let a = vector![3.0, -1.5];
        let b = vector![0.25, 2.0];
        let full = embed(a).cross(&embed(b));
        assert_eq!(full.x, 0.0);
        assert_eq!(full.y, 0.0);
        assert!((full.z - cross_z(a, b)).abs() < 1e-12);
        assert!(flatten(full).norm() == 0.0);
    }

    #[test]
    fn normalize_rejects_zero() {
        assert!(try_normalize(Vec2::zeros()).is_none());
        assert!(try_normalize(vector![f64::NAN, 1.0]).is_none());
        let n = try_normalize(vector![3.0, 4.0]).unwrap();
        assert!((n - vector![0.6, 0.8]).norm() < 1e-12);
    }

    #[test]
    fn perp_is_orthogonal_and_ccw() {
        let v = vector![2.0, 1.0];
        let p = perp(v);
        assert_eq!(v.dot(&p), 0.0);
        assert!(cross_z(v, p) > 0.0);
    }
}
