use super::*;
use nalgebra::{vector, Vector2};

fn square(center: Vector2<f64>, half: f64) -> Shape2D {
    Shape2D::rectangle(center, vector![half, half])
}

#[test]
fn support_picks_furthest_and_offsets_by_center() {
    let s = square(vector![10.0, -5.0], 2.0);
    assert_eq!(s.support(vector![1.0, 1.0]), vector![12.0, -3.0]);
    assert_eq!(s.support(vector![-1.0, -1.0]), vector![8.0, -7.0]);
}

#[test]
fn support_ties_keep_first_match() {
    // (+,-) and (+,+) tie along +x; (+,-) is listed first.
    let s = square(vector![0.0, 0.0], 1.0);
    assert_eq!(s.support(vector![1.0, 0.0]), vector![1.0, -1.0]);
    // zero direction: everything ties, first point wins
    assert_eq!(s.support(Vector2::zeros()), vector![-1.0, -1.0]);
}

#[test]
fn support_of_empty_shape_is_center() {
    let p = Shape2D::point(vector![3.0, 4.0]);
    assert_eq!(p.support(vector![1.0, 0.0]), vector![3.0, 4.0]);
    assert_eq!(p.support(vector![-7.0, 2.0]), vector![3.0, 4.0]);
}

#[test]
fn support_handles_far_away_points() {
    // every dot product is far below any fixed sentinel
    let s = Shape2D::new(
        Vector2::zeros(),
        vec![vector![-5000.0, 0.0], vector![-4000.0, 0.0]],
    );
    assert_eq!(s.support(vector![1.0, 0.0]), vector![-4000.0, 0.0]);
}

#[test]
fn rotate_keeps_center_and_turns_about_minus_z() {
    let mut s = Shape2D::new(vector![5.0, 5.0], vec![vector![1.0, 0.0]]);
    s.rotate(std::f64::consts::FRAC_PI_2);
    assert_eq!(s.center, vector![5.0, 5.0]);
    // -z axis: +x goes to -y in a y-up frame
    assert!((s.points[0] - vector![0.0, -1.0]).norm() < 1e-12);
}

#[test]
fn rotated_leaves_source_untouched() {
    let source = square(vector![0.0, 0.0], 1.0);
    let turned = source.rotated(0.3);
    assert_eq!(source, square(vector![0.0, 0.0], 1.0));
    assert_ne!(turned.points, source.points);
    let back = turned.rotated(-0.3);
    for (p, q) in back.points.iter().zip(&source.points) {
        assert!((p - q).norm() < 1e-12);
    }
}

#[test]
fn graham_scan_drops_interior_points() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![-1.0, -1.0],
        vector![1.0, -1.0],
        vector![1.0, 1.0],
        vector![-1.0, 1.0],
        vector![0.2, -0.4],
    ];
    let hull = graham_scan(&pts);
    assert_eq!(
        hull,
        vec![
            vector![-1.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, -1.0],
            vector![-1.0, -1.0],
        ]
    );
    assert!(is_convex(&hull, 0.0));
}

#[test]
fn graham_scan_start_is_max_y_then_min_x() {
    let pts = vec![
        vector![3.0, 2.0],
        vector![0.0, 0.0],
        vector![-2.0, 2.0],
        vector![1.0, 2.0],
    ];
    let hull = graham_scan(&pts);
    assert_eq!(hull[0], vector![-2.0, 2.0]);
}

#[test]
fn graham_scan_small_inputs() {
    assert!(graham_scan(&[]).is_empty());
    let one = vec![vector![1.0, 2.0]];
    assert_eq!(graham_scan(&one), one);
    let two = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    assert_eq!(graham_scan(&two), vec![vector![1.0, 1.0], vector![0.0, 0.0]]);
    // duplicates collapse before the sweep
    let dup = vec![vector![1.0, 1.0], vector![1.0, 1.0]];
    assert_eq!(graham_scan(&dup), vec![vector![1.0, 1.0]]);
}

#[test]
fn graham_scan_keeps_collinear_boundary_in_order() {
    // 3x3 grid: the edge midpoints stay, the middle goes
    let mut pts = Vec::new();
    for y in [-1.0, 0.0, 1.0] {
        for x in [-1.0, 0.0, 1.0] {
            pts.push(vector![x, y]);
        }
    }
    let hull = graham_scan(&pts);
    assert_eq!(hull.len(), 8);
    assert!(!hull.contains(&vector![0.0, 0.0]));
    assert!(is_convex(&hull, 0.0));
    // closing ray walks back towards the start
    assert_eq!(hull[6], vector![-1.0, -1.0]);
    assert_eq!(hull[7], vector![-1.0, 0.0]);
    assert_eq!(graham_scan(&hull), hull);
}

#[test]
fn graham_scan_ignores_repeated_points_in_any_order() {
    let mut grid = Vec::new();
    for y in [-1.0, 0.0, 1.0] {
        for x in [-1.0, 0.0, 1.0] {
            grid.push(vector![x, y]);
        }
    }
    let expected = graham_scan(&grid);
    // Three copies of every point, the last pass reversed, start corner included.
    let mut noisy = grid.clone();
    noisy.extend(grid.iter().copied());
    noisy.extend(grid.iter().rev().copied());
    assert_eq!(noisy.len(), 27);
    assert_eq!(graham_scan(&noisy), expected);
}

#[test]
fn minkowski_difference_of_squares_is_a_square() {
    let a = square(vector![0.0, 0.0], 50.0);
    let b = square(vector![10.0, 0.0], 50.0);
    let md = Shape2D::minkowski_difference(&a, &b);
    assert_eq!(md.center, Vector2::zeros());
    assert!(md.is_convex(0.0));
    for corner in [
        vector![-110.0, -100.0],
        vector![90.0, -100.0],
        vector![90.0, 100.0],
        vector![-110.0, 100.0],
    ] {
        assert!(md.points.contains(&corner), "missing corner {corner:?}");
    }
    // support of the difference equals the Minkowski support of the pair
    for d in [vector![1.0, 0.3], vector![-0.2, 1.0], vector![-1.0, -1.0]] {
        let expected = a.support(d) - b.support(-d);
        assert!((md.support(d).dot(&d) - expected.dot(&d)).abs() < 1e-9);
    }
}

#[test]
fn rebuild_keeps_display_center() {
    let a = square(vector![0.0, 0.0], 1.0);
    let b = square(vector![0.5, 0.0], 1.0);
    let mut md = Shape2D::new(vector![400.0, 300.0], vec![vector![9.0, 9.0]]);
    md.rebuild_as_minkowski_difference(&a, &b);
    assert_eq!(md.center, vector![400.0, 300.0]);
    assert!(!md.points.contains(&vector![9.0, 9.0]));
    assert!(md.is_convex(0.0));
}

#[test]
fn minkowski_difference_with_point_shape_is_empty() {
    let a = square(vector![0.0, 0.0], 1.0);
    let b = Shape2D::point(vector![0.0, 0.0]);
    assert!(Shape2D::minkowski_difference(&a, &b).points.is_empty());
}
