//! Walk the GJK search one step at a time on the demo scene.
//!
//! Usage:
//!   cargo run -p gjk2d --example step_through
//!
//! Prints the simplex and search direction after every step, the same data a
//! renderer would draw as circles and arrows.

use gjk2d::prelude::*;

fn main() {
    let mut a = Shape2D::new(
        Vec2::new(100.0, 120.0),
        vec![
            Vec2::new(-20.0, -45.0),
            Vec2::new(-50.0, 0.0),
            Vec2::new(-10.0, 30.0),
            Vec2::new(30.0, 20.0),
            Vec2::new(50.0, -10.0),
        ],
    );
    a.rotate(0.375);
    let b = Shape2D::rectangle(Vec2::new(200.0, 100.0), Vec2::new(80.0, 50.0))
        .rotated(std::f64::consts::PI * 0.125);

    let md = Shape2D::minkowski_difference(&a, &b);
    println!("minkowski difference: {} vertices", md.points.len());

    let mut search = GjkSearch::new(&a, &b, SearchCfg::default());
    loop {
        let frame = search.debug_data();
        println!(
            "step {}: simplex {:?} direction ({:.3}, {:.3})",
            search.steps(),
            frame.simplex.points(),
            frame.direction.x,
            frame.direction.y
        );
        if let SearchState::Terminated(t) = search.step() {
            println!("terminated: {t:?} -> {:?}", t.verdict());
            break;
        }
    }
}
