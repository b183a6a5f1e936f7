use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use gjk2d::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod host;
mod provenance;
mod scene;
mod trace;

use host::HostState;
use scene::{to_pair, Scene};

#[derive(Parser)]
#[command(name = "gjk2d")]
#[command(about = "Step-through GJK runner for 2D convex scenes")]
struct Cmd {
    /// Scene JSON (two shapes + initial direction); the built-in demo if omitted
    #[arg(long, global = true)]
    scene: Option<PathBuf>,

    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the search and print the verdict with the final simplex
    Check {
        #[arg(long, default_value_t = 32)]
        steps: usize,
    },
    /// Print the Minkowski difference polygon (shifted to the display center)
    Hull,
    /// Record every step of the search as CSV (or Parquet by extension)
    Trace {
        #[arg(long, default_value_t = 32)]
        steps: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Feed key presses to the demo UI state and print one frame per key
    Replay {
        /// Keys: 1/2 budget, t/r mode, A/B selection, h/j/k/l move or turn
        #[arg(long)]
        keys: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let scene = Scene::load_or_demo(cmd.scene.as_deref())?;
    match cmd.action {
        Action::Check { steps } => check(&scene, steps, cmd.tag),
        Action::Hull => hull(&scene),
        Action::Trace { steps, out } => run_trace(&scene, steps, out, cmd.tag),
        Action::Replay { keys } => replay(&scene, &keys),
    }
}

fn check(scene: &Scene, steps: usize, tag: Option<String>) -> Result<()> {
    let (a, b) = scene.posed_shapes();
    let out = intersects(&a, &b, scene.initial_direction(), steps);
    tracing::info!(
        steps,
        tag = ?tag,
        verdict = ?out.verdict(),
        termination = ?out.termination,
        used = out.steps,
        "check"
    );
    let simplex: Vec<[f64; 2]> = out.debug.simplex.points().iter().copied().map(to_pair).collect();
    let report = json!({
        "tag": tag,
        "verdict": format!("{:?}", out.verdict()),
        "termination": format!("{:?}", out.termination),
        "intersects": out.reference_bool(),
        "steps": out.steps,
        "simplex": simplex,
        "direction": to_pair(out.debug.direction),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn hull(scene: &Scene) -> Result<()> {
    let (a, b) = scene.posed_shapes();
    let mut md = Shape2D::point(scene.display_center());
    md.rebuild_as_minkowski_difference(&a, &b);
    tracing::info!(vertices = md.points.len(), convex = md.is_convex(1e-9), "hull");
    let world: Vec<[f64; 2]> = md.world_points().map(to_pair).collect();
    println!("{}", serde_json::to_string_pretty(&json!({ "points": world }))?);
    Ok(())
}

fn run_trace(scene: &Scene, steps: usize, out: PathBuf, tag: Option<String>) -> Result<()> {
    let (a, b) = scene.posed_shapes();
    let cfg = SearchCfg {
        initial_direction: scene.initial_direction(),
        max_steps: steps,
    };
    let (result, frames) = GjkSearch::new(&a, &b, cfg).trace();
    tracing::info!(
        out = %out.display(),
        frames = frames.len(),
        termination = ?result.termination,
        "trace"
    );
    let mut df = trace::trace_table(&frames)?;
    trace::write_table(&mut df, &out)?;

    let payload = provenance::Payload::new(json!({
        "max_steps": steps,
        "initial_direction": scene.initial_direction,
        "scene": scene,
    }))
    .with_tag(tag)
    .with_search(provenance::SearchSummary::new(&result, frames.len()));
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn replay(scene: &Scene, keys: &str) -> Result<()> {
    let mut state = HostState::from_scene(scene);
    println!("{}", serde_json::to_string(&state.frame(None))?);
    for key in keys.chars() {
        if !state.apply_key(key) {
            bail!("unbound key {key:?}");
        }
        let frame = state.frame(Some(key));
        tracing::debug!(key = %key, max_steps = state.max_steps, verdict = %frame.verdict, "frame");
        println!("{}", serde_json::to_string(&frame)?);
    }
    Ok(())
}
