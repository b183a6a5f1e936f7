//! `<artifact>.provenance.json` sidecars for trace outputs: which code,
//! which scene parameters, and how the recorded search ended.

use anyhow::{Context, Result};
use gjk2d::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// How the recorded search ended.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchSummary {
    pub termination: String,
    pub verdict: String,
    pub steps: usize,
    pub frames: usize,
}

impl SearchSummary {
    pub fn new(out: &GjkOutput, frames: usize) -> Self {
        Self {
            termination: format!("{:?}", out.termination),
            verdict: format!("{:?}", out.verdict()),
            steps: out.steps,
            frames,
        }
    }
}

/// Metadata recorded next to an output artifact.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
    pub search: Option<SearchSummary>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tag: None,
            search: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_search(mut self, summary: SearchSummary) -> Self {
        self.search = Some(summary);
        self
    }
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "gjk2d_version": gjk2d::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "tag": payload.tag,
        "params": payload.params,
        "search": payload.search,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/trace.csv` → `out/trace.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|rev| rev.trim().to_string())
}
