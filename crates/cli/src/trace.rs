use anyhow::{Context, Result};
use gjk2d::prelude::*;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One row per frame: step index, simplex vertices (newest first, null when
/// absent) and the search direction.
pub fn trace_table(frames: &[DebugData]) -> PolarsResult<DataFrame> {
    let coord = |pick: fn(&Simplex) -> Option<Vec2>, x: bool| -> Vec<Option<f64>> {
        frames
            .iter()
            .map(|f| pick(&f.simplex).map(|p| if x { p.x } else { p.y }))
            .collect()
    };
    let step: Vec<u32> = (0..frames.len() as u32).collect();
    let simplex_len: Vec<u32> = frames.iter().map(|f| f.simplex.len() as u32).collect();
    let dir_x: Vec<f64> = frames.iter().map(|f| f.direction.x).collect();
    let dir_y: Vec<f64> = frames.iter().map(|f| f.direction.y).collect();
    df!(
        "step" => step,
        "simplex_len" => simplex_len,
        "a_x" => coord(Simplex::a, true),
        "a_y" => coord(Simplex::a, false),
        "b_x" => coord(Simplex::b, true),
        "b_y" => coord(Simplex::b, false),
        "c_x" => coord(Simplex::c, true),
        "c_y" => coord(Simplex::c, false),
        "dir_x" => dir_x,
        "dir_y" => dir_y
    )
}

/// Write as Parquet when the extension says so, CSV otherwise.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", out.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", out.display()))?;
    }
    Ok(())
}
