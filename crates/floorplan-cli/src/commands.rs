//! One-shot command handlers. Each writes to stdout and returns.

use floorplan_core::{
    format_duration, lookup, select_cell, LocationSummary, RowCode, WalkTimeEstimator,
};

use crate::view::{render_floor_plan, render_summary, ViewConfig};

/// Resolve a typed location code.
///
/// # Errors
///
/// Returns the user-facing validation message if the code is rejected.
pub(crate) fn run_lookup(
    estimator: &WalkTimeEstimator,
    code: &str,
    json: bool,
) -> anyhow::Result<()> {
    let summary = lookup(code, estimator)?;
    print_summary(&summary, json)
}

/// Resolve a direct grid selection.
///
/// # Errors
///
/// Returns the user-facing validation message if the cell does not exist.
pub(crate) fn run_select(
    estimator: &WalkTimeEstimator,
    row: RowCode,
    aisle: u32,
    spot: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let summary = select_cell(estimator, row, aisle, spot)?;
    print_summary(&summary, json)
}

/// Draw the floor plan, optionally with a selected location.
///
/// # Errors
///
/// Returns the validation message if `select` is given and rejected.
pub(crate) fn run_map(
    estimator: &WalkTimeEstimator,
    view: ViewConfig,
    select: Option<&str>,
) -> anyhow::Result<()> {
    let summary = select.map(|code| lookup(code, estimator)).transpose()?;
    print!(
        "{}",
        render_floor_plan(
            estimator.shape(),
            view,
            summary.as_ref().map(|s| &s.coordinate)
        )
    );
    if let Some(summary) = &summary {
        println!();
        print!("{}", render_summary(summary));
    }
    Ok(())
}

/// Print the anchor table the estimator is using.
pub(crate) fn run_anchors(estimator: &WalkTimeEstimator) {
    let header = format!("{:<8}{:<9}WALK TIME", "CODE", "SECONDS");
    println!("{header}");
    for anchor in estimator.anchors() {
        println!(
            "{:<8}{:<9}{}",
            anchor.coordinate().code(),
            anchor.seconds,
            format_duration(i64::from(anchor.seconds))
        );
    }
    let (min, max) = estimator.bounds();
    println!();
    println!(
        "layout: {}; estimates are clamped to {min}-{max} seconds",
        estimator.shape().layout()
    );
}

fn print_summary(summary: &LocationSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_summary(summary));
    }
    Ok(())
}
