//! The result a view renders for a selected location.

use serde::Serialize;

use crate::grid::RowCode;
use crate::location::{resolve_location, Coordinate, LocationError};
use crate::walk_time::{format_duration, WalkTimeEstimator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    pub coordinate: Coordinate,
    /// Canonical code, e.g. `"I-2-7"`.
    pub code: String,
    /// `None` for cell-only selections.
    pub walk_seconds: Option<u32>,
    /// `walk_seconds` rendered for display, e.g. `"1 minute 10 seconds"`.
    pub walk_time: Option<String>,
}

impl LocationSummary {
    #[must_use]
    pub fn new(coordinate: Coordinate, estimator: &WalkTimeEstimator) -> Self {
        let walk_seconds = estimator.estimate_seconds(&coordinate);
        Self {
            coordinate,
            code: coordinate.code(),
            walk_seconds,
            walk_time: walk_seconds.map(|s| format_duration(i64::from(s))),
        }
    }
}

/// Resolve free-text search input against the estimator's grid.
///
/// # Errors
///
/// Any [`LocationError`], including `NoStorageAtLocation`.
pub fn lookup(raw: &str, estimator: &WalkTimeEstimator) -> Result<LocationSummary, LocationError> {
    let coord = resolve_location(raw, estimator.shape()).inspect_err(|e| {
        tracing::debug!(input = raw, error = %e, "location lookup rejected");
    })?;
    Ok(LocationSummary::new(coord, estimator))
}

/// Resolve a direct grid selection, bypassing text parsing.
///
/// # Errors
///
/// Any range or footprint [`LocationError`].
pub fn select_cell(
    estimator: &WalkTimeEstimator,
    row: RowCode,
    aisle: u32,
    spot: Option<u32>,
) -> Result<LocationSummary, LocationError> {
    let coord = Coordinate::from_grid(estimator.shape(), row, aisle, spot)?;
    Ok(LocationSummary::new(coord, estimator))
}
