//! Approximate walk time from the entrance to a storage spot.
//!
//! A handful of spots have measured walk times ("anchors"). Everything else
//! is estimated by inverse-distance weighting over the anchors in a
//! normalised `(row, aisle, spot)` space, then clamped to the measured range
//! so the estimate never extrapolates.

use serde::{Deserialize, Serialize};

use crate::grid::{GridShape, Layout, RowCode};
use crate::location::Coordinate;
use crate::ConfigError;

const EPSILON: f64 = 1e-6;
const POWER: i32 = 2;

/// A spot with a measured walk time from the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub row: RowCode,
    pub aisle: u32,
    pub spot: u32,
    pub seconds: u32,
}

impl Anchor {
    #[must_use]
    pub const fn new(row: RowCode, aisle: u32, spot: u32, seconds: u32) -> Self {
        Self {
            row,
            aisle,
            spot,
            seconds,
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.aisle, Some(self.spot))
    }

    fn is_at(&self, row: RowCode, aisle: u32, spot: u32) -> bool {
        self.row == row && self.aisle == aisle && self.spot == spot
    }
}

/// Measured walk times, valid in both built-in layouts.
pub const DEFAULT_ANCHORS: [Anchor; 5] = [
    Anchor::new(RowCode::I, 1, 1, 70),
    Anchor::new(RowCode::G, 1, 5, 25),
    Anchor::new(RowCode::D, 3, 5, 45),
    Anchor::new(RowCode::A, 6, 9, 85),
    Anchor::new(RowCode::I, 9, 9, 100),
];

#[derive(Debug, Clone)]
struct Sample {
    anchor: Anchor,
    row_index: usize,
}

/// IDW estimator bound to one grid shape and one anchor table.
#[derive(Debug, Clone)]
pub struct WalkTimeEstimator {
    shape: &'static GridShape,
    samples: Vec<Sample>,
    min_seconds: u32,
    max_seconds: u32,
}

impl WalkTimeEstimator {
    /// Build an estimator over a custom anchor table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the table is empty, has a zero
    /// walk time, repeats a spot, or names a spot outside the footprint.
    pub fn new(shape: &'static GridShape, anchors: &[Anchor]) -> Result<Self, ConfigError> {
        validate_anchors(anchors, shape)?;
        Ok(Self::from_validated(shape, anchors))
    }

    /// Estimator over [`DEFAULT_ANCHORS`].
    #[must_use]
    pub fn with_default_anchors(layout: Layout) -> Self {
        Self::from_validated(layout.shape(), &DEFAULT_ANCHORS)
    }

    fn from_validated(shape: &'static GridShape, anchors: &[Anchor]) -> Self {
        let samples = anchors
            .iter()
            .filter_map(|&anchor| {
                shape
                    .row_index(anchor.row)
                    .map(|row_index| Sample { anchor, row_index })
            })
            .collect::<Vec<_>>();
        let min_seconds = samples.iter().map(|s| s.anchor.seconds).min().unwrap_or(0);
        let max_seconds = samples.iter().map(|s| s.anchor.seconds).max().unwrap_or(0);
        Self {
            shape,
            samples,
            min_seconds,
            max_seconds,
        }
    }

    #[must_use]
    pub fn shape(&self) -> &'static GridShape {
        self.shape
    }

    pub fn anchors(&self) -> impl Iterator<Item = &Anchor> + '_ {
        self.samples.iter().map(|s| &s.anchor)
    }

    /// Smallest and largest measured walk time; every estimate lies between.
    #[must_use]
    pub fn bounds(&self) -> (u32, u32) {
        (self.min_seconds, self.max_seconds)
    }

    /// Estimated walk time in whole seconds.
    ///
    /// Returns `None` for cell-only coordinates: a cell has no single walk
    /// time. Also `None` for a row this layout does not have.
    #[must_use]
    pub fn estimate_seconds(&self, coord: &Coordinate) -> Option<u32> {
        let spot = coord.spot?;
        if let Some(hit) = self
            .samples
            .iter()
            .find(|s| s.anchor.is_at(coord.row, coord.aisle, spot))
        {
            return Some(hit.anchor.seconds);
        }

        let row_index = self.shape.row_index(coord.row)?;
        if self.samples.is_empty() {
            return None;
        }

        let (weighted, total) =
            self.samples
                .iter()
                .fold((0.0_f64, 0.0_f64), |(weighted, total), sample| {
                    let distance = self.distance(row_index, coord.aisle, spot, sample);
                    let weight = 1.0 / (distance + EPSILON).powi(POWER);
                    (
                        weighted + weight * f64::from(sample.anchor.seconds),
                        total + weight,
                    )
                });

        let prediction = (weighted / total).clamp(
            f64::from(self.min_seconds),
            f64::from(self.max_seconds),
        );
        // Clamped to a u32 range above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seconds = prediction.round() as u32;
        Some(seconds)
    }

    // Each axis is scaled by its full span so all three contribute on [0, 1].
    fn distance(&self, row_index: usize, aisle: u32, spot: u32, sample: &Sample) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let row_delta = row_index.abs_diff(sample.row_index) as f64;
        let row = row_delta / f64::from(self.shape.row_span());
        let aisle =
            f64::from(aisle.abs_diff(sample.anchor.aisle)) / f64::from(self.shape.aisle_span());
        let spot =
            f64::from(spot.abs_diff(sample.anchor.spot)) / f64::from(self.shape.spot_span());
        (row * row + aisle * aisle + spot * spot).sqrt()
    }
}

/// Check an anchor table against a grid shape.
///
/// # Errors
///
/// Returns `ConfigError::Validation` describing the first problem found.
pub fn validate_anchors(anchors: &[Anchor], shape: &GridShape) -> Result<(), ConfigError> {
    if anchors.is_empty() {
        return Err(ConfigError::Validation(
            "at least one anchor is required".to_string(),
        ));
    }

    for (i, anchor) in anchors.iter().enumerate() {
        let coord = anchor.coordinate();
        if anchor.seconds == 0 {
            return Err(ConfigError::Validation(format!(
                "anchor {coord} has a walk time of 0 seconds"
            )));
        }
        if !shape.is_valid_location(anchor.row, anchor.aisle) || !shape.is_valid_spot(anchor.spot)
        {
            return Err(ConfigError::Validation(format!(
                "anchor {coord} is outside the {} layout",
                shape.layout()
            )));
        }
        if anchors[..i]
            .iter()
            .any(|a| a.is_at(anchor.row, anchor.aisle, anchor.spot))
        {
            return Err(ConfigError::Validation(format!(
                "duplicate anchor: {coord}"
            )));
        }
    }

    Ok(())
}

/// Render seconds as e.g. `"1 minute 10 seconds"`.
///
/// Negative input is treated as zero. A zero minutes or seconds component is
/// omitted, except that zero overall renders as `"0 seconds"`.
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    let total = seconds.max(0);
    let minutes = total / 60;
    let secs = total % 60;

    let mut parts = Vec::with_capacity(2);
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }
    if secs > 0 || minutes == 0 {
        parts.push(pluralize(secs, "second"));
    }
    parts.join(" ")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
#[path = "walk_time_test.rs"]
mod tests;
