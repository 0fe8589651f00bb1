//! Location codes: formatting, parsing, and footprint validation.
//!
//! Validation happens in two stages. [`parse_location_input`] checks syntax
//! and ranges only, so `G-9` parses fine; [`Coordinate::check_footprint`]
//! then rejects cells the warehouse does not have. [`resolve_location`] runs
//! both.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{GridShape, RowCode};

static HYPHENATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z])-([0-9]+)(?:-([0-9]+))?$").expect("valid hyphenated location regex")
});

// Single digits only: `I110` would be ambiguous otherwise.
static COMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z])([0-9])([0-9])?$").expect("valid compact location regex")
});

/// Validation failures for user-entered locations.
///
/// `Display` is the message shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Enter a location, for example I-2-7 or I27")]
    EmptyInput,

    #[error("Row {row} does not exist. Valid rows: {valid}")]
    InvalidRow { row: char, valid: String },

    #[error("Use ROW-AISLE-SPOT (e.g. I-2-7) or the compact form ROW+AISLE+SPOT (e.g. I27)")]
    InvalidFormat,

    #[error("Aisle must be between 1 and {max}")]
    InvalidAisle { max: u32 },

    #[error("Spot must be between 1 and {max}")]
    InvalidSpot { max: u32 },

    #[error("No storage at {code}")]
    NoStorageAtLocation { code: String },
}

/// A cell (`spot` absent) or a fully resolved storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: RowCode,
    pub aisle: u32,
    pub spot: Option<u32>,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: RowCode, aisle: u32, spot: Option<u32>) -> Self {
        Self { row, aisle, spot }
    }

    /// Build a coordinate from a direct grid interaction.
    ///
    /// Skips text parsing since the caller already holds the numbers, but
    /// applies the same range and footprint rules as [`resolve_location`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidRow`, `InvalidAisle`, `InvalidSpot` or
    /// `NoStorageAtLocation`.
    pub fn from_grid(
        shape: &GridShape,
        row: RowCode,
        aisle: u32,
        spot: Option<u32>,
    ) -> Result<Self, LocationError> {
        if !shape.contains_row(row) {
            return Err(invalid_row(shape, row.letter()));
        }
        let coord = Self::new(row, aisle, spot);
        coord.check_ranges(shape)?;
        coord.check_footprint(shape)?;
        Ok(coord)
    }

    /// The same cell with the spot dropped.
    #[must_use]
    pub const fn cell(self) -> Self {
        Self::new(self.row, self.aisle, None)
    }

    #[must_use]
    pub fn code(&self) -> String {
        format_code(self.row, self.aisle, self.spot)
    }

    /// Reject coordinates whose `(row, aisle)` is outside the footprint.
    ///
    /// # Errors
    ///
    /// Returns `NoStorageAtLocation` naming the `ROW-AISLE` cell.
    pub fn check_footprint(&self, shape: &GridShape) -> Result<(), LocationError> {
        if shape.is_valid_location(self.row, self.aisle) {
            Ok(())
        } else {
            Err(LocationError::NoStorageAtLocation {
                code: format_code(self.row, self.aisle, None),
            })
        }
    }

    fn check_ranges(&self, shape: &GridShape) -> Result<(), LocationError> {
        if !(1..=shape.aisle_count()).contains(&self.aisle) {
            return Err(LocationError::InvalidAisle {
                max: shape.aisle_count(),
            });
        }
        if let Some(spot) = self.spot {
            if !shape.is_valid_spot(spot) {
                return Err(LocationError::InvalidSpot {
                    max: shape.spot_count(),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code())
    }
}

/// Canonical text for a location: `ROW-AISLE` or `ROW-AISLE-SPOT`.
///
/// Performs no validation.
#[must_use]
pub fn format_code(row: RowCode, aisle: u32, spot: Option<u32>) -> String {
    match spot {
        Some(spot) => format!("{row}-{aisle}-{spot}"),
        None => format!("{row}-{aisle}"),
    }
}

/// Parse free-text input such as `I-2-7`, `i-2`, or `I27`.
///
/// Checks syntax and aisle/spot ranges but NOT the footprint; see
/// [`resolve_location`].
///
/// # Errors
///
/// Returns `EmptyInput`, `InvalidRow`, `InvalidFormat`, `InvalidAisle`, or
/// `InvalidSpot`, checked in that order.
pub fn parse_location_input(raw: &str, shape: &GridShape) -> Result<Coordinate, LocationError> {
    let input = raw.trim().to_uppercase();
    let Some(first) = input.chars().next() else {
        return Err(LocationError::EmptyInput);
    };

    if first.is_alphabetic() && !RowCode::from_letter(first).is_some_and(|r| shape.contains_row(r))
    {
        return Err(invalid_row(shape, first));
    }

    let caps = HYPHENATED
        .captures(&input)
        .or_else(|| COMPACT.captures(&input))
        .ok_or(LocationError::InvalidFormat)?;

    let row = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(RowCode::from_letter)
        .ok_or(LocationError::InvalidFormat)?;

    let aisle_max = shape.aisle_count();
    let aisle = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|a| (1..=aisle_max).contains(a))
        .ok_or(LocationError::InvalidAisle { max: aisle_max })?;

    let spot = match caps.get(3) {
        Some(m) => Some(
            m.as_str()
                .parse::<u32>()
                .ok()
                .filter(|s| shape.is_valid_spot(*s))
                .ok_or(LocationError::InvalidSpot {
                    max: shape.spot_count(),
                })?,
        ),
        None => None,
    };

    Ok(Coordinate::new(row, aisle, spot))
}

/// Parse input and reject cells outside the footprint.
///
/// # Errors
///
/// Any [`parse_location_input`] error, or `NoStorageAtLocation`.
pub fn resolve_location(raw: &str, shape: &GridShape) -> Result<Coordinate, LocationError> {
    let coord = parse_location_input(raw, shape)?;
    coord.check_footprint(shape)?;
    Ok(coord)
}

fn invalid_row(shape: &GridShape, row: char) -> LocationError {
    LocationError::InvalidRow {
        row,
        valid: shape.row_list(),
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
