//! Warehouse grid geometry.
//!
//! The floor is an L: row `I` runs the full aisle span while the lettered
//! rows stop short. Which rows exist and where the short rows stop depends on
//! the [`Layout`], so every validity question goes through a [`GridShape`].

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A lettered row of the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowCode {
    I,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl RowCode {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            RowCode::I => 'I',
            RowCode::A => 'A',
            RowCode::B => 'B',
            RowCode::C => 'C',
            RowCode::D => 'D',
            RowCode::E => 'E',
            RowCode::F => 'F',
            RowCode::G => 'G',
            RowCode::H => 'H',
        }
    }

    /// Map an uppercase letter to a row. Does not consult any layout.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'I' => Some(RowCode::I),
            'A' => Some(RowCode::A),
            'B' => Some(RowCode::B),
            'C' => Some(RowCode::C),
            'D' => Some(RowCode::D),
            'E' => Some(RowCode::E),
            'F' => Some(RowCode::F),
            'G' => Some(RowCode::G),
            'H' => Some(RowCode::H),
            _ => None,
        }
    }
}

impl std::fmt::Display for RowCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One row of the footprint and the last aisle that physically exists in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub row: RowCode,
    pub max_aisle: u32,
}

/// Named grid variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Eight rows (`I`, `A`–`G`), nine aisles, nine spots per cell.
    #[default]
    Standard,
    /// Nine rows (`I`, `A`–`H`), ten aisles, ten spots per cell.
    Extended,
}

impl Layout {
    #[must_use]
    pub fn shape(self) -> &'static GridShape {
        match self {
            Layout::Standard => &STANDARD,
            Layout::Extended => &EXTENDED,
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Standard => write!(f, "standard"),
            Layout::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Layout::Standard),
            "extended" => Ok(Layout::Extended),
            other => Err(ConfigError::InvalidEnvVar {
                var: "FLOORPLAN_LAYOUT".to_string(),
                reason: format!("unknown layout '{other}'; expected 'standard' or 'extended'"),
            }),
        }
    }
}

/// The set of `(row, aisle)` cells that exist, plus the aisle and spot ranges.
///
/// `rows` is in display order: row `I` first, then the lettered rows in
/// alphabetical order. The walk-time estimator indexes rows the other way
/// round (last displayed row is index 0), see [`GridShape::row_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridShape {
    layout: Layout,
    rows: &'static [RowBand],
    aisle_count: u32,
    spot_count: u32,
}

const fn band(row: RowCode, max_aisle: u32) -> RowBand {
    RowBand { row, max_aisle }
}

static STANDARD: GridShape = GridShape {
    layout: Layout::Standard,
    rows: &[
        band(RowCode::I, 9),
        band(RowCode::A, 6),
        band(RowCode::B, 6),
        band(RowCode::C, 6),
        band(RowCode::D, 6),
        band(RowCode::E, 5),
        band(RowCode::F, 5),
        band(RowCode::G, 5),
    ],
    aisle_count: 9,
    spot_count: 9,
};

// The 6/5 boundary sits one row lower than in the standard layout.
static EXTENDED: GridShape = GridShape {
    layout: Layout::Extended,
    rows: &[
        band(RowCode::I, 10),
        band(RowCode::A, 6),
        band(RowCode::B, 6),
        band(RowCode::C, 6),
        band(RowCode::D, 6),
        band(RowCode::E, 6),
        band(RowCode::F, 6),
        band(RowCode::G, 6),
        band(RowCode::H, 5),
    ],
    aisle_count: 10,
    spot_count: 10,
};

impl GridShape {
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn aisle_count(&self) -> u32 {
        self.aisle_count
    }

    #[must_use]
    pub fn spot_count(&self) -> u32 {
        self.spot_count
    }

    #[must_use]
    pub fn bands(&self) -> &'static [RowBand] {
        self.rows
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = RowCode> + '_ {
        self.rows.iter().map(|b| b.row)
    }

    #[must_use]
    pub fn contains_row(&self, row: RowCode) -> bool {
        self.rows.iter().any(|b| b.row == row)
    }

    #[must_use]
    pub fn max_aisle(&self, row: RowCode) -> Option<u32> {
        self.rows.iter().find(|b| b.row == row).map(|b| b.max_aisle)
    }

    /// Whether `(row, aisle)` lies inside the L-shaped footprint.
    ///
    /// Total over all inputs: rows outside this layout and aisles outside
    /// the row's band both yield `false`.
    #[must_use]
    pub fn is_valid_location(&self, row: RowCode, aisle: u32) -> bool {
        self.max_aisle(row)
            .is_some_and(|max| (1..=max).contains(&aisle))
    }

    #[must_use]
    pub fn is_valid_spot(&self, spot: u32) -> bool {
        (1..=self.spot_count).contains(&spot)
    }

    /// Estimator row index: the last displayed row is 0, row `I` is highest.
    #[must_use]
    pub fn row_index(&self, row: RowCode) -> Option<usize> {
        let pos = self.rows.iter().position(|b| b.row == row)?;
        Some(self.rows.len() - 1 - pos)
    }

    /// Largest possible row-index difference (7 for the standard layout).
    #[must_use]
    pub fn row_span(&self) -> u32 {
        span(u32::try_from(self.rows.len()).unwrap_or(u32::MAX))
    }

    /// Largest possible aisle difference (8 for the standard layout).
    #[must_use]
    pub fn aisle_span(&self) -> u32 {
        span(self.aisle_count)
    }

    /// Largest possible spot difference (8 for the standard layout).
    #[must_use]
    pub fn spot_span(&self) -> u32 {
        span(self.spot_count)
    }

    /// Every `(row, aisle)` inside the footprint, in display order.
    pub fn cells(&self) -> impl Iterator<Item = (RowCode, u32)> + '_ {
        self.rows
            .iter()
            .flat_map(|b| (1..=b.max_aisle).map(move |aisle| (b.row, aisle)))
    }

    /// Human-readable list of rows, e.g. `"I, A, B, C, D, E, F, G"`.
    #[must_use]
    pub fn row_list(&self) -> String {
        self.rows()
            .map(|r| r.letter().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// Never zero, so it is always safe to divide by.
fn span(count: u32) -> u32 {
    count.saturating_sub(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_footprint_matches_table() {
        let shape = Layout::Standard.shape();
        assert!(shape.is_valid_location(RowCode::I, 1));
        assert!(shape.is_valid_location(RowCode::I, 9));
        assert!(!shape.is_valid_location(RowCode::I, 10));
        assert!(!shape.is_valid_location(RowCode::I, 0));
        for row in [RowCode::A, RowCode::B, RowCode::C, RowCode::D] {
            assert!(shape.is_valid_location(row, 6), "{row}-6 should exist");
            assert!(!shape.is_valid_location(row, 7), "{row}-7 should not exist");
        }
        for row in [RowCode::E, RowCode::F, RowCode::G] {
            assert!(shape.is_valid_location(row, 5), "{row}-5 should exist");
            assert!(!shape.is_valid_location(row, 6), "{row}-6 should not exist");
        }
        assert!(!shape.is_valid_location(RowCode::H, 1));
    }

    #[test]
    fn extended_footprint_shifts_boundary_down_one_row() {
        let shape = Layout::Extended.shape();
        assert!(shape.is_valid_location(RowCode::I, 10));
        assert!(!shape.is_valid_location(RowCode::I, 11));
        assert!(shape.is_valid_location(RowCode::G, 6));
        assert!(!shape.is_valid_location(RowCode::G, 7));
        assert!(shape.is_valid_location(RowCode::H, 5));
        assert!(!shape.is_valid_location(RowCode::H, 6));
    }

    #[test]
    fn row_index_runs_from_last_row_to_i() {
        let shape = Layout::Standard.shape();
        assert_eq!(shape.row_index(RowCode::G), Some(0));
        assert_eq!(shape.row_index(RowCode::F), Some(1));
        assert_eq!(shape.row_index(RowCode::A), Some(6));
        assert_eq!(shape.row_index(RowCode::I), Some(7));
        assert_eq!(shape.row_index(RowCode::H), None);

        let extended = Layout::Extended.shape();
        assert_eq!(extended.row_index(RowCode::H), Some(0));
        assert_eq!(extended.row_index(RowCode::I), Some(8));
    }

    #[test]
    fn spans_follow_cardinality() {
        let standard = Layout::Standard.shape();
        assert_eq!(
            (standard.row_span(), standard.aisle_span(), standard.spot_span()),
            (7, 8, 8)
        );
        let extended = Layout::Extended.shape();
        assert_eq!(
            (extended.row_span(), extended.aisle_span(), extended.spot_span()),
            (8, 9, 9)
        );
    }

    #[test]
    fn cells_count_matches_footprint() {
        // 9 + 4 * 6 + 3 * 5
        assert_eq!(Layout::Standard.shape().cells().count(), 48);
        // 10 + 7 * 6 + 5
        assert_eq!(Layout::Extended.shape().cells().count(), 57);
        assert!(Layout::Standard
            .shape()
            .cells()
            .all(|(row, aisle)| Layout::Standard.shape().is_valid_location(row, aisle)));
    }

    #[test]
    fn layout_parses_case_insensitively() {
        assert_eq!("Extended".parse::<Layout>().unwrap(), Layout::Extended);
        assert_eq!(" standard ".parse::<Layout>().unwrap(), Layout::Standard);
        let err = "tall".parse::<Layout>().unwrap_err();
        assert!(err.to_string().contains("unknown layout 'tall'"));
    }

    #[test]
    fn row_list_names_active_rows() {
        assert_eq!(Layout::Standard.shape().row_list(), "I, A, B, C, D, E, F, G");
        assert!(Layout::Extended.shape().row_list().ends_with("G, H"));
    }

    #[test]
    fn row_code_letters_round_trip() {
        for letter in "IABCDEFGH".chars() {
            let row = RowCode::from_letter(letter).unwrap();
            assert_eq!(row.letter(), letter);
        }
        assert_eq!(RowCode::from_letter('Z'), None);
        assert_eq!(RowCode::from_letter('a'), None);
    }
}
