use std::fmt::Write as _;

use floorplan_core::{Coordinate, GridShape, LocationSummary};

use super::{DeviceClass, Orientation, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    /// No storage here: outside the L.
    Void,
    Cell,
    Selected,
}

impl Glyph {
    fn draw(self, device: DeviceClass) -> &'static str {
        match (device, self) {
            (DeviceClass::Phone, Glyph::Void) => " ",
            (DeviceClass::Phone, Glyph::Cell) => ".",
            (DeviceClass::Phone, Glyph::Selected) => "*",
            (_, Glyph::Void) => "   ",
            (_, Glyph::Cell) => "[ ]",
            (_, Glyph::Selected) => "[*]",
        }
    }
}

/// Lines of glyphs with labels on both axes, before any reorientation.
struct Canvas {
    line_labels: Vec<String>,
    column_labels: Vec<String>,
    glyphs: Vec<Vec<Glyph>>,
}

impl Canvas {
    fn build(shape: &GridShape, selected: Option<&Coordinate>) -> Self {
        let aisles = 1..=shape.aisle_count();
        let glyphs = shape
            .rows()
            .map(|row| {
                aisles
                    .clone()
                    .map(|aisle| {
                        if !shape.is_valid_location(row, aisle) {
                            Glyph::Void
                        } else if selected.is_some_and(|c| c.row == row && c.aisle == aisle) {
                            Glyph::Selected
                        } else {
                            Glyph::Cell
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            line_labels: shape.rows().map(|r| r.to_string()).collect(),
            column_labels: aisles.map(|a| a.to_string()).collect(),
            glyphs,
        }
    }

    fn transpose(self) -> Self {
        let columns = self.column_labels.len();
        let glyphs = (0..columns)
            .map(|c| self.glyphs.iter().map(|line| line[c]).collect())
            .collect();
        Self {
            line_labels: self.column_labels,
            column_labels: self.line_labels,
            glyphs,
        }
    }

    fn turn_around(mut self) -> Self {
        self.line_labels.reverse();
        self.column_labels.reverse();
        self.glyphs.reverse();
        for line in &mut self.glyphs {
            line.reverse();
        }
        self
    }

    fn orient(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Standard => self,
            Orientation::Rotated => self.transpose(),
            Orientation::Entrance => self.turn_around(),
        }
    }
}

/// Draw the floor plan as text, marking the selected cell if any.
///
/// Cells outside the footprint are left blank. Phones get single-character
/// cells and no column header; desktops also get a legend.
pub(crate) fn render_floor_plan(
    shape: &GridShape,
    view: ViewConfig,
    selected: Option<&Coordinate>,
) -> String {
    let canvas = Canvas::build(shape, selected).orient(view.orientation);
    let label_width = canvas
        .line_labels
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(1);
    let separator = if view.device == DeviceClass::Phone { "" } else { " " };

    let mut out = String::new();
    if view.device != DeviceClass::Phone {
        let header = canvas
            .column_labels
            .iter()
            .map(|l| format!("{l:^3}"))
            .collect::<Vec<_>>()
            .join(separator);
        push_line(&mut out, &format!("{:label_width$} {header}", ""));
    }

    for (label, line) in canvas.line_labels.iter().zip(&canvas.glyphs) {
        let cells = line
            .iter()
            .map(|g| g.draw(view.device))
            .collect::<Vec<_>>()
            .join(separator);
        push_line(&mut out, &format!("{label:>label_width$} {cells}"));
    }

    if view.device == DeviceClass::Desktop {
        out.push('\n');
        push_line(&mut out, "[ ] storage cell   [*] selected   blank: no storage");
    }

    out
}

/// Describe a selected location for display under the map.
pub(crate) fn render_summary(summary: &LocationSummary) -> String {
    let coord = &summary.coordinate;
    let mut out = String::new();
    push_line(&mut out, &summary.code);
    let _ = write!(out, "  row {}, aisle {}", coord.row, coord.aisle);
    if let Some(spot) = coord.spot {
        let _ = write!(out, ", spot {spot}");
    }
    out.push('\n');
    match &summary.walk_time {
        Some(walk) => push_line(&mut out, &format!("  approximate walk time: {walk}")),
        None => push_line(&mut out, "  approximate walk time: select a spot for an estimate"),
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
