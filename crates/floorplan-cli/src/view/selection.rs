use floorplan_core::{Coordinate, LocationSummary};

/// The currently selected location, if any. Owned by the view.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    current: Option<LocationSummary>,
}

impl Selection {
    /// Replace the current selection.
    pub(crate) fn select(&mut self, summary: LocationSummary) {
        tracing::debug!(code = %summary.code, "selection changed");
        self.current = Some(summary);
    }

    pub(crate) fn clear(&mut self) -> Option<LocationSummary> {
        self.current.take()
    }

    pub(crate) fn current(&self) -> Option<&LocationSummary> {
        self.current.as_ref()
    }

    pub(crate) fn coordinate(&self) -> Option<&Coordinate> {
        self.current.as_ref().map(|s| &s.coordinate)
    }
}
