//! Terminal view of the floor plan.
//!
//! One renderer serves every presentation variant; [`ViewConfig`] picks the
//! orientation and how much chrome to draw for the device class.

mod render;
mod selection;

use clap::ValueEnum;

pub(crate) use render::{render_floor_plan, render_summary};
pub(crate) use selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Orientation {
    /// Row I at the top, aisles left to right
    #[default]
    Standard,
    /// Aisles as lines, rows as columns
    Rotated,
    /// Turned 180 degrees, as seen from the entrance
    Entrance,
}

impl Orientation {
    /// `rotate` toggles between standard and rotated.
    #[must_use]
    pub fn rotate(self) -> Self {
        match self {
            Orientation::Rotated => Orientation::Standard,
            Orientation::Standard | Orientation::Entrance => Orientation::Rotated,
        }
    }

    /// `entrance` toggles between standard and entrance view.
    #[must_use]
    pub fn entrance(self) -> Self {
        match self {
            Orientation::Entrance => Orientation::Standard,
            Orientation::Standard | Orientation::Rotated => Orientation::Entrance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceClass {
    Phone,
    Tablet,
    Desktop,
}

/// Source of the coarse device classification.
pub trait DeviceClassifier {
    fn classify(&self) -> DeviceClass;
}

/// A class chosen up front, e.g. from `--device`.
impl DeviceClassifier for DeviceClass {
    fn classify(&self) -> DeviceClass {
        *self
    }
}

/// Classifies by terminal width, read from `COLUMNS`.
#[derive(Debug, Clone, Copy)]
pub struct TerminalWidthClassifier {
    columns: Option<u16>,
}

impl TerminalWidthClassifier {
    const PHONE_MAX_COLUMNS: u16 = 60;
    const TABLET_MAX_COLUMNS: u16 = 100;

    #[must_use]
    pub fn new(columns: Option<u16>) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("COLUMNS")
                .ok()
                .and_then(|c| c.trim().parse().ok()),
        )
    }
}

impl DeviceClassifier for TerminalWidthClassifier {
    fn classify(&self) -> DeviceClass {
        match self.columns {
            Some(c) if c < Self::PHONE_MAX_COLUMNS => DeviceClass::Phone,
            Some(c) if c < Self::TABLET_MAX_COLUMNS => DeviceClass::Tablet,
            _ => DeviceClass::Desktop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub orientation: Orientation,
    pub device: DeviceClass,
}

impl ViewConfig {
    /// An explicit `device` wins over the classifier.
    pub fn resolve(
        orientation: Orientation,
        device: Option<DeviceClass>,
        classifier: &dyn DeviceClassifier,
    ) -> Self {
        Self {
            orientation,
            device: device.unwrap_or_else(|| classifier.classify()),
        }
    }
}
