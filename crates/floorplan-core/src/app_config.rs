use std::path::PathBuf;

use crate::grid::{GridShape, Layout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub layout: Layout,
    /// Overrides the built-in anchor table when set.
    pub anchors_path: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    #[must_use]
    pub fn shape(&self) -> &'static GridShape {
        self.layout.shape()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Standard,
            anchors_path: None,
            log_level: "warn".to_string(),
        }
    }
}
