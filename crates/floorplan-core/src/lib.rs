//! Warehouse floor-plan model: grid geometry, location codes, and walk-time
//! estimates. Pure functions only; views live in `floorplan-cli`.

pub mod anchors;
pub mod app_config;
pub mod config;
pub mod error;
pub mod grid;
pub mod location;
pub mod lookup;
pub mod walk_time;

pub use anchors::{load_anchors, AnchorEntry};
pub use app_config::AppConfig;
pub use config::{build_estimator, load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use grid::{GridShape, Layout, RowBand, RowCode};
pub use location::{
    format_code, parse_location_input, resolve_location, Coordinate, LocationError,
};
pub use lookup::{lookup, select_cell, LocationSummary};
pub use walk_time::{format_duration, Anchor, WalkTimeEstimator, DEFAULT_ANCHORS};
