use crate::anchors::load_anchors;
use crate::app_config::AppConfig;
use crate::grid::Layout;
use crate::walk_time::WalkTimeEstimator;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function, so tests can use a
/// plain `HashMap` instead of the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let defaults = AppConfig::default();

    let layout = match lookup("FLOORPLAN_LAYOUT") {
        Ok(raw) => raw.parse::<Layout>()?,
        Err(_) => defaults.layout,
    };

    let anchors_path = lookup("FLOORPLAN_ANCHORS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let log_level = lookup("FLOORPLAN_LOG_LEVEL").unwrap_or(defaults.log_level);

    Ok(AppConfig {
        layout,
        anchors_path,
        log_level,
    })
}

/// Build the walk-time estimator for a configuration.
///
/// Uses the anchor file when `anchors_path` is set, otherwise the built-in
/// table.
///
/// # Errors
///
/// Returns `ConfigError` if the anchor file cannot be loaded or is invalid.
pub fn build_estimator(config: &AppConfig) -> Result<WalkTimeEstimator, ConfigError> {
    match &config.anchors_path {
        Some(path) => {
            let anchors = load_anchors(path, config.shape())?;
            tracing::info!(
                path = %path.display(),
                count = anchors.len(),
                "using anchor table override"
            );
            WalkTimeEstimator::new(config.shape(), &anchors)
        }
        None => Ok(WalkTimeEstimator::with_default_anchors(config.layout)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
