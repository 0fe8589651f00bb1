use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::GridShape;
use crate::location::parse_location_input;
use crate::walk_time::{validate_anchors, Anchor};
use crate::ConfigError;

/// One measured walk time as written in `anchors.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorEntry {
    /// Location code including the spot, e.g. `"I-1-1"`.
    pub code: String,
    pub seconds: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnchorsFile {
    pub anchors: Vec<AnchorEntry>,
}

/// Load and validate an anchor table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_anchors(path: &Path, shape: &GridShape) -> Result<Vec<Anchor>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AnchorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let anchors = anchors_from_yaml(&content, shape)?;
    tracing::debug!(path = %path.display(), count = anchors.len(), "loaded anchor table");
    Ok(anchors)
}

/// Parse and validate an anchor table from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed, a code does not parse or
/// lacks a spot, or the resulting table fails [`validate_anchors`].
pub fn anchors_from_yaml(content: &str, shape: &GridShape) -> Result<Vec<Anchor>, ConfigError> {
    let file: AnchorsFile = serde_yaml::from_str(content)?;

    let anchors = file
        .anchors
        .iter()
        .map(|entry| entry_to_anchor(entry, shape))
        .collect::<Result<Vec<_>, _>>()?;

    validate_anchors(&anchors, shape)?;
    Ok(anchors)
}

fn entry_to_anchor(entry: &AnchorEntry, shape: &GridShape) -> Result<Anchor, ConfigError> {
    let coord = parse_location_input(&entry.code, shape).map_err(|e| {
        ConfigError::Validation(format!("anchor code '{}': {e}", entry.code))
    })?;
    let spot = coord.spot.ok_or_else(|| {
        ConfigError::Validation(format!(
            "anchor code '{}' must include a spot",
            entry.code
        ))
    })?;
    Ok(Anchor::new(coord.row, coord.aisle, spot, entry.seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Layout, RowCode};
    use crate::walk_time::DEFAULT_ANCHORS;

    #[test]
    fn parses_valid_table() {
        let yaml = r"
anchors:
  - code: I-1-1
    seconds: 70
  - code: g15
    seconds: 25
    notes: next to the dock door
";
        let anchors = anchors_from_yaml(yaml, Layout::Standard.shape()).unwrap();
        assert_eq!(
            anchors,
            vec![
                Anchor::new(RowCode::I, 1, 1, 70),
                Anchor::new(RowCode::G, 1, 5, 25),
            ]
        );
    }

    #[test]
    fn rejects_code_without_spot() {
        let yaml = "anchors:\n  - code: I-1\n    seconds: 70\n";
        let err = anchors_from_yaml(yaml, Layout::Standard.shape()).unwrap_err();
        assert!(err.to_string().contains("must include a spot"));
    }

    #[test]
    fn rejects_unparseable_code() {
        let yaml = "anchors:\n  - code: Z-1-1\n    seconds: 70\n";
        let err = anchors_from_yaml(yaml, Layout::Standard.shape()).unwrap_err();
        assert!(err.to_string().contains("anchor code 'Z-1-1'"));
    }

    #[test]
    fn rejects_code_outside_footprint() {
        let yaml = "anchors:\n  - code: G-9-1\n    seconds: 70\n";
        let err = anchors_from_yaml(yaml, Layout::Standard.shape()).unwrap_err();
        assert!(err.to_string().contains("outside the standard layout"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = anchors_from_yaml("anchors: 12", Layout::Standard.shape()).unwrap_err();
        assert!(matches!(err, ConfigError::AnchorsFileParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_anchors(Path::new("/nonexistent/anchors.yaml"), Layout::Standard.shape())
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/anchors.yaml"));
    }

    #[test]
    fn load_anchors_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("anchors.yaml");
        assert!(
            path.exists(),
            "anchors.yaml missing at {path:?}, required for this test"
        );
        let anchors = load_anchors(&path, Layout::Standard.shape()).unwrap();
        assert_eq!(anchors, DEFAULT_ANCHORS.to_vec());
    }
}
