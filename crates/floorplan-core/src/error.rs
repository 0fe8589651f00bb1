use thiserror::Error;

/// Errors raised while loading configuration or the anchor table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read anchors file {path}: {source}")]
    AnchorsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse anchors file: {0}")]
    AnchorsFileParse(#[from] serde_yaml::Error),

    #[error("anchor validation failed: {0}")]
    Validation(String),
}
