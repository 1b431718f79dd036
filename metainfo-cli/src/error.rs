use thiserror::Error;

use metainfo_xml::MetadataError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The metadata could not be read or written
    #[error("{0}")]
    Metadata(#[from] MetadataError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
