//! Repository errors.

/// Alias for `Result<T, HwError>`.
pub type HwResult<T> = Result<T, HwError>;

/// Errors raised by repositories when reference data cannot be found or loaded.
#[derive(Debug, thiserror::Error)]
pub enum HwError {
    /// No table with the requested name exists.
    #[error("table not found: \"{0}\"")]
    TableNotFound(String),

    /// No creature with the requested name exists.
    #[error("creature not found: \"{0}\"")]
    CreatureNotFound(String),

    /// The treasure reference tables have not been loaded.
    #[error("treasure tables unavailable: {0}")]
    TreasureTablesUnavailable(String),

    /// A data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A data file did not contain valid JSON for its expected shape.
    #[error("invalid data in {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
