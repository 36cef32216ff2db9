use std::path::PathBuf;

use thiserror::Error;

/// Why a dataset could not be loaded. Always fatal for the load that
/// raised it; the caller decides whether to keep showing older data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("malformed Arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("unsupported layout: {0}")]
    Layout(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' must not be empty")]
    MissingValue { row: usize, column: String },

    #[error("row {row}: duplicate id {id}")]
    DuplicateId { row: usize, id: i64 },
}
