//! Error types for the explorer.
//!
//! Startup errors ([`DataError`], [`ConfigError`]) are fatal and surfaced
//! to the caller before the interactive loop starts. Per-frame render
//! faults are handled inside the loop (see `explorer.rs`) and never reach
//! this taxonomy.

use crate::config::IndicatorKey;
use thiserror::Error;

/// Malformed or missing input data, detected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The dataset has no rows.
    #[error("dataset is empty")]
    EmptyTable,
    /// A required column is absent from the dataset.
    #[error("missing required column: {0}")]
    MissingColumn(String),
    /// A column's length disagrees with the rest of the table.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        /// Column name
        column: String,
        /// Rows found
        actual: usize,
        /// Rows expected
        expected: usize,
    },
}

/// Invalid startup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The indicator list is empty.
    #[error("indicator list must not be empty")]
    EmptyIndicators,
    /// The same indicator key appears twice.
    #[error("duplicate indicator key: {0}")]
    DuplicateKey(IndicatorKey),
    /// An indicator references a column that does not exist in the dataset.
    #[error("indicator '{key}' references unknown field: {field}")]
    UnknownField {
        /// Indicator key
        key: IndicatorKey,
        /// Missing source field
        field: String,
    },
    /// Hit tolerance must be positive.
    #[error("hit tolerance must be positive, got {0}")]
    NonPositiveTolerance(f32),
    /// Panel region height must be positive.
    #[error("panel region height must be positive, got {0}")]
    NonPositiveRegionHeight(f32),
}

/// Any fatal startup error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Input data error
    #[error(transparent)]
    Data(#[from] DataError),
}
