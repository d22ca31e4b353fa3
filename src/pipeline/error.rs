//! Error types for feature selection.
//!
//! Shape and parameter problems are reported before any entropy is computed.
//! Each variant carries the column names or parameter values involved so the
//! caller can point at the offending input.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by the information measures, dataset validation and the selector.
#[derive(Debug, Error)]
pub enum FcbfError {
    /// Two columns that must be aligned have different lengths.
    #[error("length mismatch: column '{left}' has {left_len} values but '{right}' has {right_len}")]
    LengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    /// A column has no observations.
    #[error("column '{name}' has no observations")]
    EmptyColumn { name: String },

    /// The dataset contains no feature columns.
    #[error("dataset has no feature columns")]
    EmptyDataset,

    /// Two feature columns share the same name.
    #[error("duplicate feature name '{name}'")]
    DuplicateFeature { name: String },

    /// The symmetric uncertainty threshold lies outside [0, 1].
    #[error("su_threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    /// The logarithm base is not a positive finite number other than 1.
    #[error("logarithm base must be positive, finite and not 1, got {0}")]
    InvalidBase(f64),

    /// The logarithm base text is neither a number nor a natural-log alias.
    #[error("logarithm base must be a number or 'e', got '{0}'")]
    UnparsableBase(String),

    /// A float column contains non-integral values and needs discretizing first.
    #[error("column '{name}' is continuous ({dtype}); discretize it before selection")]
    ContinuousColumn { name: String, dtype: String },

    /// The column type cannot be treated as categorical.
    #[error("column '{name}' has unsupported type {dtype}")]
    UnsupportedDtype { name: String, dtype: String },

    /// A named column does not exist in the input frame.
    #[error("column '{name}' not found. Available columns: {available:?}")]
    ColumnNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result alias for the selection core.
pub type Result<T> = std::result::Result<T, FcbfError>;
