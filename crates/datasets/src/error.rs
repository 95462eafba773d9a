//! Error types for dataset construction.

use thiserror::Error;

/// Errors that can occur when building or loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Points and labels differ in length.
    #[error("Length mismatch: {points} points but {labels} labels")]
    LengthMismatch { points: usize, labels: usize },

    /// The recorded point count disagrees with the stored points.
    #[error("Point count mismatch: header says {declared}, found {actual}")]
    CountMismatch { declared: usize, actual: usize },

    /// A label other than 0 or 1.
    #[error("Label {label} at index {index} is not binary")]
    InvalidLabel { index: usize, label: u8 },

    /// No generator is registered under this name.
    #[error("Unknown dataset: {name}")]
    UnknownDataset { name: String },

    /// A generator was asked for zero points.
    #[error("Dataset cannot be empty")]
    EmptyDataset,

    /// Configuration could not be parsed.
    #[error("Invalid dataset config: {reason}")]
    Config { reason: String },
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Config {
            reason: err.to_string(),
        }
    }
}
