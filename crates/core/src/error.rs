//! Conversion error types.

use std::path::PathBuf;

use shabd_shared::AppError;
use thiserror::Error;

/// Conversion-related errors.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Amount text is not `<digits>` or `<digits>.<digits>`.
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),

    /// Amount digits do not fit in a 64-bit signed integer.
    #[error("Amount out of range: {0:?}")]
    AmountOutOfRange(String),

    /// Currency label resource could not be read.
    #[error("Failed to read currency labels from {}: {source}", .path.display())]
    LabelRead {
        /// Resource path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Currency label resource is not a JSON object of label records.
    #[error("Invalid currency labels: {0}")]
    LabelParse(#[from] serde_json::Error),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::MalformedAmount(_) | ConversionError::AmountOutOfRange(_) => {
                Self::Validation(err.to_string())
            }
            ConversionError::LabelRead { .. } | ConversionError::LabelParse(_) => {
                Self::Config(err.to_string())
            }
        }
    }
}
