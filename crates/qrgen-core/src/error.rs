//! Unified error types for the qrgen-core crate.
//!
//! Every workflow operation returns [`WorkflowError`] on failure. The lower
//! level capability errors ([`EncodeError`], [`PersistError`]) are folded into
//! it at the operation boundary so the UI only has one type to match on.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors raised by the generate/save workflow.
///
/// Each error ends the operation that triggered it and nothing else; the
/// workflow remains usable afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkflowError {
    // =========================================================================
    // GENERATE
    // =========================================================================
    /// The input was empty after trimming whitespace.
    #[error("Please enter a URL or text to generate QR code")]
    EmptyInput,

    /// The encoder rejected the input (e.g. data too long for the level).
    #[error("Failed to generate QR code: {message}")]
    Generation {
        /// Message reported by the encoder.
        message: String,
    },

    // =========================================================================
    // SAVE
    // =========================================================================
    /// Save was requested before anything was generated.
    #[error("No QR code to save. Please generate one first.")]
    NoArtifact,

    /// Writing the image to disk failed.
    #[error("Failed to save QR code: {message}")]
    Persistence {
        /// Destination that could not be written.
        path: PathBuf,
        /// Message reported by the writer.
        message: String,
    },
}

/// Category of a [`WorkflowError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input validation failed before any capability was called.
    Validation,
    /// The encoding capability failed.
    Generation,
    /// Save attempted without a generated artifact.
    NoArtifact,
    /// The persistence capability failed.
    Persistence,
}

/// How loudly the UI should report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl WorkflowError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::Validation,
            Self::Generation { .. } => ErrorKind::Generation,
            Self::NoArtifact => ErrorKind::NoArtifact,
            Self::Persistence { .. } => ErrorKind::Persistence,
        }
    }

    /// Notification severity for this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoArtifact => Severity::Warning,
            Self::EmptyInput | Self::Generation { .. } | Self::Persistence { .. } => {
                Severity::Error
            }
        }
    }

    /// Status bar text after this error, or `None` to leave the bar as is.
    pub fn status_line(&self) -> Option<&'static str> {
        match self {
            Self::EmptyInput | Self::NoArtifact => None,
            Self::Generation { .. } => Some("Error generating QR code"),
            Self::Persistence { .. } => Some("Error saving QR code"),
        }
    }
}

/// Failure reported by an [`Encoder`](crate::encoder::Encoder).
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Error from the `qrcode` crate.
    #[error(transparent)]
    Qr(#[from] qrcode::types::QrError),

    /// The module size or border cannot be rasterized.
    #[error("invalid raster parameters: {0}")]
    Raster(String),
}

/// Failure reported by an [`ImageWriter`](crate::persist::ImageWriter).
#[derive(Error, Debug)]
pub enum PersistError {
    /// Error from the `image` crate (unsupported format, encoder failure).
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// I/O error while writing.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_taxonomy() {
        assert_eq!(WorkflowError::EmptyInput.kind(), ErrorKind::Validation);
        assert_eq!(WorkflowError::NoArtifact.kind(), ErrorKind::NoArtifact);
        let generation = WorkflowError::Generation {
            message: "data too long".to_string(),
        };
        assert_eq!(generation.kind(), ErrorKind::Generation);
        let persistence = WorkflowError::Persistence {
            path: PathBuf::from("/nope/qr.png"),
            message: "permission denied".to_string(),
        };
        assert_eq!(persistence.kind(), ErrorKind::Persistence);
    }

    #[test]
    fn test_messages_carry_underlying_reason() {
        let err = WorkflowError::Generation {
            message: "data too long".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to generate QR code: data too long");
        assert_eq!(err.status_line(), Some("Error generating QR code"));
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_no_artifact_is_a_warning() {
        assert_eq!(WorkflowError::NoArtifact.severity(), Severity::Warning);
        assert_eq!(WorkflowError::NoArtifact.status_line(), None);
    }
}
