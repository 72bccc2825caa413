//! The encode-and-preview workflow.
//!
//! [`Workflow`] holds the form (input text, size tier, correction tier) and at
//! most one generated [`Artifact`]. The three user intents map onto
//! [`Workflow::generate`], [`Workflow::save`] and [`Workflow::clear`]; the
//! encoder, the path prompt and the writer are passed in so the workflow runs
//! without any display layer.
//!
//! A failed generate leaves the previous artifact in place. The artifact and
//! its source text always come from the same successful generation.

use std::path::PathBuf;

use image::{GrayImage, ImageFormat};

use crate::encoder::Encoder;
use crate::error::{Result, WorkflowError};
use crate::params::{CorrectionTier, EncodeParams, SizeTier};
use crate::persist::{
    ImageWriter, SaveDialogRequest, SavePathPrompt, base_name, format_for_path,
    with_default_extension,
};

/// Initial and post-clear input value.
pub const DEFAULT_PLACEHOLDER: &str = "https://example.com";

/// Maximum number of input characters echoed back in status text.
pub const STATUS_PREVIEW_CHARS: usize = 50;

// =============================================================================
// STATE
// =============================================================================

/// Whether an artifact is currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Empty,
    Ready,
}

/// A successfully generated QR image and what it was made from.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub image: GrayImage,
    /// Trimmed text that was encoded.
    pub data: String,
    pub params: EncodeParams,
}

/// Form state plus the current artifact.
#[derive(Debug, Clone)]
pub struct Workflow {
    placeholder: String,
    input: String,
    size: SizeTier,
    correction: CorrectionTier,
    artifact: Option<Artifact>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

/// Result of a successful generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Input shortened to [`STATUS_PREVIEW_CHARS`] characters.
    pub preview: String,
}

impl Generated {
    pub fn status_line(&self) -> String {
        format!("QR code generated successfully for: {}", self.preview)
    }
}

/// Result of a save that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved {
        path: PathBuf,
        file_name: String,
        format: ImageFormat,
    },
    /// The user dismissed the path prompt.
    Cancelled,
}

impl SaveOutcome {
    /// Status bar text, or `None` to leave the bar as is.
    pub fn status_line(&self) -> Option<String> {
        match self {
            Self::Saved { file_name, .. } => Some(format!("QR code saved to: {file_name}")),
            Self::Cancelled => None,
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

impl Workflow {
    /// Fresh workflow with [`DEFAULT_PLACEHOLDER`] as input.
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Fresh workflow whose input starts as (and clears back to) `placeholder`.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            input: placeholder.clone(),
            placeholder,
            size: SizeTier::default(),
            correction: CorrectionTier::default(),
            artifact: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn size(&self) -> SizeTier {
        self.size
    }

    pub fn set_size(&mut self, size: SizeTier) {
        self.size = size;
    }

    pub fn correction(&self) -> CorrectionTier {
        self.correction
    }

    pub fn set_correction(&mut self, correction: CorrectionTier) {
        self.correction = correction;
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Text of the current artifact, if any.
    pub fn current_data(&self) -> Option<&str> {
        self.artifact.as_ref().map(|a| a.data.as_str())
    }

    pub fn state(&self) -> WorkflowState {
        if self.artifact.is_some() {
            WorkflowState::Ready
        } else {
            WorkflowState::Empty
        }
    }

    /// Save is allowed only while an artifact is held.
    pub fn can_save(&self) -> bool {
        self.state() == WorkflowState::Ready
    }

    /// Encode the current input.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::EmptyInput`] when the trimmed input is empty (the
    /// encoder is not called), [`WorkflowError::Generation`] when the encoder
    /// fails. Either way the previous artifact is kept.
    pub fn generate<E>(&mut self, encoder: &E) -> Result<Generated>
    where
        E: Encoder + ?Sized,
    {
        let data = self.input.trim();
        if data.is_empty() {
            tracing::warn!("generate rejected: empty input");
            return Err(WorkflowError::EmptyInput);
        }

        let params = EncodeParams::from_tiers(self.size, self.correction);
        let image = encoder.encode(data, &params).map_err(|e| {
            tracing::error!(error = %e, "QR code generation failed");
            WorkflowError::Generation {
                message: e.to_string(),
            }
        })?;

        tracing::info!(
            data = %data,
            size = %self.size,
            correction = %self.correction,
            width = image.width(),
            "QR code generated"
        );
        let preview = truncate_chars(data, STATUS_PREVIEW_CHARS);
        self.artifact = Some(Artifact {
            image,
            data: data.to_string(),
            params,
        });
        Ok(Generated { preview })
    }

    /// Write the current artifact to a user-chosen path.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NoArtifact`] when nothing has been generated (the
    /// prompt is not shown), [`WorkflowError::Persistence`] when the format
    /// cannot be determined or the write fails.
    pub fn save<P, W>(&self, prompt: &P, writer: &W) -> Result<SaveOutcome>
    where
        P: SavePathPrompt + ?Sized,
        W: ImageWriter + ?Sized,
    {
        let Some(artifact) = &self.artifact else {
            tracing::warn!("save rejected: nothing generated");
            return Err(WorkflowError::NoArtifact);
        };

        let request = SaveDialogRequest::default();
        let Some(chosen) = prompt.ask_save_path(&request) else {
            tracing::debug!("save cancelled");
            return Ok(SaveOutcome::Cancelled);
        };
        let path = with_default_extension(chosen, request.default_extension);

        let persistence_error = |message: String| {
            tracing::error!(path = %path.display(), error = %message, "failed to save QR code");
            WorkflowError::Persistence {
                path: path.clone(),
                message,
            }
        };

        let format = format_for_path(&path).map_err(|e| persistence_error(e.to_string()))?;
        writer
            .write_image(&artifact.image, &path, format)
            .map_err(|e| persistence_error(e.to_string()))?;

        tracing::info!(path = %path.display(), ?format, "QR code saved");
        Ok(SaveOutcome::Saved {
            file_name: base_name(&path),
            path,
            format,
        })
    }

    /// Drop the artifact and reset the form.
    pub fn clear(&mut self) {
        self.artifact = None;
        self.size = SizeTier::default();
        self.correction = CorrectionTier::default();
        self.input.clone_from(&self.placeholder);
        tracing::info!("form cleared");
    }
}

/// First `max` characters of `s`, with `...` appended when shortened.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
