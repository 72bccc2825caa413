//! Application state.
//!
//! [`AppState`] owns the workflow plus everything the view needs that the
//! workflow does not know about: status text, the pending toast, the preview
//! handle. [`Services`] bundles the capabilities the workflow calls out to.

use qrgen_core::{
    Encoder, FsImageWriter, ImageWriter, QrCodeEncoder, SavePathPrompt, Workflow, WorkflowState,
};

use crate::component::ToastState;
use crate::service::NativeSaveDialog;
use crate::settings::Settings;

/// Status text shown at startup.
pub const STATUS_READY: &str = "Ready to generate QR codes";

/// Status text shown after Clear.
pub const STATUS_CLEARED: &str = "Form cleared - Ready to generate QR codes";

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Form and current artifact.
    pub workflow: Workflow,
    /// Status bar text.
    pub status: String,
    /// Pending notification, if any.
    pub toast: Option<ToastState>,
    /// Scaled preview of the current artifact.
    pub preview: Option<iced::widget::image::Handle>,
    /// Settings read at startup.
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            workflow: Workflow::with_placeholder(settings.general.placeholder.clone()),
            status: STATUS_READY.to_string(),
            toast: None,
            preview: None,
            settings,
        }
    }

    /// Whether the Save button is enabled.
    pub fn can_save(&self) -> bool {
        self.workflow.state() == WorkflowState::Ready
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// External capabilities used by the workflow handler.
pub struct Services {
    pub encoder: Box<dyn Encoder>,
    pub prompt: Box<dyn SavePathPrompt>,
    pub writer: Box<dyn ImageWriter>,
}

impl Services {
    /// Production wiring: `qrcode` encoder, native dialog, filesystem writer.
    pub fn native() -> Self {
        Self {
            encoder: Box::new(QrCodeEncoder),
            prompt: Box::new(NativeSaveDialog),
            writer: Box::new(FsImageWriter),
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
