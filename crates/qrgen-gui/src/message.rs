//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and events flow through these message types.

use iced::keyboard;
use qrgen_core::{CorrectionTier, SizeTier};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Form and workflow messages.
    Workflow(WorkflowMessage),

    /// Toast notification messages.
    Toast(ToastMessage),

    /// Keyboard event.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation.
    Noop,
}

/// Messages that edit the form or trigger a workflow operation.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowMessage {
    /// Input text edited.
    InputChanged(String),
    /// Size tier selected.
    SizeSelected(SizeTier),
    /// Error-correction tier selected.
    CorrectionSelected(CorrectionTier),
    /// Generate button (or Enter in the input field).
    Generate,
    /// Save button.
    Save,
    /// Clear button.
    Clear,
}

/// Toast notification messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
}

impl From<WorkflowMessage> for Message {
    fn from(msg: WorkflowMessage) -> Self {
        Self::Workflow(msg)
    }
}
