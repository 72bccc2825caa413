//! Form and workflow message handler.
//!
//! Every workflow error stops here: it is logged by the workflow, shown as a
//! toast, and reflected in the status bar. Nothing propagates further.

use iced::Task;
use qrgen_core::{SaveOutcome, WorkflowError};

use super::MessageHandlerWithContext;
use crate::component::ToastState;
use crate::message::{Message, WorkflowMessage};
use crate::service::preview_handle;
use crate::state::{AppState, STATUS_CLEARED, Services};

/// Handler for [`WorkflowMessage`].
pub struct WorkflowHandler;

impl MessageHandlerWithContext<WorkflowMessage, Services> for WorkflowHandler {
    fn handle_with_context(
        &self,
        state: &mut AppState,
        msg: WorkflowMessage,
        services: &Services,
    ) -> Task<Message> {
        match msg {
            WorkflowMessage::InputChanged(input) => state.workflow.set_input(input),
            WorkflowMessage::SizeSelected(size) => state.workflow.set_size(size),
            WorkflowMessage::CorrectionSelected(correction) => {
                state.workflow.set_correction(correction);
            }
            WorkflowMessage::Generate => generate(state, services),
            WorkflowMessage::Save => save(state, services),
            WorkflowMessage::Clear => clear(state),
        }
        Task::none()
    }
}

fn generate(state: &mut AppState, services: &Services) {
    match state.workflow.generate(services.encoder.as_ref()) {
        Ok(generated) => {
            if let Some(artifact) = state.workflow.artifact() {
                let size = state.settings.display.preview_size();
                state.preview = Some(preview_handle(&artifact.image, size));
            }
            state.status = generated.status_line();
            state.toast = None;
        }
        Err(err) => report(state, &err),
    }
}

fn save(state: &mut AppState, services: &Services) {
    match state
        .workflow
        .save(services.prompt.as_ref(), services.writer.as_ref())
    {
        Ok(outcome) => {
            if let Some(status) = outcome.status_line() {
                state.status = status;
            }
            if let SaveOutcome::Saved { path, .. } = &outcome {
                state.toast = Some(ToastState::success(format!(
                    "QR code saved successfully to: {}",
                    path.display()
                )));
            }
        }
        Err(err) => report(state, &err),
    }
}

fn clear(state: &mut AppState) {
    state.workflow.clear();
    state.preview = None;
    state.toast = None;
    state.status = STATUS_CLEARED.to_string();
}

/// Turn an error into a toast and, where applicable, a status update.
fn report(state: &mut AppState, err: &WorkflowError) {
    state.toast = Some(ToastState::new(err.severity().into(), err.to_string()));
    if let Some(status) = err.status_line() {
        state.status = status.to_string();
    }
}
