//! Toast notification handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, ToastMessage};
use crate::state::AppState;

/// Handler for [`ToastMessage`].
pub struct ToastHandler;

impl MessageHandler<ToastMessage> for ToastHandler {
    fn handle(&self, state: &mut AppState, msg: ToastMessage) -> Task<Message> {
        match msg {
            ToastMessage::Dismiss => {
                state.toast = None;
            }
        }
        Task::none()
    }
}
