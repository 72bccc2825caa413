//! Message handler architecture.
//!
//! Handlers keep message handling out of the `App` struct. Each one owns a
//! single message type and gets the full [`AppState`]:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Workflow(msg) => {
//!             WorkflowHandler.handle_with_context(&mut self.state, msg, &self.services)
//!         }
//!         Message::Toast(msg) => ToastHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod toast;
mod workflow;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use toast::ToastHandler;
pub use workflow::WorkflowHandler;

/// Handles one message type against the application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

/// Handler that needs resources beyond [`AppState`].
pub trait MessageHandlerWithContext<M, C> {
    /// Handle a message with additional context.
    fn handle_with_context(&self, state: &mut AppState, msg: M, ctx: &C) -> Task<Message>;
}
