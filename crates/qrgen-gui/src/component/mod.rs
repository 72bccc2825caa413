//! Reusable view components.

mod section;
mod status_bar;
mod toast;

pub use section::section;
pub use status_bar::view_status_bar;
pub use toast::{ToastState, ToastType, view_toast};
