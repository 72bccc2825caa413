//! Services that talk to the operating system or prepare data for the view.

mod dialog;
mod preview;

pub use dialog::NativeSaveDialog;
pub use preview::{preview_handle, scale_for_preview};
