//! Native save dialog.

use std::path::PathBuf;

use qrgen_core::{SaveDialogRequest, SavePathPrompt};

/// [`SavePathPrompt`] backed by the platform file dialog.
///
/// Blocks the update loop until the user picks a path or cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSaveDialog;

impl SavePathPrompt for NativeSaveDialog {
    fn ask_save_path(&self, request: &SaveDialogRequest) -> Option<PathBuf> {
        let dialog = request.filters.iter().fold(
            rfd::FileDialog::new()
                .set_title(request.title)
                .set_file_name(&request.default_file_name),
            |dialog, filter| dialog.add_filter(filter.name, filter.extensions),
        );
        dialog.save_file()
    }
}
