//! Persistence and path-selection capabilities.
//!
//! Saving involves two collaborators: a [`SavePathPrompt`] that asks the user
//! where to write (the native dialog in the GUI, a scripted fake in tests) and
//! an [`ImageWriter`] that encodes the image to disk.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};

use crate::error::PersistError;

/// Extension appended when the chosen path has none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Title of the save dialog.
pub const SAVE_DIALOG_TITLE: &str = "Save QR Code As";

// =============================================================================
// PATH SELECTION
// =============================================================================

/// One entry of the save dialog's file type list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Label shown in the dialog.
    pub name: &'static str,
    /// Extensions without the leading dot; `*` matches everything.
    pub extensions: &'static [&'static str],
}

/// What the save dialog should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogRequest {
    pub title: &'static str,
    pub default_extension: &'static str,
    pub default_file_name: String,
    pub filters: Vec<FileFilter>,
}

impl Default for SaveDialogRequest {
    fn default() -> Self {
        Self {
            title: SAVE_DIALOG_TITLE,
            default_extension: DEFAULT_EXTENSION,
            default_file_name: format!("qrcode.{DEFAULT_EXTENSION}"),
            filters: vec![
                FileFilter {
                    name: "PNG files",
                    extensions: &["png"],
                },
                FileFilter {
                    name: "JPEG files",
                    extensions: &["jpg", "jpeg"],
                },
                FileFilter {
                    name: "All files",
                    extensions: &["*"],
                },
            ],
        }
    }
}

/// Asks the user for a destination path.
pub trait SavePathPrompt {
    /// Returns the chosen path, or `None` if the user cancelled.
    fn ask_save_path(&self, request: &SaveDialogRequest) -> Option<PathBuf>;
}

// =============================================================================
// WRITING
// =============================================================================

/// Writes an image to disk.
pub trait ImageWriter {
    /// Encode `image` as `format` and write it to `path`.
    fn write_image(
        &self,
        image: &GrayImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<(), PersistError>;
}

/// [`ImageWriter`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageWriter;

impl ImageWriter for FsImageWriter {
    fn write_image(
        &self,
        image: &GrayImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<(), PersistError> {
        image.save_with_format(path, format)?;
        Ok(())
    }
}

/// Append `extension` when `path` has none.
pub fn with_default_extension(path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(extension)
    }
}

/// Image format implied by the file extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat, PersistError> {
    Ok(ImageFormat::from_path(path)?)
}

/// File name component of `path`, for status messages.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = SaveDialogRequest::default();
        assert_eq!(request.title, "Save QR Code As");
        assert_eq!(request.default_extension, "png");
        let names: Vec<_> = request.filters.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["PNG files", "JPEG files", "All files"]);
    }

    #[test]
    fn test_default_extension_only_when_missing() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/code"), "png"),
            PathBuf::from("/tmp/code.png")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/code.jpg"), "png"),
            PathBuf::from("/tmp/code.jpg")
        );
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            format_for_path(Path::new("a.png")).expect("png"),
            ImageFormat::Png
        );
        assert_eq!(
            format_for_path(Path::new("a.JPG")).expect("jpg"),
            ImageFormat::Jpeg
        );
        assert_eq!(
            format_for_path(Path::new("a.jpeg")).expect("jpeg"),
            ImageFormat::Jpeg
        );
        assert!(format_for_path(Path::new("a.qr")).is_err());
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/home/me/codes/site.png")), "site.png");
    }
}
