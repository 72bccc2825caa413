//! QR code generator workflow library.
//!
//! This crate holds everything the desktop application does besides drawing
//! widgets:
//!
//! - **Parameters** (`params`): size and error-correction tiers and their mapping
//!   to encoder parameters
//! - **Encoding** (`encoder`): the [`Encoder`] seam and the `qrcode`-backed
//!   implementation with quiet-zone rasterization
//! - **Persistence** (`persist`): the save dialog request, the [`SavePathPrompt`]
//!   and [`ImageWriter`] seams, format detection from extensions
//! - **Workflow** (`workflow`): the generate/save/clear state machine
//!
//! # Error Handling
//!
//! Workflow operations return [`WorkflowError`], built with `thiserror`.
//!
//! # Example
//!
//! ```no_run
//! use qrgen_core::{FsImageWriter, QrCodeEncoder, SizeTier, Workflow};
//! # use qrgen_core::{SaveDialogRequest, SavePathPrompt};
//! # struct Fixed;
//! # impl SavePathPrompt for Fixed {
//! #     fn ask_save_path(&self, _: &SaveDialogRequest) -> Option<std::path::PathBuf> {
//! #         Some("code.png".into())
//! #     }
//! # }
//!
//! let mut workflow = Workflow::new();
//! workflow.set_input("https://example.com");
//! workflow.set_size(SizeTier::Large);
//! let generated = workflow.generate(&QrCodeEncoder)?;
//! println!("{}", generated.status_line());
//! workflow.save(&Fixed, &FsImageWriter)?;
//! # Ok::<(), qrgen_core::WorkflowError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod params;
pub mod persist;
pub mod workflow;

pub use encoder::{Encoder, QrCodeEncoder, encode_symbol, rasterize, segments};
pub use error::{EncodeError, ErrorKind, PersistError, Result, Severity, WorkflowError};
pub use params::{
    CorrectionLevel, CorrectionTier, EncodeParams, SizeParams, SizeTier, resolve,
};
pub use persist::{
    DEFAULT_EXTENSION, FileFilter, FsImageWriter, ImageWriter, SaveDialogRequest,
    SavePathPrompt, base_name, format_for_path, with_default_extension,
};
pub use workflow::{
    Artifact, DEFAULT_PLACEHOLDER, Generated, STATUS_PREVIEW_CHARS, SaveOutcome, Workflow,
    WorkflowState, truncate_chars,
};

/// Re-exported so callers can name image types without a direct dependency.
pub use image::{GrayImage, ImageFormat};
