use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use qrgen_core::{
    CorrectionTier, EncodeError, EncodeParams, Encoder, ErrorKind, GrayImage, ImageFormat,
    ImageWriter, PersistError, QrCodeEncoder, SaveDialogRequest, SaveOutcome, SavePathPrompt,
    SizeTier, Workflow, WorkflowError, WorkflowState,
};

// =============================================================================
// FAKES
// =============================================================================

#[derive(Default)]
struct CountingEncoder {
    calls: Cell<usize>,
}

impl Encoder for CountingEncoder {
    fn encode(&self, data: &str, params: &EncodeParams) -> Result<GrayImage, EncodeError> {
        self.calls.set(self.calls.get() + 1);
        QrCodeEncoder.encode(data, params)
    }
}

struct ScriptedPrompt {
    answer: Option<PathBuf>,
    asked: Cell<usize>,
}

impl ScriptedPrompt {
    fn choosing(path: &str) -> Self {
        Self {
            answer: Some(PathBuf::from(path)),
            asked: Cell::new(0),
        }
    }

    fn cancelling() -> Self {
        Self {
            answer: None,
            asked: Cell::new(0),
        }
    }
}

impl SavePathPrompt for ScriptedPrompt {
    fn ask_save_path(&self, request: &SaveDialogRequest) -> Option<PathBuf> {
        assert_eq!(request.default_extension, "png");
        self.asked.set(self.asked.get() + 1);
        self.answer.clone()
    }
}

#[derive(Default)]
struct RecordingWriter {
    writes: RefCell<Vec<(PathBuf, ImageFormat)>>,
    fail_with: Option<io::ErrorKind>,
}

impl ImageWriter for RecordingWriter {
    fn write_image(
        &self,
        _image: &GrayImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<(), PersistError> {
        if let Some(kind) = self.fail_with {
            return Err(io::Error::new(kind, "disk says no").into());
        }
        self.writes.borrow_mut().push((path.to_path_buf(), format));
        Ok(())
    }
}

fn ready_workflow(input: &str) -> Workflow {
    let mut workflow = Workflow::new();
    workflow.set_input(input);
    workflow.generate(&QrCodeEncoder).expect("generate");
    workflow
}

// =============================================================================
// GENERATE
// =============================================================================

#[test]
fn generate_example_url_with_defaults() {
    let mut workflow = Workflow::new();
    workflow.set_input("https://example.com");
    let generated = workflow.generate(&QrCodeEncoder).expect("generate");

    assert_eq!(workflow.state(), WorkflowState::Ready);
    assert!(workflow.can_save());
    assert_eq!(workflow.current_data(), Some("https://example.com"));
    insta::assert_snapshot!(
        generated.status_line(),
        @"QR code generated successfully for: https://example.com"
    );
}

#[test]
fn generate_trims_input() {
    let mut workflow = Workflow::new();
    workflow.set_input("   hello world \n");
    workflow.generate(&QrCodeEncoder).expect("generate");
    assert_eq!(workflow.current_data(), Some("hello world"));
}

#[test]
fn generate_truncates_long_status() {
    let mut workflow = Workflow::new();
    workflow.set_input("b".repeat(80));
    let generated = workflow.generate(&QrCodeEncoder).expect("generate");
    assert_eq!(generated.preview, format!("{}...", "b".repeat(50)));
    // The full text is still what was encoded.
    assert_eq!(workflow.current_data().map(str::len), Some(80));
}

#[test]
fn generate_empty_input_never_calls_encoder() {
    let encoder = CountingEncoder::default();
    for input in ["", "   ", "\t\n", " \r\n "] {
        let mut workflow = Workflow::new();
        workflow.set_input(input);
        let err = workflow.generate(&encoder).expect_err("empty input");
        assert_eq!(err, WorkflowError::EmptyInput);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(workflow.state(), WorkflowState::Empty);
    }
    assert_eq!(encoder.calls.get(), 0);
}

#[test]
fn generate_over_capacity_fails() {
    let mut workflow = Workflow::new();
    workflow.set_input("a".repeat(4000));
    workflow.set_size(SizeTier::Small);
    workflow.set_correction(CorrectionTier::Highest);

    let err = workflow.generate(&QrCodeEncoder).expect_err("too long");
    assert_eq!(err.kind(), ErrorKind::Generation);
    assert!(err.to_string().starts_with("Failed to generate QR code: "));
    assert_eq!(workflow.state(), WorkflowState::Empty);
    assert!(workflow.artifact().is_none());
}

#[test]
fn failed_generate_keeps_previous_artifact() {
    let mut workflow = ready_workflow("first");
    let before = workflow.artifact().cloned().expect("artifact");

    workflow.set_input("z".repeat(4000));
    workflow.set_correction(CorrectionTier::Highest);
    let err = workflow.generate(&QrCodeEncoder).expect_err("too long");

    assert_eq!(err.kind(), ErrorKind::Generation);
    assert_eq!(workflow.state(), WorkflowState::Ready);
    assert_eq!(workflow.artifact(), Some(&before));
    assert_eq!(workflow.current_data(), Some("first"));
}

#[test]
fn successful_generate_replaces_artifact() {
    let mut workflow = ready_workflow("first");
    workflow.set_input("second");
    workflow.set_size(SizeTier::Large);
    workflow.generate(&QrCodeEncoder).expect("generate");

    let artifact = workflow.artifact().expect("artifact");
    assert_eq!(artifact.data, "second");
    assert_eq!(artifact.params.module_size, 15);
    assert_eq!(artifact.params.border, 6);
}

#[test]
fn generate_uses_selected_tiers() {
    let encoder = CountingEncoder::default();
    let mut workflow = Workflow::new();
    workflow.set_input("tiers");
    workflow.set_size(SizeTier::Small);
    workflow.set_correction(CorrectionTier::High);
    workflow.generate(&encoder).expect("generate");

    let artifact = workflow.artifact().expect("artifact");
    assert_eq!(
        artifact.params,
        EncodeParams::from_tiers(SizeTier::Small, CorrectionTier::High)
    );
    assert_eq!(artifact.image.width() % 8, 0);
    assert_eq!(encoder.calls.get(), 1);
}

// =============================================================================
// SAVE
// =============================================================================

#[test]
fn save_without_artifact_never_prompts() {
    let workflow = Workflow::new();
    let prompt = ScriptedPrompt::choosing("/tmp/never.png");
    let writer = RecordingWriter::default();

    let err = workflow.save(&prompt, &writer).expect_err("no artifact");
    assert_eq!(err, WorkflowError::NoArtifact);
    assert_eq!(prompt.asked.get(), 0);
    assert!(writer.writes.borrow().is_empty());
}

#[test]
fn save_cancel_is_a_no_op() {
    let workflow = ready_workflow("cancel me");
    let prompt = ScriptedPrompt::cancelling();
    let writer = RecordingWriter::default();

    let outcome = workflow.save(&prompt, &writer).expect("cancel is not an error");
    assert_eq!(outcome, SaveOutcome::Cancelled);
    assert_eq!(prompt.asked.get(), 1);
    assert!(writer.writes.borrow().is_empty());
    assert_eq!(workflow.state(), WorkflowState::Ready);
}

#[test]
fn save_png_reports_base_name() {
    let workflow = ready_workflow("https://example.com");
    let prompt = ScriptedPrompt::choosing("/home/user/codes/example.png");
    let writer = RecordingWriter::default();

    let outcome = workflow.save(&prompt, &writer).expect("save");
    assert_eq!(
        writer.writes.borrow().as_slice(),
        &[(
            PathBuf::from("/home/user/codes/example.png"),
            ImageFormat::Png
        )]
    );
    insta::assert_snapshot!(
        outcome.status_line().expect("status"),
        @"QR code saved to: example.png"
    );
}

#[test]
fn save_jpeg_by_extension() {
    let workflow = ready_workflow("jpeg");
    let writer = RecordingWriter::default();
    workflow
        .save(&ScriptedPrompt::choosing("photo.jpg"), &writer)
        .expect("save");
    assert_eq!(writer.writes.borrow()[0].1, ImageFormat::Jpeg);
}

#[test]
fn save_appends_default_extension() {
    let workflow = ready_workflow("no extension");
    let writer = RecordingWriter::default();
    let outcome = workflow
        .save(&ScriptedPrompt::choosing("/tmp/qr"), &writer)
        .expect("save");

    match outcome {
        SaveOutcome::Saved {
            path,
            file_name,
            format,
        } => {
            assert_eq!(path, PathBuf::from("/tmp/qr.png"));
            assert_eq!(file_name, "qr.png");
            assert_eq!(format, ImageFormat::Png);
        }
        SaveOutcome::Cancelled => panic!("expected a save"),
    }
}

#[test]
fn save_unknown_extension_is_persistence_error() {
    let workflow = ready_workflow("unknown");
    let writer = RecordingWriter::default();
    let err = workflow
        .save(&ScriptedPrompt::choosing("code.qrcode"), &writer)
        .expect_err("unknown format");

    assert_eq!(err.kind(), ErrorKind::Persistence);
    assert!(writer.writes.borrow().is_empty());
    assert_eq!(workflow.state(), WorkflowState::Ready);
}

#[test]
fn save_write_failure_keeps_artifact() {
    let workflow = ready_workflow("write failure");
    let writer = RecordingWriter {
        fail_with: Some(io::ErrorKind::PermissionDenied),
        ..RecordingWriter::default()
    };
    let err = workflow
        .save(&ScriptedPrompt::choosing("/root/locked.png"), &writer)
        .expect_err("write fails");

    match &err {
        WorkflowError::Persistence { path, message } => {
            assert_eq!(path, &PathBuf::from("/root/locked.png"));
            assert!(message.contains("disk says no"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status_line(), Some("Error saving QR code"));
    assert!(workflow.can_save());
}

// =============================================================================
// CLEAR
// =============================================================================

#[test]
fn clear_resets_everything() {
    let mut workflow = ready_workflow("clear me");
    workflow.set_size(SizeTier::Large);
    workflow.set_correction(CorrectionTier::Low);

    workflow.clear();

    assert_eq!(workflow.state(), WorkflowState::Empty);
    assert!(!workflow.can_save());
    assert_eq!(workflow.size(), SizeTier::Medium);
    assert_eq!(workflow.correction(), CorrectionTier::Medium);
    assert_eq!(workflow.input(), "https://example.com");
}

#[test]
fn clear_on_fresh_workflow_stays_empty() {
    let mut workflow = Workflow::new();
    workflow.clear();
    assert_eq!(workflow.state(), WorkflowState::Empty);
}

#[test]
fn save_after_clear_fails() {
    let mut workflow = ready_workflow("gone soon");
    workflow.clear();
    let prompt = ScriptedPrompt::choosing("x.png");
    let err = workflow
        .save(&prompt, &RecordingWriter::default())
        .expect_err("cleared");
    assert_eq!(err, WorkflowError::NoArtifact);
    assert_eq!(prompt.asked.get(), 0);
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn non_blank_input_generates(input in "[ ]{0,3}[a-zA-Z0-9:/._-]{1,60}[ ]{0,3}") {
        let mut workflow = Workflow::new();
        workflow.set_input(input.clone());
        let generated = workflow.generate(&QrCodeEncoder);
        prop_assert!(generated.is_ok());
        prop_assert_eq!(workflow.state(), WorkflowState::Ready);
        prop_assert_eq!(workflow.current_data(), Some(input.trim()));
    }

    #[test]
    fn blank_input_is_rejected(input in "[ \t\r\n]{0,12}") {
        let encoder = CountingEncoder::default();
        let mut workflow = Workflow::new();
        workflow.set_input(input);
        prop_assert_eq!(workflow.generate(&encoder), Err(WorkflowError::EmptyInput));
        prop_assert_eq!(encoder.calls.get(), 0);
    }
}
