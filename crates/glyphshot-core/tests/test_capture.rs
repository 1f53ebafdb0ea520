mod common;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::TimeZone;
use common::word;
use glyphshot_core::capture::{
    capture_and_recognize, notification_body, read_words, screenshot_path, words_path_for,
    write_words, CaptureOutcome, CaptureRequest, Geometry, RegionPicker, ScreenGrabber,
};
use glyphshot_core::clipboard::ClipboardSink;
use glyphshot_core::error::{GlyphError, Result};
use glyphshot_core::ocr::OcrEngine;
use glyphshot_core::word::WordBox;

struct FixedPicker(Option<Geometry>);

impl RegionPicker for FixedPicker {
    fn pick(&self) -> Result<Option<Geometry>> {
        Ok(self.0)
    }
}

#[derive(Default)]
struct FakeGrabber {
    grabbed: RefCell<Vec<(Geometry, PathBuf)>>,
}

impl ScreenGrabber for FakeGrabber {
    fn grab(&self, region: &Geometry, output: &Path) -> Result<()> {
        std::fs::write(output, b"\x89PNG fake")?;
        self.grabbed.borrow_mut().push((*region, output.to_path_buf()));
        Ok(())
    }
}

struct FakeOcr(Vec<WordBox>);

impl OcrEngine for FakeOcr {
    fn recognize(&self, _image: &Path) -> Result<Vec<WordBox>> {
        Ok(self.0.clone())
    }
}

struct FailingOcr;

impl OcrEngine for FailingOcr {
    fn recognize(&self, _image: &Path) -> Result<Vec<WordBox>> {
        Err(GlyphError::ToolFailed {
            tool: "tesseract".into(),
            status: "exit status: 1".into(),
            stderr: "Error opening data file".into(),
        })
    }
}

#[derive(Default)]
struct RecordingClipboard {
    images: Vec<(Vec<u8>, String)>,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn copy_image(&mut self, bytes: &[u8], mime: &str) -> Result<()> {
        self.images.push((bytes.to_vec(), mime.to_string()));
        Ok(())
    }
}

fn region() -> Geometry {
    Geometry {
        x: 10,
        y: 20,
        width: 300,
        height: 200,
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn test_geometry_parses_slurp_output() {
    let g: Geometry = "10,20 300x200\n".parse().unwrap();
    assert_eq!(g, region());
    assert_eq!(g.to_string(), "10,20 300x200");
}

#[test]
fn test_geometry_accepts_negative_origin() {
    let g: Geometry = "-1920,0 640x480".parse().unwrap();
    assert_eq!(g.x, -1920);
}

#[test]
fn test_geometry_rejects_garbage() {
    assert!(matches!(
        "garbage".parse::<Geometry>(),
        Err(GlyphError::InvalidGeometry(_))
    ));
    assert!("10,20 300".parse::<Geometry>().is_err());
    assert!(matches!(
        "10,20 0x200".parse::<Geometry>(),
        Err(GlyphError::InvalidDimensions { .. })
    ));
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[test]
fn test_cancelled_selection_is_a_clean_abort() {
    let dir = tempfile::tempdir().unwrap();
    let grabber = FakeGrabber::default();
    let mut clipboard = RecordingClipboard::default();
    let request = CaptureRequest {
        save_dir: dir.path().join("shots"),
        copy_image: true,
    };

    let outcome = capture_and_recognize(
        &FixedPicker(None),
        &grabber,
        &FailingOcr,
        &mut clipboard,
        &request,
    )
    .unwrap();

    assert!(matches!(outcome, CaptureOutcome::Cancelled));
    assert!(grabber.grabbed.borrow().is_empty());
    assert!(clipboard.images.is_empty());
    assert!(!request.save_dir.exists());
}

#[test]
fn test_capture_copies_image_and_normalizes_words() {
    let dir = tempfile::tempdir().unwrap();
    let grabber = FakeGrabber::default();
    let mut clipboard = RecordingClipboard::default();
    let ocr = FakeOcr(vec![
        word("World", 80, 0, 40, 10, 1),
        word("~", 60, 0, 5, 10, 1),
        word("Hello", 0, 0, 40, 10, 1),
    ]);
    let request = CaptureRequest {
        save_dir: dir.path().join("shots"),
        copy_image: true,
    };

    let outcome = capture_and_recognize(
        &FixedPicker(Some(region())),
        &grabber,
        &ocr,
        &mut clipboard,
        &request,
    )
    .unwrap();

    let CaptureOutcome::Captured {
        image_path,
        words,
        text,
    } = outcome
    else {
        panic!("expected a capture");
    };

    assert!(image_path.starts_with(&request.save_dir));
    assert!(image_path.exists());
    assert_eq!(grabber.grabbed.borrow()[0].0, region());
    assert_eq!(words.len(), 2);
    assert_eq!(text, "Hello World");
    assert_eq!(clipboard.images.len(), 1);
    assert_eq!(clipboard.images[0].0, b"\x89PNG fake");
    assert_eq!(clipboard.images[0].1, "image/png");
}

#[test]
fn test_image_copy_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let request = CaptureRequest {
        save_dir: dir.path().to_path_buf(),
        copy_image: false,
    };

    capture_and_recognize(
        &FixedPicker(Some(region())),
        &FakeGrabber::default(),
        &FakeOcr(Vec::new()),
        &mut clipboard,
        &request,
    )
    .unwrap();

    assert!(clipboard.images.is_empty());
}

#[test]
fn test_ocr_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let request = CaptureRequest {
        save_dir: dir.path().to_path_buf(),
        copy_image: false,
    };

    let err = capture_and_recognize(
        &FixedPicker(Some(region())),
        &FakeGrabber::default(),
        &FailingOcr,
        &mut RecordingClipboard::default(),
        &request,
    )
    .unwrap_err();

    assert!(err.to_string().contains("Error opening data file"), "got: {err}");
}

#[test]
fn test_screenshot_path_uses_timestamp() {
    let at = chrono::Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    let path = screenshot_path(Path::new("/tmp/shots"), at);
    assert_eq!(path, Path::new("/tmp/shots/screenshot_20240309_140507.png"));
}

// ---------------------------------------------------------------------------
// Viewer handoff
// ---------------------------------------------------------------------------

#[test]
fn test_word_list_reaches_viewer_unselected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");
    let mut hello = word("Hello", 0, 0, 40, 10, 1).with_confidence(93.0);
    hello.selected = true;
    let words = vec![hello, word("World", 50, 0, 40, 10, 1)];

    write_words(&path, &words).unwrap();
    let loaded = read_words(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].text, "Hello");
    assert_eq!(loaded[0].line_id, words[0].line_id);
    assert!((loaded[0].confidence - 93.0).abs() < 1e-6);
    assert!(loaded.iter().all(|w| !w.selected));
}

#[test]
fn test_corrupt_word_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");
    std::fs::write(&path, "[{\"text\": 1}").unwrap();
    assert!(matches!(read_words(&path), Err(GlyphError::Json(_))));
}

#[test]
fn test_words_path_is_named_after_screenshot() {
    let path = words_path_for(Path::new("/shots/screenshot_20240102_030405.png"));
    assert!(path.starts_with(std::env::temp_dir()));
    assert_eq!(
        path.file_name().unwrap(),
        "glyphshot-screenshot_20240102_030405.words.json"
    );
}

#[test]
fn test_notification_only_claims_what_was_copied() {
    assert_eq!(notification_body(true, true), "Image copied, text recognized");
    assert_eq!(notification_body(true, false), "Image copied, no text recognized");
    assert_eq!(notification_body(false, true), "Text recognized");
    assert_eq!(notification_body(false, false), "No text recognized");
}
