use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use super::{RegionPicker, ScreenGrabber};
use crate::clipboard::ClipboardSink;
use crate::consts::{SCREENSHOT_MIME, SCREENSHOT_NAME_FORMAT};
use crate::error::Result;
use crate::normalize::normalize;
use crate::ocr::OcrEngine;
use crate::word::{reading_order_text, WordBox};

/// Parameters of one capture run.
#[derive(Clone, Debug)]
pub struct CaptureRequest {
    pub save_dir: PathBuf,
    /// Put the PNG on the clipboard before running OCR.
    pub copy_image: bool,
}

#[derive(Clone, Debug)]
pub enum CaptureOutcome {
    /// The user dismissed the region picker.
    Cancelled,
    Captured {
        image_path: PathBuf,
        /// Normalized words.
        words: Vec<WordBox>,
        /// Words in reading order, space-joined.
        text: String,
    },
}

/// Body of the notification sent after a successful capture.
///
/// Only the image goes to the clipboard; recognized text is printed and
/// handed to the viewer.
pub fn notification_body(copied_image: bool, has_text: bool) -> &'static str {
    match (copied_image, has_text) {
        (true, true) => "Image copied, text recognized",
        (true, false) => "Image copied, no text recognized",
        (false, true) => "Text recognized",
        (false, false) => "No text recognized",
    }
}

/// File name for a screenshot taken at `now`.
pub fn screenshot_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(now.format(SCREENSHOT_NAME_FORMAT).to_string())
}

/// Pick a region, grab it, optionally copy the image, and run OCR.
///
/// Collaborator failures are returned as-is and never retried.
pub fn capture_and_recognize(
    picker: &dyn RegionPicker,
    grabber: &dyn ScreenGrabber,
    ocr: &dyn OcrEngine,
    clipboard: &mut dyn ClipboardSink,
    request: &CaptureRequest,
) -> Result<CaptureOutcome> {
    let Some(region) = picker.pick()? else {
        return Ok(CaptureOutcome::Cancelled);
    };

    std::fs::create_dir_all(&request.save_dir)?;
    let image_path = screenshot_path(&request.save_dir, Local::now());

    grabber.grab(&region, &image_path)?;
    info!("Captured {region} to {}", image_path.display());

    if request.copy_image {
        let bytes = std::fs::read(&image_path)?;
        clipboard.copy_image(&bytes, SCREENSHOT_MIME)?;
    }

    let words = normalize(ocr.recognize(&image_path)?);
    let text = reading_order_text(&words);

    Ok(CaptureOutcome::Captured {
        image_path,
        words,
        text,
    })
}
