use std::path::PathBuf;
use std::time::Duration;

use glyphshot_core::word::WordBox;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode the image. Words come from `words` when the capture already
    /// recognized them, otherwise from OCR over the image.
    Load {
        path: PathBuf,
        words: Option<PathBuf>,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    Loaded {
        path: PathBuf,
        image: egui::ColorImage,
        /// Normalized words in image pixel coordinates.
        words: Vec<WordBox>,
        elapsed: Duration,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
