use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use glyphshot_core::capture::read_words;
use glyphshot_core::error::Result;
use glyphshot_core::normalize::normalize;
use glyphshot_core::word::WordBox;
use glyphshot_core::ocr::{OcrEngine, Tesseract};

use crate::convert::to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    ocr: Tesseract,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("glyphshot-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, ocr);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    ocr: Tesseract,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Load { path, words } => {
                handle_load(&path, words.as_deref(), &ocr, &tx, &ctx)
            }
        }
    }
}

fn handle_load(
    path: &Path,
    words_path: Option<&Path>,
    ocr: &Tesseract,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let decoded = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to open {}: {e}", path.display()));
            return;
        }
    };
    send_log(
        tx,
        ctx,
        format!("Opened {} ({}x{})", path.display(), decoded.width(), decoded.height()),
    );

    let words = match load_words(path, words_path, ocr) {
        Ok(words) => words,
        Err(e) => {
            send_error(tx, ctx, format!("Could not recognize {}: {e}", path.display()));
            return;
        }
    };

    send(
        tx,
        ctx,
        WorkerResult::Loaded {
            path: path.to_path_buf(),
            image: to_color_image(&decoded),
            words,
            elapsed: start.elapsed(),
        },
    );
}

/// Boxes handed over by the capture are used as-is; only a plain image is
/// run through OCR.
fn load_words(path: &Path, words_path: Option<&Path>, ocr: &Tesseract) -> Result<Vec<WordBox>> {
    if let Some(words_path) = words_path {
        let words = read_words(words_path)?;
        if let Err(e) = std::fs::remove_file(words_path) {
            tracing::debug!("could not remove {}: {e}", words_path.display());
        }
        return Ok(words);
    }

    let raw = ocr.recognize(path)?;
    let total = raw.len();
    let words = normalize(raw);
    tracing::info!("{} of {} words kept after normalization", words.len(), total);
    Ok(words)
}
