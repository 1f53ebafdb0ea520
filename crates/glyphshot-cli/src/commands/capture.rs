use std::ffi::OsString;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use glyphshot_core::capture::{
    capture_and_recognize, notification_body, words_path_for, write_words, CaptureOutcome,
    CaptureRequest,
};
use glyphshot_core::config::AppConfig;
use glyphshot_core::notify::Notifier;
use glyphshot_core::tools::spawn_detached;
use tracing::{info, warn};

use super::load_config;

#[derive(Args)]
pub struct CaptureArgs {
    /// Do not open the viewer after capturing
    #[arg(long)]
    pub no_view: bool,

    /// Do not copy the screenshot to the clipboard
    #[arg(long)]
    pub no_copy_image: bool,

    /// Directory for the screenshot (overrides the config)
    #[arg(long)]
    pub save_dir: Option<std::path::PathBuf>,
}

pub fn run(args: &CaptureArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let notifier = config.notify.notifier();

    match capture(args, &config, config_path, notifier.as_ref()) {
        Ok(()) => Ok(()),
        Err(e) => {
            notifier.notify("Screenshot failed", &format!("{e:#}"));
            Err(e)
        }
    }
}

fn capture(
    args: &CaptureArgs,
    config: &AppConfig,
    config_path: Option<&Path>,
    notifier: &dyn Notifier,
) -> Result<()> {
    let request = CaptureRequest {
        save_dir: args
            .save_dir
            .clone()
            .unwrap_or_else(|| config.capture.save_dir()),
        copy_image: config.capture.copy_image && !args.no_copy_image,
    };

    let outcome = capture_and_recognize(
        &config.capture.picker(),
        &config.capture.grabber(),
        &config.ocr,
        &mut config.clipboard.sink(),
        &request,
    )?;

    let (image_path, words, text) = match outcome {
        CaptureOutcome::Cancelled => {
            info!("Region selection cancelled");
            return Ok(());
        }
        CaptureOutcome::Captured {
            image_path,
            words,
            text,
        } => (image_path, words, text),
    };

    println!("{text}");
    info!("{} words recognized in {}", words.len(), image_path.display());

    notifier.notify(
        "Screenshot",
        notification_body(request.copy_image, !words.is_empty()),
    );

    if config.capture.open_viewer && !args.no_view {
        // The viewer shows these boxes as-is instead of running OCR again.
        let words_path = words_path_for(&image_path);
        write_words(&words_path, &words)
            .with_context(|| format!("Failed to write {}", words_path.display()))?;

        let mut extra = vec![
            OsString::from(image_path.as_os_str()),
            "--words".into(),
            words_path.clone().into_os_string(),
        ];
        if let Some(path) = config_path {
            extra.push("--config".into());
            extra.push(path.as_os_str().to_owned());
        }
        if let Err(e) = spawn_detached(&config.capture.viewer, &extra) {
            warn!("Could not open viewer: {e}");
            let _ = std::fs::remove_file(&words_path);
        }
    }

    Ok(())
}
