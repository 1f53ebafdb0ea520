use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use glyphshot_core::normalize::normalize;
use glyphshot_core::ocr::OcrEngine;
use glyphshot_core::word::reading_order_text;
use indicatif::{ProgressBar, ProgressStyle};

use super::load_config;
use crate::summary::print_word_table;

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Words in reading order on one line
    Text,
    /// Word boxes as a JSON array
    Json,
    /// Styled table of word boxes
    Table,
}

#[derive(Args)]
pub struct OcrArgs {
    /// Input image
    pub image: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Keep every word tesseract reports, including noise
    #[arg(long)]
    pub raw: bool,

    /// Tesseract language(s), e.g. "eng+deu" (overrides the config)
    #[arg(short, long)]
    pub lang: Option<String>,
}

pub fn run(args: &OcrArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(ref lang) = args.lang {
        config.ocr.language = Some(lang.clone());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Recognizing {}", args.image.display()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = config.ocr.recognize(&args.image);
    pb.finish_and_clear();

    let raw_words =
        result.with_context(|| format!("OCR failed for {}", args.image.display()))?;
    let words = if args.raw {
        raw_words
    } else {
        normalize(raw_words)
    };

    match args.format {
        FormatArg::Text => println!("{}", reading_order_text(&words)),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&words)?),
        FormatArg::Table => print_word_table(&args.image, &words),
    }

    Ok(())
}
