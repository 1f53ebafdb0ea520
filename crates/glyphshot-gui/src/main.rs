mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

use clap::Parser;
use glyphshot_core::config::AppConfig;
use glyphshot_core::overlay::OverlayMode;

#[derive(Parser)]
#[command(name = "glyphshot-viewer", about = "Show a screenshot with selectable OCR text")]
#[command(version)]
struct Args {
    /// Screenshot to open
    image: Option<PathBuf>,

    /// Word boxes recognized by `glyphshot capture` (JSON); skips OCR
    #[arg(long, requires = "image")]
    words: Option<PathBuf>,

    /// Config file (TOML); defaults to ~/.config/glyphshot/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overlay style (overrides the config)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<OverlayMode>,
}

fn parse_mode(s: &str) -> Result<OverlayMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "spotlight" => Ok(OverlayMode::Spotlight),
        "highlight" => Ok(OverlayMode::Highlight),
        other => Err(format!("unknown overlay mode `{other}` (spotlight, highlight)")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(mode) = args.mode {
        config.overlay.mode = mode;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Screenshot OCR"),
        ..Default::default()
    };

    eframe::run_native(
        "glyphshot-viewer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::ViewerApp::new(
                &cc.egui_ctx,
                config,
                args.image,
                args.words,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
