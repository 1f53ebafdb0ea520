mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glyphshot", about = "Screenshot a region and pull the text out of it")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML); defaults to ~/.config/glyphshot/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a region, screenshot it and recognize its text
    Capture(commands::capture::CaptureArgs),
    /// Recognize the text of an existing image
    Ocr(commands::ocr::OcrArgs),
    /// Print the default configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Capture(args) => commands::capture::run(args, config),
        Commands::Ocr(args) => commands::ocr::run(args, config),
        Commands::Config(args) => commands::config::run(args),
    }
}
