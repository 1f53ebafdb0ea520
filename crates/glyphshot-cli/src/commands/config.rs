use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glyphshot_core::config::{default_config_path, AppConfig};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default configuration as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = AppConfig::default().to_toml()?;

    if let Some(ref path) = args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        if let Some(path) = default_config_path() {
            println!("# Save as {}", path.display());
        }
        print!("{}", toml_str);
    }

    Ok(())
}
