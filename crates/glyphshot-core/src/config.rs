use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capture::{Grim, Slurp};
use crate::clipboard::WlCopy;
use crate::consts::CONFIG_DIR_NAME;
use crate::error::{GlyphError, Result};
use crate::notify::{Notifier, NotifySend, Silent};
use crate::ocr::Tesseract;
use crate::overlay::OverlayStyle;
use crate::tools::ToolCommand;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    pub ocr: Tesseract,
    pub clipboard: ClipboardConfig,
    pub notify: NotifyConfig,
    pub overlay: OverlayStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub region_picker: ToolCommand,
    pub screenshot: ToolCommand,
    /// Where screenshots are written. Defaults to `~/Pictures/Screenshots`.
    pub save_dir: Option<PathBuf>,
    pub copy_image: bool,
    pub open_viewer: bool,
    pub viewer: ToolCommand,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            region_picker: ToolCommand::new("slurp"),
            screenshot: ToolCommand::new("grim"),
            save_dir: None,
            copy_image: true,
            open_viewer: true,
            viewer: ToolCommand::new("glyphshot-viewer"),
        }
    }
}

impl CaptureConfig {
    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(default_save_dir)
    }

    pub fn picker(&self) -> Slurp {
        Slurp {
            command: self.region_picker.clone(),
        }
    }

    pub fn grabber(&self) -> Grim {
        Grim {
            command: self.screenshot.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub command: ToolCommand,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: ToolCommand::new("wl-copy"),
        }
    }
}

impl ClipboardConfig {
    pub fn sink(&self) -> WlCopy {
        WlCopy::new(self.command.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub enabled: bool,
    pub command: ToolCommand,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: ToolCommand::new("notify-send"),
        }
    }
}

impl NotifyConfig {
    pub fn notifier(&self) -> Box<dyn Notifier + Send> {
        if self.enabled {
            Box::new(NotifySend::new(self.command.clone()))
        } else {
            Box::new(Silent)
        }
    }
}

/// `~/Pictures/Screenshots`, or the temp dir when there is no picture dir.
pub fn default_save_dir() -> PathBuf {
    dirs::picture_dir()
        .map(|p| p.join("Screenshots"))
        .unwrap_or_else(std::env::temp_dir)
}

/// `<config dir>/glyphshot/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join("config.toml"))
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GlyphError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GlyphError::Config(e.to_string()))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml(&contents)
    }
}
