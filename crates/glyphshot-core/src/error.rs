use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Word list error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{tool}` not found in PATH")]
    ToolNotFound { tool: String },

    #[error("`{tool}` failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid region geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
