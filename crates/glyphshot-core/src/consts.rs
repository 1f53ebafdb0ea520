/// Minimum trimmed length of a word kept by the normalizer.
pub const MIN_WORD_CHARS: usize = 2;

/// Minimum number of alphanumeric characters in a word kept by the normalizer.
pub const MIN_ALNUM_CHARS: usize = 2;

/// Number of tab-separated columns in a tesseract TSV row.
pub const TSV_COLUMNS: usize = 12;

/// Overlay padding around each word box, in display pixels.
pub const DEFAULT_PAD_LEFT: f32 = 6.0;
pub const DEFAULT_PAD_TOP: f32 = 3.0;
pub const DEFAULT_PAD_RIGHT: f32 = 6.0;
pub const DEFAULT_PAD_BOTTOM: f32 = 5.0;

/// Smallest corner radius of a word highlight, in display pixels.
pub const MIN_CORNER_RADIUS: f32 = 4.0;

/// Corner radius as a fraction of the scaled box height.
pub const CORNER_RADIUS_FRACTION: f32 = 0.25;

/// Alpha of the dimming layer painted over the screenshot in spotlight mode.
pub const DEFAULT_DIM_ALPHA: f32 = 0.42;

/// MIME type of screenshots written by the capture session.
pub const SCREENSHOT_MIME: &str = "image/png";

/// `strftime` pattern for screenshot file names.
pub const SCREENSHOT_NAME_FORMAT: &str = "screenshot_%Y%m%d_%H%M%S.png";

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "glyphshot";
