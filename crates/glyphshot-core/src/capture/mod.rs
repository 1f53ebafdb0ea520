mod handoff;
mod session;
mod wayland;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GlyphError, Result};

pub use handoff::{read_words, words_path_for, write_words};
pub use session::{
    capture_and_recognize, notification_body, screenshot_path, CaptureOutcome, CaptureRequest,
};
pub use wayland::{Grim, Slurp};

/// A screen region in the compositor's global coordinates, formatted the way
/// `slurp` prints it and `grim -g` reads it: `"X,Y WxH"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Geometry {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GlyphError::InvalidGeometry(s.to_string());

        let (pos, size) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let (x, y) = pos.split_once(',').ok_or_else(invalid)?;
        let (w, h) = size.trim().split_once('x').ok_or_else(invalid)?;

        let geometry = Geometry {
            x: x.trim().parse().map_err(|_| invalid())?,
            y: y.trim().parse().map_err(|_| invalid())?,
            width: w.trim().parse().map_err(|_| invalid())?,
            height: h.trim().parse().map_err(|_| invalid())?,
        };

        if geometry.width == 0 || geometry.height == 0 {
            return Err(GlyphError::InvalidDimensions {
                width: geometry.width,
                height: geometry.height,
            });
        }
        Ok(geometry)
    }
}

/// Lets the user pick a screen region.
pub trait RegionPicker {
    /// `Ok(None)` means the user cancelled; that is not an error.
    fn pick(&self) -> Result<Option<Geometry>>;
}

/// Writes a screenshot of a region to an image file.
pub trait ScreenGrabber {
    fn grab(&self, region: &Geometry, output: &Path) -> Result<()>;
}
