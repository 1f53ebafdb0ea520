mod tesseract;
pub mod tsv;

use std::path::Path;

use crate::error::Result;
use crate::word::WordBox;

pub use tesseract::Tesseract;

/// Turns an image file into recognized words in the image's pixel space.
///
/// Implementations skip rows they cannot parse; they never hand back
/// malformed boxes.
pub trait OcrEngine {
    fn recognize(&self, image: &Path) -> Result<Vec<WordBox>>;
}
