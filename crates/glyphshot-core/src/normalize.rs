use tracing::debug;

use crate::consts::{MIN_ALNUM_CHARS, MIN_WORD_CHARS};
use crate::word::WordBox;

/// True if a recognized token carries enough text to be worth showing.
pub fn is_meaningful(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() >= MIN_WORD_CHARS
        && trimmed.chars().filter(|c| c.is_alphanumeric()).count() >= MIN_ALNUM_CHARS
}

/// Drop OCR noise (single glyphs, punctuation runs), keeping the order of the
/// surviving boxes. Survivors are returned untouched.
pub fn normalize(raw: Vec<WordBox>) -> Vec<WordBox> {
    let total = raw.len();
    let kept: Vec<WordBox> = raw.into_iter().filter(|b| is_meaningful(&b.text)).collect();
    if kept.len() != total {
        debug!(kept = kept.len(), dropped = total - kept.len(), "normalized word boxes");
    }
    kept
}
