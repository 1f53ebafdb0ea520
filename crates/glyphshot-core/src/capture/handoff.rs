//! Word lists handed from a capture run to the viewer, so the viewer shows
//! exactly the boxes the capture recognized without running OCR again.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::word::WordBox;

/// Where the word list for `image` is written: the temp dir, named after the
/// screenshot.
pub fn words_path_for(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "capture".into());
    std::env::temp_dir().join(format!("glyphshot-{stem}.words.json"))
}

pub fn write_words(path: &Path, words: &[WordBox]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, words)?;
    writer.flush()?;
    debug!(path = %path.display(), count = words.len(), "wrote word list");
    Ok(())
}

/// Read a word list. Every box comes back unselected.
pub fn read_words(path: &Path) -> Result<Vec<WordBox>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
