//! Parser for tesseract's TSV output.
//!
//! Columns: `level page_num block_num par_num line_num word_num left top width
//! height conf text`. Only rows carrying text are words; layout rows (pages,
//! blocks, paragraphs, lines) have an empty text column.

use crate::consts::TSV_COLUMNS;
use crate::word::{LineId, WordBox};

/// Parse a whole TSV document, skipping the header and any malformed row.
pub fn parse_tsv(contents: &str) -> Vec<WordBox> {
    contents.lines().skip(1).filter_map(parse_row).collect()
}

/// Parse one data row. Returns `None` for layout rows and rows that do not
/// describe a usable word.
pub fn parse_row(line: &str) -> Option<WordBox> {
    let parts: Vec<&str> = line.trim().split('\t').collect();
    if parts.len() < TSV_COLUMNS {
        return None;
    }

    let text = parts[11].trim();
    if text.is_empty() {
        return None;
    }

    let num = |i: usize| parts[i].trim().parse::<i64>().ok();
    let line_id = LineId {
        page: u32::try_from(num(1)?).ok()?,
        block: u32::try_from(num(2)?).ok()?,
        paragraph: u32::try_from(num(3)?).ok()?,
        line: u32::try_from(num(4)?).ok()?,
    };

    let x = u32::try_from(num(6)?).ok()?;
    let y = u32::try_from(num(7)?).ok()?;
    let w = u32::try_from(num(8)?).ok()?;
    let h = u32::try_from(num(9)?).ok()?;
    if w == 0 || h == 0 {
        return None;
    }

    let confidence = parts[10].trim().parse::<f32>().ok()?;

    Some(
        WordBox::new(text, x, y, w, h)
            .with_line(line_id)
            .with_confidence(confidence),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_row_is_skipped() {
        assert!(parse_row("4\t1\t1\t1\t1\t0\t10\t10\t200\t20\t-1\t").is_none());
    }

    #[test]
    fn negative_coordinates_are_skipped() {
        assert!(parse_row("5\t1\t1\t1\t1\t1\t-3\t10\t20\t20\t90.5\tword").is_none());
    }
}
