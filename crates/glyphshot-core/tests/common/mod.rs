#![allow(dead_code)]

use glyphshot_core::geometry::Size;
use glyphshot_core::word::{LineId, WordBox};

/// A word on line `line` of block 1.
pub fn word(text: &str, x: u32, y: u32, w: u32, h: u32, line: u32) -> WordBox {
    WordBox::new(text, x, y, w, h).with_line(LineId {
        page: 1,
        block: 1,
        paragraph: 1,
        line,
    })
}

pub fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

pub fn selected_flags(boxes: &[WordBox]) -> Vec<bool> {
    boxes.iter().map(|b| b.selected).collect()
}

/// A tesseract TSV word row.
pub fn tsv_row(block: u32, line: u32, word_num: u32, x: i32, y: i32, w: i32, h: i32, text: &str) -> String {
    format!("5\t1\t{block}\t1\t{line}\t{word_num}\t{x}\t{y}\t{w}\t{h}\t91.5\t{text}")
}

pub const TSV_HEADER: &str =
    "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";
