use serde::{Deserialize, Serialize};

/// Groups words that tesseract placed on the same text line.
///
/// Ordering follows page, block, paragraph, then line, which is the order
/// tesseract emits lines in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId {
    pub page: u32,
    pub block: u32,
    pub paragraph: u32,
    pub line: u32,
}

/// One OCR-recognized token with its bounding box in the original image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordBox {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub confidence: f32,
    pub line_id: LineId,
    /// Owned by the selection model.
    #[serde(default, skip_serializing)]
    pub selected: bool,
}

impl WordBox {
    pub fn new(text: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            w,
            h,
            confidence: 0.0,
            line_id: LineId::default(),
            selected: false,
        }
    }

    pub fn with_line(mut self, line_id: LineId) -> Self {
        self.line_id = line_id;
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Indices of `boxes` in reading order: by line, then left to right.
pub fn reading_order(boxes: &[WordBox]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by_key(|&i| (boxes[i].line_id, boxes[i].x));
    order
}

/// Join the text of every box in reading order.
pub fn join_text<'a>(boxes: impl IntoIterator<Item = &'a WordBox>) -> String {
    boxes
        .into_iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of all boxes in reading order, joined by single spaces.
pub fn reading_order_text(boxes: &[WordBox]) -> String {
    join_text(reading_order(boxes).into_iter().map(|i| &boxes[i]))
}
