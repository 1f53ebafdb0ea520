use tracing::debug;

use crate::clipboard::ClipboardSink;
use crate::error::Result;
use crate::geometry::{Point, Size};
use crate::transform::ViewportState;
use crate::word::{join_text, reading_order, WordBox};

/// Selection transition for one pointer press.
///
/// Without shift the hit set becomes the whole selection. With shift every hit
/// box flips and nothing else changes, so a shift press on empty space is a
/// no-op.
pub fn apply_click(flags: &[bool], hits: &[usize], shift: bool) -> Vec<bool> {
    let mut next = if shift {
        flags.to_vec()
    } else {
        vec![false; flags.len()]
    };

    for &i in hits {
        if i >= next.len() {
            continue;
        }
        next[i] = if shift { !flags[i] } else { true };
    }

    next
}

/// Owns the word boxes of one viewer session and their `selected` flags.
#[derive(Clone, Debug)]
pub struct SelectionModel {
    boxes: Vec<WordBox>,
    image_size: Size,
}

impl SelectionModel {
    pub fn new(boxes: Vec<WordBox>, image_size: Size) -> Self {
        Self { boxes, image_size }
    }

    pub fn boxes(&self) -> &[WordBox] {
        &self.boxes
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.selected).count()
    }

    /// Indices of every box whose display rect contains `point`.
    ///
    /// Overlapping boxes are all reported. Points in the letterbox margin hit
    /// nothing.
    pub fn hit_test(&self, viewport: &ViewportState, point: Point) -> Vec<usize> {
        if !viewport.contains_display(point) {
            return Vec::new();
        }
        self.boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| viewport.rect_to_display(b).contains(point))
            .map(|(i, _)| i)
            .collect()
    }

    /// Handle a pointer press at `point` (display coordinates relative to a
    /// display area of size `area`). Returns true if any flag changed.
    pub fn on_pointer_down(&mut self, area: Size, point: Point, shift: bool) -> bool {
        let Some(viewport) = ViewportState::fit(self.image_size, area) else {
            return false;
        };
        self.apply_at(&viewport, point, shift)
    }

    /// Same as [`Self::on_pointer_down`] with a viewport the caller already
    /// computed for this frame.
    pub fn apply_at(&mut self, viewport: &ViewportState, point: Point, shift: bool) -> bool {
        if self.boxes.is_empty() {
            return false;
        }

        let hits = self.hit_test(viewport, point);
        let flags: Vec<bool> = self.boxes.iter().map(|b| b.selected).collect();
        let next = apply_click(&flags, &hits, shift);
        debug!(hits = hits.len(), shift, "pointer press");
        self.set_flags(&next)
    }

    pub fn clear(&mut self) -> bool {
        let next = vec![false; self.boxes.len()];
        self.set_flags(&next)
    }

    pub fn select_all(&mut self) -> bool {
        let next = vec![true; self.boxes.len()];
        self.set_flags(&next)
    }

    /// Selected words in reading order, joined by single spaces.
    pub fn selected_text(&self) -> String {
        join_text(
            reading_order(&self.boxes)
                .into_iter()
                .map(|i| &self.boxes[i])
                .filter(|b| b.selected),
        )
    }

    /// Every word in reading order, regardless of selection.
    pub fn all_text(&self) -> String {
        join_text(reading_order(&self.boxes).into_iter().map(|i| &self.boxes[i]))
    }

    fn set_flags(&mut self, next: &[bool]) -> bool {
        let mut changed = false;
        for (b, &flag) in self.boxes.iter_mut().zip(next) {
            if b.selected != flag {
                b.selected = flag;
                changed = true;
            }
        }
        changed
    }
}

/// Result of a copy command.
#[derive(Clone, Debug, PartialEq)]
pub enum CopyOutcome {
    /// Nothing was written to the clipboard.
    NothingToCopy,
    Copied { words: usize, chars: usize },
}

/// Write `text` to the clipboard unless it is empty.
pub fn copy_text(text: &str, clipboard: &mut dyn ClipboardSink) -> Result<CopyOutcome> {
    if text.is_empty() {
        return Ok(CopyOutcome::NothingToCopy);
    }
    clipboard.copy_text(text)?;
    Ok(CopyOutcome::Copied {
        words: text.split(' ').count(),
        chars: text.chars().count(),
    })
}

/// Copy the current selection. An empty selection is a silent no-op.
pub fn copy_selection(
    model: &SelectionModel,
    clipboard: &mut dyn ClipboardSink,
) -> Result<CopyOutcome> {
    copy_text(&model.selected_text(), clipboard)
}
