use crate::geometry::{Point, Rect, Size};
use crate::word::WordBox;

/// Contain-fit mapping of the original image into a display area.
///
/// The whole image is visible with its aspect ratio preserved and centered, so
/// one axis has no margin and the other has equal margins on both sides.
/// Compute a fresh value for every layout pass; drawing and hit-testing in the
/// same frame must share it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub image: Size,
}

impl ViewportState {
    /// Fit `image` into `area`. Returns `None` for a degenerate area or image,
    /// in which case nothing is laid out and nothing is hit-tested.
    pub fn fit(image: Size, area: Size) -> Option<ViewportState> {
        if !image.is_positive() || !area.is_positive() {
            return None;
        }

        let scale = (area.w / image.w).min(area.h / image.h);
        Some(ViewportState {
            scale,
            offset_x: (area.w - image.w * scale) / 2.0,
            offset_y: (area.h - image.h * scale) / 2.0,
            image,
        })
    }

    /// Image pixel coordinate to display coordinate.
    pub fn to_display(&self, p: Point) -> Point {
        Point::new(
            self.offset_x + p.x * self.scale,
            self.offset_y + p.y * self.scale,
        )
    }

    /// Display (pointer) coordinate to image pixel coordinate. Points in the
    /// letterbox margin map outside `[0, image.w] x [0, image.h]`.
    pub fn to_image(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset_x) / self.scale,
            (p.y - self.offset_y) / self.scale,
        )
    }

    /// Where the image itself lands in the display area.
    pub fn image_rect(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.image.w * self.scale,
            self.image.h * self.scale,
        )
    }

    /// True if a display point lands on the image rather than the margin.
    pub fn contains_display(&self, p: Point) -> bool {
        self.image_rect().contains(p)
    }

    /// Display rectangle of a word box, without any visual padding.
    pub fn rect_to_display(&self, b: &WordBox) -> Rect {
        let origin = self.to_display(Point::new(b.x as f32, b.y as f32));
        Rect::new(
            origin.x,
            origin.y,
            b.w as f32 * self.scale,
            b.h as f32 * self.scale,
        )
    }
}
