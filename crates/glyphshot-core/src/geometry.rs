/// A point in display or image pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of an image or display area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// True when both sides are strictly positive (and not NaN).
    pub fn is_positive(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }
}

/// Per-side padding applied around a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn expand(&self, pad: &Padding) -> Rect {
        Rect {
            x: self.x - pad.left,
            y: self.y - pad.top,
            w: self.w + pad.left + pad.right,
            h: self.h + pad.top + pad.bottom,
        }
    }

    /// Overlap of two rectangles, or `None` when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(15.0, 15.0)));
        assert!(!r.contains(Point::new(15.1, 12.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }

    #[test]
    fn expand_grows_each_side() {
        let pad = Padding {
            left: 1.0,
            top: 2.0,
            right: 3.0,
            bottom: 4.0,
        };
        let r = Rect::new(10.0, 10.0, 5.0, 5.0).expand(&pad);
        assert_eq!(r, Rect::new(9.0, 8.0, 9.0, 11.0));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 5.0, 5.0);
        let b = Rect::new(6.0, 0.0, 5.0, 5.0);
        assert!(a.intersect(&b).is_none());
        assert_eq!(
            a.intersect(&Rect::new(3.0, 2.0, 10.0, 10.0)),
            Some(Rect::new(3.0, 2.0, 2.0, 3.0))
        );
    }
}
