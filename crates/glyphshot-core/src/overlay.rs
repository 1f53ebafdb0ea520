//! Toolkit-independent overlay layout.
//!
//! The viewer paints an [`OverlayPlan`] on top of the screenshot. Layout is a
//! pure function of the boxes, the viewport and the style, so it yields the
//! same plan for the same inputs and never touches selection state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CORNER_RADIUS_FRACTION, DEFAULT_DIM_ALPHA, DEFAULT_PAD_BOTTOM, DEFAULT_PAD_LEFT,
    DEFAULT_PAD_RIGHT, DEFAULT_PAD_TOP, MIN_CORNER_RADIUS,
};
use crate::geometry::{Padding, Rect};
use crate::transform::ViewportState;
use crate::word::WordBox;

/// How unselected words are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayMode {
    /// Dim the screenshot and cut every word back out of the dimming.
    #[default]
    Spotlight,
    /// Leave the screenshot as is and only outline words.
    Highlight,
}

impl OverlayMode {
    pub const ALL: &[Self] = &[Self::Spotlight, Self::Highlight];
}

impl fmt::Display for OverlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spotlight => write!(f, "Spotlight"),
            Self::Highlight => write!(f, "Highlight"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub mode: OverlayMode,
    pub padding: Padding,
    /// Alpha of the dimming layer in spotlight mode (0.0..1.0).
    pub dim_alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            mode: OverlayMode::default(),
            padding: Padding {
                left: DEFAULT_PAD_LEFT,
                top: DEFAULT_PAD_TOP,
                right: DEFAULT_PAD_RIGHT,
                bottom: DEFAULT_PAD_BOTTOM,
            },
            dim_alpha: DEFAULT_DIM_ALPHA,
        }
    }
}

/// One word highlight in display coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxShape {
    /// Index into the box list the plan was built from.
    pub index: usize,
    pub rect: Rect,
    pub corner_radius: f32,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPlan {
    pub image_rect: Rect,
    /// Alpha of the dimming layer, `None` when nothing is dimmed.
    pub dim: Option<f32>,
    pub shapes: Vec<BoxShape>,
}

impl OverlayPlan {
    pub fn selected(&self) -> impl Iterator<Item = &BoxShape> {
        self.shapes.iter().filter(|s| s.selected)
    }
}

/// Corner radius for a box whose scaled height is `h`.
pub fn corner_radius(h: f32) -> f32 {
    (h * CORNER_RADIUS_FRACTION).max(MIN_CORNER_RADIUS)
}

/// Lay out every box over the displayed image.
pub fn layout(boxes: &[WordBox], viewport: &ViewportState, style: &OverlayStyle) -> OverlayPlan {
    let shapes = boxes
        .iter()
        .enumerate()
        .map(|(index, b)| {
            let rect = viewport.rect_to_display(b);
            BoxShape {
                index,
                corner_radius: corner_radius(rect.h),
                rect: rect.expand(&style.padding),
                selected: b.selected,
            }
        })
        .collect();

    let dim = match style.mode {
        OverlayMode::Spotlight => Some(style.dim_alpha.clamp(0.0, 1.0)),
        OverlayMode::Highlight => None,
    };

    OverlayPlan {
        image_rect: viewport.image_rect(),
        dim,
        shapes,
    }
}
