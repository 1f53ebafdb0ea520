use glyphshot_core::geometry::Rect;
use glyphshot_core::overlay::{layout, OverlayMode, OverlayStyle};
use glyphshot_core::transform::ViewportState;
use glyphshot_core::word::WordBox;

const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(70, 60, 3, 70);
const SELECTED_STROKE: egui::Color32 = egui::Color32::from_rgb(255, 214, 10);

/// Map a rect relative to the panel origin into screen space.
pub fn to_egui(r: Rect, panel: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        panel.min + egui::vec2(r.x, r.y),
        egui::vec2(r.w, r.h),
    )
}

/// Paint the box overlay on top of the already drawn image.
pub fn paint(
    ui: &egui::Ui,
    texture_id: egui::TextureId,
    boxes: &[WordBox],
    viewport: &ViewportState,
    style: &OverlayStyle,
    panel: egui::Rect,
) {
    let plan = layout(boxes, viewport, style);
    let img_rect = to_egui(plan.image_rect, panel);
    let painter = ui.painter().with_clip_rect(img_rect);

    if let Some(alpha) = plan.dim {
        painter.rect_filled(
            img_rect,
            0.0,
            egui::Color32::from_black_alpha((alpha * 255.0).round() as u8),
        );

        // Punch every box back to full brightness by redrawing its slice of
        // the texture.
        for shape in &plan.shapes {
            let r = to_egui(shape.rect, panel).intersect(img_rect);
            if !r.is_positive() {
                continue;
            }
            let uv = egui::Rect::from_min_max(
                uv_of(r.min, img_rect),
                uv_of(r.max, img_rect),
            );
            painter.add(
                egui::epaint::RectShape::filled(r, shape.corner_radius, egui::Color32::WHITE)
                    .with_texture(texture_id, uv),
            );
        }
    }

    let outline_alpha = match style.mode {
        OverlayMode::Spotlight => 140,
        OverlayMode::Highlight => 64,
    };

    for shape in &plan.shapes {
        let r = to_egui(shape.rect, panel);
        if shape.selected {
            painter.rect_filled(r, shape.corner_radius, SELECTED_FILL);
            painter.rect_stroke(
                r,
                shape.corner_radius,
                egui::Stroke::new(2.0, SELECTED_STROKE),
                egui::epaint::StrokeKind::Outside,
            );
        } else {
            painter.rect_stroke(
                r,
                shape.corner_radius,
                egui::Stroke::new(1.0, egui::Color32::from_white_alpha(outline_alpha)),
                egui::epaint::StrokeKind::Inside,
            );
        }
    }
}

fn uv_of(p: egui::Pos2, img_rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        (p.x - img_rect.min.x) / img_rect.width(),
        (p.y - img_rect.min.y) / img_rect.height(),
    )
}
