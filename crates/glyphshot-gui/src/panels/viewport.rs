use glyphshot_core::geometry::{Point, Size};
use glyphshot_core::session::SessionState;
use glyphshot_core::transform::ViewportState;

use crate::app::ViewerApp;
use crate::panels::overlay;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            let texture_id = app.view.texture.as_ref().map(|t| t.id());
            let (Some(texture_id), Some(model)) = (texture_id, app.selection.as_ref()) else {
                let text = if app.session.state() == SessionState::Loading
                    && !app.ui_state.log_messages.is_empty()
                {
                    "Recognizing text..."
                } else {
                    "Open a screenshot to begin"
                };
                show_placeholder(ui, text);
                return;
            };

            // One viewport per frame, shared by hit-testing and drawing.
            let area = Size::new(rect.width(), rect.height());
            let image_size = model.image_size();
            let Some(viewport) = ViewportState::fit(image_size, area) else {
                return;
            };

            let response = ui.allocate_rect(rect, egui::Sense::click());
            handle_pointer(ctx, ui, &response, app, &viewport, rect);

            let img_rect = overlay::to_egui(viewport.image_rect(), rect);
            draw_image(ui, texture_id, img_rect);

            if let Some(model) = app.selection.as_ref() {
                overlay::paint(ui, texture_id, model.boxes(), &viewport, &app.config.overlay, rect);
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(24));
}

fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ViewerApp,
    viewport: &ViewportState,
    rect: egui::Rect,
) {
    let Some(model) = app.selection.as_mut() else {
        return;
    };

    if let Some(pos) = response.hover_pos() {
        let local = to_local(pos, rect);
        if !model.hit_test(viewport, local).is_empty() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    let (pressed, released, shift, press_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.modifiers.shift,
            i.pointer.press_origin(),
        )
    });

    if pressed && response.hovered() && app.session.accepts_input() {
        app.session.pointer_pressed();
        if let Some(pos) = press_pos {
            model.apply_at(viewport, to_local(pos, rect), shift);
        }
    }
    if released {
        app.session.pointer_released();
    }
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Point {
    Point::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(110)),
        );
    });
}
