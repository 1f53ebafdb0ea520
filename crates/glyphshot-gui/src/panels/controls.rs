use crate::app::{CopyScope, ViewerApp};

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let ready = app.selection.is_some() && app.session.accepts_input();
            let selected = app
                .selection
                .as_ref()
                .map(|m| m.selected_count())
                .unwrap_or(0);

            if ui
                .add_enabled(ready && selected > 0, egui::Button::new("Copy Selected"))
                .clicked()
            {
                app.copy(CopyScope::Selected);
            }
            if ui.add_enabled(ready, egui::Button::new("Copy All Text")).clicked() {
                app.copy(CopyScope::All);
            }
            if ui.add_enabled(ready, egui::Button::new("Copy Image")).clicked() {
                app.copy_image();
            }
            if ui
                .add_enabled(ready && selected > 0, egui::Button::new("Clear"))
                .clicked()
            {
                app.clear_selection();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    app.close(ctx);
                }
                ui.separator();
                ui.label(format!("{selected} selected"));
                if let Some(status) = app.ui_state.copy_status.as_ref() {
                    ui.small(status);
                }
            });
        });
        ui.add_space(4.0);
    });
}
