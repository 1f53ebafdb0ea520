use crate::app::ViewerApp;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.label(app.session.state().to_string());
            ui.separator();

            if let Some(model) = app.selection.as_ref() {
                ui.label(format!("{} words", model.boxes().len()));
                ui.separator();
            }
            if let Some(size) = app.view.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some(path) = app.ui_state.file_path.as_ref() {
                if let Some(name) = path.file_name() {
                    ui.label(name.to_string_lossy().into_owned());
                    ui.separator();
                }
            }
            if let Some(msg) = app.ui_state.last_log() {
                ui.weak(msg);
            }
        });
        ui.add_space(2.0);
    });
}
