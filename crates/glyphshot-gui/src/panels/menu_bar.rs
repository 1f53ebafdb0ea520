use glyphshot_core::overlay::OverlayMode;

use crate::app::{CopyScope, ViewerApp};

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    app.close(ctx);
                }
            });

            ui.menu_button("Edit", |ui| {
                let copy_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::C);
                if ui.add(egui::Button::new("Copy Selected").shortcut_text(ctx.format_shortcut(&copy_shortcut))).clicked() {
                    ui.close();
                    app.copy(CopyScope::Selected);
                }
                if ui.button("Copy All Text").clicked() {
                    ui.close();
                    app.copy(CopyScope::All);
                }
                if ui.button("Copy Image").clicked() {
                    ui.close();
                    app.copy_image();
                }

                ui.separator();

                let all_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::A);
                if ui.add(egui::Button::new("Select All").shortcut_text(ctx.format_shortcut(&all_shortcut))).clicked() {
                    ui.close();
                    app.select_all();
                }
                if ui.button("Clear Selection").clicked() {
                    ui.close();
                    app.clear_selection();
                }
            });

            ui.menu_button("View", |ui| {
                for &mode in OverlayMode::ALL {
                    if ui
                        .radio_value(&mut app.config.overlay.mode, mode, mode.to_string())
                        .clicked()
                    {
                        ui.close();
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });
    });

    handle_shortcuts(ctx, app);
}

/// Keyboard shortcuts consumed outside menus.
fn handle_shortcuts(ctx: &egui::Context, app: &mut ViewerApp) {
    let shortcut = |m, k| egui::KeyboardShortcut::new(m, k);

    if ctx.input_mut(|i| i.consume_shortcut(&shortcut(egui::Modifiers::COMMAND, egui::Key::O))) {
        open_file(app);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&shortcut(egui::Modifiers::COMMAND, egui::Key::A))) {
        app.select_all();
    }
    // The windowing integration turns Ctrl+C into a Copy event.
    let copy_requested = ctx.input_mut(|i| {
        i.consume_shortcut(&shortcut(egui::Modifiers::COMMAND, egui::Key::C))
            || i.events.iter().any(|e| matches!(e, egui::Event::Copy))
    });
    if copy_requested {
        app.copy(CopyScope::Selected);
    }
    if ctx.input_mut(|i| {
        i.consume_shortcut(&shortcut(egui::Modifiers::COMMAND, egui::Key::Q))
            || i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)
    }) {
        app.close(ctx);
    }
}

fn open_file(app: &mut ViewerApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"])
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open(path);
    }
}
