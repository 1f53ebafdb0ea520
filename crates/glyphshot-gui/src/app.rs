use std::path::PathBuf;
use std::sync::mpsc;

use glyphshot_core::clipboard::{ClipboardSink, WlCopy};
use glyphshot_core::config::AppConfig;
use glyphshot_core::consts::SCREENSHOT_MIME;
use glyphshot_core::error::GlyphError;
use glyphshot_core::geometry::Size;
use glyphshot_core::notify::Notifier;
use glyphshot_core::selection::{copy_selection, copy_text, CopyOutcome, SelectionModel};
use glyphshot_core::session::ViewerSession;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{ImageView, UIState};
use crate::worker;

pub struct ViewerApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub view: ImageView,
    pub session: ViewerSession,
    /// Present once the worker has delivered the image and its words.
    pub selection: Option<SelectionModel>,
    pub config: AppConfig,
    notifier: Box<dyn Notifier + Send>,
    /// `wl-copy` keeps serving copied data after the viewer exits.
    clipboard: WlCopy,
}

/// Which text a copy command takes.
#[derive(Clone, Copy)]
pub enum CopyScope {
    Selected,
    All,
}

impl ViewerApp {
    pub fn new(
        ctx: &egui::Context,
        config: AppConfig,
        image: Option<PathBuf>,
        words: Option<PathBuf>,
    ) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone(), config.ocr.clone());
        let notifier = config.notify.notifier();
        let clipboard = config.clipboard.sink();

        let mut app = Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            view: ImageView::default(),
            session: ViewerSession::new(),
            selection: None,
            config,
            notifier,
            clipboard,
        };

        if let Some(path) = image {
            app.load(path, words);
        }
        app
    }

    /// Open an image picked in the viewer; its words come from OCR.
    pub fn open(&mut self, path: PathBuf) {
        self.load(path, None);
    }

    /// Ask the worker for a new image; the session waits in `Loading`.
    fn load(&mut self, path: PathBuf, words: Option<PathBuf>) {
        if self.session.is_closed() {
            return;
        }
        self.session.reload();
        self.selection = None;
        self.view.clear();
        self.ui_state.copy_status = None;
        self.ui_state.add_log(format!("Loading {}", path.display()));
        self.send_command(WorkerCommand::Load { path, words });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            if self.session.is_closed() {
                continue;
            }
            match result {
                WorkerResult::Loaded {
                    path,
                    image,
                    words,
                    elapsed,
                } => {
                    let [w, h] = image.size;
                    let texture = ctx.load_texture("screenshot", image, egui::TextureOptions::LINEAR);
                    self.view.texture = Some(texture);
                    self.view.image_size = Some([w, h]);

                    self.ui_state.add_log(format!(
                        "{} words recognized in {}",
                        words.len(),
                        format_duration(elapsed)
                    ));
                    self.selection = Some(SelectionModel::new(
                        words,
                        Size::new(w as f32, h as f32),
                    ));
                    self.ui_state.file_path = Some(path);
                    self.session.loaded();
                }
                WorkerResult::Error { message } => {
                    // A failed load ends the session after one notification.
                    self.notifier.notify("Screenshot OCR failed", &message);
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    if self.session.load_failed() {
                        self.close(ctx);
                    }
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Copy recognized text. Nothing happens when there is no text to copy.
    pub fn copy(&mut self, scope: CopyScope) {
        let Some(model) = self.selection.as_ref() else {
            return;
        };
        let text = match scope {
            CopyScope::Selected => model.selected_text(),
            CopyScope::All => model.all_text(),
        };
        if text.is_empty() {
            return;
        }

        let result = match scope {
            CopyScope::Selected => copy_selection(model, &mut self.clipboard),
            CopyScope::All => copy_text(&text, &mut self.clipboard),
        };

        match result {
            Ok(CopyOutcome::Copied { words, chars }) => {
                let status = format!("Copied {words} words ({chars} chars)");
                self.notifier.notify("Screenshot OCR", "Text copied");
                self.ui_state.copy_status = Some(status);
            }
            Ok(CopyOutcome::NothingToCopy) => {}
            Err(e) => self.ui_state.add_log(format!("ERROR: copy failed: {e}")),
        }
    }

    /// Put the screenshot itself on the clipboard.
    pub fn copy_image(&mut self) {
        let Some(path) = self.ui_state.file_path.clone() else {
            return;
        };
        let result = std::fs::read(&path)
            .map_err(GlyphError::from)
            .and_then(|bytes| self.clipboard.copy_image(&bytes, SCREENSHOT_MIME));
        match result {
            Ok(()) => self.ui_state.copy_status = Some("Image copied".into()),
            Err(e) => self.ui_state.add_log(format!("ERROR: copy failed: {e}")),
        }
    }

    pub fn clear_selection(&mut self) {
        if let Some(model) = self.selection.as_mut() {
            model.clear();
        }
    }

    pub fn select_all(&mut self) {
        if let Some(model) = self.selection.as_mut() {
            model.select_all();
        }
    }

    /// End the session and release the image and words.
    pub fn close(&mut self, ctx: &egui::Context) {
        if self.session.close() {
            self.selection = None;
            self.view.clear();
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.session.close();
            self.selection = None;
            self.view.clear();
        }
        if self.session.is_closed() {
            return;
        }

        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("glyphshot");
                        ui.label("Screenshot OCR viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
