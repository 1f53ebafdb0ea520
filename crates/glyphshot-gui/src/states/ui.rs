use std::path::PathBuf;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Log messages, newest last.
    pub log_messages: Vec<String>,

    /// Last copy result shown next to the buttons.
    pub copy_status: Option<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        tracing::info!("{msg}");
        self.log_messages.push(msg);
    }

    pub fn last_log(&self) -> Option<&str> {
        self.log_messages.last().map(String::as_str)
    }
}
