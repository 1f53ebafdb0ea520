use std::ffi::OsString;

use tracing::warn;

use crate::tools::{run_tool_status, ToolCommand};

/// Best-effort desktop notifications. Failures never reach the caller.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Notifications through `notify-send`.
#[derive(Clone, Debug)]
pub struct NotifySend {
    pub command: ToolCommand,
}

impl NotifySend {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }
}

impl Default for NotifySend {
    fn default() -> Self {
        Self::new(ToolCommand::new("notify-send"))
    }
}

impl Notifier for NotifySend {
    fn notify(&self, title: &str, body: &str) {
        let extra = [OsString::from(title), OsString::from(body)];
        if let Err(e) = run_tool_status(&self.command, &extra, None) {
            warn!("notification not delivered: {e}");
        }
    }
}

/// Drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _title: &str, _body: &str) {}
}
