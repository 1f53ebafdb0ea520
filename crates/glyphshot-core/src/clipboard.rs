use std::ffi::OsString;

use crate::error::Result;
use crate::tools::{run_tool_status, ToolCommand};

/// Destination for copied text and screenshots.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;

    /// Copy raw image bytes declared as `mime` (e.g. `image/png`).
    fn copy_image(&mut self, bytes: &[u8], mime: &str) -> Result<()>;
}

/// Wayland clipboard through `wl-copy`.
#[derive(Clone, Debug)]
pub struct WlCopy {
    pub command: ToolCommand,
}

impl WlCopy {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new(ToolCommand::new("wl-copy"))
    }
}

impl ClipboardSink for WlCopy {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        run_tool_status(&self.command, &[], Some(text.as_bytes()))
    }

    fn copy_image(&mut self, bytes: &[u8], mime: &str) -> Result<()> {
        let extra = [OsString::from("--type"), OsString::from(mime)];
        run_tool_status(&self.command, &extra, Some(bytes))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn recording_sink(out: &std::path::Path, script: &str) -> WlCopy {
        WlCopy::new(ToolCommand::new("sh").with_args([
            "-c".to_string(),
            script.to_string(),
            out.display().to_string(),
        ]))
    }

    #[test]
    fn configured_command_receives_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip");
        let mut sink = recording_sink(&out, r#"cat > "$0""#);
        sink.copy_text("Hello World").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Hello World");
    }

    #[test]
    fn serving_in_background_does_not_block_copy() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip");
        // Like wl-copy: read the data, then keep a server running.
        let mut sink = recording_sink(&out, r#"cat > "$0"; sleep 5 &"#);
        let start = Instant::now();
        sink.copy_image(b"\x89PNG", "image/png").unwrap();
        assert!(start.elapsed() < Duration::from_secs(3));
        assert_eq!(std::fs::read(&out).unwrap(), b"\x89PNG");
    }
}
