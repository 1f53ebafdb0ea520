use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use super::{Geometry, RegionPicker, ScreenGrabber};
use crate::error::Result;
use crate::tools::{failure, run_tool, run_tool_unchecked, ToolCommand};

/// Interactive region selection with `slurp`.
#[derive(Clone, Debug)]
pub struct Slurp {
    pub command: ToolCommand,
}

impl Default for Slurp {
    fn default() -> Self {
        Self {
            command: ToolCommand::new("slurp"),
        }
    }
}

impl RegionPicker for Slurp {
    fn pick(&self) -> Result<Option<Geometry>> {
        let output = run_tool_unchecked(&self.command, &[], None)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            // slurp exits non-zero when the user presses Escape
            if stderr.contains("cancelled") {
                debug!("region selection cancelled");
                return Ok(None);
            }
            return Err(failure(&self.command, &output));
        }

        let geometry = stdout.trim();
        if geometry.is_empty() {
            return Ok(None);
        }
        Ok(Some(geometry.parse()?))
    }
}

/// Region screenshots with `grim`.
#[derive(Clone, Debug)]
pub struct Grim {
    pub command: ToolCommand,
}

impl Default for Grim {
    fn default() -> Self {
        Self {
            command: ToolCommand::new("grim"),
        }
    }
}

impl ScreenGrabber for Grim {
    fn grab(&self, region: &Geometry, output: &Path) -> Result<()> {
        let extra = [
            OsString::from("-g"),
            OsString::from(region.to_string()),
            output.as_os_str().to_owned(),
        ];
        run_tool(&self.command, &extra, None)?;
        Ok(())
    }
}
