//! Running the external command-line tools glyphshot delegates to.

use std::ffi::OsString;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::process::{Command, ExitStatus, Output, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GlyphError, Result};

/// A program plus the arguments always passed to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn command(&self, extra: &[OsString]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).args(extra);
        cmd
    }
}

/// Run `tool` with `extra` arguments appended, optionally feeding `stdin`,
/// and wait for it to finish.
///
/// A missing binary maps to [`GlyphError::ToolNotFound`] and a non-zero exit
/// to [`GlyphError::ToolFailed`] carrying the tool's stderr.
pub fn run_tool(tool: &ToolCommand, extra: &[OsString], stdin: Option<&[u8]>) -> Result<Output> {
    let output = spawn_and_wait(tool, extra, stdin)?;
    if !output.status.success() {
        return Err(failure(tool, &output));
    }
    Ok(output)
}

/// Like [`run_tool`] but hands back the output even on a non-zero exit.
pub fn run_tool_unchecked(
    tool: &ToolCommand,
    extra: &[OsString],
    stdin: Option<&[u8]>,
) -> Result<Output> {
    spawn_and_wait(tool, extra, stdin)
}

/// Run a tool whose stdout is of no interest and wait only for the process
/// itself to exit.
///
/// Tools like `wl-copy` fork a server that outlives the parent and inherits
/// its file descriptors, so waiting for end-of-file on a pipe would block for
/// as long as that server runs. Stdout is discarded and stderr goes to an
/// anonymous temp file that is read back only on failure.
pub fn run_tool_status(tool: &ToolCommand, extra: &[OsString], stdin: Option<&[u8]>) -> Result<()> {
    debug!(program = %tool.program, args = ?tool.args, ?extra, "running tool");

    let mut stderr_file = tempfile::tempfile()?;
    let mut cmd = tool.command(extra);
    cmd.stdout(Stdio::null())
        .stderr(stderr_file.try_clone()?)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

    let mut child = cmd.spawn().map_err(|e| spawn_error(tool, e))?;

    if let Some(bytes) = stdin {
        // Dropping the pipe closes it so the tool sees end of input.
        if let Some(mut pipe) = child.stdin.take() {
            pipe.write_all(bytes)?;
        }
    }

    let status = child.wait()?;
    if status.success() {
        return Ok(());
    }

    let mut stderr = Vec::new();
    stderr_file.seek(SeekFrom::Start(0))?;
    stderr_file.read_to_end(&mut stderr)?;
    Err(tool_failed(tool, status, &stderr))
}

/// Start `tool` detached from the caller; the child is not waited on.
pub fn spawn_detached(tool: &ToolCommand, extra: &[OsString]) -> Result<()> {
    debug!(program = %tool.program, "spawning detached");
    tool.command(extra)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| spawn_error(tool, e))?;
    Ok(())
}

/// Build the error for a finished process that exited unsuccessfully.
pub fn failure(tool: &ToolCommand, output: &Output) -> GlyphError {
    tool_failed(tool, output.status, &output.stderr)
}

fn tool_failed(tool: &ToolCommand, status: ExitStatus, stderr: &[u8]) -> GlyphError {
    let stderr = String::from_utf8_lossy(stderr).trim().to_string();
    GlyphError::ToolFailed {
        tool: tool.program.clone(),
        status: status.to_string(),
        stderr: if stderr.is_empty() {
            "Unknown error".into()
        } else {
            stderr
        },
    }
}

fn spawn_and_wait(tool: &ToolCommand, extra: &[OsString], stdin: Option<&[u8]>) -> Result<Output> {
    debug!(program = %tool.program, args = ?tool.args, ?extra, "running tool");

    let mut cmd = tool.command(extra);
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    cmd.stdin(if stdin.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let mut child = cmd.spawn().map_err(|e| spawn_error(tool, e))?;

    if let Some(bytes) = stdin {
        if let Some(mut pipe) = child.stdin.take() {
            pipe.write_all(bytes)?;
        }
    }

    Ok(child.wait_with_output()?)
}

fn spawn_error(tool: &ToolCommand, e: std::io::Error) -> GlyphError {
    if e.kind() == ErrorKind::NotFound {
        GlyphError::ToolNotFound {
            tool: tool.program.clone(),
        }
    } else {
        GlyphError::Io(e)
    }
}
