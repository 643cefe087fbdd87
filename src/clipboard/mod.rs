// src/clipboard/mod.rs
//
// Clipboard hand-off goes through an external helper process with the
// text piped to its stdin. Which helper runs depends on the platform.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("neither xclip nor xsel is available")]
    NoUtility,

    #[error("no clipboard helper for this platform")]
    UnsupportedPlatform,

    #[error("clipboard helper I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard helper exited with {0}")]
    HelperStatus(ExitStatus),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Hand `text` to the platform clipboard helper.
pub fn copy(text: &str) -> Result<()> {
    let mut command = helper_command()?;

    let mut child = command.stdin(Stdio::piped()).spawn()?;

    // Dropping the handle closes the pipe; the helper reads until EOF.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(ClipboardError::HelperStatus(status));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn helper_command() -> Result<Command> {
    Ok(Command::new("pbcopy"))
}

#[cfg(target_os = "linux")]
fn helper_command() -> Result<Command> {
    if find_on_path("xclip") {
        let mut command = Command::new("xclip");
        command.args(["-selection", "clipboard"]);
        Ok(command)
    } else if find_on_path("xsel") {
        let mut command = Command::new("xsel");
        command.args(["--clipboard", "--input"]);
        Ok(command)
    } else {
        Err(ClipboardError::NoUtility)
    }
}

#[cfg(target_os = "windows")]
fn helper_command() -> Result<Command> {
    let mut command = Command::new("cmd");
    command.args(["/c", "clip"]);
    Ok(command)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn helper_command() -> Result<Command> {
    Err(ClipboardError::UnsupportedPlatform)
}

#[cfg(target_os = "linux")]
fn find_on_path(name: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(name).is_file()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    #[cfg(target_os = "linux")]
    #[test]
    fn path_probe_rejects_missing_binaries() {
        assert!(!super::find_on_path("passgen-no-such-helper"));
    }
}
