//! Piped-input detection
//!
//! Figures out whether stdin is a pipe and, best-effort, which command is
//! writing to it so `save` can suggest a label. Strictly optional glue:
//! every failure here degrades to "no suggestion", and the storage core
//! never depends on it.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;

use std::io::IsTerminal;
use tracing::debug;

/// True when stdin is fed by a pipe rather than a terminal
pub fn is_piped() -> bool {
    !std::io::stdin().is_terminal()
}

/// Name the command writing to our stdin pipe, if the platform lets us
/// find out. Returns `None` on unsupported platforms and on any failure.
pub async fn pipe_writer_command() -> Option<String> {
    if !is_piped() {
        return None;
    }

    match detect_platform().await {
        Ok(command) => {
            debug!("Detected pipe writer: {command}");
            Some(command)
        }
        Err(reason) => {
            debug!("Pipe writer detection unavailable: {reason}");
            None
        }
    }
}

#[cfg(target_os = "linux")]
async fn detect_platform() -> Result<String, String> {
    linux::detect().await
}

#[cfg(target_os = "macos")]
async fn detect_platform() -> Result<String, String> {
    macos::detect().await
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
async fn detect_platform() -> Result<String, String> {
    Err("unsupported platform".to_string())
}
