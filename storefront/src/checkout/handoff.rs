//! Mail client handoff adapters
//!
//! The storefront never sends mail itself; it gives the composed `mailto:`
//! link to whatever the platform uses to open such links.

use shared::{AppError, ErrorCode};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::mailto::MailtoLink;

/// Handoff error types
#[derive(Debug, Error)]
pub enum HandoffError {
    /// The opener process could not be started
    #[error("Failed to launch {opener}: {source}")]
    Launch {
        opener: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// No known opener on this platform
    #[error("No mail opener available on this platform")]
    Unsupported,
}

impl From<HandoffError> for AppError {
    fn from(err: HandoffError) -> Self {
        AppError::with_message(ErrorCode::MailHandoffFailed, err.to_string())
    }
}

/// Result type for handoff operations
pub type HandoffResult<T> = Result<T, HandoffError>;

/// Trait for mail client adapters
pub trait MailHandoff {
    /// Give the link to the mail client; returns once the handoff is triggered
    fn hand_off(&self, link: &MailtoLink) -> HandoffResult<()>;
}

/// Opens links with the platform's default URL handler
#[derive(Debug, Clone, Default)]
pub struct SystemMailer;

impl SystemMailer {
    pub fn new() -> Self {
        Self
    }

    fn command(link: &str) -> HandoffResult<(&'static str, Command)> {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            // `start` treats the first quoted argument as a window title
            cmd.args(["/C", "start", ""]).arg(link);
            Ok(("cmd", cmd))
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(link);
            Ok(("open", cmd))
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(link);
            Ok(("xdg-open", cmd))
        } else {
            Err(HandoffError::Unsupported)
        }
    }
}

/// Start the opener and wait for it on a background thread
///
/// Returns the child's pid and the waiting thread. The opener usually exits
/// as soon as the mail client is up; the waiter reaps it so no zombie is
/// left behind for the rest of the session.
fn spawn_reaped(opener: &'static str, mut cmd: Command) -> HandoffResult<(u32, JoinHandle<()>)> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| HandoffError::Launch { opener, source })?;
    let pid = child.id();

    let waiter = thread::Builder::new()
        .name(format!("{opener}-wait"))
        .spawn(move || match child.wait() {
            Ok(status) if status.success() => debug!(opener, "Mail opener exited"),
            Ok(status) => warn!(opener, %status, "Mail opener exited with failure"),
            Err(e) => warn!(opener, error = %e, "Failed to wait for mail opener"),
        })
        .map_err(|source| HandoffError::Launch { opener, source })?;

    Ok((pid, waiter))
}

impl MailHandoff for SystemMailer {
    #[instrument(skip_all, fields(link_len = link.as_str().len()))]
    fn hand_off(&self, link: &MailtoLink) -> HandoffResult<()> {
        let (opener, cmd) = Self::command(link.as_str())?;
        spawn_reaped(opener, cmd)?;
        info!(opener, "Handed order to mail client");
        Ok(())
    }
}
