//! Hand-off of a selected entry to an external viewer.
//!
//! # Architecture
//!
//! - [`Viewer`]: opens an absolute URL and returns once viewing is over
//! - [`TerminalViewer`]: runs a text-mode browser (`w3m` by default) on the
//!   controlling terminal and waits for it to exit

use std::error::Error;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, instrument, warn};

/// Something that can show a URL to the operator.
pub trait Viewer {
    /// Open `url` and return once the operator is done with it.
    async fn open(&self, url: &str) -> Result<(), Box<dyn Error>>;
}

/// Runs `program <url>` with the terminal inherited.
#[derive(Debug, Clone)]
pub struct TerminalViewer {
    program: String,
}

impl TerminalViewer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Viewer for TerminalViewer {
    /// # Errors
    ///
    /// Fails when the program cannot be spawned. A non-zero exit status only
    /// produces a warning: the viewer already had the terminal and reported
    /// its own problem there.
    #[instrument(level = "info", skip(self), fields(program = %self.program))]
    async fn open(&self, url: &str) -> Result<(), Box<dyn Error>> {
        let status = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| format!("failed to launch viewer `{}`: {e}", self.program))?;

        if status.success() {
            info!(%status, "Viewer exited");
        } else {
            warn!(%status, "Viewer exited unsuccessfully");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_terminal_viewer_runs_program() {
        let viewer = TerminalViewer::new("true");
        assert!(viewer.open("https://www.archlinux.org/news/x/").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_terminal_viewer_nonzero_exit_is_not_fatal() {
        let viewer = TerminalViewer::new("false");
        assert!(viewer.open("https://www.archlinux.org/news/x/").await.is_ok());
    }

    #[tokio::test]
    async fn test_terminal_viewer_missing_program_faults() {
        let viewer = TerminalViewer::new("speculatores-no-such-viewer");
        let err = viewer.open("https://www.archlinux.org").await.unwrap_err();
        assert!(err.to_string().contains("speculatores-no-such-viewer"));
    }
}
