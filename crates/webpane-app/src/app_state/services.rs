//! Desktop implementations of the screen's collaborators.

use std::process::Command;
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{info, warn};
use url::Url;
use webpane_browser::{ActivityIndicator, ExternalOpener, LoadObserver};
use webpane_common::WebpaneError;
use winit::window::{CursorIcon, Window};

// =============================================================================
// ACTIVITY INDICATOR
// =============================================================================

/// Shows network activity as a progress cursor over the window.
pub struct CursorActivity {
    window: Arc<Window>,
}

impl CursorActivity {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl ActivityIndicator for CursorActivity {
    fn set_busy(&self, busy: bool) {
        let icon = if busy {
            CursorIcon::Progress
        } else {
            CursorIcon::Default
        };
        self.window.set_cursor(icon);
    }
}

// =============================================================================
// LOAD OBSERVER
// =============================================================================

#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoadObserver for LoggingObserver {
    fn did_start_loading(&self) {
        info!("page loading");
    }

    fn did_finish_loading(&self, success: bool) {
        if success {
            info!("page loaded");
        } else {
            warn!("page failed to load");
        }
    }
}

// =============================================================================
// EXTERNAL OPENER
// =============================================================================

/// Hands URLs to the desktop's default handler for their scheme.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn can_open(&self, _url: &Url) -> bool {
        cfg!(any(target_os = "macos", target_os = "windows", target_os = "linux"))
    }

    fn open(&self, url: &Url) {
        match launch(url.as_str()) {
            Ok(()) => info!(url = %url, "handed to external application"),
            Err(e) => warn!(url = %url, error = %e, "external hand-off failed"),
        }
    }
}

#[cfg(target_os = "macos")]
fn launcher(target: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(target);
    command
}

#[cfg(target_os = "windows")]
fn launcher(target: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", target]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(target: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    command
}

fn launch(target: &str) -> Result<(), WebpaneError> {
    run_detached(launcher(target)).map(|_| ())
}

/// Spawn `command` and reap it on a background thread so the UI thread
/// never blocks and no zombie is left behind.
fn run_detached(mut command: Command) -> Result<JoinHandle<()>, WebpaneError> {
    let mut child = command
        .spawn()
        .map_err(|e| WebpaneError::Platform(format!("failed to launch handler: {e}")))?;
    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!(%status, "external handler exited with error"),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "could not wait for external handler"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_accepts_both_outcomes() {
        let observer = LoggingObserver;
        observer.did_start_loading();
        observer.did_finish_loading(true);
        observer.did_finish_loading(false);
    }

    #[test]
    fn launcher_passes_target_through() {
        let command = launcher("mailto:someone@example.com");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().map(|a| a.to_str()), Some(Some("mailto:someone@example.com")));
    }

    #[cfg(unix)]
    #[test]
    fn detached_handler_is_reaped() {
        let handle = run_detached(Command::new("true")).unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn missing_handler_is_a_platform_error() {
        let err = run_detached(Command::new("webpane-no-such-launcher")).unwrap_err();
        assert!(matches!(err, WebpaneError::Platform(_)));
    }
}
