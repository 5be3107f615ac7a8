//! WebpaneApp struct definition and constructor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use webpane_browser::NavigationRequest;
use webpane_config::WebpaneConfig;

use super::types::Screen;

/// Top-level application state.
pub struct WebpaneApp {
    pub(super) config: WebpaneConfig,

    // Consumed when the window is created
    pub(super) initial_request: Option<NavigationRequest>,
    pub(super) override_title: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) screen: Option<Screen>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Set by the host when the screen dismisses itself
    pub(super) exit_requested: Arc<AtomicBool>,
    pub(super) last_poll: Instant,
}

impl WebpaneApp {
    pub fn new(
        config: WebpaneConfig,
        request: NavigationRequest,
        override_title: Option<String>,
    ) -> Self {
        Self {
            config,
            initial_request: Some(request),
            override_title,
            window: None,
            screen: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            exit_requested: Arc::new(AtomicBool::new(false)),
            last_poll: Instant::now(),
        }
    }

    pub(super) fn should_exit(&self) -> bool {
        self.exit_requested.load(Ordering::SeqCst)
    }

    /// Tear the screen down, then drop it so any load in flight is stopped.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");
        if let Some(mut screen) = self.screen.take() {
            screen.close();
        }
        self.exit_requested.store(true, Ordering::SeqCst);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> WebpaneApp {
        let request = NavigationRequest::parse("example.com").unwrap();
        WebpaneApp::new(WebpaneConfig::default(), request, None)
    }

    #[test]
    fn fresh_app_has_no_window() {
        let app = app();
        assert!(app.window.is_none());
        assert!(app.screen.is_none());
        assert!(!app.should_exit());
    }

    #[test]
    fn shutdown_without_screen_requests_exit() {
        let mut app = app();
        app.shutdown();
        assert!(app.should_exit());
    }
}
