//! Window creation and browser screen setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use webpane_browser::{
    BrowserScreen, ButtonOptionSet, ExternalRoutes, RendererConfig, ScreenServices, WryRenderer,
};

use super::bounds::{bounds_to_wry, window_bounds};
use super::core::WebpaneApp;
use super::host::WindowHost;
use super::services::{CursorActivity, LoggingObserver, SystemOpener};

impl WebpaneApp {
    /// Create the window, the renderer inside it and the screen around both.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(request) = self.initial_request.take() else {
            return false;
        };

        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let navigation = &self.config.navigation;
        let services = ScreenServices {
            activity: Arc::new(CursorActivity::new(Arc::clone(&window))),
            opener: Arc::new(SystemOpener),
            observer: Some(Arc::new(LoggingObserver)),
            delegate: None,
            routes: ExternalRoutes::new(
                navigation.external_schemes.iter().cloned(),
                navigation.external_hosts.iter().cloned(),
            ),
        };

        let renderer_config = RendererConfig::default()
            .with_devtools(window_config.devtools)
            .with_user_agent(navigation.user_agent.clone());
        let bounds = bounds_to_wry(&window_bounds(&window));
        let gate = services.policy_gate();
        let renderer = match WryRenderer::build(window.as_ref(), bounds, renderer_config, gate) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        };

        let toolbar = &self.config.toolbar;
        let options =
            ButtonOptionSet::from_toggles(toolbar.course, toolbar.refresh, toolbar.action);
        let host = WindowHost::new(
            Arc::clone(&window),
            toolbar.device_class,
            toolbar.split_view,
            Arc::clone(&self.exit_requested),
        );
        let bar_style = host.current_bar_style();

        let mut screen = BrowserScreen::new(request, options, renderer, host, services);
        screen.store_bar_style(bar_style);
        screen.set_closing_callback(|| tracing::info!("Browser screen closing"));
        if let Some(title) = self.override_title.take() {
            screen.set_override_title(Some(title));
        }

        screen.will_appear();
        screen.did_load();
        if let Err(e) = screen.renderer().focus() {
            tracing::debug!("Could not focus webview: {e}");
        }

        self.window = Some(window);
        self.screen = Some(screen);
        true
    }

    /// Keep the webview filling the window and the toolbar matched to its width.
    pub(super) fn sync_screen_bounds(&mut self) {
        let (Some(window), Some(screen)) = (&self.window, &mut self.screen) else {
            return;
        };
        let bounds = window_bounds(window);
        if let Err(e) = screen.renderer().set_bounds(bounds_to_wry(&bounds)) {
            tracing::warn!("Failed to resize webview: {e}");
        }
        if screen.host_mut().refresh_device_class() {
            screen.will_appear();
            screen.refresh_toolbar();
        }
    }
}
