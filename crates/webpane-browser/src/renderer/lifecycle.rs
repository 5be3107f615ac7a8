use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use tracing::debug;
use webpane_common::RendererError;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::policy::PolicyGate;

use super::history::HistoryHint;
use super::types::RendererConfig;
use super::WryRenderer;

/// Placeholder document shown until the screen loads its request.
const PLACEHOLDER_HTML: &str = "<html><body></body></html>";

impl WryRenderer {
    /// Create a WebView as a child of `window`, positioned at `bounds`.
    ///
    /// Navigations are checked against `gate` before they proceed. A platform
    /// that cannot host a webview yields `RendererError::Unavailable`.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: RendererConfig,
        gate: PolicyGate,
    ) -> Result<Self, RendererError> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let loading = Arc::new(AtomicBool::new(false));
        let history = Arc::new(Mutex::new(HistoryHint::default()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_html(PLACEHOLDER_HTML);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(
            builder,
            Arc::clone(&events),
            Arc::clone(&loading),
            Arc::clone(&history),
        );
        builder =
            Self::attach_title_handler(builder, Arc::clone(&events), Arc::clone(&history));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), gate.clone());
        builder = Self::attach_new_window_handler(builder, Arc::clone(&events), gate);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| RendererError::Unavailable(e.to_string()))?;
        debug!("renderer webview created");

        Ok(Self {
            webview,
            events,
            loading,
            history,
        })
    }
}
