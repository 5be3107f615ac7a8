use std::sync::atomic::Ordering;
use std::sync::Arc;

use tracing::warn;
use url::Url;
use webpane_common::RendererError;
use wry::http::header::{HeaderMap, HeaderName, HeaderValue};
use wry::WebView;

use crate::events::{ScreenEvent, TitleTicket};
use crate::hooks::Renderer;
use crate::request::NavigationRequest;

use super::history::Traversal;
use super::{push_event, WryRenderer};

const TITLE_SCRIPT: &str = "document.title";

impl WryRenderer {
    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }

    fn run_script(&self, js: &str) {
        if let Err(e) = self.webview.evaluate_script(js) {
            warn!(script = js, error = %e, "script evaluation failed");
        }
    }

    fn expect(&self, traversal: Traversal) {
        if let Ok(mut hint) = self.history.lock() {
            hint.expect(traversal);
        }
    }
}

fn header_map(request: &NavigationRequest) -> Result<HeaderMap, RendererError> {
    let mut headers = HeaderMap::new();
    for (name, value) in request.headers() {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| RendererError::LoadFailed {
            url: request.url().to_string(),
            reason: format!("bad header name '{name}': {e}"),
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| RendererError::LoadFailed {
            url: request.url().to_string(),
            reason: format!("bad header value: {e}"),
        })?;
        headers.append(name, value);
    }
    Ok(headers)
}

impl Renderer for WryRenderer {
    fn load(&mut self, request: &NavigationRequest) -> Result<(), RendererError> {
        if request.method() != "GET" {
            warn!(method = request.method(), "webview loads are always GET");
        }
        if let Ok(mut hint) = self.history.lock() {
            hint.arm();
        }

        let url = request.url().as_str();
        let result = if request.headers().is_empty() {
            self.webview.load_url(url)
        } else {
            self.webview.load_url_with_headers(url, header_map(request)?)
        };
        result.map_err(|e| RendererError::LoadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn go_back(&mut self) {
        self.expect(Traversal::Back);
        self.run_script("history.back();");
    }

    fn go_forward(&mut self) {
        self.expect(Traversal::Forward);
        self.run_script("history.forward();");
    }

    fn reload(&mut self) {
        self.expect(Traversal::Reload);
        self.run_script("location.reload();");
    }

    fn stop_loading(&mut self) {
        self.run_script("window.stop();");
        self.loading.store(false, Ordering::SeqCst);
    }

    fn can_go_back(&self) -> bool {
        self.history.lock().map(|h| h.can_go_back()).unwrap_or(false)
    }

    fn can_go_forward(&self) -> bool {
        self.history
            .lock()
            .map(|h| h.can_go_forward())
            .unwrap_or(false)
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    fn current_url(&self) -> Option<Url> {
        let raw = self.webview.url().ok()?;
        Url::parse(&raw).ok().filter(|url| url.scheme() != "about")
    }

    fn request_title(&mut self, ticket: TitleTicket) {
        let events = Arc::clone(&self.events);
        let result = self
            .webview
            .evaluate_script_with_callback(TITLE_SCRIPT, move |raw| {
                // The result arrives JSON-encoded.
                let title = serde_json::from_str::<String>(&raw).ok();
                push_event(&events, ScreenEvent::TitleResolved { ticket, title });
            });
        if let Err(e) = result {
            warn!(error = %e, "title fetch failed");
            push_event(
                &self.events,
                ScreenEvent::TitleResolved {
                    ticket,
                    title: None,
                },
            );
        }
    }
}
