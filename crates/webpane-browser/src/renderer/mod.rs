//! `wry`-backed renderer.
//!
//! `WryRenderer` wraps a child `wry::WebView`. Renderer callbacks are
//! pushed onto an event queue that the host drains every loop iteration
//! and feeds to `BrowserScreen::handle_event`.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use wry::WebView;

use crate::events::ScreenEvent;

mod handle;
pub mod handlers;
mod history;
mod lifecycle;
mod types;

pub use history::HistoryHint;
pub use types::RendererConfig;

/// Shared queue of renderer events.
pub type EventSink = Arc<Mutex<Vec<ScreenEvent>>>;

/// A `Renderer` over a `wry::WebView`.
pub struct WryRenderer {
    pub(crate) webview: WebView,
    /// Event sink; handlers push here for the host loop to consume.
    pub(crate) events: EventSink,
    /// Set between page-load `Started` and `Finished`.
    pub(crate) loading: Arc<AtomicBool>,
    /// Best-effort back/forward availability.
    pub(crate) history: Arc<Mutex<HistoryHint>>,
}

impl WryRenderer {
    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<ScreenEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

pub(crate) fn push_event(events: &EventSink, event: ScreenEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}
