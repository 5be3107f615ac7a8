use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use url::Url;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ScreenEvent};
use crate::policy::{NavigationAction, PolicyDecision, PolicyGate};

use super::history::HistoryHint;
use super::{push_event, EventSink, WryRenderer};

// =============================================================================
// NAVIGATION GATE
// =============================================================================

/// Run a URL reported by the renderer through the policy gate.
///
/// URLs that do not parse are allowed: the renderer reports them
/// verbatim and has already accepted them.
pub fn gate_navigation(gate: &PolicyGate, url: &str, opens_new_window: bool) -> PolicyDecision {
    match Url::parse(url) {
        Ok(parsed) => {
            let action = NavigationAction {
                url: parsed,
                opens_new_window,
            };
            gate.decide(&action)
        }
        Err(e) => {
            debug!(url = %url, error = %e, "unparseable navigation URL allowed");
            PolicyDecision::Allow
        }
    }
}

fn is_armed(history: &Mutex<HistoryHint>) -> bool {
    history.lock().map(|hint| hint.is_armed()).unwrap_or(true)
}

/// Apply a page-load callback to the shared renderer state.
///
/// Returns the event to queue, or `None` for the placeholder document
/// the webview shows before the first request is loaded.
pub(crate) fn on_page_load(
    state: PageLoadState,
    url: String,
    loading: &AtomicBool,
    history: &Mutex<HistoryHint>,
) -> Option<ScreenEvent> {
    if !is_armed(history) {
        debug!(?state, url = %url, "placeholder page load ignored");
        return None;
    }
    debug!(?state, url = %url, "page load");
    match state {
        PageLoadState::Started => {
            loading.store(true, Ordering::SeqCst);
            if let Ok(mut hint) = history.lock() {
                hint.on_started();
            }
        }
        PageLoadState::Finished => loading.store(false, Ordering::SeqCst),
    }
    Some(ScreenEvent::PageLoad { state, url })
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WryRenderer {
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        loading: Arc<AtomicBool>,
        history: Arc<Mutex<HistoryHint>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            if let Some(event) = on_page_load(state, url, &loading, &history) {
                push_event(&events, event);
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        history: Arc<Mutex<HistoryHint>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            if !is_armed(&history) {
                return;
            }
            debug!(title = %title, "title changed");
            push_event(&events, ScreenEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        gate: PolicyGate,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let decision = gate_navigation(&gate, &url, false);
            if decision == PolicyDecision::Cancel {
                debug!(url = %url, "navigation cancelled");
            }
            push_event(&events, ScreenEvent::NavigationDecided { url, decision });
            decision == PolicyDecision::Allow
        })
    }

    /// New windows are never opened; allowed requests load in place.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        gate: PolicyGate,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            match gate_navigation(&gate, &url, true) {
                PolicyDecision::Allow => {
                    debug!(url = %url, "new window redirected to current screen");
                    push_event(&events, ScreenEvent::NewWindowRequested { url });
                }
                PolicyDecision::Cancel => {
                    warn!(url = %url, "new window request cancelled");
                }
            }
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::ExternalOpener;
    use crate::policy::ExternalRoutes;

    struct AlwaysOpens;

    impl ExternalOpener for AlwaysOpens {
        fn can_open(&self, _url: &Url) -> bool {
            true
        }

        fn open(&self, _url: &Url) {}
    }

    fn opening_gate() -> PolicyGate {
        PolicyGate::new(ExternalRoutes::default(), None, Arc::new(AlwaysOpens))
    }

    #[test]
    fn web_pages_pass_the_gate() {
        let gate = opening_gate();
        assert_eq!(
            gate_navigation(&gate, "https://example.com/", false),
            PolicyDecision::Allow
        );
    }

    #[test]
    fn phone_links_are_cancelled() {
        let gate = opening_gate();
        assert_eq!(
            gate_navigation(&gate, "tel:+15555550100", false),
            PolicyDecision::Cancel
        );
        assert_eq!(
            gate_navigation(&gate, "mailto:someone@example.com", false),
            PolicyDecision::Cancel
        );
    }

    #[test]
    fn new_windows_are_cancelled_when_openable() {
        let gate = opening_gate();
        assert_eq!(
            gate_navigation(&gate, "https://example.com/popup", true),
            PolicyDecision::Cancel
        );
    }

    #[test]
    fn new_windows_fall_back_to_allow_without_opener() {
        let gate = PolicyGate::default();
        assert_eq!(
            gate_navigation(&gate, "https://example.com/popup", true),
            PolicyDecision::Allow
        );
    }

    #[test]
    fn garbage_urls_are_allowed() {
        let gate = opening_gate();
        assert_eq!(gate_navigation(&gate, "", false), PolicyDecision::Allow);
        assert_eq!(gate_navigation(&gate, "not a url", false), PolicyDecision::Allow);
    }

    #[test]
    fn placeholder_loads_are_dropped() {
        let loading = AtomicBool::new(false);
        let history = Mutex::new(HistoryHint::default());

        let blank = "about:blank".to_string();
        let started = on_page_load(PageLoadState::Started, blank, &loading, &history);
        assert!(started.is_none());
        assert!(!loading.load(Ordering::SeqCst));

        history.lock().unwrap().arm();
        let started = on_page_load(
            PageLoadState::Started,
            "https://example.com/".into(),
            &loading,
            &history,
        );
        assert!(matches!(
            started,
            Some(ScreenEvent::PageLoad {
                state: PageLoadState::Started,
                ..
            })
        ));
        assert!(loading.load(Ordering::SeqCst));

        let url = "https://example.com/".to_string();
        on_page_load(PageLoadState::Finished, url, &loading, &history);
        assert!(!loading.load(Ordering::SeqCst));
    }
}
