//! Load lifecycle: Idle → Provisional → (Committed → Finished) | Failed.

use tracing::{debug, warn};
use url::Url;

use crate::events::{PageLoadState, ScreenEvent, TitleTicket};
use crate::hooks::{Renderer, ScreenHost};
use crate::policy::{NavigationAction, NavigationResponse, PolicyDecision};
use crate::request::NavigationRequest;

use super::{BrowserScreen, LoadPhase};

impl<R: Renderer, H: ScreenHost> BrowserScreen<R, H> {
    /// Load the initial request and lay out the toolbar.
    pub fn did_load(&mut self) {
        self.load_current_request();
        self.refresh_toolbar();
    }

    /// Replace the request and load it.
    pub fn load_request(&mut self, request: NavigationRequest) {
        self.request = request;
        self.load_current_request();
    }

    /// Navigate to `url` unless it is already the current request.
    pub fn set_url(&mut self, url: Url) {
        if &url == self.request.url() {
            return;
        }
        self.load_request(NavigationRequest::from_url(url));
    }

    fn load_current_request(&mut self) {
        self.load_requested = true;
        if let Err(e) = self.renderer.load(&self.request) {
            warn!(url = %self.request.url(), error = %e, "renderer refused request");
            // Counts as its own attempt that failed before starting.
            self.attempt += 1;
            self.phase = LoadPhase::Idle;
            let url = self.request.url().clone();
            self.did_fail_navigation(Some(&url), &e.to_string());
        }
    }

    /// Renderer began a provisional navigation.
    pub fn did_start_navigation(&mut self, url: Option<&Url>) {
        if let Some(delegate) = &self.services.delegate {
            delegate.did_start_provisional_navigation(url);
        }
        self.attempt += 1;
        self.phase = LoadPhase::Provisional;
        debug!(attempt = self.attempt, url = ?url.map(Url::as_str), "navigation started");

        self.services.activity.set_busy(true);
        if let Some(observer) = &self.services.observer {
            observer.did_start_loading();
        }
        self.refresh_toolbar();
    }

    /// Renderer started receiving content.
    pub fn did_commit_navigation(&mut self, url: Option<&Url>) {
        if let Some(delegate) = &self.services.delegate {
            delegate.did_commit_navigation(url);
        }
        if matches!(self.phase, LoadPhase::Idle | LoadPhase::Provisional) {
            self.phase = LoadPhase::Committed;
        }
    }

    /// Renderer finished the current navigation.
    pub fn did_finish_navigation(&mut self, url: Option<&Url>) {
        if let Some(delegate) = &self.services.delegate {
            delegate.did_finish_navigation(url);
        }
        if !self.phase.is_pending() {
            warn!(attempt = self.attempt, phase = ?self.phase, "duplicate finish ignored");
            return;
        }
        self.phase = LoadPhase::Finished;
        debug!(attempt = self.attempt, "navigation finished");

        self.services.activity.set_busy(false);
        self.renderer.request_title(TitleTicket {
            attempt: self.attempt,
        });
        if let Some(observer) = &self.services.observer {
            observer.did_finish_loading(true);
        }
        self.refresh_toolbar();
    }

    /// Renderer gave up on the current navigation. Not retried.
    pub fn did_fail_navigation(&mut self, url: Option<&Url>, reason: &str) {
        if let Some(delegate) = &self.services.delegate {
            delegate.did_fail_navigation(url, reason);
        }
        if !self.phase.is_pending() {
            warn!(attempt = self.attempt, phase = ?self.phase, "duplicate failure ignored");
            return;
        }
        self.phase = LoadPhase::Failed;
        warn!(attempt = self.attempt, reason, "navigation failed");

        self.services.activity.set_busy(false);
        if let Some(observer) = &self.services.observer {
            observer.did_finish_loading(false);
        }
        self.refresh_toolbar();
    }

    /// Completion of a document-title fetch.
    ///
    /// No-op once the screen is closing or when the ticket belongs to an
    /// earlier attempt. The override title, if set, always wins.
    pub fn title_resolved(&mut self, ticket: TitleTicket, title: Option<String>) {
        if self.closing {
            debug!("title fetch completed after dismissal");
            return;
        }
        if ticket.attempt != self.attempt {
            debug!(
                ticket = ticket.attempt,
                attempt = self.attempt,
                "stale title fetch dropped"
            );
            return;
        }
        match title {
            Some(title) if self.override_title.is_none() => self.show_title(title),
            _ => {}
        }
        self.refresh_toolbar();
    }

    /// Ask whether a navigation may proceed. See `PolicyGate::decide`.
    pub fn decide_policy(&mut self, action: &NavigationAction) -> PolicyDecision {
        let decision = self.gate.decide(action);
        self.refresh_toolbar();
        decision
    }

    pub fn decide_response_policy(&mut self, response: &NavigationResponse) -> PolicyDecision {
        self.refresh_toolbar();
        self.gate.decide_response(response)
    }

    /// Feed a queued renderer event into the screen.
    pub fn handle_event(&mut self, event: ScreenEvent) {
        if !self.load_requested && event.is_page_report() {
            debug!(?event, "renderer report before first load ignored");
            return;
        }
        match event {
            ScreenEvent::PageLoad { state, url } => {
                let url = parse_reported(&url);
                match state {
                    PageLoadState::Started => self.did_start_navigation(url.as_ref()),
                    PageLoadState::Finished => self.did_finish_navigation(url.as_ref()),
                }
            }
            ScreenEvent::Committed { url } => {
                self.did_commit_navigation(parse_reported(&url).as_ref());
            }
            ScreenEvent::LoadFailed { url, reason } => {
                self.did_fail_navigation(parse_reported(&url).as_ref(), &reason);
            }
            ScreenEvent::TitleResolved { ticket, title } => self.title_resolved(ticket, title),
            // Live titles only for the page that finished loading; a
            // newer attempt gets its title from the fetch.
            ScreenEvent::TitleChanged { title } => {
                if !self.closing
                    && self.override_title.is_none()
                    && self.phase == LoadPhase::Finished
                {
                    self.show_title(title);
                }
            }
            ScreenEvent::NavigationDecided { url, decision } => {
                debug!(url = %url, ?decision, "navigation policy applied");
                self.refresh_toolbar();
            }
            ScreenEvent::NewWindowRequested { url } => match Url::parse(&url) {
                Ok(url) => self.set_url(url),
                Err(e) => warn!(url = %url, error = %e, "ignoring unparseable new-window URL"),
            },
        }
    }
}

fn parse_reported(url: &str) -> Option<Url> {
    Url::parse(url).ok()
}
