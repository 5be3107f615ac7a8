//! The browser screen.
//!
//! `BrowserScreen` owns a renderer and a host surface. All methods run on
//! the UI thread; renderer callbacks arrive through `handle_event`.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::hooks::{
    ActivityIndicator, BarStyleToken, ExternalOpener, LoadObserver, NavigationDelegate,
    NoActivityIndicator, NoExternalOpener, Renderer, ScreenHost,
};
use crate::options::ButtonOptionSet;
use crate::policy::{ExternalRoutes, PolicyGate};
use crate::request::NavigationRequest;
use crate::toolbar::ToolbarLayout;

mod chrome;
mod lifecycle;


/// Where the current navigation attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Provisional,
    Committed,
    Finished,
    Failed,
}

impl LoadPhase {
    /// A finish or failure for the current attempt is still expected.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Idle | Self::Provisional | Self::Committed)
    }
}

/// Collaborators injected into a screen.
#[derive(Clone)]
pub struct ScreenServices {
    pub activity: Arc<dyn ActivityIndicator>,
    pub opener: Arc<dyn ExternalOpener>,
    pub observer: Option<Arc<dyn LoadObserver>>,
    pub delegate: Option<Arc<dyn NavigationDelegate>>,
    pub routes: ExternalRoutes,
}

impl Default for ScreenServices {
    fn default() -> Self {
        Self {
            activity: Arc::new(NoActivityIndicator),
            opener: Arc::new(NoExternalOpener),
            observer: None,
            delegate: None,
            routes: ExternalRoutes::default(),
        }
    }
}

impl ScreenServices {
    /// A policy gate over these services, for handing to a renderer.
    pub fn policy_gate(&self) -> PolicyGate {
        PolicyGate::new(
            self.routes.clone(),
            self.delegate.clone(),
            Arc::clone(&self.opener),
        )
    }
}

type ClosingCallback = Box<dyn FnOnce() + Send>;

pub struct BrowserScreen<R: Renderer, H: ScreenHost> {
    request: NavigationRequest,
    options: ButtonOptionSet,
    renderer: R,
    host: H,
    services: ScreenServices,
    gate: PolicyGate,

    phase: LoadPhase,
    attempt: u64,
    /// Renderer reports before the first `load` describe its placeholder.
    load_requested: bool,

    title: Option<String>,
    override_title: Option<String>,
    stored_bar_style: Option<BarStyleToken>,
    closing: bool,
    closing_callback: Option<ClosingCallback>,
    toolbar_shown: bool,
    last_layout: ToolbarLayout,
}

impl<R: Renderer, H: ScreenHost> BrowserScreen<R, H> {
    /// Create a screen for `request`. Nothing is loaded until `did_load`.
    pub fn new(
        request: NavigationRequest,
        options: ButtonOptionSet,
        renderer: R,
        host: H,
        services: ScreenServices,
    ) -> Self {
        let gate = services.policy_gate();
        debug!(url = %request.url(), ?options, "browser screen created");
        Self {
            request,
            options,
            renderer,
            host,
            services,
            gate,
            phase: LoadPhase::Idle,
            attempt: 0,
            load_requested: false,
            title: None,
            override_title: None,
            stored_bar_style: None,
            closing: false,
            closing_callback: None,
            toolbar_shown: false,
            last_layout: ToolbarLayout::Hidden,
        }
    }

    pub fn request(&self) -> &NavigationRequest {
        &self.request
    }

    /// The URL of the current request.
    pub fn url(&self) -> &Url {
        self.request.url()
    }

    /// The renderer's resolved URL, falling back to the request URL.
    pub fn current_url(&self) -> Url {
        self.renderer
            .current_url()
            .unwrap_or_else(|| self.request.url().clone())
    }

    pub fn options(&self) -> ButtonOptionSet {
        self.options
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Number of navigation attempts started so far.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// The title currently shown by the host, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn override_title(&self) -> Option<&str> {
        self.override_title.as_deref()
    }

    /// Host-supplied title that wins over the document title. The
    /// displayed title follows it: `Some` shows it, `None` clears it.
    pub fn set_override_title(&mut self, title: Option<String>) {
        self.override_title = title.clone();
        match title {
            Some(title) => self.show_title(title),
            None => {
                self.host.set_title("");
                self.title = None;
            }
        }
    }

    /// Remember the host's bar style so `done` can put it back.
    pub fn store_bar_style(&mut self, token: BarStyleToken) {
        self.stored_bar_style = Some(token);
    }

    pub fn set_closing_callback(&mut self, callback: impl FnOnce() + Send + 'static) {
        self.closing_callback = Some(Box::new(callback));
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// The layout from the most recent toolbar pass.
    pub fn last_layout(&self) -> &ToolbarLayout {
        &self.last_layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn show_title(&mut self, title: String) {
        self.host.set_title(&title);
        self.title = Some(title);
    }
}

impl<R: Renderer, H: ScreenHost> Drop for BrowserScreen<R, H> {
    fn drop(&mut self) {
        self.renderer.stop_loading();
        self.services.activity.set_busy(false);
    }
}
