use std::sync::Arc;

use tracing::debug;
use url::Url;
use webpane_common::routes::{owned, DEFAULT_EXTERNAL_HOSTS, DEFAULT_EXTERNAL_SCHEMES};

use crate::hooks::{ExternalOpener, NavigationDelegate, NoExternalOpener};

// =============================================================================
// EXTERNAL ROUTES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PolicyDecision {
    Allow,
    Cancel,
}

/// A navigation the renderer is about to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAction {
    pub url: Url,
    /// The page asked for a new window (no target frame).
    pub opens_new_window: bool,
}

impl NavigationAction {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            opens_new_window: false,
        }
    }

    pub fn new_window(url: Url) -> Self {
        Self {
            url,
            opens_new_window: true,
        }
    }
}

/// A response the renderer received and is about to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResponse {
    pub url: Url,
    pub status: Option<u16>,
    pub mime_type: Option<String>,
}

/// Which URLs leave the screen for an external application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRoutes {
    schemes: Vec<String>,
    hosts: Vec<String>,
}

impl Default for ExternalRoutes {
    fn default() -> Self {
        Self::new(owned(DEFAULT_EXTERNAL_SCHEMES), owned(DEFAULT_EXTERNAL_HOSTS))
    }
}

impl ExternalRoutes {
    pub fn new(
        schemes: impl IntoIterator<Item = String>,
        hosts: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            schemes: schemes.into_iter().map(|s| s.to_ascii_lowercase()).collect(),
            hosts: hosts.into_iter().map(|h| h.to_ascii_lowercase()).collect(),
        }
    }

    /// Whether `action` should be offered to an external application.
    pub fn wants_external(&self, action: &NavigationAction) -> bool {
        if action.opens_new_window {
            return true;
        }
        let url = &action.url;
        if self.schemes.iter().any(|s| s == url.scheme()) {
            return true;
        }
        url.host_str()
            .is_some_and(|host| self.hosts.iter().any(|h| h.eq_ignore_ascii_case(host)))
    }
}

// =============================================================================
// POLICY GATE
// =============================================================================

/// Decides whether navigations proceed inside the screen.
///
/// Shared between the screen and renderer callbacks, so it only holds
/// `Arc`s and plain data.
#[derive(Clone)]
pub struct PolicyGate {
    routes: ExternalRoutes,
    delegate: Option<Arc<dyn NavigationDelegate>>,
    opener: Arc<dyn ExternalOpener>,
}

impl PolicyGate {
    pub fn new(
        routes: ExternalRoutes,
        delegate: Option<Arc<dyn NavigationDelegate>>,
        opener: Arc<dyn ExternalOpener>,
    ) -> Self {
        Self {
            routes,
            delegate,
            opener,
        }
    }

    /// The external delegate decides first. Otherwise URLs matching the
    /// external routes are opened elsewhere (and cancelled here) when the
    /// opener can handle them. Everything else is allowed.
    pub fn decide(&self, action: &NavigationAction) -> PolicyDecision {
        if let Some(decision) = self
            .delegate
            .as_ref()
            .and_then(|delegate| delegate.decide_policy(action))
        {
            debug!(url = %action.url, ?decision, "navigation decided by delegate");
            return decision;
        }

        if self.routes.wants_external(action) && self.opener.can_open(&action.url) {
            debug!(url = %action.url, "navigation handed to external application");
            self.opener.open(&action.url);
            return PolicyDecision::Cancel;
        }

        PolicyDecision::Allow
    }

    /// Responses are allowed unless the delegate says otherwise.
    pub fn decide_response(&self, response: &NavigationResponse) -> PolicyDecision {
        self.delegate
            .as_ref()
            .and_then(|delegate| delegate.decide_response_policy(response))
            .unwrap_or(PolicyDecision::Allow)
    }
}

impl Default for PolicyGate {
    fn default() -> Self {
        Self::new(ExternalRoutes::default(), None, Arc::new(NoExternalOpener))
    }
}

impl std::fmt::Debug for PolicyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyGate")
            .field("routes", &self.routes)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
