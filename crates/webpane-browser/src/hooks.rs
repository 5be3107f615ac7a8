//! Capability traits the screen talks to.
//!
//! Hosts implement only the hooks they care about: every observer and
//! delegate method has a no-op default. Collaborators shared with
//! renderer callbacks are `Send + Sync`.

use url::Url;
use webpane_common::{Bounds, DeviceClass, RendererError};

use crate::events::TitleTicket;
use crate::policy::{NavigationAction, NavigationResponse, PolicyDecision};
use crate::request::NavigationRequest;
use crate::share::ShareRequest;
use crate::toolbar::ToolbarSink;

/// Load-lifecycle notifications for the host.
pub trait LoadObserver: Send + Sync {
    fn did_start_loading(&self) {}
    fn did_finish_loading(&self, _success: bool) {}
}

/// Renderer-level hooks forwarded verbatim to an external delegate.
///
/// `decide_policy` and `decide_response_policy` return `None` to leave
/// the decision to the screen.
pub trait NavigationDelegate: Send + Sync {
    fn did_start_provisional_navigation(&self, _url: Option<&Url>) {}
    fn did_commit_navigation(&self, _url: Option<&Url>) {}
    fn did_finish_navigation(&self, _url: Option<&Url>) {}
    fn did_fail_navigation(&self, _url: Option<&Url>, _reason: &str) {}

    fn decide_policy(&self, _action: &NavigationAction) -> Option<PolicyDecision> {
        None
    }

    fn decide_response_policy(&self, _response: &NavigationResponse) -> Option<PolicyDecision> {
        None
    }
}

/// Busy/idle network activity indicator.
pub trait ActivityIndicator: Send + Sync {
    fn set_busy(&self, busy: bool);
}

/// Indicator that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoActivityIndicator;

impl ActivityIndicator for NoActivityIndicator {
    fn set_busy(&self, _busy: bool) {}
}

/// Hands URLs to other applications (dialer, mail client, app store).
pub trait ExternalOpener: Send + Sync {
    fn can_open(&self, url: &Url) -> bool;
    fn open(&self, url: &Url);
}

/// Opener for hosts without external hand-off; nothing is ever opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExternalOpener;

impl ExternalOpener for NoExternalOpener {
    fn can_open(&self, _url: &Url) -> bool {
        false
    }

    fn open(&self, _url: &Url) {}
}

/// Opaque navigation-bar style captured before presentation and put
/// back when the screen is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarStyleToken(pub String);

/// The presenting host: toolbar, title, sheets and dismissal.
pub trait ScreenHost: ToolbarSink {
    fn device_class(&self) -> DeviceClass;

    fn is_in_split_view(&self) -> bool {
        false
    }

    /// Bounds of the screen's view, used to anchor document previews.
    fn bounds(&self) -> Bounds;

    fn set_toolbar_hidden(&mut self, hidden: bool);
    fn set_title(&mut self, title: &str);
    fn present_share(&mut self, request: &ShareRequest);
    fn restore_bar_style(&mut self, _token: &BarStyleToken) {}
    fn dismiss(&mut self);
}

/// A web-content renderer. History, networking and script evaluation
/// live behind this trait.
pub trait Renderer {
    fn load(&mut self, request: &NavigationRequest) -> Result<(), RendererError>;
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn stop_loading(&mut self);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn is_loading(&self) -> bool;

    /// URL the renderer has resolved for the current page, if any.
    fn current_url(&self) -> Option<Url>;

    /// Start fetching the document title. The result must come back
    /// later as `ScreenEvent::TitleResolved` carrying `ticket`.
    fn request_title(&mut self, ticket: TitleTicket);
}
