//! Embeddable in-app browser screen.
//!
//! A `BrowserScreen` owns a web renderer, derives its navigation chrome
//! (back/forward/refresh/stop/share) from a `ButtonOptionSet`, forwards
//! load-lifecycle callbacks to the host, and hands certain URLs to
//! external applications.
//!
//! - Pure toolbar layout derivation (`toolbar`)
//! - Navigation policy with external hand-off (`policy`)
//! - Share flow selection (`share`)
//! - Host-facing capability traits (`hooks`)
//! - A `wry`-backed renderer (`renderer`)

pub mod events;
pub mod hooks;
pub mod options;
pub mod policy;
pub mod renderer;
pub mod request;
pub mod screen;
pub mod share;
pub mod toolbar;

pub use events::{PageLoadState, ScreenEvent, TitleTicket};
pub use hooks::{
    ActivityIndicator, BarStyleToken, ExternalOpener, LoadObserver, NavigationDelegate, Renderer,
    ScreenHost,
};
pub use options::ButtonOptionSet;
pub use policy::{ExternalRoutes, NavigationAction, NavigationResponse, PolicyDecision, PolicyGate};
pub use renderer::{RendererConfig, WryRenderer};
pub use request::NavigationRequest;
pub use screen::{BrowserScreen, LoadPhase, ScreenServices};
pub use share::ShareRequest;
pub use toolbar::{
    apply_layout, derive_layout, LayoutInput, NavigationState, ToolbarButton, ToolbarItem,
    ToolbarLayout, ToolbarSink,
};
