//! Shared types and constants for the app state.

use std::time::Duration;

use webpane_browser::{BrowserScreen, WryRenderer};

use super::host::WindowHost;

/// How often renderer events are drained when nothing else wakes the loop.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// The browser screen as embedded in a desktop window.
pub(super) type Screen = BrowserScreen<WryRenderer, WindowHost>;
