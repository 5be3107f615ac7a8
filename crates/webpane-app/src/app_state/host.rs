//! The window as seen by the browser screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};
use webpane_browser::{BarStyleToken, ScreenHost, ShareRequest, ToolbarItem, ToolbarSink};
use webpane_common::{Bounds, DeviceClass};
use webpane_config::schema::DeviceClassSetting;
use winit::window::{Theme, Window};

use super::bounds::window_bounds;
use super::clipboard;

pub struct WindowHost {
    window: Arc<Window>,
    setting: DeviceClassSetting,
    device_class: DeviceClass,
    split_view: bool,
    toolbar_hidden: bool,
    exit_requested: Arc<AtomicBool>,
}

impl WindowHost {
    pub fn new(
        window: Arc<Window>,
        setting: DeviceClassSetting,
        split_view: bool,
        exit_requested: Arc<AtomicBool>,
    ) -> Self {
        let device_class = setting.resolve(window_bounds(&window).width);
        Self {
            window,
            setting,
            device_class,
            split_view,
            toolbar_hidden: true,
            exit_requested,
        }
    }

    /// Re-resolve the device class after a resize. Returns whether it changed.
    pub fn refresh_device_class(&mut self) -> bool {
        let resolved = self.setting.resolve(window_bounds(&self.window).width);
        if resolved == self.device_class {
            return false;
        }
        info!(from = %self.device_class, to = %resolved, "device class changed");
        self.device_class = resolved;
        true
    }

    /// The window's current theme, captured so it can be put back.
    pub fn current_bar_style(&self) -> BarStyleToken {
        theme_token(self.window.theme())
    }
}

impl ToolbarSink for WindowHost {
    fn set_toolbar_items(&mut self, items: &[ToolbarItem]) {
        if self.toolbar_hidden {
            debug!(items = %describe(items), "bottom toolbar updated while hidden");
        } else {
            debug!(items = %describe(items), "bottom toolbar");
        }
    }

    fn set_trailing_items(&mut self, items: &[ToolbarItem]) {
        debug!(items = %describe(items), "trailing toolbar");
    }
}

impl ScreenHost for WindowHost {
    fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    fn is_in_split_view(&self) -> bool {
        self.split_view
    }

    fn bounds(&self) -> Bounds {
        window_bounds(&self.window)
    }

    fn set_toolbar_hidden(&mut self, hidden: bool) {
        self.toolbar_hidden = hidden;
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn present_share(&mut self, request: &ShareRequest) {
        let text = match request {
            ShareRequest::DocumentPreview { url, .. } => url
                .to_file_path()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|_| url.to_string()),
            ShareRequest::ShareSheet { url, .. } => url.to_string(),
        };
        match clipboard::copy_text(&text) {
            Ok(()) => info!(shared = %text, "copied to clipboard"),
            Err(e) => warn!(error = %e, "share failed"),
        }
    }

    fn restore_bar_style(&mut self, token: &BarStyleToken) {
        self.window.set_theme(theme_from_token(token));
    }

    fn dismiss(&mut self) {
        self.window.set_visible(false);
        self.exit_requested.store(true, Ordering::SeqCst);
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn theme_token(theme: Option<Theme>) -> BarStyleToken {
    let name = match theme {
        Some(Theme::Dark) => "dark",
        Some(Theme::Light) => "light",
        None => "system",
    };
    BarStyleToken(name.to_string())
}

fn theme_from_token(token: &BarStyleToken) -> Option<Theme> {
    match token.0.as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        _ => None,
    }
}

/// Compact text rendering of a toolbar for the log.
fn describe(items: &[ToolbarItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            ToolbarItem::Button { button, enabled } => {
                let name = format!("{button:?}").to_lowercase();
                if *enabled {
                    name
                } else {
                    format!("({name})")
                }
            }
            ToolbarItem::FlexibleSpace => "~".to_string(),
            ToolbarItem::FixedSpace { width: Some(w) } => format!("_{w}"),
            ToolbarItem::FixedSpace { width: None } => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use webpane_browser::ToolbarButton;

    #[test]
    fn theme_tokens_round_trip() {
        for theme in [Some(Theme::Dark), Some(Theme::Light), None] {
            assert_eq!(theme_from_token(&theme_token(theme)), theme);
        }
    }

    #[test]
    fn unknown_token_means_system_theme() {
        assert_eq!(theme_from_token(&BarStyleToken("sepia".into())), None);
    }

    #[test]
    fn describe_marks_disabled_buttons() {
        let items = [
            ToolbarItem::FixedSpace { width: None },
            ToolbarItem::Button {
                button: ToolbarButton::Back,
                enabled: false,
            },
            ToolbarItem::FlexibleSpace,
            ToolbarItem::Button {
                button: ToolbarButton::Refresh,
                enabled: true,
            },
            ToolbarItem::FixedSpace { width: Some(35.0) },
        ];
        assert_eq!(describe(&items), "_ (back) ~ refresh _35");
    }
}
