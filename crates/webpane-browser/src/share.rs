//! Share flow selection for the action button.

use url::Url;
use webpane_common::{Bounds, DeviceClass};

use crate::toolbar::ToolbarButton;

/// What the host should present when the action button is tapped.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareRequest {
    /// Local file: document preview/open-in menu over the screen.
    DocumentPreview { url: Url, anchor: Bounds },
    /// Anything else: share sheet with the URL as its only item.
    /// On regular devices it is anchored to the invoking control.
    ShareSheet {
        url: Url,
        anchor: Option<ToolbarButton>,
    },
}

impl ShareRequest {
    pub fn for_url(url: Url, device_class: DeviceClass, screen_bounds: Bounds) -> Self {
        if url.scheme() == "file" {
            return Self::DocumentPreview {
                url,
                anchor: screen_bounds,
            };
        }
        let anchor = match device_class {
            DeviceClass::Regular => Some(ToolbarButton::Action),
            DeviceClass::Compact => None,
        };
        Self::ShareSheet { url, anchor }
    }

    pub fn url(&self) -> &Url {
        match self {
            Self::DocumentPreview { url, .. } | Self::ShareSheet { url, .. } => url,
        }
    }
}
