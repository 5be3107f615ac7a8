//! Toolbar configuration types.

use serde::{Deserialize, Serialize};
use webpane_common::DeviceClass;

/// How the device class is chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClassSetting {
    /// Derived from the window width at startup.
    #[default]
    Auto,
    Compact,
    Regular,
}

impl DeviceClassSetting {
    /// Resolve to a concrete class, using `width` when set to `Auto`.
    pub fn resolve(self, width: f64) -> DeviceClass {
        match self {
            Self::Auto => DeviceClass::from_width(width),
            Self::Compact => DeviceClass::Compact,
            Self::Regular => DeviceClass::Regular,
        }
    }
}

/// Which toolbar controls are offered and where they go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Back and forward buttons.
    pub course: bool,
    /// Refresh/stop button.
    pub refresh: bool,
    /// Share button.
    pub action: bool,
    pub device_class: DeviceClassSetting,
    /// Screen is embedded in a split view (regular layout drops spacers).
    pub split_view: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            course: true,
            refresh: true,
            action: true,
            device_class: DeviceClassSetting::Auto,
            split_view: false,
        }
    }
}
