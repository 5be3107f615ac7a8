use clap::{Parser, ValueEnum};
use webpane_config::schema::{DeviceClassSetting, ToolbarConfig};

/// Webpane: a minimal in-app browser window with navigation chrome.
#[derive(Parser, Debug)]
#[command(name = "webpane", version, about)]
pub struct Args {
    /// Page to open. A bare host gets `https://` prepended.
    pub url: Option<String>,

    /// Title shown instead of the document title.
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. `webpane=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Force a toolbar layout instead of deriving it from window width.
    #[arg(long, value_enum)]
    pub device: Option<DeviceArg>,

    /// Hide the back/forward buttons.
    #[arg(long)]
    pub no_course: bool,

    /// Hide the refresh/stop button.
    #[arg(long)]
    pub no_refresh: bool,

    /// Hide the share button.
    #[arg(long)]
    pub no_action: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceArg {
    Auto,
    Compact,
    Regular,
}

impl From<DeviceArg> for DeviceClassSetting {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Auto => Self::Auto,
            DeviceArg::Compact => Self::Compact,
            DeviceArg::Regular => Self::Regular,
        }
    }
}

impl Args {
    /// Fold the command-line toolbar flags over the configured ones.
    /// Flags can only remove buttons.
    pub fn apply_toolbar_overrides(&self, toolbar: &mut ToolbarConfig) {
        if self.no_course {
            toolbar.course = false;
        }
        if self.no_refresh {
            toolbar.refresh = false;
        }
        if self.no_action {
            toolbar.action = false;
        }
        if let Some(device) = self.device {
            toolbar.device_class = device.into();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_positional() {
        let args = Args::try_parse_from(["webpane", "example.com"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("example.com"));
        assert!(!args.no_course);
    }

    #[test]
    fn flags_only_remove_buttons() {
        let args =
            Args::try_parse_from(["webpane", "--no-refresh", "--device", "regular"]).unwrap();
        let mut toolbar = ToolbarConfig {
            course: false,
            ..Default::default()
        };
        args.apply_toolbar_overrides(&mut toolbar);

        assert!(!toolbar.course);
        assert!(!toolbar.refresh);
        assert!(toolbar.action);
        assert_eq!(toolbar.device_class, DeviceClassSetting::Regular);
    }

    #[test]
    fn unknown_device_is_rejected() {
        assert!(Args::try_parse_from(["webpane", "--device", "tablet"]).is_err());
    }
}
