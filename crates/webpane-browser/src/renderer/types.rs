/// Configuration for creating a `WryRenderer`.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Webpane/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
            autoplay: false,
        }
    }
}

impl RendererConfig {
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        if user_agent.is_some() {
            self.user_agent = user_agent;
        }
        self
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_webpane() {
        let config = RendererConfig::default();
        assert!(config.user_agent.unwrap().starts_with("Webpane/"));
    }

    #[test]
    fn none_user_agent_keeps_default() {
        let config = RendererConfig::default().with_user_agent(None);
        assert!(config.user_agent.is_some());

        let config = RendererConfig::default().with_user_agent(Some("Custom/1.0".into()));
        assert_eq!(config.user_agent.as_deref(), Some("Custom/1.0"));
    }
}
