use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("invalid url '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("invalid header '{0}'")]
    InvalidHeader(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("load failed for {url}: {reason}")]
    LoadFailed { url: String, reason: String },

    #[error("renderer unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebpaneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Renderer(#[from] RendererError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("platform error: {0}")]
    Platform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width out of range"
        );
    }

    #[test]
    fn request_error_display() {
        let err = RequestError::InvalidUrl {
            input: "https://".into(),
            reason: "empty host".into(),
        };
        assert_eq!(err.to_string(), "invalid url 'https://': empty host");

        let err = RequestError::InvalidHeader("bad\nname".into());
        assert!(err.to_string().starts_with("invalid header"));
    }

    #[test]
    fn renderer_error_display() {
        let err = RendererError::LoadFailed {
            url: "https://example.com/".into(),
            reason: "offline".into(),
        };
        assert_eq!(
            err.to_string(),
            "load failed for https://example.com/: offline"
        );

        let err = RendererError::Unavailable("no webview".into());
        assert_eq!(err.to_string(), "renderer unavailable: no webview");
    }

    #[test]
    fn webpane_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: WebpaneError = config_err.into();
        assert!(matches!(err, WebpaneError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn webpane_error_from_request() {
        let req_err = RequestError::InvalidUrl {
            input: "::".into(),
            reason: "relative URL without a base".into(),
        };
        let err: WebpaneError = req_err.into();
        assert!(matches!(err, WebpaneError::Request(_)));
        assert!(err.to_string().contains("relative URL"));
    }

    #[test]
    fn webpane_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WebpaneError = io_err.into();
        assert!(matches!(err, WebpaneError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn webpane_error_from_renderer() {
        let err: WebpaneError = RendererError::Unavailable("closed".into()).into();
        assert!(matches!(err, WebpaneError::Renderer(_)));
        assert_eq!(err.to_string(), "renderer unavailable: closed");
    }

    #[test]
    fn webpane_error_platform_display() {
        let err = WebpaneError::Platform("no display".into());
        assert_eq!(err.to_string(), "platform error: no display");
    }
}
