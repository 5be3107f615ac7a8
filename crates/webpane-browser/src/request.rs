//! Navigation requests handed to the renderer.

use url::Url;
use webpane_common::RequestError;

/// A URL plus method and headers. Owned by the screen and replaced
/// wholesale on every navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    url: Url,
    method: String,
    headers: Vec<(String, String)>,
}

impl NavigationRequest {
    /// Parse a user-supplied string. Strings without an `http://` or
    /// `https://` prefix get `https://` prepended.
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        let trimmed = input.trim();
        let candidate = if has_web_scheme(trimmed) {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let url = Url::parse(&candidate).map_err(|e| RequestError::InvalidUrl {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(RequestError::InvalidUrl {
                input: input.to_string(),
                reason: "missing host".into(),
            });
        }
        Ok(Self::from_url(url))
    }

    /// A plain GET request for `url`.
    pub fn from_url(url: Url) -> Self {
        Self {
            url,
            method: "GET".into(),
            headers: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into().to_ascii_uppercase();
        self
    }

    /// Add a header. Names must be non-empty visible ASCII without
    /// separators; values must not contain line breaks.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let name = name.into();
        let value = value.into();
        let name_ok = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b));
        if !name_ok || value.contains(['\r', '\n']) {
            return Err(RequestError::InvalidHeader(name));
        }
        self.headers.push((name, value));
        Ok(self)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Whether the request points at a local file.
    pub fn is_file(&self) -> bool {
        self.url.scheme() == "file"
    }
}

impl From<Url> for NavigationRequest {
    fn from(url: Url) -> Self {
        Self::from_url(url)
    }
}

fn has_web_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_prefix() {
        let req = NavigationRequest::parse("example.com").unwrap();
        assert_eq!(req.url(), &Url::parse("https://example.com").unwrap());
        assert_eq!(req.url().scheme(), "https");
        assert_eq!(req.url().host_str(), Some("example.com"));
    }

    #[test]
    fn https_url_is_unchanged() {
        let req = NavigationRequest::parse("https://example.com").unwrap();
        assert_eq!(req.url(), &Url::parse("https://example.com").unwrap());
    }

    #[test]
    fn http_url_keeps_its_scheme() {
        let req = NavigationRequest::parse("http://neverssl.com/online").unwrap();
        assert_eq!(req.url().scheme(), "http");
        assert_eq!(req.url().path(), "/online");
    }

    #[test]
    fn scheme_check_is_case_insensitive() {
        let req = NavigationRequest::parse("HTTPS://Example.com/a").unwrap();
        assert_eq!(req.url().host_str(), Some("example.com"));
        assert_eq!(req.url().path(), "/a");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let req = NavigationRequest::parse("  example.com/docs \n").unwrap();
        assert_eq!(req.url().as_str(), "https://example.com/docs");
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(
            NavigationRequest::parse("https://"),
            Err(RequestError::InvalidUrl { .. })
        ));
        assert!(NavigationRequest::parse("exa mple.com").is_err());
        assert!(NavigationRequest::parse("").is_err());
    }

    #[test]
    fn from_url_defaults_to_get_without_headers() {
        let req = NavigationRequest::from_url(Url::parse("file:///tmp/report.pdf").unwrap());
        assert_eq!(req.method(), "GET");
        assert!(req.headers().is_empty());
        assert!(req.is_file());
    }

    #[test]
    fn headers_and_method_are_kept() {
        let req = NavigationRequest::parse("example.com")
            .unwrap()
            .with_method("post")
            .with_header("X-Client", "webpane")
            .unwrap();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.headers(), &[("X-Client".to_string(), "webpane".to_string())]);
    }

    #[test]
    fn bad_headers_are_rejected() {
        let base = NavigationRequest::parse("example.com").unwrap();
        assert!(base.clone().with_header("", "v").is_err());
        assert!(base.clone().with_header("Bad Name", "v").is_err());
        assert!(base.with_header("X-Ok", "line\r\nbreak").is_err());
    }
}
