use webpane_common::WebpaneError;

/// Clipboard handle backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, WebpaneError> {
        let inner = arboard::Clipboard::new().map_err(|e| WebpaneError::Platform(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Writes text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), WebpaneError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| WebpaneError::Platform(e.to_string()))
    }
}

/// One-shot copy; clipboard handles are not kept across shares.
pub fn copy_text(text: &str) -> Result<(), WebpaneError> {
    Clipboard::new()?.set_text(text)
}
