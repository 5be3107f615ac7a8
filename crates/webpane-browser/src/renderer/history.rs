//! Back/forward availability estimated from page-load events.
//!
//! `wry` does not expose the session history, so the renderer counts
//! navigations itself. Redirects and same-document navigations can skew
//! the count; it only drives button enablement.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Traversal {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Default)]
pub struct HistoryHint {
    back: usize,
    forward: usize,
    pending: Option<Traversal>,
    armed: bool,
    has_entry: bool,
}

impl HistoryHint {
    /// Start counting. Page loads before the first real request (the
    /// placeholder document) are ignored.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Whether a real request has been issued yet.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub(crate) fn expect(&mut self, traversal: Traversal) {
        self.pending = Some(traversal);
    }

    /// A navigation started.
    pub fn on_started(&mut self) {
        if !self.armed {
            return;
        }
        match self.pending.take() {
            Some(Traversal::Back) => {
                self.back = self.back.saturating_sub(1);
                self.forward += 1;
            }
            Some(Traversal::Forward) => {
                self.forward = self.forward.saturating_sub(1);
                self.back += 1;
            }
            Some(Traversal::Reload) => {}
            None => {
                if self.has_entry {
                    self.back += 1;
                }
                self.forward = 0;
            }
        }
        self.has_entry = true;
    }

    pub fn can_go_back(&self) -> bool {
        self.back > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.forward > 0
    }
}
