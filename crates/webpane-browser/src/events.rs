//! Renderer event types.

use serde::{Deserialize, Serialize};

use crate::policy::PolicyDecision;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Identifies the navigation attempt a document-title fetch belongs to.
///
/// The renderer echoes it back with the title; completions carrying a
/// ticket from an older attempt are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TitleTicket {
    pub(crate) attempt: u64,
}

impl TitleTicket {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// Events emitted by a renderer, queued for the host loop to feed back
/// into `BrowserScreen::handle_event`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// The renderer started receiving content for the current navigation.
    Committed { url: String },
    /// The current navigation failed.
    LoadFailed { url: String, reason: String },
    /// Result of a document-title fetch.
    TitleResolved {
        ticket: TitleTicket,
        title: Option<String>,
    },
    /// Document title changed while the page was live.
    TitleChanged { title: String },
    /// A navigation passed through the policy gate.
    NavigationDecided {
        url: String,
        decision: PolicyDecision,
    },
    /// Page asked for a new window and the gate allowed it; the screen
    /// loads it in place.
    NewWindowRequested { url: String },
}

impl ScreenEvent {
    /// Reports about the document on screen (load progress and titles),
    /// as opposed to policy decisions and fetch completions.
    pub fn is_page_report(&self) -> bool {
        matches!(
            self,
            Self::PageLoad { .. }
                | Self::Committed { .. }
                | Self::LoadFailed { .. }
                | Self::TitleChanged { .. }
        )
    }
}
