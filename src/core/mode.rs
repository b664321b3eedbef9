//! Overlay mode definitions

/// Text-search function forwarded to the page engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindFunction {
    /// Recompute matches for the given text
    Find,
    /// Advance to the next match
    FindNext,
    /// Step back to the previous match
    FindPrevious,
}

/// State of an open find-in-page bar
///
/// Result counts are reported by the page engine; the UI never computes
/// them itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindInPageSession {
    /// Current search text
    pub query: String,
    /// 1-based index of the current match (0 when there are none)
    pub current_result: usize,
    /// Total number of matches on the page
    pub total_results: usize,
}

impl FindInPageSession {
    /// Fresh session with no query and no results
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter text for the find bar ("3/10", or "0/0" before a search)
    pub fn counter(&self) -> String {
        format!("{}/{}", self.current_result, self.total_results)
    }
}

/// Which overlay is attached above the page surface
///
/// Exactly one variant is active at a time. The find session lives inside
/// its variant so it cannot outlive the bar, and the suggestions query
/// lives inside its variant so a detached overlay carries no state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayMode {
    /// No overlay; the page surface is fully visible
    #[default]
    None,
    /// Search-suggestions panel below the address bar
    Suggestions { query: String },
    /// Find-in-page bar above the toolbar
    FindInPage { session: FindInPageSession },
}

impl OverlayMode {
    pub fn is_none(&self) -> bool {
        matches!(self, OverlayMode::None)
    }

    pub fn is_suggestions(&self) -> bool {
        matches!(self, OverlayMode::Suggestions { .. })
    }

    pub fn is_find_in_page(&self) -> bool {
        matches!(self, OverlayMode::FindInPage { .. })
    }

    /// Access the find session while the find bar is open
    pub fn find_session(&self) -> Option<&FindInPageSession> {
        match self {
            OverlayMode::FindInPage { session } => Some(session),
            _ => None,
        }
    }

    pub fn find_session_mut(&mut self) -> Option<&mut FindInPageSession> {
        match self {
            OverlayMode::FindInPage { session } => Some(session),
            _ => None,
        }
    }
}
