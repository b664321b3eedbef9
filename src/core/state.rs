//! Application state management

use crate::core::OverlayMode;
use crate::suggest::Suggestion;

/// Snapshot of the engine's navigation affordances
///
/// Produced by the page engine, consumed to dim or enable toolbar
/// controls. Mirrors the engine's current state and has no lifecycle of
/// its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub is_loading: bool,
}

/// Main application state
pub struct AppState {
    /// Current URL-or-query text shown in the address bar
    pub address: String,
    /// Whether the address bar has input focus
    pub address_focused: bool,
    /// Edit buffer while the address bar is focused
    pub edit_buffer: String,
    /// Cursor position within the edit buffer, as a char index
    pub edit_cursor: usize,
    /// Latest navigation snapshot from the engine
    pub nav: NavigationState,
    /// Active overlay (single source of truth for attached surfaces)
    pub mode: OverlayMode,
    /// Current suggestion results
    pub suggestions: Vec<Suggestion>,
    /// Highlighted row in the suggestions panel
    pub selected_suggestion: usize,
    /// Token identifying the suggestion request whose results are still
    /// welcome; deliveries carrying any other token are dropped
    pub suggestion_generation: u64,
    /// Vertical scroll offset into the page body
    pub page_scroll: usize,
    /// Status message shown in the toolbar
    pub message: Option<String>,
    /// Menu popup visibility (modal, outside the overlay machine)
    pub menu_visible: bool,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            address: String::new(),
            address_focused: false,
            edit_buffer: String::new(),
            edit_cursor: 0,
            nav: NavigationState::default(),
            mode: OverlayMode::None,
            suggestions: Vec::new(),
            selected_suggestion: 0,
            suggestion_generation: 0,
            page_scroll: 0,
            message: None,
            menu_visible: false,
        }
    }

    /// Give the address bar input focus, seeding the edit buffer
    pub fn focus_address(&mut self, prefill: &str) {
        self.address_focused = true;
        self.edit_buffer = prefill.to_string();
        self.edit_cursor = self.edit_buffer.chars().count();
    }

    /// Drop address bar focus and discard the edit buffer
    pub fn resign_address_focus(&mut self) {
        self.address_focused = false;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
    }

    /// Invalidate any in-flight suggestion request and return the token
    /// for the next one
    pub fn next_suggestion_generation(&mut self) -> u64 {
        self.suggestion_generation += 1;
        self.suggestion_generation
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Clamp the suggestion cursor to the current result list
    pub fn clamp_suggestion_selection(&mut self) {
        if self.suggestions.is_empty() {
            self.selected_suggestion = 0;
        } else {
            self.selected_suggestion = self.selected_suggestion.min(self.suggestions.len() - 1);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
