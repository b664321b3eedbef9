//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::AppState;

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Focus the address bar (optionally clearing the current text)
    FocusAddress { clear: bool },
    /// Submit the address edit buffer
    SubmitAddress { value: String },
    /// Drop address focus and collapse the suggestions overlay
    CancelAddressEdit,
    /// Move the suggestion highlight up
    SuggestUp,
    /// Move the suggestion highlight down
    SuggestDown,
    /// Accept the highlighted suggestion
    SuggestConfirm,
    /// Toolbar: go back
    GoBack,
    /// Toolbar: go forward
    GoForward,
    /// Toolbar: reload the current page
    Reload,
    /// Toolbar: stop loading
    Stop,
    /// Open the find-in-page bar
    OpenFindBar,
    /// Step to the next find match
    FindNext,
    /// Step to the previous find match
    FindPrev,
    /// Close the find-in-page bar
    CloseFindBar,
    /// Scroll the page up one line
    ScrollUp,
    /// Scroll the page down one line
    ScrollDown,
    /// Scroll the page up one screen
    PageUp,
    /// Scroll the page down one screen
    PageDown,
    /// Jump to the top of the page
    ScrollToTop,
    /// Jump to the bottom of the page
    ScrollToBottom,
    /// Copy the current address to the system clipboard
    CopyUrl,
    /// Open the menu popup
    OpenMenu,
    /// Close the menu popup
    CloseMenu,
    /// Menu: clear browsing history
    ClearHistory,
    /// Navigate to the configured homepage
    GoHome,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    // The menu popup is modal and swallows everything
    if state.menu_visible {
        return handle_menu_mode(key);
    }
    if state.address_focused {
        return handle_address_mode(state, key);
    }
    if state.mode.is_find_in_page() {
        return handle_find_mode(key);
    }
    handle_browse_mode(key)
}

/// Handle keys in browse mode (no overlay, page has focus)
fn handle_browse_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::None,

        // Address bar
        KeyCode::Char('/') => KeyAction::FocusAddress { clear: true },
        KeyCode::Char('e') => KeyAction::FocusAddress { clear: false },

        // Toolbar
        KeyCode::Left | KeyCode::Char('[') | KeyCode::Backspace => KeyAction::GoBack,
        KeyCode::Right | KeyCode::Char(']') => KeyAction::GoForward,
        KeyCode::Char('r') | KeyCode::F(5) => KeyAction::Reload,
        KeyCode::Char('x') => KeyAction::Stop,

        // Find in page
        KeyCode::Char('f') => KeyAction::OpenFindBar,

        // Page scrolling
        KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
        KeyCode::PageUp | KeyCode::Char('b') => KeyAction::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => KeyAction::PageDown,
        KeyCode::Char('g') => KeyAction::ScrollToTop,
        KeyCode::Char('G') => KeyAction::ScrollToBottom,

        // Misc
        KeyCode::Char('c') => KeyAction::CopyUrl,
        KeyCode::Char('H') => KeyAction::GoHome,
        KeyCode::Char('m') | KeyCode::Char('?') => KeyAction::OpenMenu,

        _ => KeyAction::None,
    }
}

/// Handle keys while the address bar is focused
fn handle_address_mode(state: &AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::SubmitAddress {
            value: state.edit_buffer.clone(),
        },
        KeyCode::Esc => KeyAction::CancelAddressEdit,
        KeyCode::Up => KeyAction::SuggestUp,
        KeyCode::Down => KeyAction::SuggestDown,
        KeyCode::Tab => KeyAction::SuggestConfirm,
        _ => KeyAction::None, // Buffer updates handled separately
    }
}

/// Handle keys while the find bar is open
fn handle_find_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::CloseFindBar,
        KeyCode::Enter | KeyCode::Down => KeyAction::FindNext,
        KeyCode::Up => KeyAction::FindPrev,
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::FindNext,
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::FindPrev,
        _ => KeyAction::None, // Text input handled separately
    }
}

/// Handle keys while the menu popup is open
fn handle_menu_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') | KeyCode::Char('?') => {
            KeyAction::CloseMenu
        }
        KeyCode::Char('c') => KeyAction::ClearHistory,
        _ => KeyAction::None,
    }
}

/// Update input buffer based on key event
/// Returns the new buffer content, or None if no change
///
/// The cursor is a char index; byte offsets are derived per edit so
/// multibyte input always lands on a boundary.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    let char_count = buffer.chars().count();
    let cursor = cursor.min(char_count);
    let byte_at = |char_idx: usize| {
        buffer
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(buffer.len())
    };

    match key.code {
        KeyCode::Char(c) => {
            let mut new_buffer = buffer.to_string();
            new_buffer.insert(byte_at(cursor), c);
            Some((new_buffer, cursor + 1))
        }
        KeyCode::Backspace => {
            if cursor > 0 {
                let mut new_buffer = buffer.to_string();
                new_buffer.remove(byte_at(cursor - 1));
                Some((new_buffer, cursor - 1))
            } else {
                None
            }
        }
        KeyCode::Delete => {
            if cursor < char_count {
                let mut new_buffer = buffer.to_string();
                new_buffer.remove(byte_at(cursor));
                Some((new_buffer, cursor))
            } else {
                None
            }
        }
        KeyCode::Left => {
            if cursor > 0 {
                Some((buffer.to_string(), cursor - 1))
            } else {
                None
            }
        }
        KeyCode::Right => {
            if cursor < char_count {
                Some((buffer.to_string(), cursor + 1))
            } else {
                None
            }
        }
        KeyCode::Home => {
            if cursor > 0 {
                Some((buffer.to_string(), 0))
            } else {
                None
            }
        }
        KeyCode::End => {
            if cursor < char_count {
                Some((buffer.to_string(), char_count))
            } else {
                None
            }
        }
        _ => None,
    }
}
