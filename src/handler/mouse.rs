//! Mouse event handling

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::render::FrameAreas;

/// Actions that can result from mouse handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseAction {
    /// No action needed
    None,
    /// Scroll the page up
    ScrollUp,
    /// Scroll the page down
    ScrollDown,
    /// Click on the address bar
    ClickAddress,
    /// Click on a suggestion row (index into the visible list)
    ClickSuggestion(usize),
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Translate a mouse event against the last rendered frame layout
pub fn handle_mouse_event(mouse: MouseEvent, areas: &FrameAreas) -> MouseAction {
    match mouse.kind {
        MouseEventKind::ScrollUp => MouseAction::ScrollUp,
        MouseEventKind::ScrollDown => MouseAction::ScrollDown,
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(suggestions) = areas.suggestions {
                if contains(suggestions, mouse.column, mouse.row) {
                    // Only rows between the panel borders are results
                    let first = suggestions.y + 1;
                    let last = suggestions.y + suggestions.height.saturating_sub(1);
                    if mouse.row >= first && mouse.row < last {
                        return MouseAction::ClickSuggestion((mouse.row - first) as usize);
                    }
                    return MouseAction::None;
                }
            }
            if contains(areas.address, mouse.column, mouse.row) {
                MouseAction::ClickAddress
            } else {
                MouseAction::None
            }
        }
        _ => MouseAction::None,
    }
}
