//! Address bar rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::AppState;
use crate::render::theme::theme;

/// Render the address bar at the top of the frame
pub fn render_address_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let t = theme();

    let border_style = if state.address_focused {
        Style::default().fg(t.border_active)
    } else {
        Style::default().fg(t.border)
    };

    let title = if state.nav.is_loading {
        " pageview ⟳ "
    } else {
        " pageview "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let line = if state.address_focused {
        edit_line(&state.edit_buffer, state.edit_cursor)
    } else if state.address.is_empty() {
        Line::from(Span::styled(
            "press / to enter a path or search",
            Style::default().fg(t.dim),
        ))
    } else {
        Line::from(Span::styled(
            state.address.clone(),
            Style::default().fg(t.accent),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Edit buffer with a visible cursor position
fn edit_line(buffer: &str, cursor: usize) -> Line<'static> {
    let t = theme();
    let chars: Vec<char> = buffer.chars().collect();
    let cursor = cursor.min(chars.len());

    let before: String = chars[..cursor].iter().collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = if cursor < chars.len() {
        chars[cursor + 1..].iter().collect()
    } else {
        String::new()
    };

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}
