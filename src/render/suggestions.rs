//! Suggestions overlay rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::core::AppState;
use crate::render::theme::theme;
use crate::suggest::Suggestion;

/// Maximum number of suggestion rows shown
const MAX_VISIBLE: u16 = 10;

/// Panel area directly under the address bar, clamped to the page area
pub fn suggestions_panel_area(page_area: Rect, result_count: usize) -> Rect {
    let height = (result_count.max(1) as u16 + 2).min(MAX_VISIBLE + 2);
    let width = page_area.width.saturating_sub(4).max(20);
    // Never extend past the page surface; drawing outside the buffer
    // panics in ratatui
    Rect::new(page_area.x + 2, page_area.y, width, height).intersection(page_area)
}

/// Render the suggestions panel
pub fn render_suggestions(frame: &mut Frame, state: &AppState, area: Rect) {
    let t = theme();

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border_active))
        .title(" Suggestions ");

    if state.suggestions.is_empty() {
        let empty = List::new([ListItem::new(Span::styled(
            " no recent pages",
            Style::default().fg(t.dim),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .suggestions
        .iter()
        .take(MAX_VISIBLE as usize)
        .enumerate()
        .map(|(i, s)| {
            let is_selected = i == state.selected_suggestion;
            let style = if is_selected {
                Style::default()
                    .bg(t.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(highlighted_line(s)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Label with matched characters highlighted
fn highlighted_line(suggestion: &Suggestion) -> Line<'static> {
    let t = theme();
    let match_style = Style::default()
        .fg(t.match_highlight)
        .add_modifier(Modifier::BOLD);

    let chars: Vec<char> = suggestion.label.chars().collect();
    let mut spans = vec![Span::raw(" ")];
    let mut last_idx = 0;

    for &idx in &suggestion.indices {
        if idx > last_idx {
            let text: String = chars[last_idx..idx.min(chars.len())].iter().collect();
            spans.push(Span::raw(text));
        }
        if idx < chars.len() {
            spans.push(Span::styled(chars[idx].to_string(), match_style));
            last_idx = idx + 1;
        }
    }
    if last_idx < chars.len() {
        let text: String = chars[last_idx..].iter().collect();
        spans.push(Span::raw(text));
    }

    Line::from(spans)
}
