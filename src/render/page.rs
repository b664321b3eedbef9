//! Page body rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::AppState;
use crate::engine::{FindMatch, Page};
use crate::render::theme::theme;

/// Render the page surface with find-match highlighting
pub fn render_page(
    frame: &mut Frame,
    state: &AppState,
    page: &Page,
    matches: &[FindMatch],
    current_match: usize,
    area: Rect,
) {
    let t = theme();

    let title = if page.title.is_empty() {
        " (no page) ".to_string()
    } else {
        format!(" {} ", page.title)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border))
        .title(title);

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = state.page_scroll.min(page.lines.len().saturating_sub(1));

    let lines: Vec<Line> = page
        .lines
        .iter()
        .enumerate()
        .skip(scroll)
        .take(inner_height)
        .map(|(idx, line)| highlight_line(idx, line, matches, current_match))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Split a page line into spans around the engine-reported matches
fn highlight_line(
    line_idx: usize,
    line: &str,
    matches: &[FindMatch],
    current_match: usize,
) -> Line<'static> {
    let t = theme();
    let line_matches: Vec<(usize, &FindMatch)> = matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.line == line_idx)
        .collect();

    if line_matches.is_empty() {
        return Line::from(Span::raw(line.to_string()));
    }

    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut pos = 0;

    for (match_idx, m) in line_matches {
        let start = m.start.min(chars.len());
        let end = m.end.min(chars.len());
        if start > pos {
            let text: String = chars[pos..start].iter().collect();
            spans.push(Span::raw(text));
        }
        let text: String = chars[start..end].iter().collect();
        // current_match is 1-based
        let color = if match_idx + 1 == current_match {
            t.match_current
        } else {
            t.match_highlight
        };
        spans.push(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ));
        pos = end;
    }

    if pos < chars.len() {
        let text: String = chars[pos..].iter().collect();
        spans.push(Span::raw(text));
    }

    Line::from(spans)
}
