//! Find-in-page bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::FindInPageSession;
use crate::render::theme::theme;

/// Render the find bar above the toolbar
pub fn render_find_bar(frame: &mut Frame, session: &FindInPageSession, area: Rect) {
    let t = theme();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let query_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border_active))
        .title(" Find ");
    let query_line = Line::from(vec![
        Span::raw(session.query.clone()),
        Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
    ]);
    frame.render_widget(Paragraph::new(query_line).block(query_block), chunks[0]);

    let counter_style = if session.total_results == 0 && !session.query.is_empty() {
        Style::default().fg(t.error)
    } else {
        Style::default().fg(t.accent)
    };
    let counter = Paragraph::new(Span::styled(session.counter(), counter_style))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(counter, chunks[1]);
}
