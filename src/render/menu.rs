//! Menu popup rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::render::theme::theme;

const MENU_LINES: &[(&str, &str)] = &[
    ("/", "search or enter a path"),
    ("e", "edit current address"),
    ("f", "find in page"),
    ("← / →", "back / forward"),
    ("r / x", "reload / stop"),
    ("j k ⎵", "scroll"),
    ("c", "copy address"),
    ("H", "go home"),
    ("", ""),
    ("c (here)", "clear history"),
    ("Esc", "close menu"),
];

/// Render the centered menu popup
pub fn render_menu(frame: &mut Frame, area: Rect) {
    let t = theme();

    let width = 44.min(area.width.saturating_sub(2));
    let height = (MENU_LINES.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 3,
        width,
        height,
    );

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border_active))
        .title(" Menu ");

    let lines: Vec<Line> = MENU_LINES
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<10}", key),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(desc.to_string()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
