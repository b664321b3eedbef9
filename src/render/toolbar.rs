//! Bottom toolbar rendering
//!
//! Navigation affordances reflect the engine's last reported
//! NavigationState; disabled controls are dimmed, never hidden.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::AppState;
use crate::render::theme::theme;

/// Render the toolbar at the bottom of the frame
pub fn render_toolbar(frame: &mut Frame, state: &AppState, area: Rect) {
    let t = theme();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let enabled = Style::default().fg(t.foreground);
    let disabled = Style::default().fg(t.dim);

    let back_style = if state.nav.can_go_back { enabled } else { disabled };
    let forward_style = if state.nav.can_go_forward { enabled } else { disabled };
    // Reload swaps to stop while a load is in flight
    let reload_label = if state.nav.is_loading { "✕ stop" } else { "⟳ reload" };

    let controls = Line::from(vec![
        Span::styled(" ◀ back ", back_style),
        Span::styled("▶ fwd ", forward_style),
        Span::styled(reload_label, enabled),
    ]);
    frame.render_widget(
        Paragraph::new(controls).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let message = state.message.as_deref().unwrap_or("? for menu · / to search · q to quit");
    let msg_widget = Paragraph::new(format!(" {}", message))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[1]);
}
