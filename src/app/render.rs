//! Frame composition
//!
//! Lays out the chrome and delegates each surface to its renderer. The
//! returned [`FrameAreas`] feeds mouse hit-testing on the next event.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::core::AppState;
use crate::engine::{FindMatch, Page};
use crate::render::{
    render_address_bar, render_find_bar, render_menu, render_page, render_suggestions,
    render_toolbar, suggestions_panel_area, FrameAreas,
};

/// Everything a frame needs, borrowed for the draw call
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub page: &'a Page,
    pub matches: &'a [FindMatch],
    pub current_match: usize,
}

/// Render one frame and report where everything landed
pub fn render_frame(frame: &mut Frame, ctx: &RenderContext) -> FrameAreas {
    let state = ctx.state;
    let find_open = state.mode.is_find_in_page();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(3)];
    if find_open {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let address_area = chunks[0];
    let page_area = chunks[1];
    let findbar_area = find_open.then(|| chunks[2]);
    let toolbar_area = if find_open { chunks[3] } else { chunks[2] };

    render_address_bar(frame, state, address_area);
    render_page(
        frame,
        state,
        ctx.page,
        ctx.matches,
        ctx.current_match,
        page_area,
    );

    let suggestions_area = if state.mode.is_suggestions() {
        let area = suggestions_panel_area(page_area, state.suggestions.len());
        render_suggestions(frame, state, area);
        Some(area)
    } else {
        None
    };

    if let (Some(area), Some(session)) = (findbar_area, state.mode.find_session()) {
        render_find_bar(frame, session, area);
    }

    render_toolbar(frame, state, toolbar_area);

    if state.menu_visible {
        render_menu(frame, frame.area());
    }

    FrameAreas {
        address: address_area,
        page: page_area,
        suggestions: suggestions_area,
        findbar: findbar_area,
        toolbar: toolbar_area,
    }
}
