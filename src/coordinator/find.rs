//! Find-in-page bar event handling
//!
//! The bar's session lives inside the FindInPage variant; it is created
//! here on entry and destroyed on close, never mutated from elsewhere.

use crate::core::{AppState, FindFunction, FindInPageSession, OverlayMode};

use super::{Effect, FindBarEvent};

/// Open the find bar with a fresh session
///
/// Detaches whatever overlay was active and cancels interest in any
/// in-flight suggestion results. A non-empty prefill (e.g. a selection
/// reported by the engine) starts a search immediately.
pub fn enter_find_in_page(state: &mut AppState, prefill: Option<String>) -> Vec<Effect> {
    state.next_suggestion_generation();
    state.suggestions.clear();
    state.resign_address_focus();

    let query = prefill.unwrap_or_default();
    state.mode = OverlayMode::FindInPage {
        session: FindInPageSession {
            query: query.clone(),
            ..FindInPageSession::new()
        },
    };

    if query.is_empty() {
        vec![]
    } else {
        vec![Effect::Find {
            text: query,
            function: FindFunction::Find,
        }]
    }
}

pub(super) fn handle(event: FindBarEvent, state: &mut AppState) -> Vec<Effect> {
    // All bar events are no-ops unless the bar is attached
    let Some(session) = state.mode.find_session_mut() else {
        return vec![];
    };

    match event {
        FindBarEvent::TextChanged(text) => {
            session.query = text.clone();
            vec![Effect::Find {
                text,
                function: FindFunction::Find,
            }]
        }
        FindBarEvent::Next => vec![Effect::Find {
            text: session.query.clone(),
            function: FindFunction::FindNext,
        }],
        FindBarEvent::Prev => vec![Effect::Find {
            text: session.query.clone(),
            function: FindFunction::FindPrevious,
        }],
        FindBarEvent::Close => {
            // Tearing down the variant destroys the session with it
            state.mode = OverlayMode::None;
            vec![Effect::FindDone]
        }
    }
}

/// Engine-reported result counts; applied only while the bar is open
pub(super) fn apply_result_update(state: &mut AppState, current: usize, total: usize) {
    if let Some(session) = state.mode.find_session_mut() {
        session.current_result = current;
        session.total_results = total;
    }
}
