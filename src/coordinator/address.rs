//! Address surface event handling
//!
//! Query edits drive the suggestions overlay; submissions and
//! suggestion taps share the same collapse-and-navigate contract.

use crate::core::{AppState, OverlayMode};

use super::{AddressEvent, Effect};

pub(super) fn handle(event: AddressEvent, state: &mut AppState) -> Vec<Effect> {
    match event {
        AddressEvent::QueryChanged(text) => query_changed(text, state),
        AddressEvent::QuerySubmitted(term) => commit(term, state),
        AddressEvent::MenuRequested => {
            state.menu_visible = true;
            vec![]
        }
    }
}

/// Enter (or stay in) Suggestions mode and request fresh results
///
/// An empty query resets the panel to its empty state; the overlay is
/// never hidden from here.
fn query_changed(text: String, state: &mut AppState) -> Vec<Effect> {
    let generation = state.next_suggestion_generation();
    state.suggestions.clear();
    state.selected_suggestion = 0;
    state.mode = OverlayMode::Suggestions { query: text.clone() };

    vec![Effect::RequestSuggestions {
        query: text,
        generation,
    }]
}

/// Collapse to OverlayMode::None and navigate
///
/// Used for both explicit submission and suggestion taps. The address
/// bar resigns focus before the navigate request goes out.
pub(super) fn commit(term: String, state: &mut AppState) -> Vec<Effect> {
    state.address = term.clone();
    state.resign_address_focus();
    // Cancel interest in any in-flight suggestion request
    state.next_suggestion_generation();
    state.suggestions.clear();
    state.selected_suggestion = 0;
    state.mode = OverlayMode::None;

    vec![Effect::Navigate(term)]
}
