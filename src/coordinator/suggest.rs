//! Suggestions surface event handling

use crate::core::AppState;

use super::{Effect, SuggestionEvent};

pub(super) fn handle(event: SuggestionEvent, state: &mut AppState) -> Vec<Effect> {
    match event {
        SuggestionEvent::Tapped(term) => super::address::commit(term, state),
        SuggestionEvent::Delivered {
            generation,
            query: _,
            items,
        } => {
            // Results are welcome only while the suggestions overlay is
            // attached and the request token is still current; anything
            // else is a stale delivery from a cancelled request.
            if generation != state.suggestion_generation || !state.mode.is_suggestions() {
                return vec![];
            }
            state.suggestions = items;
            state.clamp_suggestion_selection();
            vec![]
        }
    }
}
