//! Overlay coordination
//!
//! Mediates between the address bar, the suggestions panel, the find
//! bar, and the page engine. Each collaborator reports through its own
//! event type; everything funnels through [`dispatch`], the only place
//! overlay transitions happen. The coordinator returns [`Effect`]s for
//! the caller to apply to the engine and suggestion provider rather
//! than driving them directly, so the machine is testable in isolation.

mod address;
mod find;
mod suggest;

pub use find::enter_find_in_page;

use crate::core::{AppState, FindFunction};
use crate::engine::EngineEvent;
use crate::suggest::Suggestion;

/// Events reported by the address-entry surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressEvent {
    /// Edit buffer changed while the address bar is focused
    QueryChanged(String),
    /// User submitted the current text
    QuerySubmitted(String),
    /// User asked for the menu
    MenuRequested,
}

/// Events reported by the suggestions surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEvent {
    /// User tapped a suggestion row
    Tapped(String),
    /// Provider delivered results for an earlier request
    Delivered {
        generation: u64,
        query: String,
        items: Vec<Suggestion>,
    },
}

/// Events reported by the find-in-page bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindBarEvent {
    TextChanged(String),
    Next,
    Prev,
    Close,
}

/// Any collaborator event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Address(AddressEvent),
    Suggestion(SuggestionEvent),
    FindBar(FindBarEvent),
    Engine(EngineEvent),
}

/// Side effects the coordinator asks the caller to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate the engine to a term
    Navigate(String),
    /// Ask the suggestion provider for results
    RequestSuggestions { query: String, generation: u64 },
    /// Run the engine's text-search function
    Find { text: String, function: FindFunction },
    /// Tell the engine to clear search highlighting
    FindDone,
}

/// Single dispatch entry point for all collaborator events
pub fn dispatch(event: Event, state: &mut AppState) -> Vec<Effect> {
    match event {
        Event::Address(ev) => address::handle(ev, state),
        Event::Suggestion(ev) => suggest::handle(ev, state),
        Event::FindBar(ev) => find::handle(ev, state),
        Event::Engine(ev) => handle_engine(ev, state),
    }
}

/// Engine-reported events: state mirroring plus the one transition the
/// engine may request (opening the find bar for a selection)
fn handle_engine(event: EngineEvent, state: &mut AppState) -> Vec<Effect> {
    match event {
        EngineEvent::NavigationStateChanged(nav) => {
            // Pure pass-through to button enablement; never touches the
            // overlay mode.
            state.nav = nav;
            vec![]
        }
        EngineEvent::UrlChanged(url) => {
            state.address = url;
            vec![]
        }
        EngineEvent::FindResultUpdated { current, total } => {
            find::apply_result_update(state, current, total);
            vec![]
        }
        EngineEvent::FindRequested(selection) => enter_find_in_page(state, Some(selection)),
    }
}
