//! Integration tests for pageview
//!
//! These tests drive the coordinator, handlers, and local engine the
//! way the event loop does and verify the overlay behavior end to end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use pageview::coordinator::{self, AddressEvent, Effect, Event, FindBarEvent, SuggestionEvent};
use pageview::core::{AppState, FindFunction, OverlayMode};
use pageview::engine::{EngineEvent, LocalEngine, PageEngine};
use pageview::handler::{
    handle_action, handle_key_event, update_input_buffer, ActionContext, ActionResult, KeyAction,
};
use pageview::history::History;
use pageview::suggest::SuggestionProvider;

/// Helper to create a KeyEvent
fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A root directory with a few pages to browse
fn fixture_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("readme.md"),
        "pageview\n\nhello world\nhello again\n",
    )
    .unwrap();
    std::fs::create_dir(temp.path().join("docs")).unwrap();
    std::fs::write(temp.path().join("docs").join("guide.md"), "guide\n").unwrap();
    temp
}

/// Apply coordinator effects the way the event loop does, resolving
/// suggestion requests synchronously through the provider
fn apply_effects(
    effects: Vec<Effect>,
    state: &mut AppState,
    engine: &mut LocalEngine,
    history: &mut History,
    provider: &SuggestionProvider,
) {
    for effect in effects {
        match effect {
            Effect::Navigate(term) => {
                engine.navigate(&term);
                history.record(&term, &engine.page().title);
            }
            Effect::RequestSuggestions { query, generation } => {
                let items = provider.suggest(&query, history, &engine.known_terms());
                coordinator::dispatch(
                    Event::Suggestion(SuggestionEvent::Delivered {
                        generation,
                        query,
                        items,
                    }),
                    state,
                );
            }
            Effect::Find { text, function } => engine.find(&text, function),
            Effect::FindDone => engine.find_done(),
        }
    }
}

/// Drain engine events back through the coordinator
fn drain_engine(state: &mut AppState, engine: &mut LocalEngine) {
    for event in engine.poll_events() {
        let effects = coordinator::dispatch(Event::Engine(event), state);
        assert!(
            effects.iter().all(|e| matches!(e, Effect::Find { .. })),
            "engine events only ever request a find"
        );
        for effect in effects {
            if let Effect::Find { text, function } = effect {
                engine.find(&text, function);
            }
        }
    }
}

// =============================================================================
// Overlay State Tests
// =============================================================================

mod overlay_tests {
    use super::*;

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let mut state = AppState::new();
        coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged("doc".to_string())),
            &mut state,
        );
        assert!(state.mode.is_suggestions());
        assert!(!state.mode.is_find_in_page());

        coordinator::enter_find_in_page(&mut state, None);
        assert!(state.mode.is_find_in_page());
        assert!(!state.mode.is_suggestions());

        coordinator::dispatch(Event::FindBar(FindBarEvent::Close), &mut state);
        assert!(state.mode.is_none());
    }

    #[test]
    fn test_find_session_lives_inside_the_mode() {
        let mut state = AppState::new();
        assert!(state.mode.find_session().is_none());

        coordinator::enter_find_in_page(&mut state, None);
        assert!(state.mode.find_session().is_some());

        coordinator::dispatch(Event::FindBar(FindBarEvent::Close), &mut state);
        // No session can outlive the mode
        assert!(state.mode.find_session().is_none());
    }
}

// =============================================================================
// Key Handler Tests
// =============================================================================

mod key_tests {
    use super::*;

    #[test]
    fn test_browse_keys_route_to_browse_actions() {
        let state = AppState::new();
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Char('/'))),
            KeyAction::FocusAddress { clear: true }
        );
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Char('f'))),
            KeyAction::OpenFindBar
        );
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_overlay_swallows_browse_keys() {
        let mut state = AppState::new();
        state.focus_address("");
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Char('q'))),
            KeyAction::None
        );

        let mut state = AppState::new();
        coordinator::enter_find_in_page(&mut state, None);
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Esc)),
            KeyAction::CloseFindBar
        );
        assert_eq!(
            handle_key_event(&state, key_event(KeyCode::Char('/'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_multibyte_text_entry_in_both_inputs() {
        // Address bar: type "éa" the way the event loop feeds keystrokes
        let mut state = AppState::new();
        state.focus_address("");
        for c in ['é', 'a'] {
            let (buffer, cursor) = update_input_buffer(
                key_event(KeyCode::Char(c)),
                &state.edit_buffer,
                state.edit_cursor,
            )
            .unwrap();
            state.edit_buffer = buffer.clone();
            state.edit_cursor = cursor;
            coordinator::dispatch(
                Event::Address(AddressEvent::QueryChanged(buffer)),
                &mut state,
            );
        }
        assert_eq!(state.edit_buffer, "éa");
        assert_eq!(state.edit_cursor, 2);

        // Find bar: backspace directly after a multibyte character
        coordinator::enter_find_in_page(&mut state, Some("é".to_string()));
        let query = state.mode.find_session().unwrap().query.clone();
        let (buffer, _) =
            update_input_buffer(key_event(KeyCode::Backspace), &query, query.chars().count())
                .unwrap();
        assert_eq!(buffer, "");
    }
}

// =============================================================================
// Suggestions Flow Tests
// =============================================================================

mod suggestions_tests {
    use super::*;

    #[test]
    fn test_typing_populates_suggestions_through_delivery() {
        let temp = fixture_root();
        let mut state = AppState::new();
        let mut engine = LocalEngine::new(temp.path(), false);
        let mut history = History::in_memory(50);
        let provider = SuggestionProvider::new(10);

        let effects = coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged("readme".to_string())),
            &mut state,
        );
        apply_effects(effects, &mut state, &mut engine, &mut history, &provider);

        assert!(state.mode.is_suggestions());
        assert!(state.suggestions.iter().any(|s| s.term == "readme.md"));
    }

    #[test]
    fn test_stale_delivery_ignored_after_newer_request() {
        let temp = fixture_root();
        let mut state = AppState::new();
        let engine = LocalEngine::new(temp.path(), false);
        let history = History::in_memory(50);
        let provider = SuggestionProvider::new(10);

        // First request goes out but its delivery is delayed
        let first = coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged("r".to_string())),
            &mut state,
        );
        let Some(Effect::RequestSuggestions { query, generation }) = first.first().cloned()
        else {
            panic!("expected a suggestion request");
        };
        let delayed = provider.suggest(&query, &history, &engine.known_terms());
        assert!(!delayed.is_empty());

        // A newer keystroke supersedes it
        coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged("zzz".to_string())),
            &mut state,
        );

        // The delayed delivery lands and is dropped
        coordinator::dispatch(
            Event::Suggestion(SuggestionEvent::Delivered {
                generation,
                query,
                items: delayed,
            }),
            &mut state,
        );
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_tap_navigates_and_collapses() {
        let temp = fixture_root();
        let mut state = AppState::new();
        let mut engine = LocalEngine::new(temp.path(), false);
        let mut history = History::in_memory(50);
        let provider = SuggestionProvider::new(10);

        state.focus_address("read");
        let effects = coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged("read".to_string())),
            &mut state,
        );
        apply_effects(effects, &mut state, &mut engine, &mut history, &provider);

        let term = state.suggestions[0].term.clone();
        let effects = coordinator::dispatch(
            Event::Suggestion(SuggestionEvent::Tapped(term.clone())),
            &mut state,
        );
        apply_effects(effects, &mut state, &mut engine, &mut history, &provider);
        drain_engine(&mut state, &mut engine);

        assert_eq!(state.mode, OverlayMode::None);
        assert!(!state.address_focused);
        assert_eq!(state.address, term);
        assert_eq!(engine.current_url(), term);
        assert!(history.recent(1).any(|e| e.term == term));
    }

    #[test]
    fn test_empty_query_shows_recents() {
        let temp = fixture_root();
        let mut state = AppState::new();
        let mut engine = LocalEngine::new(temp.path(), false);
        let mut history = History::in_memory(50);
        let provider = SuggestionProvider::new(10);
        history.record("docs", "Index of docs");

        let effects = coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged(String::new())),
            &mut state,
        );
        apply_effects(effects, &mut state, &mut engine, &mut history, &provider);

        assert!(state.mode.is_suggestions());
        assert_eq!(state.suggestions.len(), 1);
        assert_eq!(state.suggestions[0].term, "docs");
    }
}

// =============================================================================
// Find-in-Page Flow Tests
// =============================================================================

mod find_tests {
    use super::*;

    fn loaded(temp: &TempDir) -> (AppState, LocalEngine) {
        let mut state = AppState::new();
        let mut engine = LocalEngine::new(temp.path(), false);
        engine.navigate("readme.md");
        drain_engine(&mut state, &mut engine);
        (state, engine)
    }

    #[test]
    fn test_typing_in_find_bar_updates_counter() {
        let temp = fixture_root();
        let (mut state, mut engine) = loaded(&temp);

        coordinator::enter_find_in_page(&mut state, None);
        let effects = coordinator::dispatch(
            Event::FindBar(FindBarEvent::TextChanged("hello".to_string())),
            &mut state,
        );
        assert_eq!(
            effects,
            vec![Effect::Find {
                text: "hello".to_string(),
                function: FindFunction::Find,
            }]
        );
        engine.find("hello", FindFunction::Find);
        drain_engine(&mut state, &mut engine);

        let session = state.mode.find_session().unwrap();
        assert_eq!(session.total_results, 2);
        assert_eq!(session.current_result, 1);
        assert_eq!(session.counter(), "1/2");
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let temp = fixture_root();
        let (mut state, mut engine) = loaded(&temp);

        coordinator::enter_find_in_page(&mut state, None);
        coordinator::dispatch(
            Event::FindBar(FindBarEvent::TextChanged("hello".to_string())),
            &mut state,
        );
        engine.find("hello", FindFunction::Find);
        drain_engine(&mut state, &mut engine);

        engine.find("hello", FindFunction::FindNext);
        drain_engine(&mut state, &mut engine);
        assert_eq!(state.mode.find_session().unwrap().current_result, 2);

        // Wraps past the end
        engine.find("hello", FindFunction::FindNext);
        drain_engine(&mut state, &mut engine);
        assert_eq!(state.mode.find_session().unwrap().current_result, 1);

        // And backwards past the start
        engine.find("hello", FindFunction::FindPrevious);
        drain_engine(&mut state, &mut engine);
        assert_eq!(state.mode.find_session().unwrap().current_result, 2);
    }

    #[test]
    fn test_close_clears_engine_highlighting() {
        let temp = fixture_root();
        let (mut state, mut engine) = loaded(&temp);

        coordinator::enter_find_in_page(&mut state, None);
        engine.find("hello", FindFunction::Find);
        drain_engine(&mut state, &mut engine);
        assert!(!engine.find_matches().is_empty());

        let effects = coordinator::dispatch(Event::FindBar(FindBarEvent::Close), &mut state);
        assert_eq!(effects, vec![Effect::FindDone]);
        engine.find_done();

        assert!(engine.find_matches().is_empty());
        assert_eq!(engine.current_match(), 0);
        assert!(state.mode.is_none());
    }

    #[test]
    fn test_result_update_after_close_is_dropped() {
        let temp = fixture_root();
        let (mut state, _engine) = loaded(&temp);

        coordinator::enter_find_in_page(&mut state, None);
        coordinator::dispatch(Event::FindBar(FindBarEvent::Close), &mut state);

        // A late result notification for the dismissed bar
        coordinator::dispatch(
            Event::Engine(EngineEvent::FindResultUpdated { current: 2, total: 9 }),
            &mut state,
        );
        assert_eq!(state.mode, OverlayMode::None);
    }
}

// =============================================================================
// Action Handler Scenarios
// =============================================================================

mod action_tests {
    use super::*;

    fn context(page_len: usize) -> ActionContext {
        ActionContext {
            home: ".".to_string(),
            page_len,
            visible_height: 10,
        }
    }

    #[test]
    fn test_navigation_actions_update_engine_state() {
        let temp = fixture_root();
        let mut state = AppState::new();
        let mut engine = LocalEngine::new(temp.path(), false);
        let mut history = History::in_memory(50);
        let provider = SuggestionProvider::new(10);

        for term in ["readme.md", "docs"] {
            let outcome = handle_action(
                KeyAction::SubmitAddress {
                    value: term.to_string(),
                },
                &mut state,
                &mut engine,
                &mut history,
                &context(10),
            )
            .unwrap();
            apply_effects(
                outcome.effects,
                &mut state,
                &mut engine,
                &mut history,
                &provider,
            );
            drain_engine(&mut state, &mut engine);
        }
        assert_eq!(state.address, "docs");
        assert!(state.nav.can_go_back);
        assert!(!state.nav.can_go_forward);

        handle_action(
            KeyAction::GoBack,
            &mut state,
            &mut engine,
            &mut history,
            &context(10),
        )
        .unwrap();
        drain_engine(&mut state, &mut engine);

        assert_eq!(state.address, "readme.md");
        assert!(state.nav.can_go_forward);
    }

    #[test]
    fn test_quit_returns_exit_code_zero() {
        let temp = fixture_root();
        let mut state = AppState::new();
        let mut engine = LocalEngine::new(temp.path(), false);
        let mut history = History::in_memory(50);

        let outcome = handle_action(
            KeyAction::Quit,
            &mut state,
            &mut engine,
            &mut history,
            &context(0),
        )
        .unwrap();
        assert_eq!(outcome.result, ActionResult::Quit(0));
    }
}
