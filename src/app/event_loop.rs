//! Main event loop for the application

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use ratatui::prelude::*;

use crate::coordinator::{self, AddressEvent, Effect, Event, FindBarEvent, SuggestionEvent};
use crate::core::AppState;
use crate::engine::{LocalEngine, PageEngine};
use crate::handler::{
    handle_action, handle_key_event, handle_mouse_event, update_input_buffer, ActionContext,
    ActionResult, KeyAction, MouseAction,
};
use crate::history::History;
use crate::render::FrameAreas;
use crate::suggest::SuggestionProvider;

use super::render::{render_frame, RenderContext};
use super::Config;

/// Event poll interval
const POLL_INTERVAL: Duration = Duration::from_millis(60);

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = AppState::new();
    let mut engine = LocalEngine::new(config.root.clone(), config.show_hidden);
    let provider = SuggestionProvider::new(config.max_results);

    let mut history = match History::default_path() {
        Some(path) => History::new(path, config.history_size),
        None => History::in_memory(config.history_size),
    };
    if let Err(e) = history.load() {
        state.set_message(format!("History unavailable: {}", e));
    }

    // Terms the suggestion provider can offer, refreshed after navigation
    let mut known_terms = engine.known_terms();

    // Load the homepage
    engine.navigate(&config.home);
    history.record(&config.home, &engine.page().title);

    let mut last_areas: Option<FrameAreas> = None;
    let exit = loop {
        // Engine-reported events first, so the frame reflects them
        for engine_event in engine.poll_events() {
            let effects = coordinator::dispatch(Event::Engine(engine_event), &mut state);
            apply_effects(
                effects,
                &mut state,
                &mut engine,
                &mut history,
                &provider,
                &mut known_terms,
            );
        }

        let page = engine.page().clone();
        let ctx = RenderContext {
            state: &state,
            page: &page,
            matches: engine.find_matches(),
            current_match: engine.current_match(),
        };
        let mut areas = None;
        terminal.draw(|frame| {
            areas = Some(render_frame(frame, &ctx));
        })?;
        if let Some(a) = areas {
            last_areas = Some(a);
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action_context = ActionContext {
            home: config.home.clone(),
            page_len: page.lines.len(),
            visible_height: last_areas
                .map(|a| a.page.height.saturating_sub(2) as usize)
                .unwrap_or(1)
                .max(1),
        };

        let action = match event::read()? {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                state.clear_message();
                match handle_key_event(&state, key) {
                    // Unmapped keys feed the focused text input, if any
                    KeyAction::None => {
                        if let Some(effects) = edit_focused_input(key, &mut state) {
                            apply_effects(
                                effects,
                                &mut state,
                                &mut engine,
                                &mut history,
                                &provider,
                                &mut known_terms,
                            );
                        }
                        continue;
                    }
                    action => action,
                }
            }
            TermEvent::Mouse(mouse) if config.mouse_enabled => {
                let Some(areas) = last_areas else { continue };
                match handle_mouse_event(mouse, &areas) {
                    MouseAction::None => continue,
                    MouseAction::ScrollUp => KeyAction::ScrollUp,
                    MouseAction::ScrollDown => KeyAction::ScrollDown,
                    MouseAction::ClickAddress => KeyAction::FocusAddress { clear: false },
                    MouseAction::ClickSuggestion(row) => {
                        if row >= state.suggestions.len() {
                            continue;
                        }
                        state.selected_suggestion = row;
                        KeyAction::SuggestConfirm
                    }
                }
            }
            _ => continue,
        };

        let outcome = handle_action(
            action,
            &mut state,
            &mut engine,
            &mut history,
            &action_context,
        )?;
        apply_effects(
            outcome.effects,
            &mut state,
            &mut engine,
            &mut history,
            &provider,
            &mut known_terms,
        );

        if let ActionResult::Quit(code) = outcome.result {
            break code;
        }
    };

    if let Err(e) = history.save() {
        eprintln!("Warning: failed to save history: {}", e);
    }

    Ok(AppResult { exit_code: exit })
}

/// Route an unmapped key into whichever text input has focus
fn edit_focused_input(
    key: crossterm::event::KeyEvent,
    state: &mut AppState,
) -> Option<Vec<Effect>> {
    if state.address_focused {
        let (buffer, cursor) =
            update_input_buffer(key, &state.edit_buffer, state.edit_cursor)?;
        let changed = buffer != state.edit_buffer;
        state.edit_buffer = buffer.clone();
        state.edit_cursor = cursor;
        if !changed {
            // Cursor-only movement never re-requests suggestions
            return Some(vec![]);
        }
        return Some(coordinator::dispatch(
            Event::Address(AddressEvent::QueryChanged(buffer)),
            state,
        ));
    }

    if let Some(session) = state.mode.find_session() {
        let query = session.query.clone();
        let (buffer, _) = update_input_buffer(key, &query, query.chars().count())?;
        if buffer == query {
            return Some(vec![]);
        }
        return Some(coordinator::dispatch(
            Event::FindBar(FindBarEvent::TextChanged(buffer)),
            state,
        ));
    }

    None
}

/// Apply coordinator effects to the engine and suggestion provider
fn apply_effects(
    effects: Vec<Effect>,
    state: &mut AppState,
    engine: &mut LocalEngine,
    history: &mut History,
    provider: &SuggestionProvider,
    known_terms: &mut Vec<String>,
) {
    for effect in effects {
        match effect {
            Effect::Navigate(term) => {
                engine.navigate(&term);
                history.record(&term, &engine.page().title);
                state.page_scroll = 0;
                *known_terms = engine.known_terms();
            }
            Effect::RequestSuggestions { query, generation } => {
                // The local provider answers synchronously; the delivery
                // still goes back through dispatch so the generation
                // guard applies uniformly.
                let items = provider.suggest(&query, history, known_terms);
                let followups = coordinator::dispatch(
                    Event::Suggestion(SuggestionEvent::Delivered {
                        generation,
                        query,
                        items,
                    }),
                    state,
                );
                debug_assert!(followups.is_empty());
            }
            Effect::Find { text, function } => {
                engine.find(&text, function);
            }
            Effect::FindDone => {
                engine.find_done();
            }
        }
    }
}
