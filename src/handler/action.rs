//! Action execution handler
//!
//! Translates [`KeyAction`]s into coordinator events, direct engine
//! calls (the toolbar talks to the engine exactly as its buttons
//! would), and app-level state changes. Coordinator effects are
//! returned to the event loop, which applies them to the collaborators.

use crate::coordinator::{self, AddressEvent, Effect, Event, FindBarEvent, SuggestionEvent};
use crate::core::{AppState, OverlayMode};
use crate::engine::PageEngine;
use crate::handler::key::KeyAction;
use crate::history::History;

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
}

/// Result plus any coordinator effects still to be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub result: ActionResult,
    pub effects: Vec<Effect>,
}

impl ActionOutcome {
    fn cont() -> Self {
        Self {
            result: ActionResult::Continue,
            effects: vec![],
        }
    }

    fn with_effects(effects: Vec<Effect>) -> Self {
        Self {
            result: ActionResult::Continue,
            effects,
        }
    }
}

/// Context for action execution (extracted from Config)
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Homepage term for GoHome
    pub home: String,
    /// Line count of the current page, for scroll clamping
    pub page_len: usize,
    /// Visible page height, for paging
    pub visible_height: usize,
}

/// Handle a KeyAction and update state accordingly
pub fn handle_action(
    action: KeyAction,
    state: &mut AppState,
    engine: &mut dyn PageEngine,
    history: &mut History,
    context: &ActionContext,
) -> anyhow::Result<ActionOutcome> {
    let max_scroll = context.page_len.saturating_sub(1);

    match action {
        KeyAction::None => Ok(ActionOutcome::cont()),
        KeyAction::Quit => Ok(ActionOutcome {
            result: ActionResult::Quit(0),
            effects: vec![],
        }),

        // Address bar
        KeyAction::FocusAddress { clear } => {
            let prefill = if clear {
                String::new()
            } else {
                state.address.clone()
            };
            state.focus_address(&prefill);
            let effects = coordinator::dispatch(
                Event::Address(AddressEvent::QueryChanged(prefill)),
                state,
            );
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::SubmitAddress { value } => {
            let effects = coordinator::dispatch(
                Event::Address(AddressEvent::QuerySubmitted(value)),
                state,
            );
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::CancelAddressEdit => {
            state.resign_address_focus();
            // Ending the edit detaches the suggestions overlay
            state.next_suggestion_generation();
            state.suggestions.clear();
            state.mode = OverlayMode::None;
            Ok(ActionOutcome::cont())
        }

        // Suggestions
        KeyAction::SuggestUp => {
            state.selected_suggestion = state.selected_suggestion.saturating_sub(1);
            Ok(ActionOutcome::cont())
        }
        KeyAction::SuggestDown => {
            state.selected_suggestion += 1;
            state.clamp_suggestion_selection();
            Ok(ActionOutcome::cont())
        }
        KeyAction::SuggestConfirm => {
            let Some(suggestion) = state.suggestions.get(state.selected_suggestion) else {
                return Ok(ActionOutcome::cont());
            };
            let term = suggestion.term.clone();
            let effects =
                coordinator::dispatch(Event::Suggestion(SuggestionEvent::Tapped(term)), state);
            Ok(ActionOutcome::with_effects(effects))
        }

        // Toolbar: talks to the engine directly
        KeyAction::GoBack => {
            engine.go_back();
            Ok(ActionOutcome::cont())
        }
        KeyAction::GoForward => {
            engine.go_forward();
            Ok(ActionOutcome::cont())
        }
        KeyAction::Reload => {
            engine.reload();
            Ok(ActionOutcome::cont())
        }
        KeyAction::Stop => {
            engine.stop();
            Ok(ActionOutcome::cont())
        }

        // Find in page
        KeyAction::OpenFindBar => {
            let effects = coordinator::enter_find_in_page(state, None);
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::FindNext => {
            let effects = coordinator::dispatch(Event::FindBar(FindBarEvent::Next), state);
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::FindPrev => {
            let effects = coordinator::dispatch(Event::FindBar(FindBarEvent::Prev), state);
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::CloseFindBar => {
            let effects = coordinator::dispatch(Event::FindBar(FindBarEvent::Close), state);
            Ok(ActionOutcome::with_effects(effects))
        }

        // Page scrolling
        KeyAction::ScrollUp => {
            state.page_scroll = state.page_scroll.saturating_sub(1);
            Ok(ActionOutcome::cont())
        }
        KeyAction::ScrollDown => {
            state.page_scroll = (state.page_scroll + 1).min(max_scroll);
            Ok(ActionOutcome::cont())
        }
        KeyAction::PageUp => {
            state.page_scroll = state.page_scroll.saturating_sub(context.visible_height);
            Ok(ActionOutcome::cont())
        }
        KeyAction::PageDown => {
            state.page_scroll = (state.page_scroll + context.visible_height).min(max_scroll);
            Ok(ActionOutcome::cont())
        }
        KeyAction::ScrollToTop => {
            state.page_scroll = 0;
            Ok(ActionOutcome::cont())
        }
        KeyAction::ScrollToBottom => {
            state.page_scroll = max_scroll;
            Ok(ActionOutcome::cont())
        }

        // Misc
        KeyAction::CopyUrl => {
            match arboard::Clipboard::new().and_then(|mut c| c.set_text(state.address.clone())) {
                Ok(()) => state.set_message(format!("Copied: {}", state.address)),
                Err(e) => state.set_message(format!("Clipboard failed: {}", e)),
            }
            Ok(ActionOutcome::cont())
        }
        KeyAction::GoHome => {
            let effects = coordinator::dispatch(
                Event::Address(AddressEvent::QuerySubmitted(context.home.clone())),
                state,
            );
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::OpenMenu => {
            let effects =
                coordinator::dispatch(Event::Address(AddressEvent::MenuRequested), state);
            Ok(ActionOutcome::with_effects(effects))
        }
        KeyAction::CloseMenu => {
            state.menu_visible = false;
            Ok(ActionOutcome::cont())
        }
        KeyAction::ClearHistory => {
            history.clear();
            state.set_message("History cleared");
            Ok(ActionOutcome::cont())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LocalEngine;
    use tempfile::TempDir;

    fn context() -> ActionContext {
        ActionContext {
            home: ".".to_string(),
            page_len: 100,
            visible_height: 20,
        }
    }

    fn fixture() -> (TempDir, AppState, LocalEngine, History) {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "alpha\n").unwrap();
        let engine = LocalEngine::new(temp.path(), false);
        (temp, AppState::new(), engine, History::in_memory(10))
    }

    #[test]
    fn test_quit_action() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        let outcome =
            handle_action(KeyAction::Quit, &mut state, &mut engine, &mut history, &context())
                .unwrap();
        assert_eq!(outcome.result, ActionResult::Quit(0));
    }

    #[test]
    fn test_focus_address_opens_suggestions() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        let outcome = handle_action(
            KeyAction::FocusAddress { clear: true },
            &mut state,
            &mut engine,
            &mut history,
            &context(),
        )
        .unwrap();

        assert!(state.address_focused);
        assert!(state.mode.is_suggestions());
        assert!(matches!(
            outcome.effects.as_slice(),
            [Effect::RequestSuggestions { .. }]
        ));
    }

    #[test]
    fn test_cancel_edit_collapses_overlay() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        handle_action(
            KeyAction::FocusAddress { clear: true },
            &mut state,
            &mut engine,
            &mut history,
            &context(),
        )
        .unwrap();

        handle_action(
            KeyAction::CancelAddressEdit,
            &mut state,
            &mut engine,
            &mut history,
            &context(),
        )
        .unwrap();
        assert!(!state.address_focused);
        assert!(state.mode.is_none());
    }

    #[test]
    fn test_submit_produces_navigate_effect() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        let outcome = handle_action(
            KeyAction::SubmitAddress {
                value: "a.txt".to_string(),
            },
            &mut state,
            &mut engine,
            &mut history,
            &context(),
        )
        .unwrap();

        assert_eq!(outcome.effects, vec![Effect::Navigate("a.txt".to_string())]);
        assert!(state.mode.is_none());
    }

    #[test]
    fn test_scroll_clamped_to_page() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        let ctx = ActionContext {
            home: ".".to_string(),
            page_len: 3,
            visible_height: 20,
        };
        for _ in 0..10 {
            handle_action(KeyAction::ScrollDown, &mut state, &mut engine, &mut history, &ctx)
                .unwrap();
        }
        assert_eq!(state.page_scroll, 2);

        handle_action(KeyAction::ScrollToTop, &mut state, &mut engine, &mut history, &ctx)
            .unwrap();
        assert_eq!(state.page_scroll, 0);
    }

    #[test]
    fn test_menu_open_close_and_clear_history() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        history.record("a.txt", "");

        handle_action(KeyAction::OpenMenu, &mut state, &mut engine, &mut history, &context())
            .unwrap();
        assert!(state.menu_visible);

        handle_action(
            KeyAction::ClearHistory,
            &mut state,
            &mut engine,
            &mut history,
            &context(),
        )
        .unwrap();
        assert!(history.is_empty());

        handle_action(KeyAction::CloseMenu, &mut state, &mut engine, &mut history, &context())
            .unwrap();
        assert!(!state.menu_visible);
    }

    #[test]
    fn test_suggest_confirm_with_empty_results_is_noop() {
        let (_temp, mut state, mut engine, mut history) = fixture();
        let outcome = handle_action(
            KeyAction::SuggestConfirm,
            &mut state,
            &mut engine,
            &mut history,
            &context(),
        )
        .unwrap();
        assert!(outcome.effects.is_empty());
    }
}
