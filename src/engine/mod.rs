//! Page engine
//!
//! The page-rendering collaborator behind the browser chrome. The
//! coordinator drives it through [`PageEngine`] and observes it through
//! the [`EngineEvent`]s it queues; the UI never inspects engine
//! internals beyond the current page snapshot.

mod local;

pub use local::LocalEngine;

use crate::core::{FindFunction, NavigationState};

/// Events reported by the engine, drained once per loop iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Back/forward/loading affordances changed
    NavigationStateChanged(NavigationState),
    /// A navigation committed to a new address
    UrlChanged(String),
    /// Text-search results changed (1-based current index, total count)
    FindResultUpdated { current: usize, total: usize },
    /// The page requests find-in-page for a selection
    FindRequested(String),
}

/// A text-search match located by the engine
///
/// Offsets are character indices into the page line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindMatch {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Renderable snapshot of the loaded page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub lines: Vec<String>,
}

/// Capability set of the page-rendering collaborator
pub trait PageEngine {
    /// Load the page for a URL-or-query term
    fn navigate(&mut self, term: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn stop(&mut self);
    /// Run the text-search function over the current page
    fn find(&mut self, text: &str, function: FindFunction);
    /// Clear search highlighting when the find bar closes
    fn find_done(&mut self);
    fn current_url(&self) -> &str;
    fn page(&self) -> &Page;
    /// Matches from the last `find` call, for highlighting
    fn find_matches(&self) -> &[FindMatch];
    /// 1-based index of the current match, 0 when there is none
    fn current_match(&self) -> usize;
    /// Drain queued events
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
