//! Local page engine
//!
//! Resolves terms against a root directory: existing paths load as
//! directory-listing or text pages, anything else renders a fuzzy
//! search-results page. Keeps a back/forward stack and computes
//! find-in-page matches over the loaded page.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Matcher, Utf32Str,
};

use crate::core::{FindFunction, NavigationState};
use crate::engine::{EngineEvent, FindMatch, Page, PageEngine};

/// Maximum directory depth when collecting searchable terms
const MAX_WALK_DEPTH: usize = 10;

/// Maximum rows on a search-results page
const MAX_SEARCH_RESULTS: usize = 50;

/// File-backed page engine
pub struct LocalEngine {
    root: PathBuf,
    show_hidden: bool,
    /// Visited terms; `stack[stack_index]` is the current page
    stack: Vec<String>,
    stack_index: usize,
    page: Page,
    matches: Vec<FindMatch>,
    current_match: usize,
    events: VecDeque<EngineEvent>,
}

impl LocalEngine {
    pub fn new(root: impl Into<PathBuf>, show_hidden: bool) -> Self {
        Self {
            root: root.into(),
            show_hidden,
            stack: Vec::new(),
            stack_index: 0,
            page: Page::default(),
            matches: Vec::new(),
            current_match: 0,
            events: VecDeque::new(),
        }
    }

    /// Terms the engine can resolve directly, for the suggestion provider
    pub fn known_terms(&self) -> Vec<String> {
        let mut terms = Vec::new();
        collect_terms(&self.root, &self.root, self.show_hidden, 0, &mut terms);
        terms
    }

    fn nav_snapshot(&self) -> NavigationState {
        NavigationState {
            can_go_back: self.stack_index > 0,
            can_go_forward: !self.stack.is_empty() && self.stack_index + 1 < self.stack.len(),
            is_loading: false,
        }
    }

    /// Load the term at the current stack position and queue the
    /// resulting events
    fn load_current(&mut self) {
        let term = match self.stack.get(self.stack_index) {
            Some(t) => t.clone(),
            None => return,
        };

        self.events.push_back(EngineEvent::NavigationStateChanged(NavigationState {
            is_loading: true,
            ..self.nav_snapshot()
        }));

        self.page = self.resolve(&term);
        // A new page invalidates previous search results
        self.matches.clear();
        self.current_match = 0;

        self.events.push_back(EngineEvent::UrlChanged(term));
        self.events
            .push_back(EngineEvent::NavigationStateChanged(self.nav_snapshot()));
    }

    /// Build the page for a term: existing path, or search results
    fn resolve(&self, term: &str) -> Page {
        let term = term.trim();
        if term.is_empty() || term == "." {
            return self.directory_page(&self.root, ".");
        }

        let candidate = self.root.join(term);
        if candidate.is_dir() {
            self.directory_page(&candidate, term)
        } else if candidate.is_file() {
            self.file_page(&candidate, term)
        } else {
            self.search_page(term)
        }
    }

    fn directory_page(&self, dir: &Path, term: &str) -> Page {
        let mut entries: Vec<(String, bool)> = match fs::read_dir(dir) {
            Ok(rd) => rd
                .flatten()
                .filter_map(|entry| {
                    let name = entry.file_name().to_string_lossy().to_string();
                    if !self.show_hidden && name.starts_with('.') {
                        return None;
                    }
                    let is_dir = entry.path().is_dir();
                    Some((name, is_dir))
                })
                .collect(),
            Err(e) => {
                return error_page(term, &format!("cannot read directory: {}", e));
            }
        };

        // Directories first, then case-insensitive by name
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.to_lowercase().cmp(&b.0.to_lowercase())));

        let mut lines = vec![format!("Index of {}", term), String::new()];
        for (name, is_dir) in entries {
            if is_dir {
                lines.push(format!("  {}/", name));
            } else {
                lines.push(format!("  {}", name));
            }
        }

        Page {
            title: format!("Index of {}", term),
            lines,
        }
    }

    fn file_page(&self, path: &Path, term: &str) -> Page {
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| term.to_string());

        match fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Page {
                    title,
                    lines: text.lines().map(|l| l.to_string()).collect(),
                },
                Err(_) => Page {
                    title,
                    lines: vec!["(binary file)".to_string()],
                },
            },
            Err(e) => error_page(term, &format!("cannot read file: {}", e)),
        }
    }

    fn search_page(&self, term: &str) -> Page {
        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
        let pattern = Pattern::parse(term, CaseMatching::Smart, Normalization::Smart);

        let mut scored: Vec<(u32, String)> = self
            .known_terms()
            .into_iter()
            .filter_map(|candidate| {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(&candidate, &mut buf);
                let score = pattern.score(haystack, &mut matcher)?;
                Some((score, candidate))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(MAX_SEARCH_RESULTS);

        let mut lines = vec![format!("Search results for '{}'", term), String::new()];
        if scored.is_empty() {
            lines.push("  no matches".to_string());
        } else {
            for (_, candidate) in &scored {
                lines.push(format!("  {}", candidate));
            }
        }

        Page {
            title: format!("Search: {}", term),
            lines,
        }
    }

    fn push_find_result(&mut self) {
        self.events.push_back(EngineEvent::FindResultUpdated {
            current: self.current_match,
            total: self.matches.len(),
        });
    }
}

impl PageEngine for LocalEngine {
    fn navigate(&mut self, term: &str) {
        // A new navigation truncates any forward entries
        if !self.stack.is_empty() {
            self.stack.truncate(self.stack_index + 1);
        }
        self.stack.push(term.to_string());
        self.stack_index = self.stack.len() - 1;
        self.load_current();
    }

    fn go_back(&mut self) {
        if self.stack_index > 0 {
            self.stack_index -= 1;
            self.load_current();
        }
    }

    fn go_forward(&mut self) {
        if !self.stack.is_empty() && self.stack_index + 1 < self.stack.len() {
            self.stack_index += 1;
            self.load_current();
        }
    }

    fn reload(&mut self) {
        self.load_current();
    }

    fn stop(&mut self) {
        // Loads are synchronous; report the settled snapshot so the
        // toolbar reverts the stop affordance.
        self.events
            .push_back(EngineEvent::NavigationStateChanged(self.nav_snapshot()));
    }

    fn find(&mut self, text: &str, function: FindFunction) {
        match function {
            FindFunction::Find => {
                self.matches.clear();
                if !text.is_empty() {
                    let needle = text.to_lowercase();
                    for (line_idx, line) in self.page.lines.iter().enumerate() {
                        let haystack: Vec<char> = line.to_lowercase().chars().collect();
                        let needle_chars: Vec<char> = needle.chars().collect();
                        let mut start = 0;
                        while start + needle_chars.len() <= haystack.len() {
                            if haystack[start..start + needle_chars.len()] == needle_chars[..] {
                                self.matches.push(FindMatch {
                                    line: line_idx,
                                    start,
                                    end: start + needle_chars.len(),
                                });
                                start += needle_chars.len();
                            } else {
                                start += 1;
                            }
                        }
                    }
                }
                self.current_match = if self.matches.is_empty() { 0 } else { 1 };
            }
            FindFunction::FindNext => {
                if !self.matches.is_empty() {
                    self.current_match = self.current_match % self.matches.len() + 1;
                }
            }
            FindFunction::FindPrevious => {
                if !self.matches.is_empty() {
                    self.current_match = if self.current_match <= 1 {
                        self.matches.len()
                    } else {
                        self.current_match - 1
                    };
                }
            }
        }
        self.push_find_result();
    }

    fn find_done(&mut self) {
        self.matches.clear();
        self.current_match = 0;
    }

    fn current_url(&self) -> &str {
        self.stack
            .get(self.stack_index)
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    fn page(&self) -> &Page {
        &self.page
    }

    fn find_matches(&self) -> &[FindMatch] {
        &self.matches
    }

    fn current_match(&self) -> usize {
        self.current_match
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }
}

fn error_page(term: &str, reason: &str) -> Page {
    Page {
        title: format!("Error: {}", term),
        lines: vec![format!("Could not load '{}'", term), String::new(), reason.to_string()],
    }
}

/// Collect relative path terms under `dir`, depth-capped
fn collect_terms(root: &Path, dir: &Path, show_hidden: bool, depth: usize, terms: &mut Vec<String>) {
    if depth > MAX_WALK_DEPTH {
        return;
    }
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if !show_hidden && name.starts_with('.') {
                continue;
            }
            if let Ok(rel) = path.strip_prefix(root) {
                terms.push(rel.to_string_lossy().to_string());
            }
            if path.is_dir() {
                collect_terms(root, &path, show_hidden, depth + 1, terms);
            }
        }
    }
}
