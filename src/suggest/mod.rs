//! Search suggestions
//!
//! Fuzzy-matches address bar input against browsing history and the
//! terms the engine can resolve. Results are delivered with the request
//! generation so the coordinator can drop stale responses.

use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Matcher, Utf32Str,
};

use crate::history::History;

/// Default cap on the number of suggestions shown
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// A single suggestion row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Term to navigate to when tapped
    pub term: String,
    /// Display text (term plus title where known)
    pub label: String,
    /// Matched character indices within `label` for highlighting
    pub indices: Vec<usize>,
    /// Match score (higher is better; 0 for empty-query recents)
    pub score: u32,
}

/// Suggestion provider over history and engine-known terms
pub struct SuggestionProvider {
    max_results: usize,
}

impl SuggestionProvider {
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results: max_results.max(1),
        }
    }

    /// Compute suggestions for a query
    ///
    /// An empty query yields the overlay's empty state: recently visited
    /// terms, most recent first.
    pub fn suggest(&self, query: &str, history: &History, known_terms: &[String]) -> Vec<Suggestion> {
        if query.is_empty() {
            return history
                .recent(self.max_results)
                .map(|entry| Suggestion {
                    term: entry.term.clone(),
                    label: label_for(&entry.term, &entry.title),
                    indices: vec![],
                    score: 0,
                })
                .collect();
        }

        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);

        let mut seen: Vec<&str> = Vec::new();
        let mut results: Vec<Suggestion> = Vec::new();

        // History first so visited terms outrank unvisited paths at
        // equal score.
        let history_candidates = history
            .recent(usize::MAX)
            .map(|e| (e.term.as_str(), e.title.as_str()));
        let term_candidates = known_terms.iter().map(|t| (t.as_str(), ""));

        for (term, title) in history_candidates.chain(term_candidates) {
            if seen.contains(&term) {
                continue;
            }
            let label = label_for(term, title);

            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&label, &mut buf);

            let mut indices = Vec::new();
            let Some(score) = pattern.indices(haystack, &mut matcher, &mut indices) else {
                continue;
            };
            seen.push(term);

            results.push(Suggestion {
                term: term.to_string(),
                label,
                indices: indices.iter().map(|&i| i as usize).collect(),
                score,
            });
        }

        // Sort by score descending
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.max_results);
        results
    }
}

fn label_for(term: &str, title: &str) -> String {
    if title.is_empty() || title == term {
        term.to_string()
    } else {
        format!("{} — {}", term, title)
    }
}
