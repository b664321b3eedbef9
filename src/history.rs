//! Browsing history
//!
//! Visited terms persisted as JSON under the config directory. History
//! feeds the suggestion provider; it is loaded at startup and saved on
//! exit.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PageviewError, Result};

/// Default cap on retained history entries
pub const DEFAULT_HISTORY_SIZE: usize = 200;

/// One visited term
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The navigated URL-or-query text
    pub term: String,
    /// Page title at visit time (may be empty)
    #[serde(default)]
    pub title: String,
    /// Visit count
    #[serde(default = "one")]
    pub visits: u32,
}

fn one() -> u32 {
    1
}

/// Visit history, most recent last
pub struct History {
    entries: Vec<HistoryEntry>,
    path: Option<PathBuf>,
    cap: usize,
}

impl History {
    /// History backed by a file (created on first save)
    pub fn new(path: PathBuf, cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            path: Some(path),
            cap: cap.max(1),
        }
    }

    /// Unpersisted history (tests, --dump mode)
    pub fn in_memory(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            path: None,
            cap: cap.max(1),
        }
    }

    /// Default history file path (~/.config/pageview/history.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pageview").join("history.json"))
    }

    /// Load entries from the backing file if it exists
    pub fn load(&mut self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if !path.exists() {
            return Ok(());
        }
        let content = fs::read_to_string(path)?;
        self.entries = serde_json::from_str(&content)
            .map_err(|e| PageviewError::history(format!("parse {}: {}", path.display(), e)))?;
        self.truncate();
        Ok(())
    }

    /// Save entries to the backing file
    pub fn save(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| PageviewError::history(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Record a visit, bumping an existing entry to most-recent
    pub fn record(&mut self, term: &str, title: &str) {
        if term.is_empty() {
            return;
        }
        if let Some(pos) = self.entries.iter().position(|e| e.term == term) {
            let mut entry = self.entries.remove(pos);
            entry.visits += 1;
            if !title.is_empty() {
                entry.title = title.to_string();
            }
            self.entries.push(entry);
        } else {
            self.entries.push(HistoryEntry {
                term: term.to_string(),
                title: title.to_string(),
                visits: 1,
            });
        }
        self.truncate();
    }

    /// Iterate entries most recent first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries (menu action)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn truncate(&mut self) {
        if self.entries.len() > self.cap {
            let excess = self.entries.len() - self.cap;
            self.entries.drain(0..excess);
        }
    }
}
