//! Unified error types for PageView
//!
//! Provides a consistent error handling approach across all modules.

/// Unified error type for PageView operations
#[derive(Debug, thiserror::Error)]
pub enum PageviewError {
    /// I/O errors (page loading, history file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// History persistence errors
    #[error("History error: {0}")]
    History(String),
}

/// Convenience Result type using PageviewError
pub type Result<T> = std::result::Result<T, PageviewError>;

impl PageviewError {
    /// Create a History error
    pub fn history(msg: impl Into<String>) -> Self {
        Self::History(msg.into())
    }
}
