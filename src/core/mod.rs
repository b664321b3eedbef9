//! Core state types
//!
//! This module contains the overlay mode machine and the main
//! application state shared by the coordinator, handlers, and renderer.

mod mode;
mod state;

pub use mode::{FindFunction, FindInPageSession, OverlayMode};
pub use state::{AppState, NavigationState};
