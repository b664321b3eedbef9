//! PageView - A terminal page browser with browser-style chrome
//!
//! This crate provides a browser-shaped TUI over a local page engine:
//! an address bar, a suggestions overlay, a find-in-page bar, and a
//! navigation toolbar, coordinated so that exactly one overlay is
//! attached above the page surface at a time.

pub mod app;
pub mod coordinator;
pub mod core;
pub mod engine;
pub mod error;
pub mod handler;
pub mod history;
pub mod render;
pub mod suggest;
