//! Rendering modules
//!
//! One renderer per surface; `app::render` composes them into a frame.

mod address;
mod findbar;
mod menu;
mod page;
mod suggestions;
pub mod theme;
mod toolbar;

pub use address::render_address_bar;
pub use findbar::render_find_bar;
pub use menu::render_menu;
pub use page::render_page;
pub use suggestions::{render_suggestions, suggestions_panel_area};
pub use toolbar::render_toolbar;
pub use theme::{parse_color, theme, Theme};

use ratatui::layout::Rect;

/// Layout of the last rendered frame, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub address: Rect,
    pub page: Rect,
    pub suggestions: Option<Rect>,
    pub findbar: Option<Rect>,
    pub toolbar: Rect,
}
