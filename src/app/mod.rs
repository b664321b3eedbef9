//! Application module
//!
//! Configuration, frame composition, and the main event loop.

mod config;
mod config_file;
mod event_loop;
mod render;

pub use config::Config;
pub use config_file::ConfigFile;
pub use event_loop::{run_app, AppResult};
pub use render::{render_frame, RenderContext};

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error
    pub const ERROR: i32 = 1;
    /// Invalid arguments
    pub const INVALID: i32 = 2;
}
