//! Input handling
//!
//! Keyboard and mouse events are translated into [`KeyAction`]s /
//! [`MouseAction`]s, which the action handler turns into coordinator
//! events and engine calls.

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{handle_action, ActionContext, ActionOutcome, ActionResult};
pub use key::{handle_key_event, update_input_buffer, KeyAction};
pub use mouse::{handle_mouse_event, MouseAction};
