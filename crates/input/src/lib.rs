//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameEvent`]. Timer
//! events never come from here; the game loop controller produces those.

pub mod map;

pub use tetrominos_types as types;

pub use map::{handle_key_event, should_quit};
