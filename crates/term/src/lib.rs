//! Terminal rendering for the puzzle.
//!
//! A small game-oriented pipeline: [`BoardView`] draws a board into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes that framebuffer to the
//! terminal with crossterm, rewriting only what changed. Pixel geometry (cell
//! size, centering) lives here and nowhere in the core.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrominos_core as core;
pub use tetrominos_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{BoardView, Overlay, Placement, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
