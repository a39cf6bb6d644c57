//! Tetrominos (workspace facade crate).
//!
//! Re-exports the member crates as `tetrominos::{types, core, input, term}`
//! and carries the game journal used by the terminal runner.

pub use tetrominos_core as core;
pub use tetrominos_input as input;
pub use tetrominos_term as term;
pub use tetrominos_types as types;

pub mod journal;
