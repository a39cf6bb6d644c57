//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block puzzle: the piece catalog,
//! the board with its locked cells, movement validation, row clearing and
//! the cooperative game loop. It has no dependency on a terminal or on any
//! other I/O, so the same seed and the same inputs always produce the same
//! game.
//!
//! # Module Structure
//!
//! - [`blocks`]: coordinate-to-color collections with merge and row collapse
//! - [`pieces`]: tetromino catalog (colors, spawn origins, rotation templates)
//! - [`board`]: locked cells plus the active piece, lock and clear
//! - [`movement`]: simulate, validate and commit translations and rotations
//! - [`timer`]: cooperative one-shot and interval timers, FIFO event queue
//! - [`controller`]: gravity, lock delay and player input in one loop
//! - [`rng`]: seedable uniform spawn randomizer
//! - [`config`]: environment-driven game configuration
//! - [`error`]: error types
//!
//! # Example
//!
//! ```
//! use tetrominos_core::{Board, GameController};
//! use tetrominos_core::types::GameEvent;
//!
//! let board = Board::standard(12345);
//! let mut game = GameController::with_board(board, 700, 300);
//!
//! game.push(GameEvent::MoveRight);
//! game.push(GameEvent::HardDrop);
//! game.process_pending();
//!
//! // Grounded after the hard drop; the lock waits for the grace period.
//! assert!(game.lock_timer_armed());
//! let steps = game.update(300);
//! assert!(steps.iter().any(|s| s.lock.is_some()));
//! ```

pub mod blocks;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod timer;

pub use tetrominos_types as types;

pub use blocks::BlockCollection;
pub use board::Board;
pub use config::GameConfig;
pub use controller::{GameController, LockReport, Step};
pub use error::{BoardError, ConfigError, MergeCollision};
pub use movement::{hard_drop, Movement};
pub use pieces::{piece_def, PieceDef, Template, Tetromino};
pub use rng::PieceRandomizer;
pub use timer::{EventQueue, IntervalTimer, OneShotTimer};
