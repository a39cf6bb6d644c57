//! Shared data types and constants
//!
//! This crate defines the plain data used throughout the game: board
//! coordinates, cell colors, piece kinds, translation directions and the
//! events consumed by the game loop controller. Everything here is pure data
//! with no behavior beyond trivial conversions, so it can be shared by the
//! simulation core, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! Conventional playfield dimensions:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Lines**: 20 visible lines (indexed 0-19, top to bottom)
//!
//! Row 0 is the top of the board and gravity increases the row index. Pieces
//! may spawn partially above row 0 (negative rows) and fall into view.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame pacing of the terminal loop (~60 FPS) |
//! | `GRAVITY_MS` | 700 | Interval between gravity ticks |
//! | `LOCK_DELAY_MS` | 300 | Grace period before a grounded piece locks |
//!
//! # Examples
//!
//! ```
//! use tetrominos_types::{Coordinate, TranslationDirection};
//!
//! let origin = Coordinate::new(3, -2);
//! let moved = origin + TranslationDirection::Down.offset();
//! assert_eq!(moved, Coordinate::new(3, -1));
//! ```

use std::ops::Add;

use serde::Serialize;

/// Default board width in cells
pub const BOARD_COLUMNS: i32 = 10;

/// Default number of visible board lines
pub const BOARD_LINES: i32 = 20;

/// Frame pacing of the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Interval between gravity ticks
pub const GRAVITY_MS: u32 = 700;

/// Grace period between a piece becoming grounded and its forced lock
pub const LOCK_DELAY_MS: u32 = 300;

/// A board cell position: `(column, row)` with `(0, 0)` at the top-left.
///
/// Coordinates carry no bounds of their own; validity is always checked
/// against a board's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub column: i32,
    pub row: i32,
}

impl Coordinate {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate {
            column: self.column + rhs.column,
            row: self.row + rhs.row,
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((column, row): (i32, i32)) -> Self {
        Self { column, row }
    }
}

/// 24-bit RGB color of an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: cyan bar
/// - **O**: yellow square
/// - **J**: dark blue
/// - **L**: orange
/// - **S**: green
/// - **Z**: fire brick
/// - **T**: medium orchid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    J,
    L,
    S,
    Z,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];
}

/// Unit translations a piece may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TranslationDirection {
    Left,
    Right,
    Down,
}

impl TranslationDirection {
    /// The coordinate delta applied to the piece origin.
    pub const fn offset(self) -> Coordinate {
        match self {
            TranslationDirection::Left => Coordinate::new(-1, 0),
            TranslationDirection::Right => Coordinate::new(1, 0),
            TranslationDirection::Down => Coordinate::new(0, 1),
        }
    }
}

/// Discrete events consumed by the game loop controller.
///
/// Player input and cooperative timer expiries share this one type so that
/// they can be queued and dispatched in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEvent {
    /// Leave the game loop
    Quit,
    /// Advance the rotation cycle of the active piece
    Rotate,
    /// Translate one cell left
    MoveLeft,
    /// Translate one cell right
    MoveRight,
    /// Translate one cell down
    SoftDrop,
    /// Translate down until the next step would be invalid
    HardDrop,
    /// Gravity timer expiry
    GravityTick,
    /// Lock-delay timer expiry
    LockTimerFired,
    /// Toggle pause
    Pause,
    /// Start a new board
    Restart,
}
