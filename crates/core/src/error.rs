//! Error types for board construction, collection merging and configuration.
//!
//! Invalid moves are not errors: a rejected translation or rotation simply
//! leaves the board untouched.

use thiserror::Error;

use crate::types::PieceKind;

/// Board construction failure.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {columns} columns x {lines} lines")]
    ZeroDimension { columns: i32, lines: i32 },
    #[error("{kind:?} piece does not spawn inside a board of {columns} columns x {lines} lines")]
    SpawnOutOfBounds {
        kind: PieceKind,
        columns: i32,
        lines: i32,
    },
}

/// Two block collections hold the same coordinate.
///
/// Reaching this means a piece was committed without validation.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("block collision at column {column}, row {row}")]
pub struct MergeCollision {
    pub column: i32,
    pub row: i32,
}

/// Configuration value that is present but unusable.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
