//! Opt-in JSON-lines game journal.
//!
//! When `TETROMINOS_LOG_PATH` is set, the runner appends one JSON object per
//! line: a `start` record, then one `event` record per handled event, plus
//! `lock` and `game_over` records as they happen. Replaying the `event`
//! records against a board built from the `start` seed reproduces the game.
//!
//! A failed write disables the journal; the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Board, Step};
use crate::types::{Coordinate, GameEvent, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Start {
        seed: Option<u64>,
        columns: i32,
        lines: i32,
    },
    Event {
        event: GameEvent,
        applied: bool,
    },
    Lock {
        piece: PieceKind,
        cells: [Coordinate; 4],
        rows_cleared: Vec<i32>,
    },
    GameOver {
        locked_cells: usize,
    },
}

impl JournalRecord {
    /// Records describing one controller step, in the order they happened
    pub fn from_step(step: &Step, board: &Board) -> Vec<JournalRecord> {
        let mut records = vec![JournalRecord::Event {
            event: step.event,
            applied: step.applied,
        }];
        if let Some(lock) = &step.lock {
            records.push(JournalRecord::Lock {
                piece: lock.piece.kind(),
                cells: lock.piece.cells(),
                rows_cleared: lock.rows_cleared.clone(),
            });
            if lock.game_over {
                records.push(JournalRecord::GameOver {
                    locked_cells: board.locked().len(),
                });
            }
        }
        records
    }
}

pub struct Journal {
    file: Option<File>,
    buf: Vec<u8>,
}

impl Journal {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    /// A journal that drops every record
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, record: &JournalRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if file.write_all(&self.buf).is_err() {
            self.file = None;
        }
    }

    pub fn record_step(&mut self, step: &Step, board: &Board) {
        if !self.is_enabled() {
            return;
        }
        for record in JournalRecord::from_step(step, board) {
            self.record(&record);
        }
    }
}
