//! Board module - locked cells plus the active piece
//!
//! The board owns the collection of locked cells, which persists across
//! pieces, and exactly one active piece, which is replaced on lock.
//! Coordinates: (column, row) where column ranges 0..columns (left to right)
//! and row ranges 0..lines (top to bottom). The active piece may sit partly
//! above row 0 right after spawning.

use crate::blocks::BlockCollection;
use crate::error::BoardError;
use crate::movement::Movement;
use crate::pieces::Tetromino;
use crate::rng::PieceRandomizer;
use crate::types::{Coordinate, PieceKind, TranslationDirection, BOARD_COLUMNS, BOARD_LINES};

/// The playfield
#[derive(Debug, Clone)]
pub struct Board {
    columns: i32,
    lines: i32,
    locked: BlockCollection,
    active: Tetromino,
    /// A grounded piece is inside its lock-delay window
    lock_grace_period: bool,
    game_over: bool,
    randomizer: PieceRandomizer,
}

impl Board {
    /// Create a board with an entropy-seeded randomizer
    pub fn new(columns: i32, lines: i32) -> Result<Self, BoardError> {
        Self::with_randomizer(columns, lines, PieceRandomizer::from_entropy())
    }

    /// Create a board whose piece sequence is reproducible from `seed`
    pub fn with_seed(columns: i32, lines: i32, seed: u64) -> Result<Self, BoardError> {
        Self::with_randomizer(columns, lines, PieceRandomizer::new(seed))
    }

    /// Create a board and spawn its first piece from `randomizer`
    pub fn with_randomizer(
        columns: i32,
        lines: i32,
        randomizer: PieceRandomizer,
    ) -> Result<Self, BoardError> {
        if columns <= 0 || lines <= 0 {
            return Err(BoardError::ZeroDimension { columns, lines });
        }
        // Every kind must spawn within the columns and above the floor.
        let misfit = PieceKind::ALL.into_iter().find(|&kind| {
            Tetromino::spawn(kind)
                .cells()
                .iter()
                .any(|c| c.column < 0 || c.column >= columns || c.row >= lines)
        });
        if let Some(kind) = misfit {
            return Err(BoardError::SpawnOutOfBounds { kind, columns, lines });
        }
        Ok(Self::build(columns, lines, randomizer))
    }

    /// Conventional 10x20 board
    pub fn standard(seed: u64) -> Self {
        Self::build(BOARD_COLUMNS, BOARD_LINES, PieceRandomizer::new(seed))
    }

    fn build(columns: i32, lines: i32, mut randomizer: PieceRandomizer) -> Self {
        let active = Tetromino::spawn(randomizer.next_kind());
        Self {
            columns,
            lines,
            locked: BlockCollection::new(),
            active,
            lock_grace_period: false,
            game_over: false,
            randomizer,
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn lines(&self) -> i32 {
        self.lines
    }

    pub fn locked(&self) -> &BlockCollection {
        &self.locked
    }

    /// Mutable access to the locked cells, for setting up positions
    pub fn locked_mut(&mut self) -> &mut BlockCollection {
        &mut self.locked
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    /// Replace the active piece without validation.
    ///
    /// Movements call this only after validating the replacement.
    pub fn replace_active(&mut self, piece: Tetromino) {
        self.active = piece;
    }

    pub fn lock_grace_period(&self) -> bool {
        self.lock_grace_period
    }

    pub fn set_lock_grace_period(&mut self, on: bool) {
        self.lock_grace_period = on;
    }

    /// The last lock left the board with no room for the next piece
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Check if a coordinate lies on the board
    #[inline(always)]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (0..self.columns).contains(&coordinate.column) && (0..self.lines).contains(&coordinate.row)
    }

    /// Every coordinate of the grid, row by row
    pub fn all_possible_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.lines)
            .flat_map(move |row| (0..self.columns).map(move |column| Coordinate::new(column, row)))
    }

    /// Check if `piece` lies inside the board without touching a locked cell
    pub fn fits(&self, piece: &Tetromino) -> bool {
        piece
            .cells()
            .iter()
            .all(|&c| self.contains(c) && !self.locked.contains(c))
    }

    /// The active piece merged with the locked cells; locked cells win
    pub fn occupied_cells(&self) -> BlockCollection {
        if self.game_over {
            // The blocked spawn overlaps the stack; show it without asserting.
            self.active.blocks().overlay(&self.locked)
        } else {
            self.active.blocks().merge(&self.locked)
        }
    }

    /// Check if `row` holds exactly `columns` locked cells
    pub fn is_row_complete(&self, row: i32) -> bool {
        self.locked.count_in_row(row) == self.columns as usize
    }

    /// Indices of all complete rows, ascending
    pub fn list_complete_rows(&self) -> Vec<i32> {
        (0..self.lines).filter(|&row| self.is_row_complete(row)).collect()
    }

    /// Clear every complete row and collapse the cells above it.
    ///
    /// Rows are processed top to bottom, one collapse per row, so that
    /// several rows cleared at once cascade correctly. Returns the cleared
    /// row indices, ascending.
    pub fn clear_completed_rows(&mut self) -> Vec<i32> {
        let rows = self.list_complete_rows();
        for &row in &rows {
            self.locked.delete_row_and_collapse(row);
        }
        rows
    }

    /// Commit the active piece into the locked cells and spawn the next one.
    ///
    /// Cells that lock outside the board (above row 0 in practice) are
    /// discarded and end the game, as does a replacement piece that spawns
    /// onto locked cells. Returns the piece that was locked.
    pub fn lock_active_piece(&mut self) -> Tetromino {
        let piece = self.active;
        let (inside, outside): (Vec<_>, Vec<_>) = piece
            .blocks()
            .iter()
            .map(|(c, color)| (*c, *color))
            .partition(|(c, _)| self.contains(*c));

        let inside: BlockCollection = inside.into_iter().collect();
        self.locked = self.locked.merge(&inside);
        self.lock_grace_period = false;

        self.active = Tetromino::spawn(self.randomizer.next_kind());
        if !outside.is_empty() || self.spawn_blocked() {
            self.game_over = true;
        }
        piece
    }

    /// Check if the next downward step of the active piece is invalid.
    ///
    /// Resting on the floor is one case of this; resting on a locked cell is
    /// another.
    pub fn is_active_piece_grounded(&self) -> bool {
        !Movement::Translate(TranslationDirection::Down).validate(self)
    }

    /// Rows the active piece can fall before it becomes grounded
    pub fn drop_distance(&self) -> i32 {
        let mut piece = self.active;
        let mut distance = 0;
        loop {
            let next = piece.translated(TranslationDirection::Down);
            if !self.fits(&next) {
                return distance;
            }
            piece = next;
            distance += 1;
        }
    }

    /// Empty the board and spawn a fresh piece, keeping the randomizer stream
    pub fn restart(&mut self) {
        self.locked = BlockCollection::new();
        self.active = Tetromino::spawn(self.randomizer.next_kind());
        self.lock_grace_period = false;
        self.game_over = false;
    }

    fn spawn_blocked(&self) -> bool {
        self.active.cells().iter().any(|c| self.locked.contains(*c))
    }
}
