//! Game loop controller
//!
//! Drives the board from three sources: the gravity timer, the lock-delay
//! timer and player input. Everything runs on the caller's thread. Timer
//! expiries are queued as events behind player input and the queue is
//! drained in arrival order, which keeps a run reproducible from its inputs.
//!
//! # Lock delay
//!
//! After every event the controller re-checks whether the active piece is
//! grounded:
//!
//! - grounded and not yet in its grace period: arm the lock timer
//! - not grounded but in its grace period: cancel the lock timer
//!
//! When the lock timer fires while the piece is still grounded, the piece is
//! locked and completed rows are cleared.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::movement::{hard_drop, Movement};
use crate::pieces::Tetromino;
use crate::rng::PieceRandomizer;
use crate::timer::{EventQueue, IntervalTimer, OneShotTimer};
use crate::types::{GameEvent, TranslationDirection};

/// What a lock did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    /// The piece as it was committed
    pub piece: Tetromino,
    /// Cleared row indices, ascending
    pub rows_cleared: Vec<i32>,
    /// The lock ended the game
    pub game_over: bool,
}

/// Outcome of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub event: GameEvent,
    /// The event changed game state
    pub applied: bool,
    pub lock: Option<LockReport>,
}

impl Step {
    fn new(event: GameEvent, applied: bool) -> Self {
        Self {
            event,
            applied,
            lock: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    gravity: IntervalTimer,
    lock_timer: OneShotTimer,
    queue: EventQueue,
    paused: bool,
    quit: bool,
}

impl GameController {
    /// Build a board from `config` and wrap it
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let randomizer = match config.seed {
            Some(seed) => PieceRandomizer::new(seed),
            None => PieceRandomizer::from_entropy(),
        };
        let board = Board::with_randomizer(config.columns, config.lines, randomizer)?;
        Ok(Self::with_board(board, config.gravity_ms, config.lock_delay_ms))
    }

    pub fn with_board(board: Board, gravity_ms: u32, lock_delay_ms: u32) -> Self {
        let mut controller = Self {
            board,
            gravity: IntervalTimer::new(gravity_ms),
            lock_timer: OneShotTimer::new(lock_delay_ms),
            queue: EventQueue::new(),
            paused: false,
            quit: false,
        };
        controller.refresh_lock_delay();
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    ///
    /// Call [`Self::refresh_lock_delay`] afterwards if grounding may have
    /// changed.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn lock_timer_armed(&self) -> bool {
        self.lock_timer.is_armed()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Queue a player event behind anything already pending
    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    /// Advance both timers by `elapsed_ms`, queueing their expiries in time
    /// order. A gravity tick and a lock expiry due at the same instant are
    /// queued gravity first.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.paused || self.quit || self.board.game_over() {
            return;
        }

        let mut left = elapsed_ms;
        loop {
            let gravity_due = self.gravity.remaining_ms();
            let next_due = match self.lock_timer.remaining_ms() {
                Some(lock_due) => lock_due.min(gravity_due),
                None => gravity_due,
            };

            if next_due > left {
                self.gravity.advance(left);
                self.lock_timer.advance(left);
                return;
            }

            let gravity_fired = self.gravity.advance(next_due) > 0;
            let lock_fired = self.lock_timer.advance(next_due);
            if gravity_fired {
                self.queue.push(GameEvent::GravityTick);
            }
            if lock_fired {
                self.queue.push(GameEvent::LockTimerFired);
            }
            left -= next_due;
        }
    }

    /// Handle every queued event in arrival order
    pub fn process_pending(&mut self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop() {
            steps.push(self.handle(event));
        }
        steps
    }

    /// One frame: advance timers, then drain the queue
    pub fn update(&mut self, elapsed_ms: u32) -> Vec<Step> {
        self.advance(elapsed_ms);
        self.process_pending()
    }

    /// Handle a single event immediately, bypassing the queue
    pub fn handle(&mut self, event: GameEvent) -> Step {
        match event {
            GameEvent::Quit => {
                self.quit = true;
                return Step::new(event, true);
            }
            GameEvent::Restart => {
                self.board.restart();
                // Events queued behind the restart belong to the old board.
                self.queue.clear();
                self.lock_timer.cancel();
                self.gravity.reset();
                self.paused = false;
                self.refresh_lock_delay();
                return Step::new(event, true);
            }
            GameEvent::Pause => {
                if self.board.game_over() {
                    return Step::new(event, false);
                }
                self.paused = !self.paused;
                return Step::new(event, true);
            }
            _ => {}
        }

        if self.paused || self.board.game_over() {
            return Step::new(event, false);
        }

        let mut step = match event {
            GameEvent::MoveLeft => {
                let moved = Movement::Translate(TranslationDirection::Left).execute(&mut self.board);
                Step::new(event, moved)
            }
            GameEvent::MoveRight => {
                let moved = Movement::Translate(TranslationDirection::Right).execute(&mut self.board);
                Step::new(event, moved)
            }
            GameEvent::Rotate => Step::new(event, Movement::Rotate.execute(&mut self.board)),
            GameEvent::SoftDrop | GameEvent::GravityTick => {
                let moved = Movement::Translate(TranslationDirection::Down).execute(&mut self.board);
                Step::new(event, moved)
            }
            GameEvent::HardDrop => Step::new(event, hard_drop(&mut self.board) > 0),
            GameEvent::LockTimerFired => self.on_lock_timer(),
            GameEvent::Quit | GameEvent::Restart | GameEvent::Pause => Step::new(event, false),
        };

        if step.lock.is_none() {
            self.refresh_lock_delay();
        } else if let Some(report) = step.lock.as_mut() {
            report.game_over = self.board.game_over();
        }
        step
    }

    /// Arm or cancel the lock timer to match the active piece's grounding
    pub fn refresh_lock_delay(&mut self) {
        if self.board.game_over() {
            self.lock_timer.cancel();
            self.board.set_lock_grace_period(false);
            return;
        }

        let grounded = self.board.is_active_piece_grounded();
        match (grounded, self.board.lock_grace_period()) {
            (true, false) => {
                self.lock_timer.arm();
                self.board.set_lock_grace_period(true);
            }
            (false, true) => {
                self.lock_timer.cancel();
                self.board.set_lock_grace_period(false);
            }
            _ => {}
        }
    }

    /// Lock the active piece now and clear completed rows
    pub fn freeze(&mut self) -> LockReport {
        let piece = self.board.lock_active_piece();
        let rows_cleared = self.board.clear_completed_rows();
        self.lock_timer.cancel();
        self.gravity.reset();
        self.refresh_lock_delay();
        LockReport {
            piece,
            rows_cleared,
            game_over: self.board.game_over(),
        }
    }

    fn on_lock_timer(&mut self) -> Step {
        // Stale expiry: the piece left the ground, or a restart intervened.
        if !self.board.lock_grace_period() {
            return Step::new(GameEvent::LockTimerFired, false);
        }
        if !self.board.is_active_piece_grounded() {
            self.board.set_lock_grace_period(false);
            return Step::new(GameEvent::LockTimerFired, false);
        }

        Step {
            event: GameEvent::LockTimerFired,
            applied: true,
            lock: Some(self.freeze()),
        }
    }
}
