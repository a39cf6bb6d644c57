//! Cooperative timers and the event queue
//!
//! Timers here never run on their own thread. The game loop advances them
//! by the elapsed frame time and turns expiries into [`GameEvent`]s, which
//! are queued behind any player input and handled in arrival order.

use std::collections::VecDeque;

use crate::types::GameEvent;

/// Single-slot one-shot timer.
///
/// Arming an armed timer replaces the pending expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotTimer {
    delay_ms: u32,
    remaining_ms: Option<u32>,
}

impl OneShotTimer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            remaining_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn arm(&mut self) {
        self.remaining_ms = Some(self.delay_ms);
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Time left before expiry, `None` when disarmed
    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Advance by `elapsed_ms`. Returns true exactly once, on expiry.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(remaining) if elapsed_ms >= remaining => {
                self.remaining_ms = None;
                true
            }
            Some(remaining) => {
                self.remaining_ms = Some(remaining - elapsed_ms);
                false
            }
            None => false,
        }
    }
}

/// Fixed-interval repeating timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl IntervalTimer {
    /// A zero interval is raised to 1ms so the timer always makes progress.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time left before the next expiry
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Advance by `elapsed_ms`. Returns how many times the interval elapsed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms as u64 + elapsed_ms as u64;
        let fired = total / self.interval_ms as u64;
        self.elapsed_ms = (total % self.interval_ms as u64) as u32;
        fired as u32
    }
}

/// FIFO queue of pending events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
