//! Terminal runner (default binary).
//!
//! One frame: render, wait for input up to the frame deadline, then feed the
//! elapsed time to the controller, which queues timer expiries behind the
//! input and handles everything in arrival order.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tetrominos::core::{GameConfig, GameController};
use tetrominos::input::handle_key_event;
use tetrominos::journal::{Journal, JournalRecord};
use tetrominos::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tetrominos::types::FRAME_MS;

fn main() -> Result<()> {
    let mut config = GameConfig::from_env().context("load configuration")?;
    // Always run from a known seed so a journal can be replayed.
    let seed = *config.seed.get_or_insert_with(clock_seed);

    let mut journal = match &config.log_path {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };
    let mut game = GameController::new(&config)?;
    journal.record(&JournalRecord::Start {
        seed: Some(seed),
        columns: config.columns,
        lines: config.lines,
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameController, journal: &mut Journal) -> Result<()> {
    let view = BoardView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_game(game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(game_event) = handle_key_event(key) {
                        game.push(game_event);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Carry sub-millisecond remainders into the next frame.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);

        for step in game.update(elapsed_ms) {
            journal.record_step(&step, game.board());
        }
        if game.quit_requested() {
            return Ok(());
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
