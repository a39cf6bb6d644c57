//! View tests - board to framebuffer mapping

use tetrominos::core::{Board, GameController, PieceRandomizer};
use tetrominos::term::{BoardView, FrameBuffer, Overlay, Viewport};
use tetrominos::types::{Coordinate, GameEvent, PieceKind, Rgb};

fn board_with(kind: PieceKind) -> Board {
    Board::with_randomizer(10, 20, PieceRandomizer::cycle(vec![kind])).unwrap()
}

fn count(fb: &FrameBuffer, ch: char) -> usize {
    fb.cells().iter().filter(|cell| cell.ch == ch).count()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_active_piece_and_landing_hint() {
    let board = board_with(PieceKind::O);
    let fb = BoardView::default().render(&board, Overlay::None, Viewport::new(80, 24));

    // Four cells, two characters wide each.
    assert_eq!(count(&fb, '█'), 8);
    assert_eq!(count(&fb, '░'), 8);
}

#[test]
fn test_landing_hint_can_be_disabled() {
    let board = board_with(PieceKind::O);
    let fb = BoardView::default()
        .with_landing_hint(false)
        .render(&board, Overlay::None, Viewport::new(80, 24));
    assert_eq!(count(&fb, '░'), 0);
}

#[test]
fn test_rows_above_board_are_not_drawn() {
    let board = board_with(PieceKind::I);
    let fb = BoardView::default().render(&board, Overlay::None, Viewport::new(80, 24));
    assert_eq!(count(&fb, '█'), 0);
}

#[test]
fn test_locked_cell_keeps_its_color() {
    let mut board = board_with(PieceKind::O);
    let color = Rgb::new(12, 34, 56);
    board.locked_mut().add(Coordinate::new(0, 19), color);

    let view = BoardView::new(3, 1);
    let viewport = Viewport::new(60, 30);
    let fb = view.render(&board, Overlay::None, viewport);

    let placement = view.placement(&board, viewport);
    let (x, y) = view
        .cell_origin(&board, placement, Coordinate::new(0, 19))
        .unwrap();
    for dx in 0..3 {
        let cell = fb.get(x + dx, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color);
    }
}

#[test]
fn test_overlays_follow_game_state() {
    let board = board_with(PieceKind::O);
    let mut game = GameController::with_board(board, 700, 300);
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_game(&game, Viewport::new(80, 24), &mut fb);
    assert!(!screen_text(&fb).contains("PAUSED"));

    game.handle(GameEvent::Pause);
    view.render_game(&game, Viewport::new(80, 24), &mut fb);
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn test_game_over_overlay() {
    let mut board = board_with(PieceKind::O);
    board.locked_mut().add(Coordinate::new(4, 2), Rgb::new(1, 1, 1));
    board.locked_mut().add(Coordinate::new(5, 2), Rgb::new(1, 1, 1));
    board.lock_active_piece();
    assert!(board.game_over());

    let fb = BoardView::default().render(&board, Overlay::GameOver, Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn test_small_viewport_does_not_panic() {
    let board = board_with(PieceKind::T);
    let fb = BoardView::default().render(&board, Overlay::Paused, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
