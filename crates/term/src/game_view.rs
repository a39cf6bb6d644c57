//! BoardView: maps a board into a terminal framebuffer.
//!
//! The view reads only `Board::occupied_cells()` and the board dimensions.
//! Each board cell becomes a `cell_w` x `cell_h` block of characters and the
//! framed board is centered in the viewport. Cells on negative rows (a piece
//! still entering from above) are not drawn.
//!
//! This module is pure (no I/O).

use crate::core::{Board, GameController};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Coordinate, Rgb, TranslationDirection};

const WELL: Rgb = Rgb::new(30, 30, 40);
const GRID: Rgb = Rgb::new(90, 90, 100);
const FRAME: Rgb = Rgb::new(200, 200, 200);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Text drawn over the middle of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Paused,
    GameOver,
}

impl Overlay {
    pub fn for_game(game: &GameController) -> Self {
        if game.game_over() {
            Overlay::GameOver
        } else if game.paused() {
            Overlay::Paused
        } else {
            Overlay::None
        }
    }

    fn text(self) -> Option<&'static str> {
        match self {
            Overlay::None => None,
            Overlay::Paused => Some("PAUSED"),
            Overlay::GameOver => Some("GAME OVER"),
        }
    }
}

/// Where the framed board sits in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Top-left corner of the frame
    pub x: u16,
    pub y: u16,
    /// Frame size including the border
    pub width: u16,
    pub height: u16,
}

/// Cell-size and centering policy for drawing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    cell_w: u16,
    cell_h: u16,
    landing_hint: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            landing_hint: true,
        }
    }

    pub fn with_landing_hint(mut self, on: bool) -> Self {
        self.landing_hint = on;
        self
    }

    /// Center the framed board in `viewport`
    pub fn placement(&self, board: &Board, viewport: Viewport) -> Placement {
        let width = to_u16(board.columns()).saturating_mul(self.cell_w).saturating_add(2);
        let height = to_u16(board.lines()).saturating_mul(self.cell_h).saturating_add(2);
        Placement {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Top-left character of a board cell, `None` when the cell is off the
    /// board
    pub fn cell_origin(
        &self,
        board: &Board,
        placement: Placement,
        coordinate: Coordinate,
    ) -> Option<(u16, u16)> {
        if !board.contains(coordinate) {
            return None;
        }
        let x = placement
            .x
            .saturating_add(1)
            .saturating_add(to_u16(coordinate.column).saturating_mul(self.cell_w));
        let y = placement
            .y
            .saturating_add(1)
            .saturating_add(to_u16(coordinate.row).saturating_mul(self.cell_h));
        Some((x, y))
    }

    /// Draw `board` into `fb`, resizing it to the viewport.
    pub fn render_into(&self, board: &Board, overlay: Overlay, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let placement = self.placement(board, viewport);
        self.draw_frame(fb, placement);

        let empty = CellStyle::new(GRID, WELL).dim();
        for coordinate in board.all_possible_coordinates() {
            self.fill_cell(fb, board, placement, coordinate, '·', empty);
        }

        let occupied = board.occupied_cells();

        if self.landing_hint && !board.game_over() {
            let distance = board.drop_distance();
            if distance > 0 {
                let hint = CellStyle::new(Rgb::new(140, 140, 140), WELL).dim();
                let mut landing = board.active();
                for _ in 0..distance {
                    landing = landing.translated(TranslationDirection::Down);
                }
                for cell in landing.cells() {
                    if !occupied.contains(cell) {
                        self.fill_cell(fb, board, placement, cell, '░', hint);
                    }
                }
            }
        }

        for (&coordinate, &color) in occupied.iter() {
            let style = CellStyle::new(color, WELL).bold();
            self.fill_cell(fb, board, placement, coordinate, '█', style);
        }

        if let Some(text) = overlay.text() {
            self.draw_overlay(fb, placement, text);
        }
        self.draw_help(fb, viewport, placement);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, overlay, viewport, &mut fb);
        fb
    }

    pub fn render_game(&self, game: &GameController, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into(game.board(), Overlay::for_game(game), viewport, fb);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        board: &Board,
        placement: Placement,
        coordinate: Coordinate,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((x, y)) = self.cell_origin(board, placement, coordinate) {
            fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, p: Placement) {
        if p.width < 2 || p.height < 2 {
            return;
        }
        let style = CellStyle::new(FRAME, BLACK);
        let right = p.x.saturating_add(p.width - 1);
        let bottom = p.y.saturating_add(p.height - 1);
        let (inner_x, inner_y) = (p.x.saturating_add(1), p.y.saturating_add(1));

        fb.put_char(p.x, p.y, '┌', style);
        fb.put_char(right, p.y, '┐', style);
        fb.put_char(p.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        fb.fill_rect(inner_x, p.y, p.width - 2, 1, '─', style);
        fb.fill_rect(inner_x, bottom, p.width - 2, 1, '─', style);
        fb.fill_rect(p.x, inner_y, 1, p.height - 2, '│', style);
        fb.fill_rect(right, inner_y, 1, p.height - 2, '│', style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, p: Placement, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = p.x.saturating_add(p.width.saturating_sub(text_w) / 2);
        let y = p.y.saturating_add(p.height / 2);
        fb.put_str(x, y, text, CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold());
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, p: Placement) {
        const LINES: [&str; 6] = [
            "←/→  move",
            "↑    rotate",
            "↓ ␣  drop",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        let x = p.x.saturating_add(p.width).saturating_add(2);
        if x.saturating_add(12) > viewport.width {
            return;
        }
        let style = CellStyle::default().dim();
        for (line, y) in LINES.iter().zip(p.y..viewport.height) {
            fb.put_str(x, y, line, style);
        }
    }
}

fn to_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceRandomizer;
    use crate::types::PieceKind;

    fn o_board() -> Board {
        Board::with_randomizer(10, 20, PieceRandomizer::cycle(vec![PieceKind::O])).unwrap()
    }

    #[test]
    fn board_is_centered() {
        let view = BoardView::default();
        let p = view.placement(&o_board(), Viewport::new(80, 24));
        assert_eq!((p.width, p.height), (22, 22));
        assert_eq!((p.x, p.y), (29, 1));
    }

    #[test]
    fn active_piece_uses_its_color() {
        let board = o_board();
        let view = BoardView::default();
        let fb = view.render(&board, Overlay::None, Viewport::new(80, 24));

        let p = view.placement(&board, Viewport::new(80, 24));
        let (x, y) = view.cell_origin(&board, p, Coordinate::new(4, 0)).unwrap();
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(255, 255, 0));
    }

    #[test]
    fn off_board_cells_have_no_origin() {
        let board = o_board();
        let view = BoardView::default();
        let p = view.placement(&board, Viewport::new(80, 24));
        assert_eq!(view.cell_origin(&board, p, Coordinate::new(3, -1)), None);
        assert_eq!(view.cell_origin(&board, p, Coordinate::new(10, 0)), None);
    }

    #[test]
    fn oversized_board_saturates_instead_of_overflowing() {
        let board =
            Board::with_randomizer(40_000, 4, PieceRandomizer::cycle(vec![PieceKind::O])).unwrap();
        let view = BoardView::default();
        let viewport = Viewport::new(80, 24);
        let p = view.placement(&board, viewport);
        assert_eq!(p.width, u16::MAX);

        let far = Coordinate::new(39_999, 3);
        let (x, _) = view.cell_origin(&board, p, far).unwrap();
        assert_eq!(x, u16::MAX);

        let fb = view.render(&board, Overlay::GameOver, viewport);
        assert_eq!(fb.get(0, p.y).map(|cell| cell.ch), Some('┌'));
    }
}
