//! Piece catalog tests - spawn placement, templates, rotation cycle

use std::collections::HashSet;

use tetrominos::core::{piece_def, Tetromino};
use tetrominos::types::{Coordinate, PieceKind, Rgb};

#[test]
fn test_i_piece_spawns_above_board() {
    let piece = Tetromino::spawn(PieceKind::I);
    let cells: HashSet<Coordinate> = piece.cells().into_iter().collect();
    let expected: HashSet<Coordinate> = [(3, -1), (4, -1), (5, -1), (6, -1)]
        .into_iter()
        .map(Coordinate::from)
        .collect();
    assert_eq!(cells, expected);
}

#[test]
fn test_template_counts() {
    let counts: Vec<usize> = PieceKind::ALL
        .iter()
        .map(|&kind| piece_def(kind).templates.len())
        .collect();
    // I, O, J, L, S, Z, T
    assert_eq!(counts, vec![2, 1, 4, 4, 2, 2, 4]);
}

#[test]
fn test_spawn_colors() {
    let colors = [
        (PieceKind::I, Rgb::new(0, 255, 255)),
        (PieceKind::O, Rgb::new(255, 255, 0)),
        (PieceKind::J, Rgb::new(0, 0, 139)),
        (PieceKind::L, Rgb::new(255, 136, 0)),
        (PieceKind::S, Rgb::new(0, 128, 0)),
        (PieceKind::Z, Rgb::new(178, 34, 34)),
        (PieceKind::T, Rgb::new(186, 85, 211)),
    ];
    for (kind, color) in colors {
        assert_eq!(Tetromino::spawn(kind).color(), color, "{:?}", kind);
    }
}

#[test]
fn test_every_state_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::spawn(kind);
        for _ in 0..piece.template_count() {
            let distinct: HashSet<Coordinate> = piece.cells().into_iter().collect();
            assert_eq!(distinct.len(), 4, "{:?} state {}", kind, piece.cycle_index());
            piece = piece.rotated();
        }
    }
}

#[test]
fn test_full_rotation_cycle_returns_to_start() {
    for kind in PieceKind::ALL {
        let start = Tetromino::with_placement(kind, Coordinate::new(2, 7), 0);
        let mut piece = start;
        for _ in 0..start.template_count() {
            piece = piece.rotated();
            assert!(piece.cycle_index() < start.template_count());
        }
        assert_eq!(piece, start);
        assert_eq!(piece.cells(), start.cells());
    }
}

#[test]
fn test_translation_moves_every_cell() {
    let piece = Tetromino::spawn(PieceKind::S);
    let moved = piece.translated(tetrominos::types::TranslationDirection::Right);
    for (a, b) in piece.cells().iter().zip(moved.cells().iter()) {
        assert_eq!(*b, *a + Coordinate::new(1, 0));
    }
}
