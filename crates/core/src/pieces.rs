//! Pieces module - the tetromino catalog
//!
//! Each kind maps to static data: a color, a spawn origin and an ordered list
//! of rotation templates. A template lists the four cell offsets of the piece
//! inside its rotation space; the rotation-space origin is the top-left
//! corner of that space on the board.
//!
//! Rotation simply advances to the next template and wraps around. There is
//! no wall-kick table: a rotation that does not fit is rejected by the caller.
//! Kinds with symmetric shapes carry fewer templates (O has one; I, S and Z
//! have two).

use crate::blocks::BlockCollection;
use crate::types::{Coordinate, PieceKind, Rgb, TranslationDirection};

/// The four cell offsets of one rotation state
pub type Template = [Coordinate; 4];

/// Static per-kind definition
#[derive(Debug)]
pub struct PieceDef {
    pub color: Rgb,
    pub spawn_origin: Coordinate,
    pub templates: &'static [Template],
}

const fn c(column: i32, row: i32) -> Coordinate {
    Coordinate::new(column, row)
}

static I_TEMPLATES: [Template; 2] = [
    [c(0, 1), c(1, 1), c(2, 1), c(3, 1)],
    [c(2, 0), c(2, 1), c(2, 2), c(2, 3)],
];

static O_TEMPLATES: [Template; 1] = [[c(0, 0), c(0, 1), c(1, 0), c(1, 1)]];

static J_TEMPLATES: [Template; 4] = [
    [c(0, 1), c(1, 1), c(2, 1), c(2, 2)],
    [c(1, 0), c(1, 1), c(1, 2), c(0, 2)],
    [c(0, 1), c(0, 2), c(1, 2), c(2, 2)],
    [c(1, 0), c(2, 0), c(2, 1), c(2, 2)],
];

static L_TEMPLATES: [Template; 4] = [
    [c(0, 2), c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 0), c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 1), c(2, 2), c(1, 2), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2), c(2, 2)],
];

static S_TEMPLATES: [Template; 2] = [
    [c(0, 2), c(1, 2), c(1, 1), c(2, 1)],
    [c(0, 0), c(0, 1), c(1, 1), c(1, 2)],
];

static Z_TEMPLATES: [Template; 2] = [
    [c(0, 1), c(1, 1), c(1, 2), c(2, 2)],
    [c(1, 2), c(1, 1), c(2, 1), c(2, 0)],
];

static T_TEMPLATES: [Template; 4] = [
    [c(0, 1), c(1, 1), c(2, 1), c(1, 2)],
    [c(1, 0), c(1, 1), c(1, 2), c(0, 1)],
    [c(0, 2), c(1, 2), c(2, 2), c(1, 1)],
    [c(1, 0), c(1, 1), c(1, 2), c(2, 1)],
];

static I_DEF: PieceDef = PieceDef {
    color: Rgb::new(0, 255, 255),
    // Row 1 of the template lands on row -1: the bar enters from above.
    spawn_origin: c(3, -2),
    templates: &I_TEMPLATES,
};

static O_DEF: PieceDef = PieceDef {
    color: Rgb::new(255, 255, 0),
    spawn_origin: c(4, 0),
    templates: &O_TEMPLATES,
};

static J_DEF: PieceDef = PieceDef {
    color: Rgb::new(0, 0, 139),
    spawn_origin: c(4, 0),
    templates: &J_TEMPLATES,
};

static L_DEF: PieceDef = PieceDef {
    color: Rgb::new(255, 136, 0),
    spawn_origin: c(4, 0),
    templates: &L_TEMPLATES,
};

static S_DEF: PieceDef = PieceDef {
    color: Rgb::new(0, 128, 0),
    spawn_origin: c(4, 0),
    templates: &S_TEMPLATES,
};

static Z_DEF: PieceDef = PieceDef {
    color: Rgb::new(178, 34, 34),
    spawn_origin: c(4, 0),
    templates: &Z_TEMPLATES,
};

static T_DEF: PieceDef = PieceDef {
    color: Rgb::new(186, 85, 211),
    spawn_origin: c(4, 0),
    templates: &T_TEMPLATES,
};

/// Look up the static definition of a piece kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    match kind {
        PieceKind::I => &I_DEF,
        PieceKind::O => &O_DEF,
        PieceKind::J => &J_DEF,
        PieceKind::L => &L_DEF,
        PieceKind::S => &S_DEF,
        PieceKind::Z => &Z_DEF,
        PieceKind::T => &T_DEF,
    }
}

/// A piece on the board.
///
/// Only the kind, the rotation-space origin and the cycle index vary; the
/// templates stay in static storage, so simulating a move is a plain copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    origin: Coordinate,
    cycle_index: usize,
}

impl Tetromino {
    /// Create a piece at its canonical spawn origin in rotation state 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            origin: piece_def(kind).spawn_origin,
            cycle_index: 0,
        }
    }

    /// Create a piece at an arbitrary origin and rotation state.
    ///
    /// The cycle index is reduced modulo the kind's template count.
    pub fn with_placement(kind: PieceKind, origin: Coordinate, cycle_index: usize) -> Self {
        let count = piece_def(kind).templates.len();
        Self {
            kind,
            origin,
            cycle_index: cycle_index % count,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn cycle_index(&self) -> usize {
        self.cycle_index
    }

    pub fn color(&self) -> Rgb {
        piece_def(self.kind).color
    }

    pub fn template_count(&self) -> usize {
        piece_def(self.kind).templates.len()
    }

    /// Board coordinates currently covered by the piece
    pub fn cells(&self) -> [Coordinate; 4] {
        let template = piece_def(self.kind).templates[self.cycle_index];
        template.map(|offset| self.origin + offset)
    }

    /// Covered cells paired with the piece color
    pub fn blocks(&self) -> BlockCollection {
        let color = self.color();
        self.cells().into_iter().map(|cell| (cell, color)).collect()
    }

    /// Copy of this piece with the origin moved one step in `direction`
    pub fn translated(self, direction: TranslationDirection) -> Self {
        Self {
            origin: self.origin + direction.offset(),
            ..self
        }
    }

    /// Copy of this piece advanced to the next rotation state
    pub fn rotated(self) -> Self {
        Self {
            cycle_index: (self.cycle_index + 1) % self.template_count(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for template in piece_def(kind).templates {
                for (i, a) in template.iter().enumerate() {
                    for b in &template[i + 1..] {
                        assert_ne!(a, b, "{:?} template repeats a cell", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn spawn_uses_catalog_origin() {
        let piece = Tetromino::spawn(PieceKind::I);
        assert_eq!(piece.origin(), Coordinate::new(3, -2));
        assert_eq!(piece.cycle_index(), 0);

        let piece = Tetromino::spawn(PieceKind::T);
        assert_eq!(piece.origin(), Coordinate::new(4, 0));
    }

    #[test]
    fn rotation_wraps_at_template_count() {
        let o = Tetromino::spawn(PieceKind::O);
        assert_eq!(o.rotated().cycle_index(), 0);

        let i = Tetromino::spawn(PieceKind::I);
        assert_eq!(i.rotated().cycle_index(), 1);
        assert_eq!(i.rotated().rotated().cycle_index(), 0);
    }

    #[test]
    fn with_placement_reduces_index() {
        let s = Tetromino::with_placement(PieceKind::S, Coordinate::new(0, 0), 5);
        assert_eq!(s.cycle_index(), 1);
    }

    #[test]
    fn blocks_carry_piece_color() {
        let piece = Tetromino::spawn(PieceKind::Z);
        let blocks = piece.blocks();
        assert_eq!(blocks.len(), 4);
        for (_, color) in blocks.iter() {
            assert_eq!(*color, Rgb::new(178, 34, 34));
        }
    }
}
