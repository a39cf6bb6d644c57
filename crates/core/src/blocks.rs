//! Blocks module - sparse cell storage
//!
//! A `BlockCollection` maps board coordinates to the color of the cell
//! occupying them. A coordinate present in the map is occupied; there is no
//! separate "empty" marker. Locked cells, the active piece's cells and the
//! render view are all expressed as collections.

use std::collections::hash_map::{self, HashMap};

use crate::error::MergeCollision;
use crate::types::{Coordinate, Rgb};

/// Occupied cells keyed by coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockCollection {
    cells: HashMap<Coordinate, Rgb>,
}

impl BlockCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a cell
    pub fn add(&mut self, coordinate: Coordinate, color: Rgb) {
        self.cells.insert(coordinate, color);
    }

    /// Remove a cell; removing an absent coordinate is a no-op
    pub fn remove(&mut self, coordinate: Coordinate) -> Option<Rgb> {
        self.cells.remove(&coordinate)
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<Rgb> {
        self.cells.get(&coordinate).copied()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Coordinate, Rgb> {
        self.cells.iter()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    /// Number of cells on `row`
    pub fn count_in_row(&self, row: i32) -> usize {
        self.cells.keys().filter(|c| c.row == row).count()
    }

    /// First coordinate held by both collections, if any
    pub fn first_collision(&self, other: &BlockCollection) -> Option<Coordinate> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.coordinates().find(|c| large.contains(*c))
    }

    /// Union of both collections; `other` wins on a shared coordinate.
    ///
    /// A shared coordinate means an unvalidated piece was committed, so debug
    /// builds treat it as a fatal assertion. Use [`Self::overlay`] where an
    /// overlap is expected.
    pub fn merge(&self, other: &BlockCollection) -> BlockCollection {
        debug_assert!(
            self.first_collision(other).is_none(),
            "merge collision at {:?}",
            self.first_collision(other)
        );
        self.overlay(other)
    }

    /// Union of both collections without the collision check
    pub fn overlay(&self, other: &BlockCollection) -> BlockCollection {
        let mut merged = self.clone();
        merged.cells.extend(other.iter().map(|(c, color)| (*c, *color)));
        merged
    }

    /// Union of both collections, rejecting any shared coordinate
    pub fn try_merge(&self, other: &BlockCollection) -> Result<BlockCollection, MergeCollision> {
        match self.first_collision(other) {
            Some(Coordinate { column, row }) => Err(MergeCollision { column, row }),
            None => Ok(self.overlay(other)),
        }
    }

    /// Remove every cell on `row` and shift every cell above it down by one.
    ///
    /// Cells below `row` are untouched. Clearing several rows means calling
    /// this once per row in ascending order; each later row index is still
    /// valid because only rows above the cleared one move.
    pub fn delete_row_and_collapse(&mut self, row: i32) {
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .filter(|(c, _)| c.row != row)
            .map(|(c, color)| {
                if c.row < row {
                    (Coordinate::new(c.column, c.row + 1), color)
                } else {
                    (c, color)
                }
            })
            .collect();
    }
}

impl FromIterator<(Coordinate, Rgb)> for BlockCollection {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Rgb)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Coordinate, Rgb)> for BlockCollection {
    fn extend<I: IntoIterator<Item = (Coordinate, Rgb)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BlockCollection {
    type Item = (&'a Coordinate, &'a Rgb);
    type IntoIter = hash_map::Iter<'a, Coordinate, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn at(column: i32, row: i32) -> Coordinate {
        Coordinate::new(column, row)
    }

    #[test]
    fn add_overwrites_and_remove_is_idempotent() {
        let mut blocks = BlockCollection::new();
        blocks.add(at(1, 1), RED);
        blocks.add(at(1, 1), BLUE);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks.get(at(1, 1)), Some(BLUE));

        assert_eq!(blocks.remove(at(1, 1)), Some(BLUE));
        assert_eq!(blocks.remove(at(1, 1)), None);
        assert!(blocks.is_empty());
    }

    #[test]
    fn overlay_prefers_other() {
        let a: BlockCollection = [(at(0, 0), RED), (at(1, 0), RED)].into_iter().collect();
        let b: BlockCollection = [(at(1, 0), BLUE)].into_iter().collect();
        let merged = a.overlay(&b);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get(at(1, 0)), Some(BLUE));
    }

    #[test]
    fn merge_disjoint_collections() {
        let a: BlockCollection = [(at(0, 0), RED)].into_iter().collect();
        let b: BlockCollection = [(at(0, 1), BLUE)].into_iter().collect();
        let merged = a.merge(&b);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(at(0, 0)));
        assert!(merged.contains(at(0, 1)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "merge collision")]
    fn merge_collision_asserts_in_debug() {
        let a: BlockCollection = [(at(2, 2), RED)].into_iter().collect();
        let b: BlockCollection = [(at(2, 2), BLUE)].into_iter().collect();
        let _ = a.merge(&b);
    }

    #[test]
    fn try_merge_reports_collision() {
        let a: BlockCollection = [(at(2, 2), RED)].into_iter().collect();
        let b: BlockCollection = [(at(2, 2), BLUE)].into_iter().collect();
        assert_eq!(a.try_merge(&b), Err(MergeCollision { column: 2, row: 2 }));
    }

    #[test]
    fn delete_row_shifts_only_rows_above() {
        let mut blocks: BlockCollection = [
            (at(0, 3), RED),
            (at(0, 5), RED),
            (at(1, 5), RED),
            (at(0, 7), BLUE),
        ]
        .into_iter()
        .collect();

        blocks.delete_row_and_collapse(5);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks.get(at(0, 4)), Some(RED));
        assert_eq!(blocks.get(at(0, 7)), Some(BLUE));
        assert_eq!(blocks.count_in_row(5), 0);
    }
}
