use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Row/column deltas of the eight compass directions, clockwise from north-west.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Collected neighbors of a single cell, never more than eight.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// Returns the coordinates around `coords` that lie inside a board of size `bounds`.
///
/// Corners have 3 neighbors, other edge cells 5 and interior cells 8.
pub fn neighbors(coords: Coord2, bounds: Coord2) -> Neighbors {
    NeighborIter::new(coords, bounds).collect()
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, coords_from_dim(self.dim()))
    }
}

#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_have_three_neighbors() {
        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(neighbors(corner, (5, 5)).len(), 3, "corner {corner:?}");
        }
        assert_eq!(neighbors((0, 0), (2, 2)).len(), 3);
    }

    #[test]
    fn edges_have_five_neighbors() {
        for edge in [(0, 2), (2, 0), (4, 2), (2, 4)] {
            assert_eq!(neighbors(edge, (5, 5)).len(), 5, "edge {edge:?}");
        }
    }

    #[test]
    fn interior_has_all_eight_neighbors() {
        let around = neighbors((2, 2), (5, 5));

        assert_eq!(
            around.as_slice(),
            &[
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 3),
                (3, 3),
                (3, 2),
                (3, 1),
                (2, 1),
            ]
        );
    }

    #[test]
    fn upper_left_corner_sees_east_southeast_south() {
        let mut around = neighbors((0, 0), (10, 10));
        around.sort_unstable();

        assert_eq!(around.as_slice(), &[(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn degenerate_boards_truncate_every_direction() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
        assert_eq!(neighbors((0, 3), (1, 7)).as_slice(), &[(0, 4), (0, 2)]);
    }

    #[test]
    fn iterator_matches_array_dimensions() {
        let grid: Array2<bool> = Array2::default([3, 4]);

        let from_array: Neighbors = grid.iter_neighbors((2, 3)).collect();

        assert_eq!(from_array, neighbors((2, 3), (3, 4)));
        assert_eq!(from_array.len(), 3);
    }

    #[test]
    fn neighbors_never_include_center_or_duplicates() {
        for row in 0..6 {
            for col in 0..6 {
                let mut around = neighbors((row, col), (6, 6));
                assert!(!around.contains(&(row, col)));
                let len = around.len();
                around.sort_unstable();
                around.dedup();
                assert_eq!(around.len(), len);
            }
        }
    }
}
