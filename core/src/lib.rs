#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cell::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use pointer::*;
pub use snapshot::*;
pub use types::*;

mod adjacency;
mod cell;
mod difficulty;
mod engine;
mod error;
mod generator;
mod pointer;
mod snapshot;
mod types;

/// Immutable dimensions and mine count of one board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates that the board has cells and that the mine count leaves at least one safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 || mines >= mult(size.0, size.1) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }
}

/// Where the mines are. Fixed for the whole life of a game.
///
/// Serialized as the bare mine mask; the mine count is always recomputed when loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if Coord::try_from(rows).is_err() || Coord::try_from(cols).is_err() {
            return Err(GameError::InvalidBoardShape);
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Ok(Self {
            mine_mask,
            mine_count: CellCount::try_from(mine_count).map_err(|_| GameError::InvalidBoardShape)?,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfRange);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.board_config().contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn size(&self) -> Coord2 {
        coords_from_dim(self.mine_mask.dim())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors, the cast cannot truncate
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(index, _)| coords_from_dim(index))
    }
}

impl TryFrom<Array2<bool>> for MineLayout {
    type Error = GameError;

    fn try_from(mine_mask: Array2<bool>) -> Result<Self> {
        Self::from_mine_mask(mine_mask)
    }
}

impl From<MineLayout> for Array2<bool> {
    fn from(layout: MineLayout) -> Self {
        layout.mine_mask
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
    /// Only reachable when the win policy requires every mine to be flagged.
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_boards() {
        assert_eq!(BoardConfig::new((0, 5), 1), Err(GameError::EmptyBoard));
        assert_eq!(BoardConfig::new((3, 3), 0), Err(GameError::InvalidMineCount));
        assert_eq!(BoardConfig::new((3, 3), 9), Err(GameError::InvalidMineCount));
        assert_eq!(BoardConfig::new((3, 3), 8).map(|c| c.safe_cells()), Ok(1));
    }

    #[test]
    fn layout_counts_mines_and_rejects_bad_coords() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 4);
        assert_eq!(layout.board_config(), BoardConfig::new_unchecked((2, 3), 2));
        assert!(layout.contains_mine((1, 2)));
        assert_eq!(layout.validate_coords((2, 0)), Err(GameError::OutOfRange));
        assert_eq!(
            MineLayout::from_mine_coords((2, 3), &[(0, 3)]),
            Err(GameError::OutOfRange)
        );
    }

    #[test]
    fn layout_rejects_masks_larger_than_a_coordinate() {
        let mask: Array2<bool> = Array2::default([300, 1]);

        assert_eq!(MineLayout::from_mine_mask(mask), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn config_contains_only_cells_inside_the_board() {
        let config = BoardConfig::new_unchecked((2, 3), 1);

        assert!(config.contains((1, 2)));
        assert!(!config.contains((2, 0)));
        assert!(!config.contains((0, 3)));
    }

    #[test]
    fn layout_loads_with_recomputed_mine_count() {
        let layout = MineLayout::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        let json = serde_json::to_string(&layout).unwrap();

        let loaded: MineLayout = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, layout);
        assert_eq!(loaded.mine_count(), 1);
        assert_eq!(loaded.safe_cell_count(), 1);
    }

    #[test]
    fn layout_never_trusts_a_stored_mine_count() {
        let json = r#"{"mine_mask":{"v":1,"dim":[1,2],"data":[true,false]},"mine_count":9}"#;

        assert!(serde_json::from_str::<MineLayout>(json).is_err());

        let mask = r#"{"v":1,"dim":[1,2],"data":[true,false]}"#;
        let loaded: MineLayout = serde_json::from_str(mask).unwrap();
        assert_eq!(loaded.safe_cell_count(), 1);
    }

    #[test]
    fn iter_mines_lists_every_mine() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(2, 1), (0, 2)]).unwrap();

        let mines: alloc::vec::Vec<_> = layout.iter_mines().collect();

        assert_eq!(mines, [(0, 2), (2, 1)]);
    }
}
