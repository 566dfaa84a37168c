use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a presenter should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    /// Shown safe cell with its adjacent mine count.
    Revealed(u8),
    /// Unflagged mine exposed after the game ended.
    Mine,
    /// The mine whose reveal lost the game.
    TriggeredMine,
    /// Hidden safe cell opened up after the game ended, with its adjacent mine count.
    Exposed(u8),
    /// Flag on a safe cell, exposed after the game ended with the count underneath.
    Misflagged(u8),
}

/// Read-only copy of a board, taken after every move.
///
/// Mine positions stay hidden while the game is in progress and are all exposed once it is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: BoardConfig,
    pub outcome: Outcome,
    pub shown_count: CellCount,
    /// Like `shown_count` but without the triggered mine.
    pub safe_shown_count: CellCount,
    pub flagged_count: CellCount,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_engine(engine: &BoardEngine) -> Self {
        let layout = engine.mine_layout();
        let game_over = engine.outcome().is_finished();
        let mut cells = Array2::from_elem(engine.size().to_nd_index(), CellView::Hidden);

        for (coords, visibility) in engine.iter_cells() {
            let has_mine = layout.contains_mine(coords);
            let count = || layout.adjacent_mine_count(coords);
            cells[coords.to_nd_index()] = match (visibility, has_mine) {
                (Visibility::Shown, true) => CellView::TriggeredMine,
                (Visibility::Shown, false) => CellView::Revealed(count()),
                (Visibility::Flagged, false) if game_over => CellView::Misflagged(count()),
                (Visibility::Flagged, _) => CellView::Flagged,
                (Visibility::Hidden, true) if game_over => CellView::Mine,
                (Visibility::Hidden, false) if game_over => CellView::Exposed(count()),
                (Visibility::Hidden, _) => CellView::Hidden,
            };
        }

        Self {
            config: engine.config(),
            outcome: engine.outcome(),
            shown_count: engine.shown_count(),
            safe_shown_count: engine.safe_shown_count(),
            flagged_count: engine.flagged_count(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, CellView>> {
        self.cells.rows().into_iter()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count as isize)
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.config.size.0 as usize, self.config.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }
}
