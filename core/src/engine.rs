use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall state of a game. `Won` and `Lost` are final.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Decides whether flags take part in winning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinPolicy {
    /// Showing every safe cell wins, flags are only markers.
    #[default]
    RevealSafe,
    /// Every safe cell shown and every mine flagged.
    RevealSafeAndFlagMines,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedEngine")]
pub struct BoardEngine {
    mine_layout: MineLayout,
    board: Array2<Visibility>,
    shown_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
    win_policy: WinPolicy,
}

/// Loaded form of [`BoardEngine`]. Counters are rebuilt from the board, never read back.
#[derive(Deserialize)]
struct SavedEngine {
    mine_layout: MineLayout,
    board: Array2<Visibility>,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
    win_policy: WinPolicy,
}

impl TryFrom<SavedEngine> for BoardEngine {
    type Error = GameError;

    fn try_from(saved: SavedEngine) -> Result<Self> {
        let SavedEngine {
            mine_layout,
            board,
            outcome,
            triggered_mine,
            win_policy,
        } = saved;

        let (rows, cols) = mine_layout.size();
        if board.dim() != (usize::from(rows), usize::from(cols)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut shown_count = Saturating(0);
        let mut flagged_count = Saturating(0);
        let mut shown_mine = None;
        for (index, &visibility) in board.indexed_iter() {
            let coords = coords_from_dim(index);
            match visibility {
                Visibility::Hidden => {}
                Visibility::Flagged => flagged_count += 1,
                Visibility::Shown => {
                    shown_count += 1;
                    if mine_layout[coords] {
                        if shown_mine.is_some() {
                            return Err(GameError::InconsistentState);
                        }
                        shown_mine = Some(coords);
                    }
                }
            }
        }

        let lost = matches!(outcome, Outcome::Lost);
        if shown_mine != triggered_mine || lost != triggered_mine.is_some() {
            return Err(GameError::InconsistentState);
        }
        if matches!(outcome, Outcome::Won) && shown_count.0 != mine_layout.safe_cell_count() {
            return Err(GameError::InconsistentState);
        }

        Ok(Self {
            mine_layout,
            board,
            shown_count,
            flagged_count,
            outcome,
            triggered_mine,
            win_policy,
        })
    }
}

impl BoardEngine {
    /// Starts a fresh game on a randomly generated board.
    pub fn new_game(difficulty: Difficulty) -> Self {
        Self::generate(difficulty.config(), RandomMineGenerator::from_entropy())
    }

    /// Like [`BoardEngine::new_game`] but with a reproducible mine placement.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::generate(difficulty.config(), RandomMineGenerator::new(seed))
    }

    pub fn generate(config: BoardConfig, generator: impl MineGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        log::debug!(
            "New game on {}x{} with {} mines",
            size.0,
            size.1,
            mine_layout.mine_count()
        );
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            shown_count: Saturating(0),
            flagged_count: Saturating(0),
            outcome: Outcome::InProgress,
            triggered_mine: None,
            win_policy: WinPolicy::default(),
        }
    }

    pub fn with_win_policy(mut self, win_policy: WinPolicy) -> Self {
        self.win_policy = win_policy;
        self
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn hit_mine(&self) -> bool {
        matches!(self.outcome, Outcome::Lost)
    }

    pub fn in_progress(&self) -> bool {
        self.outcome.is_in_progress()
    }

    pub fn win_policy(&self) -> WinPolicy {
        self.win_policy
    }

    pub fn config(&self) -> BoardConfig {
        self.mine_layout.board_config()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.mine_layout.safe_cell_count()
    }

    /// Number of cells in the `Shown` state, the triggered mine included.
    pub fn shown_count(&self) -> CellCount {
        self.shown_count.0
    }

    /// Shown cells without the triggered mine, i.e. safe cells the player uncovered.
    pub fn safe_shown_count(&self) -> CellCount {
        match self.triggered_mine {
            Some(_) => self.shown_count.0.saturating_sub(1),
            None => self.shown_count.0,
        }
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus flags; negative when the player placed more flags than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn visibility(&self, coords: Coord2) -> Result<Visibility> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    pub fn has_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout[coords])
    }

    /// Counts mines around a cell, whatever its visibility.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    /// Every cell with its visibility, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Visibility)> + '_ {
        self.board
            .indexed_iter()
            .map(|(index, &visibility)| (coords_from_dim(index), visibility))
    }

    /// Shows a single hidden cell. Shown or flagged cells, and any cell after the game ended, are left alone.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        if self.outcome.is_finished() {
            log::trace!("Ignoring reveal at {:?}, game is over", coords);
            return Ok(NoChange);
        }

        match self.board[coords.to_nd_index()] {
            Visibility::Hidden => {}
            Visibility::Shown | Visibility::Flagged => return Ok(NoChange),
        }

        self.board[coords.to_nd_index()] = Visibility::Shown;
        self.shown_count += 1;

        if self.mine_layout[coords] {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(Outcome::Lost);
            return Ok(HitMine);
        }

        log::debug!(
            "Revealed {:?}, adjacent mines: {}",
            coords,
            self.mine_layout.adjacent_mine_count(coords)
        );
        Ok(if self.check_won() { Won } else { Revealed })
    }

    /// Flips a cell between hidden and flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        if self.outcome.is_finished() {
            log::trace!("Ignoring flag at {:?}, game is over", coords);
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.board[coords.to_nd_index()];
        let outcome = match *cell {
            Visibility::Hidden => {
                *cell = Visibility::Flagged;
                self.flagged_count += 1;
                MarkOutcome::Flagged
            }
            Visibility::Flagged => {
                *cell = Visibility::Hidden;
                self.flagged_count -= 1;
                MarkOutcome::Unflagged
            }
            Visibility::Shown => return Ok(MarkOutcome::NoChange),
        };
        log::trace!("{:?} at {:?}, flags: {}", outcome, coords, self.flagged_count);

        Ok(if self.check_won() {
            MarkOutcome::Won
        } else {
            outcome
        })
    }

    fn check_won(&mut self) -> bool {
        if self.shown_count.0 != self.mine_layout.safe_cell_count() {
            return false;
        }

        let won = match self.win_policy {
            WinPolicy::RevealSafe => true,
            WinPolicy::RevealSafeAndFlagMines => {
                self.flagged_count.0 == self.mine_layout.mine_count()
            }
        };
        if won {
            self.end_game(Outcome::Won);
        }
        won
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }

        log::debug!(
            "Game over: {:?}, shown: {}, flags: {}",
            outcome,
            self.shown_count,
            self.flagged_count
        );
        self.outcome = outcome;
    }
}
