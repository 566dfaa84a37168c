use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// Preset board sizes, each with a fixed mine density.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    /// Board size as `(rows, columns)`.
    pub const fn size(self) -> Coord2 {
        match self {
            Self::Beginner => (10, 10),
            Self::Intermediate => (15, 15),
            Self::Expert => (20, 20),
        }
    }

    /// Share of the cells holding a mine, in hundredths of a percent.
    pub const fn density_basis_points(self) -> u32 {
        match self {
            Self::Beginner => 1235,
            Self::Intermediate => 1563,
            Self::Expert => 2063,
        }
    }

    pub fn density(self) -> f64 {
        f64::from(self.density_basis_points()) / 10_000.0
    }

    /// `floor(rows * columns * density)`, computed in integers so it never drifts with float rounding.
    pub const fn mine_count(self) -> CellCount {
        let (rows, cols) = self.size();
        let cells = mult(rows, cols) as u32;
        (cells * self.density_basis_points() / 10_000) as CellCount
    }

    pub const fn config(self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| {
                let name = difficulty.name();
                s.eq_ignore_ascii_case(name) || (s.len() == 1 && name.starts_with(s))
            })
            .ok_or(GameError::UnknownDifficulty)
    }
}
