use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// Only `Hidden -> Shown`, `Hidden -> Flagged` and `Flagged -> Hidden` ever happen; `Shown` is final.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
    Flagged,
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
