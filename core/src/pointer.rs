//! Mapping pointer presses on a drawn board back to cells and actions.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cumulative cell boundaries along one axis: `ends[i]` is where cell `i` stops.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisBounds {
    ends: Vec<f64>,
}

impl AxisBounds {
    /// Splits `extent` pixels evenly into `cells` buckets.
    pub fn new(extent: f64, cells: Coord) -> Self {
        let step = extent / f64::from(cells);
        let ends = (1..=cells).map(|i| step * f64::from(i)).collect();
        Self { ends }
    }

    pub fn ends(&self) -> &[f64] {
        &self.ends
    }

    /// Index of the first cell whose end lies past `pos`, `None` outside the axis.
    pub fn locate(&self, pos: f64) -> Option<Coord> {
        if pos.is_nan() || pos < 0.0 {
            return None;
        }
        let index = self.ends.partition_point(|&end| end <= pos);
        if index < self.ends.len() {
            Coord::try_from(index).ok()
        } else {
            None
        }
    }
}

/// Pixel geometry of a board drawn into a `width` x `height` area.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerGrid {
    rows: AxisBounds,
    columns: AxisBounds,
}

impl PointerGrid {
    pub fn new(width: f64, height: f64, config: &BoardConfig) -> Self {
        Self {
            rows: AxisBounds::new(height, config.rows()),
            columns: AxisBounds::new(width, config.columns()),
        }
    }

    pub fn rows(&self) -> &AxisBounds {
        &self.rows
    }

    pub fn columns(&self) -> &AxisBounds {
        &self.columns
    }

    /// Cell under the point `(x, y)`, as `(row, column)`.
    pub fn locate(&self, x: f64, y: f64) -> Option<Coord2> {
        Some((self.rows.locate(y)?, self.columns.locate(x)?))
    }
}

/// What a pointer press asks the engine to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerIntent {
    Reveal,
    ToggleFlag,
}

impl PointerIntent {
    /// A held modifier key turns a press into a flag toggle.
    pub const fn from_modifier(held: bool) -> Self {
        if held { Self::ToggleFlag } else { Self::Reveal }
    }

    /// Forwards the intent to the engine, returning whether anything changed.
    pub fn apply(self, engine: &mut BoardEngine, coords: Coord2) -> Result<bool> {
        Ok(match self {
            Self::Reveal => engine.reveal_cell(coords)?.has_update(),
            Self::ToggleFlag => engine.toggle_flag(coords)?.has_update(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_bounds_accumulate_cell_ends() {
        let bounds = AxisBounds::new(600.0, 10);

        assert_eq!(bounds.ends().len(), 10);
        assert_eq!(bounds.ends()[0], 60.0);
        assert_eq!(bounds.ends()[9], 600.0);
    }

    #[test]
    fn locate_buckets_positions() {
        let bounds = AxisBounds::new(600.0, 10);

        assert_eq!(bounds.locate(0.0), Some(0));
        assert_eq!(bounds.locate(59.9), Some(0));
        assert_eq!(bounds.locate(60.0), Some(1));
        assert_eq!(bounds.locate(599.0), Some(9));
        assert_eq!(bounds.locate(600.0), None);
        assert_eq!(bounds.locate(-1.0), None);
        assert_eq!(bounds.locate(f64::NAN), None);
    }

    #[test]
    fn grid_maps_pixels_to_row_and_column() {
        let grid = PointerGrid::new(600.0, 300.0, &BoardConfig::new_unchecked((15, 20), 35));

        // 20 px tall rows, 30 px wide columns
        assert_eq!(grid.rows().ends().len(), 15);
        assert_eq!(grid.rows().ends()[0], 20.0);
        assert_eq!(grid.columns().ends().len(), 20);
        assert_eq!(grid.columns().ends()[0], 30.0);
        assert_eq!(grid.locate(95.0, 41.0), Some((2, 3)));
        assert_eq!(grid.locate(599.0, 299.0), Some((14, 19)));
        assert_eq!(grid.locate(601.0, 10.0), None);
    }

    #[test]
    fn modifier_selects_intent() {
        assert_eq!(PointerIntent::from_modifier(false), PointerIntent::Reveal);
        assert_eq!(PointerIntent::from_modifier(true), PointerIntent::ToggleFlag);
    }

    #[test]
    fn intent_drives_engine() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut engine = BoardEngine::new(layout);
        let grid = PointerGrid::new(100.0, 100.0, &engine.config());

        let coords = grid.locate(75.0, 10.0).unwrap();
        assert_eq!(PointerIntent::ToggleFlag.apply(&mut engine, coords), Ok(true));
        assert_eq!(engine.visibility((0, 1)), Ok(Visibility::Flagged));
        assert_eq!(PointerIntent::Reveal.apply(&mut engine, coords), Ok(false));
        assert_eq!(PointerIntent::Reveal.apply(&mut engine, (2, 2)), Err(GameError::OutOfRange));
    }
}
