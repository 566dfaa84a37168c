use std::fmt;

use sweep_core::{CellView, Outcome, Snapshot};

fn digit(count: u8) -> char {
    char::from_digit(u32::from(count), 10).unwrap_or('?')
}

/// Cells opened up by the end of the game carry a `_` or `x` prefix so they never read as player moves.
fn cell_glyph(cell: CellView) -> String {
    match cell {
        CellView::Hidden => "#".into(),
        CellView::Flagged => "F".into(),
        CellView::Revealed(0) => ".".into(),
        CellView::Revealed(count) => digit(count).into(),
        CellView::Mine => "*".into(),
        CellView::TriggeredMine => "!".into(),
        CellView::Exposed(0) => "_".into(),
        CellView::Exposed(count) => format!("_{}", digit(count)),
        CellView::Misflagged(count) => format!("x{}", digit(count)),
    }
}

pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "Good luck!",
        Outcome::Won => "You won!",
        Outcome::Lost => "You lose!",
    }
}

/// The grid with row and column indices along the edges.
pub struct BoardView<'a>(pub &'a Snapshot);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        write!(f, "   ")?;
        for col in 0..snapshot.config.columns() {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;

        for (row, cells) in snapshot.rows().enumerate() {
            write!(f, "{row:>3}")?;
            for &cell in cells {
                write!(f, "{:>3}", cell_glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Counters under the board. Only safe cells count as clicked boxes.
pub struct StatusLine<'a>(pub &'a Snapshot);

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        write!(
            f,
            "Boxes clicked: {}/{}  Flags placed: {}  {}",
            snapshot.safe_shown_count,
            snapshot.safe_cell_count(),
            snapshot.flagged_count,
            outcome_text(snapshot.outcome)
        )
    }
}
