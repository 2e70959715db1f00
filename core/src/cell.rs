use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// A single square of the board, stamped with its own coordinates.
///
/// `neighbor_count` is only meaningful after mines have been planted, and is kept at zero for mine cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_count: u8,
}

impl Cell {
    pub const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_count: 0,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    /// Hidden and not carrying a flag, the only state a reveal acts on.
    pub const fn is_closed(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Player-visible view of this cell.
    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_flagged, self.is_mine) {
            (true, _, true) => CellView::Mine,
            (true, _, false) => CellView::Open(self.neighbor_count),
            (false, true, _) => CellView::Flagged,
            (false, false, _) => CellView::Hidden,
        }
    }
}

/// What a presentation layer is allowed to know about a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Open(u8),
    Mine,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
