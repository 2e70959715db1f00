use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Rectangular grid of cells, indexed by `(row, col)`.
///
/// Dimensions are fixed at creation. Mines are planted at most once, everything else only changes through reveals
/// and flag toggles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Creates an empty board, no mines and nothing revealed or flagged.
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }

        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            // both fit in `Coord` because the shape does
            Cell::new((row as Coord, col as Coord))
        });

        Ok(Self {
            cells,
            mine_count: 0,
            revealed_count: 0,
            flagged_count: 0,
        })
    }

    /// Builds a board with mines at the given coordinates and neighbor counts already computed.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size.0, size.1)?;
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        board.update_neighbor_counts();
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn has_mines(&self) -> bool {
        self.mine_count > 0
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinates of the up to 8 cells adjacent to `coords`, in row-major offset order.
    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// The up to 8 cells adjacent to `coords`, in row-major offset order.
    pub fn neighbors_of(&self, coords: Coord2) -> impl Iterator<Item = &Cell> {
        self.iter_neighbors(coords).map(move |pos| &self[pos])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // never more than 8
        self.neighbors_of(coords).filter(|cell| cell.is_mine).count() as u8
    }

    /// Marks a mine, returns whether the cell changed.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;
        self.mine_count += 1;
        true
    }

    /// Recomputes every non-mine cell's count, mines keep zero.
    pub(crate) fn update_neighbor_counts(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let count = if self[coords].is_mine {
                    0
                } else {
                    self.adjacent_mine_count(coords)
                };
                self.cells[coords.to_nd_index()].neighbor_count = count;
            }
        }
    }

    /// Opens a hidden cell, returns whether the cell changed. A flag on it stays counted but no longer matters.
    pub(crate) fn mark_revealed(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed {
            return false;
        }
        cell.is_revealed = true;
        self.revealed_count += 1;
        true
    }

    /// Sets or clears a flag on an unrevealed cell, returns whether the cell changed.
    pub(crate) fn set_flag(&mut self, coords: Coord2, flagged: bool) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed || cell.is_flagged == flagged {
            return false;
        }
        cell.is_flagged = flagged;
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        true
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_and_stamped() {
        let board = Board::new(3, 4).unwrap();

        assert_eq!(board.size(), (3, 4));
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.mine_count(), 0);
        assert!(!board.has_mines());
        for cell in board.iter() {
            assert_eq!(*cell, Cell::new(cell.coords()));
        }
        assert_eq!(board[(2, 3)].coords(), (2, 3));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Board::new(0, 5), Err(GameError::InvalidSize));
        assert_eq!(Board::new(5, 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn neighbors_of_returns_adjacent_cells() {
        let board = Board::new(4, 4).unwrap();

        let corner: Vec<_> = board.neighbors_of((0, 0)).map(Cell::coords).collect();
        assert_eq!(corner, [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(board.neighbors_of((0, 2)).count(), 5);
        assert_eq!(board.neighbors_of((2, 2)).count(), 8);
    }

    #[test]
    fn from_mine_coords_computes_counts() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board[(1, 1)].neighbor_count, 2);
        assert_eq!(board[(0, 1)].neighbor_count, 1);
        assert_eq!(board[(0, 2)].neighbor_count, 0);
        assert_eq!(board[(0, 0)].neighbor_count, 0);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_range() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn duplicate_mines_count_once() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn cell_is_none_outside_the_grid() {
        let board = Board::new(2, 2).unwrap();
        assert!(board.cell((1, 1)).is_some());
        assert!(board.cell((2, 0)).is_none());
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }
}
