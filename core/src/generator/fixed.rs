use super::*;

/// Plants a predetermined layout, ignoring the first click. Used for scripted games and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn plant(&mut self, board: &mut Board, mine_count: CellCount, first_click: Coord2) -> Result<()> {
        board.validate_coords(first_click)?;
        if board.has_mines() {
            return Err(GameError::MinesAlreadyPlaced);
        }
        for &coords in &self.mines {
            board.validate_coords(coords)?;
        }

        for &coords in &self.mines {
            board.place_mine(coords);
        }
        board.update_neighbor_counts();

        if board.mine_count() != mine_count {
            log::warn!(
                "Fixed layout mine count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                mine_count
            );
        }
        Ok(())
    }
}
