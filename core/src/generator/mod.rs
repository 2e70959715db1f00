use rand::Rng;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for populating an empty board with mines once the first cell to open is known.
pub trait MineGenerator {
    fn plant(&mut self, board: &mut Board, mine_count: CellCount, first_click: Coord2) -> Result<()>;
}

/// Which cells around the first opened cell are kept free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SafeZone {
    /// Only the opened cell itself, it may still show a number.
    CellOnly,
    /// The 3x3 block centered on the opened cell, so the first open always cascades.
    #[default]
    Neighborhood,
}

impl SafeZone {
    pub const fn contains(self, first_click: Coord2, coords: Coord2) -> bool {
        match self {
            Self::CellOnly => first_click.0 == coords.0 && first_click.1 == coords.1,
            Self::Neighborhood => within_one(first_click, coords),
        }
    }

    /// Number of cells covered by the zone once clipped to the board.
    pub fn cell_count(self, board: &Board, first_click: Coord2) -> CellCount {
        match self {
            Self::CellOnly => 1,
            Self::Neighborhood => board.iter_neighbors(first_click).count() as CellCount + 1,
        }
    }
}

/// Plants `mine_count` mines with a 3x3 safe zone around `first_click`, then computes neighbor counts.
pub fn plant_mines<R: Rng + ?Sized>(
    board: &mut Board,
    mine_count: CellCount,
    first_click: Coord2,
    rng: &mut R,
) -> Result<()> {
    plant_mines_with(board, mine_count, first_click, SafeZone::Neighborhood, rng)
}

/// Rejection-samples uniformly random cells until `mine_count` distinct mines sit outside the safe zone.
pub fn plant_mines_with<R: Rng + ?Sized>(
    board: &mut Board,
    mine_count: CellCount,
    first_click: Coord2,
    safe_zone: SafeZone,
    rng: &mut R,
) -> Result<()> {
    let first_click = board.validate_coords(first_click)?;
    if board.has_mines() {
        return Err(GameError::MinesAlreadyPlaced);
    }

    let available = board.total_cells() - safe_zone.cell_count(board, first_click);
    if mine_count > available {
        log::warn!(
            "Cannot plant {} mines, only {} cells outside the safe zone",
            mine_count,
            available
        );
        return Err(GameError::TooManyMines);
    }

    let (rows, cols) = board.size();
    let mut planted = 0;
    while planted < mine_count {
        let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
        if safe_zone.contains(first_click, coords) {
            continue;
        }
        if board.place_mine(coords) {
            planted += 1;
        }
    }
    board.update_neighbor_counts();

    log::debug!(
        "Planted {} mines on {:?} board around {:?} ({:?})",
        planted,
        board.size(),
        first_click,
        safe_zone
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    #[test]
    fn plants_exact_mine_count() {
        let mut board = Board::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        plant_mines(&mut board, 10, (4, 4), &mut rng).unwrap();

        assert_eq!(board.mine_count(), 10);
        assert_eq!(board.iter().filter(|cell| cell.is_mine).count(), 10);
    }

    #[test]
    fn same_seed_same_board() {
        let mut first = Board::new(10, 10).unwrap();
        let mut second = Board::new(10, 10).unwrap();

        plant_mines(&mut first, 18, (3, 7), &mut StdRng::seed_from_u64(7)).unwrap();
        plant_mines(&mut second, 18, (3, 7), &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn second_placement_is_refused() {
        let mut board = Board::new(6, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        plant_mines(&mut board, 5, (0, 0), &mut rng).unwrap();
        let before = board.clone();

        assert_eq!(
            plant_mines(&mut board, 5, (5, 5), &mut rng),
            Err(GameError::MinesAlreadyPlaced)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn too_many_mines_is_refused() {
        let mut rng = StdRng::seed_from_u64(1);

        // corner safe zone covers 4 cells, leaving 5
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(
            plant_mines(&mut board, 6, (0, 0), &mut rng),
            Err(GameError::TooManyMines)
        );
        assert!(!board.has_mines());

        plant_mines(&mut board, 5, (0, 0), &mut rng).unwrap();
        assert_eq!(board.mine_count(), 5);
    }

    #[test]
    fn first_click_out_of_range_is_refused() {
        let mut board = Board::new(4, 4).unwrap();
        assert_eq!(
            plant_mines(&mut board, 1, (4, 0), &mut StdRng::seed_from_u64(0)),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn accepts_a_dynamic_rng() {
        let mut rng = StdRng::seed_from_u64(21);
        let rng: &mut dyn RngCore = &mut rng;
        let mut board = Board::new(8, 8).unwrap();

        plant_mines(&mut board, 10, (2, 2), rng).unwrap();

        assert_eq!(board.mine_count(), 10);
        assert!(board.neighbors_of((2, 2)).all(|cell| !cell.is_mine));
    }

    #[test]
    fn cell_only_zone_allows_adjacent_mines() {
        let mut board = Board::new(2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        plant_mines_with(&mut board, 3, (0, 0), SafeZone::CellOnly, &mut rng).unwrap();

        assert!(!board[(0, 0)].is_mine);
        assert_eq!(board[(0, 0)].neighbor_count, 3);
    }

    proptest! {
        #[test]
        fn safe_zone_and_counts_hold(
            seed in any::<u64>(),
            rows in 4u8..16,
            cols in 4u8..16,
            click in (0u8..16, 0u8..16),
            density in 0.0f64..0.8,
        ) {
            let first_click = (click.0 % rows, click.1 % cols);
            let mut board = Board::new(rows, cols).unwrap();
            let available = board.total_cells() - 9;
            let mines = (f64::from(available) * density) as CellCount;

            plant_mines(&mut board, mines, first_click, &mut StdRng::seed_from_u64(seed)).unwrap();

            prop_assert_eq!(board.mine_count(), mines);
            for cell in board.iter() {
                if within_one(first_click, cell.coords()) {
                    prop_assert!(!cell.is_mine);
                }
                if cell.is_mine {
                    prop_assert_eq!(cell.neighbor_count, 0);
                } else {
                    let expected = board.neighbors_of(cell.coords()).filter(|n| n.is_mine).count();
                    prop_assert_eq!(usize::from(cell.neighbor_count), expected);
                }
            }
        }
    }
}
