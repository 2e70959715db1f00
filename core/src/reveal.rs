use crate::*;

/// Opens the cell at `coords`, cascading through connected zero-count cells. Returns whether a mine was hit.
///
/// Revealed and flagged cells are left alone and report no hit, as do coordinates outside the board. Only the
/// entry cell can be a mine: the cascade never opens flagged cells or mines.
pub fn reveal_cell(board: &mut Board, coords: Coord2) -> bool {
    let Some(cell) = board.cell(coords) else {
        log::warn!("Ignoring reveal outside the board at {:?}", coords);
        return false;
    };
    if !cell.is_closed() {
        return false;
    }

    board.mark_revealed(coords);
    let cell = board[coords];
    if cell.is_mine {
        log::debug!("Hit mine at {:?}", coords);
        return true;
    }
    log::debug!("Open cell at {:?}, mine count: {}", coords, cell.neighbor_count);

    if cell.neighbor_count == 0 {
        // revealed doubles as the visited marker
        let mut to_visit: Vec<_> = closed_neighbors(board, coords).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            coords,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop() {
            let visit = board[visit_coords];
            if !visit.is_closed() || visit.is_mine {
                continue;
            }

            board.mark_revealed(visit_coords);
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                visit_coords,
                visit.neighbor_count
            );

            if visit.neighbor_count == 0 {
                to_visit.extend(closed_neighbors(board, visit_coords));
            }
        }
    }

    false
}

/// Whether every non-mine cell has been revealed. Flags do not matter.
pub fn check_win(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_mine || cell.is_revealed)
}

/// Opens every mine on the board, used to show the layout once a game is lost.
pub fn reveal_all_mines(board: &mut Board) {
    let mines: Vec<_> = board
        .iter()
        .filter(|cell| cell.is_mine && !cell.is_revealed)
        .map(Cell::coords)
        .collect();
    for coords in mines {
        board.mark_revealed(coords);
    }
}

fn closed_neighbors(board: &Board, coords: Coord2) -> impl Iterator<Item = Coord2> + use<'_> {
    board
        .iter_neighbors(coords)
        .filter(move |&pos| board[pos].is_closed())
}
