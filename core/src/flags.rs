use crate::*;

/// Toggles the flag at `coords`, never holding more than `mine_total` flags at once.
///
/// Clearing always succeeds. Revealed cells and coordinates outside the board are left alone.
pub fn toggle_flag(board: &mut Board, coords: Coord2, mine_total: CellCount) -> FlagOutcome {
    let Some(&cell) = board.cell(coords) else {
        log::warn!("Ignoring flag outside the board at {:?}", coords);
        return FlagOutcome::NoChange;
    };

    if cell.is_revealed {
        FlagOutcome::NoChange
    } else if cell.is_flagged {
        board.set_flag(coords, false);
        FlagOutcome::Cleared
    } else if board.flagged_count() < mine_total {
        board.set_flag(coords, true);
        FlagOutcome::Set
    } else {
        log::debug!("Flag limit of {} reached, not flagging {:?}", mine_total, coords);
        FlagOutcome::NoChange
    }
}
