use core::fmt::Write;
use sweepling_core::{CellView, GameConfig, GamePhase, MineGenerator, Session};

/// Draws the board as text, row indices down the left and column indices across the top.
pub fn render<G: MineGenerator>(session: &Session<G>) -> String {
    let board = session.board();
    let (rows, cols) = board.size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..cols {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>3}");
        for col in 0..cols {
            let coords = (row, col);
            let symbol = if session.exploded_cell() == Some(coords) {
                'X'
            } else {
                symbol(board[coords].view())
            };
            let _ = write!(out, "{symbol:>3}");
        }
        out.push('\n');
    }
    out
}

fn symbol(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Open(0) => '.',
        // counts never exceed 8
        CellView::Open(count) => char::from(b'0' + count),
        CellView::Mine => '*',
    }
}

pub fn status_line(config: GameConfig, phase: GamePhase, flags_remaining: u16, elapsed: u32) -> String {
    let phase = match phase {
        GamePhase::Ready => "ready",
        GamePhase::Playing => "playing",
        GamePhase::Won => "won",
        GamePhase::Lost => "lost",
    };
    format!(
        "{}x{} | mines left: {} | time: {}s | {}",
        config.rows, config.cols, flags_remaining, elapsed, phase
    )
}
