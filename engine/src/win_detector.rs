use crate::board::{Board, Line};
use crate::types::{LineKind, Player, WinningLine};

pub fn evaluate(board: &Board) -> Option<Player> {
    evaluate_with_line(board).map(|line| line.player)
}

/// Rows and columns are scanned first; diagonals are only looked at when no
/// straight line is complete. The first complete line in that order decides
/// the verdict, even on boards where both sides hold a line.
pub fn evaluate_with_line(board: &Board) -> Option<WinningLine> {
    let rows = board.rows();
    let columns = board.columns();

    let straight = rows
        .iter()
        .enumerate()
        .map(|(i, line)| (LineKind::Row(i), line))
        .chain(columns.iter().enumerate().map(|(i, line)| (LineKind::Column(i), line)));

    if let Some(found) = first_complete(straight) {
        return Some(found);
    }

    let [main, anti] = board.diagonals();
    first_complete([(LineKind::MainDiagonal, &main), (LineKind::AntiDiagonal, &anti)])
}

fn first_complete<'a>(lines: impl IntoIterator<Item = (LineKind, &'a Line)>) -> Option<WinningLine> {
    lines
        .into_iter()
        .find_map(|(kind, line)| line_owner(line).map(|player| WinningLine::new(player, kind)))
}

fn line_owner(line: &Line) -> Option<Player> {
    [Player::Human, Player::Opponent]
        .into_iter()
        .find(|player| line.iter().all(|&cell| cell == player.cell()))
}
