use crate::board::{Board, Cell};
use crate::session_rng::SessionRng;
use crate::types::{PlacementRules, Position};

/// `row * col` equals this only at (2, 2).
const SHORTCUT_PRODUCT: usize = 4;

/// Picks the opponent's next cell.
///
/// Cells are scanned row-major. The scan stops at the first empty cell whose
/// coin flip succeeds, or at (2, 2) through the shortcut. Under
/// [`PlacementRules::Permissive`] the shortcut fires even when (2, 2) is
/// occupied. `None` means no move this cycle; the caller retries later.
pub fn select_move(board: &Board, rng: &mut SessionRng, rules: PlacementRules) -> Option<Position> {
    Position::all().find(|&position| {
        let cell = board.cell(position);
        if position.row() * position.col() == SHORTCUT_PRODUCT
            && (rules == PlacementRules::Permissive || cell == Cell::Empty)
        {
            return true;
        }
        cell == Cell::Empty && rng.flip_coin()
    })
}
