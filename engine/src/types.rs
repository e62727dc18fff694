use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::error::OutOfBounds;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Opponent => Cell::Opponent,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Opponent => write!(f, "Opponent"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    /// A verdict was reached; the board is frozen until the restart hold elapses.
    RoundOver,
}

/// How strictly placements are checked.
///
/// `Strict` refuses occupied cells and out-of-turn moves, and keeps the
/// opponent from taking its (2, 2) shortcut onto an occupied cell. `Permissive`
/// accepts every in-bounds write, overwrites included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRules {
    #[default]
    Strict,
    Permissive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfBounds> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::at(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl LineKind {
    pub fn start(&self) -> Position {
        match *self {
            LineKind::Row(row) => Position::at(row, 0),
            LineKind::Column(col) => Position::at(0, col),
            LineKind::MainDiagonal => Position::at(0, 0),
            LineKind::AntiDiagonal => Position::at(0, BOARD_SIZE - 1),
        }
    }

    pub fn end(&self) -> Position {
        let last = BOARD_SIZE - 1;
        match *self {
            LineKind::Row(row) => Position::at(row, last),
            LineKind::Column(col) => Position::at(last, col),
            LineKind::MainDiagonal => Position::at(last, last),
            LineKind::AntiDiagonal => Position::at(last, 0),
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(row) => write!(f, "row {}", row),
            LineKind::Column(col) => write!(f, "column {}", col),
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub kind: LineKind,
}

impl WinningLine {
    pub fn new(player: Player, kind: LineKind) -> Self {
        Self { player, kind }
    }

    pub fn start(&self) -> Position {
        self.kind.start()
    }

    pub fn end(&self) -> Position {
        self.kind.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_rejects_out_of_range() {
        assert_eq!(Position::new(3, 0), Err(OutOfBounds { row: 3, col: 0 }));
        assert_eq!(Position::new(0, 7), Err(OutOfBounds { row: 0, col: 7 }));
        assert!(Position::new(2, 2).is_ok());
    }

    #[test]
    fn test_all_positions_are_row_major() {
        let positions: Vec<(usize, usize)> = Position::all().map(|p| (p.row(), p.col())).collect();

        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], (0, 0));
        assert_eq!(positions[1], (0, 1));
        assert_eq!(positions[3], (1, 0));
        assert_eq!(positions[8], (2, 2));
    }

    #[test]
    fn test_player_other_flips() {
        assert_eq!(Player::Human.other(), Player::Opponent);
        assert_eq!(Player::Opponent.other(), Player::Human);
    }

    #[test]
    fn test_line_endpoints() {
        assert_eq!(LineKind::Row(1).start(), Position::at(1, 0));
        assert_eq!(LineKind::Row(1).end(), Position::at(1, 2));
        assert_eq!(LineKind::Column(2).end(), Position::at(2, 2));
        assert_eq!(LineKind::AntiDiagonal.start(), Position::at(0, 2));
        assert_eq!(LineKind::AntiDiagonal.end(), Position::at(2, 0));
    }
}
