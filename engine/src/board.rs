use crate::error::OutOfBounds;
use crate::types::{BOARD_SIZE, Player, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Opponent,
}

impl Cell {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Opponent => Some(Player::Opponent),
        }
    }
}

pub type Line = [Cell; BOARD_SIZE];

/// The 3x3 grid. Every position always holds a cell; `Empty` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Line; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [Line; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        let position = Position::new(row, col)?;
        Ok(self.cell(position))
    }

    /// Writes without looking at what was there before; occupancy rules are
    /// enforced by the game state.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OutOfBounds> {
        let position = Position::new(row, col)?;
        self.place(position, cell);
        Ok(())
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.row()][position.col()]
    }

    pub(crate) fn place(&mut self, position: Position, cell: Cell) {
        self.cells[position.row()][position.col()] = cell;
    }

    pub fn rows(&self) -> [Line; BOARD_SIZE] {
        self.cells
    }

    pub fn columns(&self) -> [Line; BOARD_SIZE] {
        std::array::from_fn(|col| std::array::from_fn(|row| self.cells[row][col]))
    }

    /// Main diagonal first, then the anti-diagonal.
    pub fn diagonals(&self) -> [Line; 2] {
        [
            std::array::from_fn(|i| self.cells[i][i]),
            std::array::from_fn(|i| self.cells[i][BOARD_SIZE - 1 - i]),
        ]
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all()
            .filter(|&position| self.cell(position) == Cell::Empty)
            .collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.count(Cell::Empty) == BOARD_SIZE * BOARD_SIZE
    }

    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// Builds a board from three row strings: `H` human, `O` opponent, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_pattern(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            for (col, ch) in text.chars().take(BOARD_SIZE).enumerate() {
                let cell = match ch {
                    'H' => Cell::Human,
                    'O' => Cell::Opponent,
                    _ => Cell::Empty,
                };
                board.place(Position::at(row, col), cell);
            }
        }
        board
    }
}
