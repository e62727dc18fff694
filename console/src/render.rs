use xo_engine::{BOARD_SIZE, Cell, GameSnapshot, Player, Position, RoundPhase};

const ROW_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c'];

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Human => 'O',
        Cell::Opponent => 'X',
    }
}

/// The alert line shown above the board.
pub fn banner(snapshot: &GameSnapshot) -> &'static str {
    match snapshot.winner {
        Some(Player::Opponent) => "Computer is the winner!",
        Some(Player::Human) => "You are the winner!",
        None => match snapshot.turn {
            Player::Opponent => "Computer's turn",
            Player::Human => "Your turn",
        },
    }
}

pub fn render(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n  {}\n\n", banner(snapshot)));
    out.push_str("     1   2   3\n");

    for (row, label) in ROW_LABELS.iter().enumerate() {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .filter_map(|col| Position::new(row, col).ok())
            .map(|position| symbol(snapshot.board.cell(position)).to_string())
            .collect();
        out.push_str(&format!("  {}  {}\n", label, cells.join(" | ")));
        if row + 1 < BOARD_SIZE {
            out.push_str("    ---+---+---\n");
        }
    }

    out.push_str(&format!("\n  Score: {}\n", snapshot.score));

    if snapshot.phase == RoundPhase::InProgress && snapshot.board.is_full() {
        out.push_str("  Board is full, type `reset` to try again\n");
    }

    out
}
