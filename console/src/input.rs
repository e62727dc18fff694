#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <row> <col>   place your mark, zero-based (e.g. `1 2`)
  a1 .. c3      place your mark, row letter then column number
  reset         clear the board (Try Again)
  help          show this help
  quit          leave the game";

/// Coordinates are passed through unchecked; the session reports out-of-range ones.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim().to_ascii_lowercase();

    match trimmed.as_str() {
        "" => return Err("Empty command, type `help`".to_string()),
        "reset" | "r" | "try again" => return Ok(Command::Reset),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row.parse().map_err(|_| format!("Invalid row: {}", row))?;
            let col = col.parse().map_err(|_| format!("Invalid column: {}", col))?;
            Ok(Command::Place { row, col })
        }
        [cell] => parse_cell_name(cell),
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

fn parse_cell_name(cell: &str) -> Result<Command, String> {
    let mut chars = cell.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Unknown command: {}", cell));
    };

    let row = match letter {
        'a'..='c' => letter as usize - 'a' as usize,
        _ => return Err(format!("Row must be a, b or c, got {}", letter)),
    };
    let col = match digit.to_digit(10) {
        Some(d @ 1..=3) => d as usize - 1,
        _ => return Err(format!("Column must be 1, 2 or 3, got {}", digit)),
    };

    Ok(Command::Place { row, col })
}
