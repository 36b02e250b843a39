//! Board rendering and message formatting for the terminal

use std::io::{self, Write};

use crate::tictactoe::{Board, Cell, GameOutcome, Move, Roles, SIZE};

/// Write the board with the players' marks, numbering the empty cells 1-9
/// so they can be typed in directly.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in 0..SIZE {
        let cells: Vec<String> = (0..SIZE)
            .filter_map(|col| Move::new(row, col))
            .map(|mv| match board.get(mv) {
                Cell::Empty => mv.number().to_string(),
                occupied => occupied.to_char().to_string(),
            })
            .collect();
        writeln!(out, " {} ", cells.join(" | "))?;
        if row < SIZE - 1 {
            writeln!(out, "---+---+---")?;
        }
    }
    Ok(())
}

/// Closing message for a finished game
pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::HumanWin => "You beat the machine!",
        GameOutcome::MachineWin => "The machine wins.",
        GameOutcome::Draw => "It's a draw.",
        GameOutcome::InProgress => "The game is still in progress.",
    }
}

/// Describe a score from the human's point of view
pub fn describe_score(score: i32) -> &'static str {
    match score {
        s if s < 0 => "human wins",
        0 => "draw",
        _ => "machine wins",
    }
}

/// One-line summary of who plays which mark
pub fn roles_line(roles: Roles) -> String {
    format!("You play {}, the machine plays {}", roles.human, roles.machine)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_board_numbers_empty_cells() {
        let board = Board::from_string("X../.O./...").unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_describe_score() {
        assert_eq!(describe_score(-1), "human wins");
        assert_eq!(describe_score(0), "draw");
        assert_eq!(describe_score(1), "machine wins");
    }
}
