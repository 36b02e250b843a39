//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::SIZE};

/// Winning lines as (row, column) triples
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player owns all three cells of any line
    pub fn has_line(cells: &[[Cell; SIZE]; SIZE], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| cells[row][col] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_line_horizontal() {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[1] = [Cell::X; SIZE];

        assert!(LineAnalyzer::has_line(&cells, Player::X));
        assert!(!LineAnalyzer::has_line(&cells, Player::O));
    }

    #[test]
    fn test_has_line_vertical() {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[0][2] = Cell::O;
        cells[1][2] = Cell::O;
        cells[2][2] = Cell::O;

        assert!(LineAnalyzer::has_line(&cells, Player::O));
        assert!(!LineAnalyzer::has_line(&cells, Player::X));
    }

    #[test]
    fn test_has_line_diagonals() {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[0][0] = Cell::X;
        cells[1][1] = Cell::X;
        cells[2][2] = Cell::X;
        assert!(LineAnalyzer::has_line(&cells, Player::X));

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[2][0] = Cell::O;
        cells[1][1] = Cell::O;
        cells[0][2] = Cell::O;
        assert!(LineAnalyzer::has_line(&cells, Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::O;
        cells[0][2] = Cell::X;

        assert!(!LineAnalyzer::has_line(&cells, Player::X));
        assert!(!LineAnalyzer::has_line(&cells, Player::O));
    }

    #[test]
    fn test_every_cell_is_on_a_line() {
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert!(
                    WINNING_LINES
                        .iter()
                        .any(|line| line.contains(&(row, col))),
                    "cell ({row}, {col}) not covered"
                );
            }
        }
    }
}
