//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};

/// Side length of the grid
pub const SIZE: usize = 3;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    /// Parse a symbol choice, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(crate::Error::InvalidSymbol {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Assignment of marks to the two sides of the zero-sum game.
///
/// The human is the minimising side (numeric value -1) and the machine is
/// the maximising side (numeric value +1). Empty cells are worth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roles {
    pub human: Player,
    pub machine: Player,
}

impl Roles {
    /// Assign the given mark to the human and the other one to the machine
    pub fn new(human: Player) -> Self {
        Roles {
            human,
            machine: human.opponent(),
        }
    }

    /// Numeric encoding of a cell from the machine's point of view
    pub fn value(&self, cell: Cell) -> i8 {
        if cell == Cell::Empty {
            0
        } else if cell == self.human.to_cell() {
            -1
        } else {
            1
        }
    }

    /// Whether `player` is the maximising side
    pub fn is_maximizing(&self, player: Player) -> bool {
        player == self.machine
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// A (row, column) coordinate on the board, both in `0..3`.
///
/// Ordering is row-major, which is the order moves are enumerated and
/// searched in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a move, or `None` if either coordinate is off the board
    pub fn new(row: usize, col: usize) -> Option<Move> {
        (row < SIZE && col < SIZE).then_some(Move { row, col })
    }

    /// Translate a keypad-style entry (1-9, row-major) into a move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMoveNumber`] outside `1..=9`.
    pub fn from_number(number: usize) -> Result<Move, crate::Error> {
        if !(1..=CELL_COUNT).contains(&number) {
            return Err(crate::Error::InvalidMoveNumber { number });
        }
        Ok(Move {
            row: (number - 1) / SIZE,
            col: (number - 1) % SIZE,
        })
    }

    /// Inverse of [`Move::from_number`]
    pub fn number(self) -> usize {
        self.row * SIZE + self.col + 1
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All nine cells in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Move { row, col }))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid.
///
/// A board is created empty and mutated in place; it never changes shape.
/// It implements `Copy` since it is only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Parse a board from a string of 9 cell characters.
    ///
    /// Separators (`/`, `|`, `,`, newlines) are ignored, so `"XO./.X./..O"` and a
    /// multi-line rendering produced by `Display` are both accepted. Spaces are
    /// treated as separators as well; use `.`, `-` or `_` for empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are present or any character is invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | ',') && !c.is_whitespace())
            .collect();

        if chars.len() < CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::empty();
        for (mv, (i, &c)) in Move::all().zip(chars.iter().take(CELL_COUNT).enumerate()) {
            board.cells[mv.row][mv.col] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(board)
    }

    /// Raw access to the grid, row by row
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Get the cell at a coordinate
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// All empty cells in row-major order.
    ///
    /// The order is what makes search tie-breaking reproducible.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::all().filter(|&mv| self.is_empty(mv)).collect()
    }

    /// Number of cells holding a mark
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_cells().len()
    }

    /// Place `player`'s mark if the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// already occupied. This is the only way marks are added to a board.
    #[must_use = "an occupied cell is reported through the return value"]
    pub fn apply_move(&mut self, mv: Move, player: Player) -> bool {
        if !self.is_empty(mv) {
            return false;
        }
        self.cells[mv.row][mv.col] = player.to_cell();
        true
    }

    /// Reset a cell to empty. Only the search engine undoes moves.
    pub(crate) fn clear(&mut self, mv: Move) {
        self.cells[mv.row][mv.col] = Cell::Empty;
    }

    /// Check if `player` owns any full row, column or diagonal
    pub fn has_line(&self, player: Player) -> bool {
        LineAnalyzer::has_line(&self.cells, player)
    }

    /// Terminal score from the machine's point of view.
    ///
    /// -1 if the human has a line, +1 if the machine has one, 0 otherwise.
    /// The human's line is checked first.
    pub fn score(&self, roles: Roles) -> i32 {
        if self.has_line(roles.human) {
            -1
        } else if self.has_line(roles.machine) {
            1
        } else {
            0
        }
    }

    /// Check if the game is over (line completed or board full)
    pub fn is_terminal(&self) -> bool {
        self.has_line(Player::X) || self.has_line(Player::O) || self.empty_cells().is_empty()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_line(Player::X) {
            Some(Player::X)
        } else if self.has_line(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Outcome of the position, recomputed from the cells every time
    pub fn outcome(&self, roles: Roles) -> GameOutcome {
        match self.score(roles) {
            -1 => GameOutcome::HumanWin,
            1 => GameOutcome::MachineWin,
            _ if self.is_terminal() => GameOutcome::Draw,
            _ => GameOutcome::InProgress,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
