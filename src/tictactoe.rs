//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod machine;
pub mod search;

pub use board::{Board, CELL_COUNT, Cell, Move, Player, Roles, SIZE};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use machine::MachinePlayer;
pub use search::{SearchOutcome, Searcher, evaluate_moves, search};
