//! Exhaustive minimax search over the live board.
//!
//! The machine is the maximising side and the human the minimising side, so
//! every score is one of -1, 0 or +1 (see [`Board::score`]). There is no
//! pruning and no transposition table: the full tree from an empty board is
//! only about half a million nodes.
//!
//! Search explores hypothetical continuations by placing marks on the board it
//! is given and clearing them again. Each placement is held by a drop guard, so
//! the board is back in its original state on every return path.

use tracing::{debug, instrument};

use super::board::{Board, Move, Player, Roles};

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The position is already decided; there is nothing to play.
    Terminal { score: i32 },
    /// The best move for the side to move and the score it leads to.
    Move { mv: Move, score: i32 },
}

impl SearchOutcome {
    /// Minimax value of the searched position
    pub fn score(self) -> i32 {
        match self {
            SearchOutcome::Terminal { score } | SearchOutcome::Move { score, .. } => score,
        }
    }

    /// The chosen move, if the position was not terminal
    pub fn best_move(self) -> Option<Move> {
        match self {
            SearchOutcome::Terminal { .. } => None,
            SearchOutcome::Move { mv, .. } => Some(mv),
        }
    }
}

/// A mark placed for the duration of one branch, cleared when dropped.
struct Tentative<'a> {
    board: &'a mut Board,
    mv: Move,
    placed: bool,
}

impl<'a> Tentative<'a> {
    fn place(board: &'a mut Board, mv: Move, player: Player) -> Self {
        let placed = board.apply_move(mv, player);
        debug_assert!(placed, "search only tries empty cells");
        Tentative { board, mv, placed }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        if self.placed {
            self.board.clear(self.mv);
        }
    }
}

/// Minimax searcher that keeps count of the positions it visits.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions evaluated so far, the root included
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Find the optimal move for `to_move`.
    ///
    /// Candidates are tried in row-major order and only a strictly better
    /// score replaces the current best, so the first of several equally good
    /// moves is returned.
    pub fn search(&mut self, board: &mut Board, to_move: Player, roles: Roles) -> SearchOutcome {
        self.nodes += 1;

        if board.is_terminal() {
            return SearchOutcome::Terminal {
                score: board.score(roles),
            };
        }

        let maximizing = roles.is_maximizing(to_move);
        let mut best: Option<(Move, i32)> = None;

        for mv in board.empty_cells() {
            let score = {
                let mut tentative = Tentative::place(board, mv, to_move);
                self.search(tentative.board(), to_move.opponent(), roles).score()
            };

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        match best {
            Some((mv, score)) => SearchOutcome::Move { mv, score },
            // A non-terminal board always has an empty cell.
            None => SearchOutcome::Terminal {
                score: board.score(roles),
            },
        }
    }
}

/// Search the position with a fresh [`Searcher`].
///
/// The board is borrowed mutably for the duration of the call and is
/// cell-for-cell identical to its input when this returns.
#[instrument(level = "debug", skip(board), fields(empty = board.empty_cells().len()))]
pub fn search(board: &mut Board, to_move: Player, roles: Roles) -> SearchOutcome {
    let mut searcher = Searcher::new();
    let outcome = searcher.search(board, to_move, roles);
    debug!(nodes = searcher.nodes_visited(), ?outcome, "search complete");
    outcome
}

/// Minimax value of every legal move for `to_move`, in row-major order.
///
/// Returns an empty list for terminal positions.
pub fn evaluate_moves(board: &mut Board, to_move: Player, roles: Roles) -> Vec<(Move, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let mut searcher = Searcher::new();
    board
        .empty_cells()
        .into_iter()
        .map(|mv| {
            let mut tentative = Tentative::place(board, mv, to_move);
            let score = searcher
                .search(tentative.board(), to_move.opponent(), roles)
                .score();
            (mv, score)
        })
        .collect()
}
