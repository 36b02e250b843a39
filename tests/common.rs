//! Common test utilities for the noughts test suite.
//!
//! Position enumeration shared by the property tests.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::tictactoe::{Board, Move, Player};

/// Build a board from a compact string, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Shorthand for a move that is known to be on the board.
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("coordinates on the board")
}

/// Every distinct position reachable from an empty board when `first` opens
/// and turns alternate, paired with the side to move. Play stops at terminal
/// positions, which are included.
pub fn reachable_positions(first: Player) -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    let mut stack = vec![(Board::empty(), first)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        positions.push((board, to_move));
        if board.is_terminal() {
            continue;
        }
        for cell in board.empty_cells() {
            let mut next = board;
            assert!(next.apply_move(cell, to_move));
            stack.push((next, to_move.opponent()));
        }
    }

    positions
}
