//! Noughts and crosses against a perfect opponent
//!
//! This crate provides:
//! - The 3x3 board model with line detection and terminal scoring
//! - Exhaustive minimax search that never loses
//! - A strictly alternating human-versus-machine game
//! - The command-line shell used by the `noughts` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod tictactoe;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use tictactoe::{
    Board, Game, GameOutcome, MachinePlayer, Move, Player, Roles, SearchOutcome, search,
};
