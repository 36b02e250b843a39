//! Terminal front end for the `noughts` binary
//!
//! Everything here is I/O: prompting, parsing typed-in text and printing the
//! board. Game rules and search live in [`crate::tictactoe`].

pub mod commands;
pub mod output;
