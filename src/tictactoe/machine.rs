//! The machine opponent

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

use super::{
    board::{Board, Move, Roles},
    search::search,
};

/// Perfect-play opponent.
///
/// Holds only the RNG used for its opening; all other moves come from an
/// exhaustive search of the board it is handed.
#[derive(Debug, Clone)]
pub struct MachinePlayer {
    rng: StdRng,
}

impl MachinePlayer {
    /// Create a machine player, optionally seeded for reproducible openings
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self { rng }
    }

    /// Choose the machine's next move without placing it.
    ///
    /// On an untouched board every cell is worth the same, so a cell is drawn
    /// uniformly at random instead of searching. Returns `None` once the
    /// position is terminal.
    pub fn pick_move(&mut self, board: &mut Board, roles: Roles) -> Option<Move> {
        if board.is_terminal() {
            return None;
        }

        if board.occupied_count() == 0 {
            let cells = board.empty_cells();
            let choice = cells.choose(&mut self.rng).copied();
            debug!(?choice, "random opening");
            return choice;
        }

        search(board, roles.machine, roles).best_move()
    }
}

impl Default for MachinePlayer {
    fn default() -> Self {
        Self::new(None)
    }
}
