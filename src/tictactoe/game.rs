//! High-level game management
//!
//! A [`Game`] owns the board for the whole session and enforces a strictly
//! alternating turn order: whoever opens, the other side always moves next.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{
    board::{Board, Move, Player, Roles},
    machine::MachinePlayer,
};
use crate::config::GameConfig;

/// Outcome of a position, derived from the board and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    HumanWin,
    MachineWin,
    Draw,
    InProgress,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// A game between a human and the machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    roles: Roles,
    to_move: Player,
    history: Vec<(Player, Move)>,
}

impl Game {
    /// Start a game on an empty board
    #[instrument(level = "info")]
    pub fn new(config: &GameConfig) -> Self {
        info!("starting game");
        Game {
            board: Board::empty(),
            roles: config.roles(),
            to_move: config.first_player(),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Mark whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Whether the human is the side to move
    pub fn is_human_turn(&self) -> bool {
        self.to_move == self.roles.human
    }

    /// Moves played so far, in order
    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome(self.roles)
    }

    /// Cells the side to move may play; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.board.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Commit the human's move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after the game has ended,
    /// [`crate::Error::NotYourTurn`] when the machine is to move, and
    /// [`crate::Error::IllegalMove`] for an occupied cell. The board is
    /// unchanged in every error case.
    pub fn play_human(&mut self, mv: Move) -> crate::Result<()> {
        self.ensure_turn(self.roles.human)?;
        if !self.board.apply_move(mv, self.roles.human) {
            debug!(%mv, "rejected move on occupied cell");
            return Err(crate::Error::IllegalMove {
                row: mv.row(),
                col: mv.col(),
            });
        }
        self.record(self.roles.human, mv);
        Ok(())
    }

    /// Let the machine choose and commit its move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after the game has ended and
    /// [`crate::Error::NotYourTurn`] when the human is to move.
    pub fn play_machine(&mut self, machine: &mut MachinePlayer) -> crate::Result<Move> {
        self.ensure_turn(self.roles.machine)?;
        let mv = machine
            .pick_move(&mut self.board, self.roles)
            .ok_or(crate::Error::NoValidMoves)?;
        if !self.board.apply_move(mv, self.roles.machine) {
            return Err(crate::Error::IllegalMove {
                row: mv.row(),
                col: mv.col(),
            });
        }
        info!(%mv, number = mv.number(), "machine moved");
        self.record(self.roles.machine, mv);
        Ok(mv)
    }

    fn ensure_turn(&self, player: Player) -> crate::Result<()> {
        if self.board.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != player {
            return Err(crate::Error::NotYourTurn { player });
        }
        Ok(())
    }

    fn record(&mut self, player: Player, mv: Move) {
        self.history.push((player, mv));
        self.to_move = player.opponent();
        let outcome = self.outcome();
        if outcome.is_over() {
            info!(?outcome, moves = self.history.len(), "game finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(&GameConfig::default());
        assert_eq!(game.to_move(), Player::X);
        assert!(game.is_human_turn());
        assert_eq!(game.legal_moves().len(), 9);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(&GameConfig::default().with_seed(3));
        let mut machine = MachinePlayer::new(Some(3));

        game.play_human(mv(1, 1)).unwrap();
        assert!(!game.is_human_turn());
        assert!(matches!(
            game.play_human(mv(0, 0)),
            Err(crate::Error::NotYourTurn { player: Player::X })
        ));

        game.play_machine(&mut machine).unwrap();
        assert!(game.is_human_turn());
        assert!(matches!(
            game.play_machine(&mut machine),
            Err(crate::Error::NotYourTurn { player: Player::O })
        ));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let config = GameConfig::default().with_human_first(false).with_seed(9);
        let mut game = Game::new(&config);
        let mut machine = MachinePlayer::new(config.seed);

        let opening = game.play_machine(&mut machine).unwrap();
        let before = *game.board();
        assert!(matches!(
            game.play_human(opening),
            Err(crate::Error::IllegalMove { .. })
        ));
        assert_eq!(*game.board(), before);
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new(&GameConfig::default());
        let mut machine = MachinePlayer::new(Some(0));

        // The human plays the first free cell each turn and cannot win.
        while !game.outcome().is_over() {
            if game.is_human_turn() {
                let first = game.legal_moves()[0];
                game.play_human(first).unwrap();
            } else {
                game.play_machine(&mut machine).unwrap();
            }
        }

        assert_ne!(game.outcome(), GameOutcome::HumanWin);
        assert!(game.legal_moves().is_empty());
        assert!(matches!(
            game.play_machine(&mut machine),
            Err(crate::Error::GameOver)
        ));
        assert!(matches!(
            game.play_human(mv(0, 0)),
            Err(crate::Error::GameOver)
        ));
    }
}
