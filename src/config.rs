//! Game configuration.
//!
//! A [`GameConfig`] can be built in code, loaded from a JSON file and then
//! overridden field by field (the command line does this with its flags).
//!
//! # Examples
//!
//! ```
//! use noughts::config::GameConfig;
//! use noughts::tictactoe::Player;
//!
//! let config = GameConfig::default()
//!     .with_human(Player::O)
//!     .with_human_first(false)
//!     .with_seed(42);
//! assert_eq!(config.roles().machine, Player::X);
//! assert_eq!(config.first_player(), Player::X);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Player, Roles};

/// Settings for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mark played by the human
    pub human: Player,
    /// Whether the human makes the first move
    pub human_first: bool,
    /// Random seed for the machine's opening
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            human_first: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the human's mark.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Set who moves first.
    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn roles(&self) -> Roles {
        Roles::new(self.human)
    }

    /// The mark that opens the game
    pub fn first_player(&self) -> Player {
        if self.human_first {
            self.human
        } else {
            self.human.opponent()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| crate::Error::Io {
            operation: format!("write config file {}", path.display()),
            source,
        })
    }
}
