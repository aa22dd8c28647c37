//! Match configuration, loadable from TOML.
//!
//! ```toml
//! num_games = 20
//! alternate_colors = true
//!
//! [limits]
//! max_depth = 4
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use ttt_core::SearchLimits;

use crate::error::TournamentError;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search limits handed to both engines
    pub limits: SearchLimits,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            limits: SearchLimits::unlimited(),
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }
}
