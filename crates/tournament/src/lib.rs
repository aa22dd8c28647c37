//! Tournament Runner for tic-tac-toe engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines
//! - Loading match settings from TOML
//! - Saving results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Minimax against the random baseline
//! cargo run -p tournament -- match minimax random --games 100
//!
//! # Score every move of a position
//! cargo run -p tournament -- analyze "xx./oo./..."
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::TournamentError;
pub use match_runner::*;
pub use results::*;
