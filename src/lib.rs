//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent evaluates positions with a game tree search over a generic
//! [`Position`](position::Position) contract, offered in a plain form and
//! an alpha-beta pruned form that computes the same value while visiting
//! fewer positions.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four_ai::{board::ArrayBoard, position::Player, search::solve};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = ArrayBoard::from_moves("445566")?;
//! let score = solve(&board, Player::One);
//!
//! assert!(score > 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod position;

pub mod search;

pub mod board;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const WIN_LENGTH: usize = 4;

// ensure that a winning line fits on the board in every direction
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
