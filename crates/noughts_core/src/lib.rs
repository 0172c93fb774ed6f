//! Noughts and crosses game logic.
//!
//! The crate is a small synchronous state machine over a 3x3 grid:
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`], [`GameStatus`]
//! - **Rules**: pure win and draw detection over a [`Board`] ([`rules`])
//! - **State**: [`GameState`] enforces move legality and tracks the outcome
//! - **Session**: [`Session`] wraps a game and publishes [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, GameStatus, Player, Position};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4] {
//!     game.apply_move(Position::try_from(index)?)?;
//! }
//! assert_eq!(game.apply_move(Position::TopRight)?, GameStatus::Won(Player::O));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use position::{Position, PositionError};
pub use rules::win::WIN_PATTERNS;
pub use session::{GameEvent, Session, Subscriber};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity where a player is used as the mark on a square.
pub type Mark = Player;
