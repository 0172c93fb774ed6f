//! A game plus the observers watching it.
//!
//! Presentation code drives a [`Session`] through plain method calls and
//! learns about state changes by subscribing, instead of the game reaching
//! out to any particular UI.

use super::{GameState, GameStatus, Move, MoveError, Position};
use tracing::{debug, instrument};

/// State change published by a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was accepted.
    MoveApplied {
        /// The move, including the player who made it.
        mv: Move,
        /// Status after the move.
        status: GameStatus,
    },
    /// The board was cleared for a new game.
    Reset,
}

/// Receives [`GameEvent`]s from a [`Session`].
pub trait Subscriber {
    /// Called once per event, in the order events occur.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> Subscriber for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Owns one [`GameState`] and notifies subscribers of every change.
#[derive(Default)]
pub struct Session {
    state: GameState,
    subscribers: Vec<Box<dyn Subscriber + Send>>,
}

impl Session {
    /// Creates a session around a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber. Subscribers are notified in registration order.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
        debug!(count = self.subscribers.len(), "Subscriber added");
    }

    /// Applies a move and publishes [`GameEvent::MoveApplied`] on success.
    ///
    /// Rejected moves publish nothing.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        let player = self.state.turn();
        let status = self.state.apply_move(position)?;
        self.publish(GameEvent::MoveApplied {
            mv: Move::new(player, position),
            status,
        });
        Ok(status)
    }

    /// Resets the game and publishes [`GameEvent::Reset`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.publish(GameEvent::Reset);
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// The underlying game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn publish(&mut self, event: GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber.notify(&event);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
