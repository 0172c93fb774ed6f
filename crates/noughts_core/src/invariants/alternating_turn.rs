//! Alternating turn invariant: O, X, O, X, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate, starting with O.
///
/// The history must read O, X, O, ... and the player to move must be the
/// one the history length implies.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::FIRST
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::FIRST
        } else {
            Player::FIRST.opponent()
        };

        game.turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_sequence_holds() {
        let mut game = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.apply_move(pos).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.history.push(Move::new(Player::O, Position::TopLeft));
        game.history.push(Move::new(Player::O, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_x_first_violates() {
        let mut game = GameState::new();
        game.history.push(Move::new(Player::X, Position::TopLeft));
        game.turn = Player::O;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        game.turn = Player::O;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
