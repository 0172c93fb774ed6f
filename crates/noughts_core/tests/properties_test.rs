//! Property tests over random move sequences.

use noughts_core::{
    GameState, GameStatus, MoveError, Player, Position, Session, Square, WIN_PATTERNS,
    rules,
};
use proptest::prelude::*;

/// Any ordering of the nine squares; games stop early when won.
fn square_orders() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

fn line_owner(game: &GameState, player: Player) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|p| game.board().get(*p) == Square::Occupied(player)))
}

proptest! {
    #[test]
    fn turns_alternate_from_o(order in square_orders()) {
        let mut game = GameState::new();
        let mut expected = Player::O;
        for i in order {
            prop_assert_eq!(game.turn(), expected);
            if game.apply_move(Position::ALL[i]).is_err() {
                break;
            }
            prop_assert_eq!(game.history().last().map(|m| m.player), Some(expected));
            expected = expected.opponent();
        }
    }

    #[test]
    fn win_fires_exactly_on_completion(order in square_orders()) {
        let mut game = GameState::new();
        for i in order {
            let before = rules::check_winner(game.board());
            match game.apply_move(Position::ALL[i]) {
                Ok(GameStatus::Won(player)) => {
                    prop_assert!(line_owner(&game, player));
                    prop_assert_eq!(before, None);
                }
                Ok(_) => prop_assert_eq!(rules::check_winner(game.board()), None),
                Err(err) => {
                    prop_assert_eq!(err, MoveError::GameOver);
                    prop_assert!(game.status().is_over());
                }
            }
        }
    }

    #[test]
    fn full_board_without_line_is_draw(order in square_orders()) {
        let mut game = GameState::new();
        for i in order {
            let _ = game.apply_move(Position::ALL[i]);
        }
        let any_line = line_owner(&game, Player::O) || line_owner(&game, Player::X);
        if game.board().is_full() && !any_line {
            prop_assert_eq!(game.status(), GameStatus::Draw);
        }
        // Every shuffled game finishes one way or the other
        prop_assert!(game.status().is_over());
    }

    #[test]
    fn reset_always_restores_a_fresh_game(order in square_orders(), stop in 0usize..=9) {
        let mut game = GameState::new();
        for i in order.into_iter().take(stop) {
            let _ = game.apply_move(Position::ALL[i]);
        }
        game.reset();
        prop_assert_eq!(game.status(), GameStatus::InProgress);
        prop_assert_eq!(game.turn(), Player::O);
        prop_assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        prop_assert!(game.history().is_empty());
    }

    #[test]
    fn status_is_stable_between_moves(order in square_orders(), stop in 0usize..=9) {
        let mut session = Session::new();
        for i in order.into_iter().take(stop) {
            let _ = session.apply_move(Position::ALL[i]);
        }
        let status = session.status();
        prop_assert_eq!(session.status(), status);
        prop_assert_eq!(session.state().status(), status);
    }
}
