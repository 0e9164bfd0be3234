//! Scenario tests for the game controller.

use tictactoe_game::{
    Cell, ClickOutcome, Game, GameStatus, MoveRejection, Player, Position,
};

fn play(game: &mut Game, indices: &[usize]) -> Vec<ClickOutcome> {
    indices.iter().map(|&index| game.click(index)).collect()
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[0, 4, 1, 5, 2]);

    assert!(matches!(outcomes.last(), Some(ClickOutcome::Won(_))));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(game.state().game_over());
    assert_eq!(
        game.state()
            .winning_line()
            .map(|line| line.map(Position::to_index)),
        Some([0, 1, 2])
    );
    assert_eq!(game.score().wins(Player::X), 1);
    assert_eq!(game.score().wins(Player::O), 0);
    assert_eq!(game.score().ties(), 0);
}

#[test]
fn test_full_board_tie() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(outcomes.last(), Some(&ClickOutcome::Tied));
    let expected = [
        Player::X,
        Player::O,
        Player::X,
        Player::X,
        Player::O,
        Player::O,
        Player::O,
        Player::X,
        Player::X,
    ];
    for (index, player) in expected.into_iter().enumerate() {
        assert_eq!(game.state().board().cell(index), Some(Cell::Marked(player)));
    }
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.status_text(), "Tie game!");
    assert_eq!(game.state().winning_line(), None);
    assert_eq!(game.score().ties(), 1);
    assert_eq!(game.score().games_played(), 1);
}

#[test]
fn test_same_cell_twice() {
    let mut game = Game::new();
    game.click(4);
    let board = game.state().board().clone();

    assert_eq!(
        game.click(4),
        ClickOutcome::Ignored(MoveRejection::Occupied)
    );
    assert_eq!(game.state().board(), &board);
    assert_eq!(game.state().current_player(), Player::O);
}

#[test]
fn test_clicks_after_game_over_ignored() {
    let mut game = Game::new();
    play(&mut game, &[0, 4, 1, 5, 2]);
    let state = game.state().clone();
    let score = *game.score();

    for index in 0..9 {
        assert_eq!(
            game.click(index),
            ClickOutcome::Ignored(MoveRejection::GameOver)
        );
    }
    assert_eq!(game.state(), &state);
    assert_eq!(game.score(), &score);
}

#[test]
fn test_restart_keeps_score() {
    let mut game = Game::new();
    play(&mut game, &[0, 4, 1, 5, 2]);
    let score = *game.score();

    game.restart();

    assert!(game.state().board().cells().iter().all(|cell| cell.is_empty()));
    assert_eq!(game.state().current_player(), Player::X);
    assert!(!game.state().game_over());
    assert_eq!(game.state().winning_line(), None);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.score(), &score);
}

#[test]
fn test_restart_mid_round() {
    let mut game = Game::new();
    play(&mut game, &[0, 4]);
    game.restart();

    assert_eq!(game.state().board().marks_placed(), 0);
    assert_eq!(game.state().current_player(), Player::X);
    assert_eq!(game.score().games_played(), 0);
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut game = Game::new();

    // X wins the top row.
    play(&mut game, &[0, 4, 1, 5, 2]);
    game.restart();

    // O wins the left column.
    play(&mut game, &[1, 0, 2, 3, 4, 6]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    game.restart();

    // Tie.
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.score().wins(Player::X), 1);
    assert_eq!(game.score().wins(Player::O), 1);
    assert_eq!(game.score().ties(), 1);
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    let mut game = Game::new();
    // X closes the 2-4-6 diagonal with the ninth mark.
    let outcomes = play(&mut game, &[0, 1, 2, 3, 5, 7, 6, 8, 4]);

    assert!(game.state().board().is_full());
    assert!(matches!(outcomes.last(), Some(ClickOutcome::Won(win)) if win.indices() == [2, 4, 6]));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.score().wins(Player::X), 1);
    assert_eq!(game.score().ties(), 0);
}
