//! Property-based tests for the rules evaluator and game controller.

use proptest::prelude::*;
use tictactoe_game::rules::{self, LINES};
use tictactoe_game::{Board, Cell, ClickOutcome, Game, GameStatus, Player, Position};

// =============================================================================
// Strategies
// =============================================================================

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Marked(Player::X)),
        Just(Cell::Marked(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

/// Click sequences, including indices outside the grid.
fn arb_clicks() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..12, 0..24)
}

// =============================================================================
// Helpers
// =============================================================================

fn board_from_code(mut code: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in cells.iter_mut() {
        *cell = match code % 3 {
            0 => Cell::Empty,
            1 => Cell::Marked(Player::X),
            _ => Cell::Marked(Player::O),
        };
        code /= 3;
    }
    Board::from_cells(cells)
}

fn first_complete_line(board: &Board) -> Option<(Player, [usize; 3])> {
    LINES.iter().find_map(|line| {
        let marks = line.map(|pos| board.get(pos).mark());
        match marks {
            [Some(a), Some(b), Some(c)] if a == b && b == c => {
                Some((a, line.map(Position::to_index)))
            }
            _ => None,
        }
    })
}

// =============================================================================
// Exhaustive checks (3^9 boards)
// =============================================================================

#[test]
fn evaluator_agrees_with_first_complete_line_on_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let found = rules::check_winner(&board).map(|win| (win.player(), win.indices()));
        assert_eq!(found, first_complete_line(&board), "board:\n{}", board);
    }
}

#[test]
fn full_boards_without_line_have_no_winner() {
    let mut draws = 0;
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        if !board.is_full() || first_complete_line(&board).is_some() {
            continue;
        }
        draws += 1;
        assert_eq!(rules::check_winner(&board), None);
        assert!(rules::is_draw(&board));
        assert_eq!(rules::evaluate(&board), GameStatus::Tied);
    }
    assert!(draws > 0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn lone_line_is_reported_exactly(line_index in 0usize..8, player in arb_player()) {
        let line = LINES[line_index];
        let mut board = Board::new();
        for pos in line {
            board.mark(pos, player);
        }
        let win = rules::check_winner(&board).expect("line should win");
        prop_assert_eq!(win.player(), player);
        prop_assert_eq!(win.line(), line);
    }

    #[test]
    fn completed_line_always_detected(
        board in arb_board(),
        line_index in 0usize..8,
        player in arb_player(),
    ) {
        let mut cells = *board.cells();
        for pos in LINES[line_index] {
            cells[pos.to_index()] = Cell::Marked(player);
        }
        let board = Board::from_cells(cells);

        let win = rules::check_winner(&board).expect("forced line should be found");
        for pos in win.line() {
            prop_assert_eq!(board.get(pos), Cell::Marked(win.player()));
        }
        prop_assert!(LINES.iter().position(|l| *l == win.line()).unwrap() <= line_index);
    }

    #[test]
    fn controller_invariants_hold(clicks in arb_clicks()) {
        let mut game = Game::new();
        let mut finished = 0;

        for index in clicks {
            let before = game.state().clone();
            let score_before = *game.score();
            let outcome = game.click(index);
            let state = game.state();

            if before.game_over() || !matches!(before.board().cell(index), Some(Cell::Empty)) {
                prop_assert!(!outcome.changed_board());
                prop_assert_eq!(state, &before);
                prop_assert_eq!(game.score(), &score_before);
                continue;
            }

            // Cells are write-once.
            for (old, new) in before.board().cells().iter().zip(state.board().cells()) {
                if !old.is_empty() {
                    prop_assert_eq!(old, new);
                }
            }
            prop_assert_eq!(state.board().marks_placed(), before.board().marks_placed() + 1);

            match outcome {
                ClickOutcome::Won(_) | ClickOutcome::Tied => finished += 1,
                _ => {}
            }

            // Exactly one of won / tied / in progress.
            let winner = rules::check_winner(state.board());
            match game.status() {
                GameStatus::Won(player) => {
                    prop_assert_eq!(winner.map(|w| w.player()), Some(player));
                    prop_assert_eq!(state.winning_line(), winner.map(|w| w.line()));
                    prop_assert!(state.game_over());
                }
                GameStatus::Tied => {
                    prop_assert!(winner.is_none());
                    prop_assert!(state.board().is_full());
                    prop_assert!(state.winning_line().is_none());
                    prop_assert!(state.game_over());
                }
                GameStatus::InProgress => {
                    prop_assert!(winner.is_none());
                    prop_assert!(!state.board().is_full());
                    prop_assert!(!state.game_over());
                    prop_assert_eq!(state.current_player(), before.current_player().opponent());
                }
            }
            prop_assert_eq!(game.score().games_played(), finished);
        }
    }

    #[test]
    fn restart_resets_round_and_keeps_score(clicks in arb_clicks()) {
        let mut game = Game::new();
        for index in clicks {
            game.click(index);
        }
        let score = *game.score();

        game.restart();

        prop_assert_eq!(game.state().board(), &Board::new());
        prop_assert_eq!(game.state().current_player(), Player::X);
        prop_assert!(!game.state().game_over());
        prop_assert!(game.state().winning_line().is_none());
        prop_assert_eq!(game.score(), &score);
    }
}
