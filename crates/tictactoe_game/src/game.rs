//! Game controller: owns the round state and the running score.
//!
//! Every state transition happens synchronously inside [`Game::click`]
//! or [`Game::restart`]. Outcome evaluation runs right after a mark is
//! placed, so the state never holds a decided board that is still
//! marked as in progress.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules::{self, Line, Win};
use crate::{Board, GameStatus, Player, Position, Score};

/// State of the current round.
///
/// `win` is `Some` iff a player completed a line, and `game_over` is set
/// iff the round is won or the board is full.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    win: Option<Win>,
}

impl GameState {
    /// Creates a fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next click places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// True once the round is won or tied.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The completed line, if someone won.
    pub fn winning_line(&self) -> Option<Line> {
        self.win.map(|win| win.line())
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.win.map(|win| win.player())
    }

    /// Derived phase of the round.
    pub fn status(&self) -> GameStatus {
        match (self.win, self.game_over) {
            (Some(win), _) => GameStatus::Won(win.player()),
            (None, true) => GameStatus::Tied,
            (None, false) => GameStatus::InProgress,
        }
    }
}

/// Why a click left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MoveRejection {
    /// The round is already decided.
    #[display("Game is already over")]
    GameOver,
    /// The cell already carries a mark.
    #[display("Cell is already marked")]
    Occupied,
    /// Index outside the 3x3 grid.
    #[display("Cell index out of range")]
    OutOfRange,
}

/// What a click did.
///
/// Rejected clicks are ordinary no-ops, reported here so callers can log
/// them; they are never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ClickOutcome {
    /// Nothing changed.
    #[display("Ignored: {_0}")]
    Ignored(MoveRejection),
    /// Mark placed and the turn passed to the opponent.
    #[display("{player} played {position}")]
    Placed {
        /// Player who moved.
        player: Player,
        /// Cell that was marked.
        position: Position,
    },
    /// The mark completed a line.
    #[display("{} wins", _0.player())]
    Won(Win),
    /// The mark filled the board without a line.
    #[display("Tie")]
    Tied,
}

impl ClickOutcome {
    /// Returns true if the click changed the board.
    pub fn changed_board(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }
}

/// Tic-tac-toe game session: current round plus score across rounds.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    score: Score,
}

impl Game {
    /// Creates a new session with a zeroed score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Derived phase of the current round.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Clicks the cell at a raw index (0-8).
    ///
    /// Indices outside the grid are ignored like any other invalid click.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        match Position::from_index(index) {
            Some(position) => self.click_position(position),
            None => {
                debug!(index, "Click outside the grid ignored");
                ClickOutcome::Ignored(MoveRejection::OutOfRange)
            }
        }
    }

    /// Clicks the cell at `position`.
    ///
    /// Places the current player's mark, then settles the round: a
    /// completed line wins, a full board ties, otherwise the turn passes.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn click_position(&mut self, position: Position) -> ClickOutcome {
        if self.state.game_over {
            debug!("Click after game over ignored");
            return ClickOutcome::Ignored(MoveRejection::GameOver);
        }

        let player = self.state.current_player;
        if !self.state.board.mark(position, player) {
            debug!("Click on marked cell ignored");
            return ClickOutcome::Ignored(MoveRejection::Occupied);
        }

        if let Some(win) = rules::check_winner(&self.state.board) {
            self.state.game_over = true;
            self.state.win = Some(win);
            self.score.record_win(win.player());
            info!(winner = %win.player(), line = ?win.indices(), "Game won");
            ClickOutcome::Won(win)
        } else if rules::is_full(&self.state.board) {
            self.state.game_over = true;
            self.state.win = None;
            self.score.record_tie();
            info!("Game tied");
            ClickOutcome::Tied
        } else {
            self.state.current_player = player.opponent();
            debug!(next = %self.state.current_player, "Turn passed");
            ClickOutcome::Placed { player, position }
        }
    }

    /// Starts a new round. The score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new();
        info!(score = %self.score, "Game restarted");
    }

    /// One-line status: the winner, a tie, or whose move is next.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Tied => "Tie game!".to_string(),
            GameStatus::InProgress => format!("Next move: {}", self.state.current_player),
        }
    }
}
