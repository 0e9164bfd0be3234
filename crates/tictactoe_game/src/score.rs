//! Running tally of finished rounds.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Player;

/// Wins per player plus ties, across every round of a session.
///
/// Counts only ever grow; a restart starts a new round but keeps the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[display("X: {x}  O: {o}  Ties: {ties}")]
pub struct Score {
    x: u32,
    o: u32,
    ties: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total finished rounds.
    pub fn games_played(&self) -> u32 {
        self.x + self.o + self.ties
    }

    /// Credits a round to `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        debug!(%player, wins = *slot, "Win recorded");
    }

    /// Counts a tied round.
    #[instrument(skip(self))]
    pub fn record_tie(&mut self) {
        self.ties = self.ties.saturating_add(1);
        debug!(ties = self.ties, "Tie recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score_is_zero() {
        let score = Score::new();
        assert_eq!(score.wins(Player::X), 0);
        assert_eq!(score.wins(Player::O), 0);
        assert_eq!(score.ties(), 0);
        assert_eq!(score.games_played(), 0);
    }

    #[test]
    fn test_record_results() {
        let mut score = Score::new();
        score.record_win(Player::O);
        score.record_win(Player::O);
        score.record_tie();
        assert_eq!(score.wins(Player::X), 0);
        assert_eq!(score.wins(Player::O), 2);
        assert_eq!(score.ties(), 1);
        assert_eq!(score.games_played(), 3);
    }

    #[test]
    fn test_display() {
        let mut score = Score::new();
        score.record_win(Player::X);
        assert_eq!(score.to_string(), "X: 1  O: 0  Ties: 0");
    }
}
