use super::moves::Interpretation;
use super::moves::Move;
use super::winner::Winner;

/// One completed round as it appears in the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub round: usize,
    pub user_move: Interpretation,
    pub bot_move: Move,
    pub winner: Winner,
    pub reason: String,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: {} vs {} → {}",
            self.round, self.user_move, self.bot_move, self.winner
        )
    }
}
