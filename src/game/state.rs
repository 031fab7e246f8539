use super::moves::Interpretation;
use super::moves::Move;
use super::record::Record;
use super::winner::Winner;

/// Everything the game remembers between rounds.
///
/// Counters only move through [`GameState::record_round`], so
/// `user_score + bot_score + draws + wasted == round_number == history().len()`
/// holds after every call. A round with no winner still uses up its turn.
/// Bomb flags only ever go from false to true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    round_number: usize,
    bomb_used_by_user: bool,
    bomb_used_by_bot: bool,
    user_score: usize,
    bot_score: usize,
    draws: usize,
    wasted: usize,
    history: Vec<Record>,
}

impl GameState {
    pub fn round_number(&self) -> usize {
        self.round_number
    }
    pub fn upcoming_round(&self) -> usize {
        self.round_number + 1
    }
    pub fn bomb_used_by_user(&self) -> bool {
        self.bomb_used_by_user
    }
    pub fn bomb_used_by_bot(&self) -> bool {
        self.bomb_used_by_bot
    }
    pub fn user_score(&self) -> usize {
        self.user_score
    }
    pub fn bot_score(&self) -> usize {
        self.bot_score
    }
    pub fn draws(&self) -> usize {
        self.draws
    }
    /// Rounds judged with no winner (unclear or invalid moves).
    pub fn wasted(&self) -> usize {
        self.wasted
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// Overall result so far. Equal scores are a draw.
    pub fn leader(&self) -> Winner {
        match self.user_score.cmp(&self.bot_score) {
            std::cmp::Ordering::Greater => Winner::User,
            std::cmp::Ordering::Less => Winner::Bot,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

impl GameState {
    pub fn record_round(
        &mut self,
        user_move: Interpretation,
        bot_move: Move,
        winner: Winner,
        reason: String,
    ) {
        self.round_number += 1;
        self.history.push(Record {
            round: self.round_number,
            user_move,
            bot_move,
            winner,
            reason,
        });
        match winner {
            Winner::User => self.user_score += 1,
            Winner::Bot => self.bot_score += 1,
            Winner::Draw => self.draws += 1,
            Winner::None => self.wasted += 1,
        }
    }

    pub fn mark_special_used_by_user(&mut self) {
        self.bomb_used_by_user = true;
    }

    pub fn mark_special_used_by_bot(&mut self) {
        self.bomb_used_by_bot = true;
    }
}
