use crate::game::GameState;
use crate::game::Interpretation;
use crate::game::Move;
use crate::game::Status;
use crate::game::Winner;
use anyhow::Context;
use serde::Deserialize;

/// The judge's ruling on one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub interpretation: Interpretation,
    pub status: Status,
    pub winner: Winner,
    pub reason: String,
}

/// Wire shape of the judge's JSON. Only these keys matter; any others
/// (`round_number`, `user_input`, `bot_move`) are ignored.
#[derive(Deserialize)]
struct Verdict {
    #[serde(default)]
    move_interpreted: Option<String>,
    #[serde(default)]
    move_status: Option<String>,
    #[serde(default)]
    round_winner: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

impl From<Verdict> for Judgment {
    fn from(verdict: Verdict) -> Self {
        Self {
            interpretation: verdict
                .move_interpreted
                .as_deref()
                .map(Interpretation::from)
                .unwrap_or(Interpretation::Invalid),
            status: verdict
                .move_status
                .as_deref()
                .map(Status::from)
                .unwrap_or(Status::Invalid),
            winner: verdict
                .round_winner
                .as_deref()
                .map(Winner::from)
                .unwrap_or(Winner::None),
            reason: verdict
                .reason
                .unwrap_or_else(|| String::from("No reason provided")),
        }
    }
}

impl Judgment {
    /// Parse the judge's reply. Tolerates a ``` fence with an optional
    /// language tag and fills documented defaults for missing keys.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<Verdict>(unfence(text))
            .map(Self::from)
            .with_context(|| format!("unparseable judgment: {}", text.trim()))
    }

    /// Hold the ruling to the rules we can check locally.
    ///
    /// A second user bomb is overruled as invalid, a non-move can't be
    /// valid, and only valid moves can win, lose, or draw. A winner that
    /// disagrees with the rule table is reported but left standing.
    pub fn reconcile(mut self, state: &GameState, bot_move: Move) -> Self {
        match (self.status, self.interpretation) {
            (Status::Valid, Interpretation::Move(Move::Bomb)) if state.bomb_used_by_user() => {
                log::warn!("judge accepted a second user bomb, overruling");
                self.status = Status::Invalid;
                self.reason = String::from(
                    "Bomb was already used this game, so this move is invalid and the turn is wasted.",
                );
            }
            (Status::Valid, Interpretation::Unclear) => self.status = Status::Unclear,
            (Status::Valid, Interpretation::Invalid) => self.status = Status::Invalid,
            _ => {}
        }
        if !self.status.is_valid() && self.winner != Winner::None {
            log::warn!("judge named a winner for a {} move, clearing it", self.status);
            self.winner = Winner::None;
        }
        if let Some(user_move) = self.interpretation.played().filter(|_| self.status.is_valid()) {
            let expected = user_move.versus(&bot_move);
            if expected != self.winner {
                log::warn!(
                    "judge ruled {} for {} vs {}, rule table says {}",
                    self.winner,
                    user_move,
                    bot_move,
                    expected
                );
            }
        }
        self
    }

    /// Whether this ruling spends the user's bomb.
    pub fn spends_bomb(&self) -> bool {
        self.status.is_valid() && self.interpretation == Interpretation::Move(Move::Bomb)
    }
}

/// Strip a surrounding ``` fence and its language tag, if present.
fn unfence(text: &str) -> &str {
    let text = text.trim();
    match text.strip_prefix("```") {
        None => text,
        Some(rest) => rest
            .split("```")
            .next()
            .unwrap_or(rest)
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            .trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = r#"{
        "round_number": 1,
        "user_input": "I throw a rock",
        "move_interpreted": "rock",
        "move_status": "VALID",
        "bot_move": "scissors",
        "round_winner": "user",
        "reason": "Rock beats scissors."
    }"#;

    fn rock_wins() -> Judgment {
        Judgment {
            interpretation: Interpretation::Move(Move::Rock),
            status: Status::Valid,
            winner: Winner::User,
            reason: String::from("Rock beats scissors."),
        }
    }

    #[test]
    fn plain_json() {
        assert_eq!(Judgment::parse(PLAIN).unwrap(), rock_wins());
    }

    #[test]
    fn fenced_with_language_tag() {
        let fenced = format!("```json\n{}\n```", PLAIN);
        assert_eq!(Judgment::parse(&fenced).unwrap(), rock_wins());
    }

    #[test]
    fn fenced_without_language_tag() {
        let fenced = format!("\n  ```\n{}\n```  \n", PLAIN);
        assert_eq!(Judgment::parse(&fenced).unwrap(), rock_wins());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let judgment = Judgment::parse(r#"{"round_number": 2}"#).unwrap();
        assert_eq!(judgment.interpretation, Interpretation::Invalid);
        assert_eq!(judgment.status, Status::Invalid);
        assert_eq!(judgment.winner, Winner::None);
        assert_eq!(judgment.reason, "No reason provided");
    }

    #[test]
    fn some_keys_missing() {
        let judgment = Judgment::parse(r#"{"move_interpreted": "paper", "move_status": "VALID"}"#)
            .unwrap();
        assert_eq!(judgment.interpretation, Interpretation::Move(Move::Paper));
        assert_eq!(judgment.status, Status::Valid);
        assert_eq!(judgment.winner, Winner::None);
        assert_eq!(judgment.reason, "No reason provided");
    }

    #[test]
    fn prose_is_an_error() {
        let err = Judgment::parse("I think the user played rock.").unwrap_err();
        assert!(format!("{:#}", err).contains("I think the user played rock."));
    }

    #[test]
    fn non_object_is_an_error() {
        assert!(Judgment::parse("[1, 2, 3]").is_err());
        assert!(Judgment::parse("").is_err());
        assert!(Judgment::parse("```json\n```").is_err());
    }

    #[test]
    fn second_bomb_is_overruled() {
        let ref mut state = GameState::default();
        state.mark_special_used_by_user();
        let judgment = Judgment {
            interpretation: Interpretation::Move(Move::Bomb),
            status: Status::Valid,
            winner: Winner::User,
            reason: String::from("Bomb beats rock."),
        }
        .reconcile(state, Move::Rock);
        assert_eq!(judgment.status, Status::Invalid);
        assert_eq!(judgment.winner, Winner::None);
        assert!(!judgment.spends_bomb());
    }

    #[test]
    fn first_bomb_stands() {
        let state = GameState::default();
        let judgment = Judgment {
            interpretation: Interpretation::Move(Move::Bomb),
            status: Status::Valid,
            winner: Winner::User,
            reason: String::from("Bomb beats paper."),
        }
        .reconcile(&state, Move::Paper);
        assert_eq!(judgment.status, Status::Valid);
        assert_eq!(judgment.winner, Winner::User);
        assert!(judgment.spends_bomb());
    }

    #[test]
    fn unclear_never_wins() {
        let state = GameState::default();
        let judgment = Judgment {
            interpretation: Interpretation::Unclear,
            status: Status::Valid,
            winner: Winner::Bot,
            reason: String::from("?"),
        }
        .reconcile(&state, Move::Paper);
        assert_eq!(judgment.status, Status::Unclear);
        assert_eq!(judgment.winner, Winner::None);
    }

    #[test]
    fn disputed_winner_stands() {
        let state = GameState::default();
        let judgment = Judgment {
            interpretation: Interpretation::Move(Move::Rock),
            status: Status::Valid,
            winner: Winner::Bot,
            reason: String::from("The bot was faster."),
        }
        .reconcile(&state, Move::Scissors);
        assert_eq!(judgment.winner, Winner::Bot);
    }
}
