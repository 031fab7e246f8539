use super::generator::Generator;
use super::judgment::Judgment;
use crate::prompt::Prompt;
use anyhow::Context;

/// Referee for a game: sends each round's prompt to a [`Generator`]
/// and reads back a [`Judgment`]. One request per call, no retries.
pub struct Judge<G> {
    generator: G,
}

impl<G: Generator> Judge<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn judge(&self, prompt: &Prompt) -> anyhow::Result<Judgment> {
        let text = self
            .generator
            .generate(&prompt.to_string())
            .await
            .with_context(|| format!("judge call for round {}", prompt.round()))?;
        log::debug!("judge replied for round {}: {}", prompt.round(), text.trim());
        Judgment::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Interpretation;
    use crate::game::Move;
    use crate::game::Status;
    use crate::game::Winner;
    use crate::judge::canned::Canned;

    #[tokio::test]
    async fn passes_prompt_and_parses_reply() {
        let judge = Judge::new(Canned::new([Ok(
            "```json\n{\"move_interpreted\":\"paper\",\"move_status\":\"VALID\",\"round_winner\":\"draw\",\"reason\":\"Same move.\"}\n```",
        )]));
        let prompt = Prompt::new("flat hand", Move::Paper, false, 1);
        let judgment = judge.judge(&prompt).await.unwrap();
        assert_eq!(judgment.interpretation, Interpretation::Move(Move::Paper));
        assert_eq!(judgment.status, Status::Valid);
        assert_eq!(judgment.winner, Winner::Draw);
        assert_eq!(judge.generator().prompts.lock().unwrap()[0], prompt.to_string());
    }

    #[tokio::test]
    async fn service_failure_is_an_error() {
        let judge = Judge::new(Canned::new([Err("connection refused")]));
        let prompt = Prompt::new("rock", Move::Rock, false, 4);
        let err = judge.judge(&prompt).await.unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.contains("round 4"));
        assert!(text.contains("connection refused"));
    }

    #[tokio::test]
    async fn garbage_reply_is_an_error() {
        let judge = Judge::new(Canned::new([Ok("Sorry, I can't help with that.")]));
        let prompt = Prompt::new("rock", Move::Rock, false, 1);
        assert!(judge.judge(&prompt).await.is_err());
    }
}
