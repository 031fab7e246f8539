use crate::QUIT_SIGNALS;
use crate::game::GameState;
use crate::game::Headline;
use crate::game::Move;
use crate::game::Winner;
use crate::judge::Judgment;
use colored::*;

const WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(WIDTH)
}

/// Welcome text shown before the first round.
pub struct Welcome;

impl std::fmt::Display for Welcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", rule())?;
        writeln!(f, "{}", "WELCOME TO ROCK-PAPER-SCISSORS-PLUS!".bold())?;
        writeln!(f, "{}", rule())?;
        writeln!(f)?;
        writeln!(f, "Rules:")?;
        writeln!(f, "- Valid moves: rock, paper, scissors, bomb")?;
        writeln!(f, "- Bomb beats everything but can only be used ONCE")?;
        writeln!(f, "- Type your move in natural language")?;
        writeln!(f, "- Type '{}' to exit", QUIT_SIGNALS.join("' or '"))
    }
}

/// Banner for a single judged round.
pub struct Outcome<'a> {
    pub round: usize,
    pub input: &'a str,
    pub bot_move: Move,
    pub judgment: &'a Judgment,
}

impl std::fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "{}", format!("ROUND {} RESULT", self.round).bold())?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "Your input: '{}'", self.input)?;
        writeln!(
            f,
            "Your move: {} ({})",
            self.judgment.interpretation.to_string().to_uppercase(),
            self.judgment.status
        )?;
        writeln!(f, "Bot's move: {}", self.bot_move.to_string().to_uppercase())?;
        writeln!(f, "Winner: {}", Headline(self.judgment.winner))?;
        writeln!(f, "Reason: {}", self.judgment.reason)?;
        write!(f, "{}", rule())
    }
}

/// Final results and round-by-round history.
pub struct Scoreboard<'a>(pub &'a GameState);

impl std::fmt::Display for Scoreboard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.0;
        writeln!(f)?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "{}", "FINAL GAME RESULTS".bold())?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "Total Rounds Played: {}", state.round_number())?;
        writeln!(f, "Your Score: {}", state.user_score())?;
        writeln!(f, "Bot Score: {}", state.bot_score())?;
        writeln!(f, "Draws: {}", state.draws())?;
        writeln!(f)?;
        match state.leader() {
            Winner::User => writeln!(f, "{}", "YOU WIN THE GAME!".green().bold())?,
            Winner::Bot => writeln!(f, "{}", "BOT WINS THE GAME!".red().bold())?,
            _ => writeln!(f, "{}", "IT'S A DRAW!".yellow().bold())?,
        }
        writeln!(f, "{}", rule())?;
        writeln!(f)?;
        write!(f, "ROUND-BY-ROUND HISTORY:")?;
        for record in state.history() {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
