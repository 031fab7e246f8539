use super::display::Outcome;
use super::display::Scoreboard;
use super::display::Welcome;
use crate::QUIT_SIGNALS;
use crate::game::GameState;
use crate::judge::Generator;
use crate::judge::Judge;
use crate::players::Robot;
use crate::players::Source;
use crate::prompt::Prompt;
use rand::Rng;
use rand::rngs::SmallRng;

/// Runs one game: reads the player's move, draws the bot's, asks the
/// judge, records the round, and prints the final results.
///
/// Rounds only advance on a judged move. Empty input and judge failures
/// ask again for the same round; a quit signal or exhausted input ends
/// the game early.
pub struct Room<G, S, R = SmallRng> {
    judge: Judge<G>,
    source: S,
    robot: Robot<R>,
    rounds: usize,
    state: GameState,
}

impl<G, S, R> Room<G, S, R>
where
    G: Generator,
    S: Source,
    R: Rng,
{
    pub fn new(judge: Judge<G>, source: S, robot: Robot<R>, rounds: usize) -> Self {
        Self {
            judge,
            source,
            robot,
            rounds,
            state: GameState::default(),
        }
    }

    pub async fn play(mut self) -> anyhow::Result<GameState> {
        println!("{}", Welcome);
        while self.state.round_number() < self.rounds {
            println!(
                "\n--- Round {} of {} ---",
                self.state.upcoming_round(),
                self.rounds
            );
            let Some(line) = self.source.read("Your move")? else {
                println!("Game ended early.");
                break;
            };
            let input = line.trim();
            if Self::is_quit(input) {
                println!("Game ended early.");
                break;
            }
            if input.is_empty() {
                println!("Empty input! Please enter a move.");
                continue;
            }
            self.next_round(input).await;
        }
        log::info!(
            "game over after {} rounds ({}-{}, {} draws)",
            self.state.round_number(),
            self.state.user_score(),
            self.state.bot_score(),
            self.state.draws()
        );
        println!("{}", Scoreboard(&self.state));
        Ok(self.state)
    }
}

impl<G, S, R> Room<G, S, R>
where
    G: Generator,
    S: Source,
    R: Rng,
{
    async fn next_round(&mut self, input: &str) {
        let bot_move = self.robot.choose(&mut self.state);
        let prompt = Prompt::from((input, bot_move, &self.state));
        let judgment = match self.judge.judge(&prompt).await {
            Ok(judgment) => judgment.reconcile(&self.state, bot_move),
            Err(e) => {
                log::warn!("round {} skipped: {:#}", prompt.round(), e);
                println!("Error calling AI Judge: {:#}", e);
                println!("Error getting judgment. Skipping round.");
                return;
            }
        };
        if judgment.spends_bomb() {
            self.state.mark_special_used_by_user();
        }
        self.state.record_round(
            judgment.interpretation,
            bot_move,
            judgment.winner,
            judgment.reason.clone(),
        );
        println!(
            "{}",
            Outcome {
                round: self.state.round_number(),
                input,
                bot_move,
                judgment: &judgment,
            }
        );
    }

    fn is_quit(input: &str) -> bool {
        QUIT_SIGNALS.iter().any(|q| input.eq_ignore_ascii_case(q))
    }
}
