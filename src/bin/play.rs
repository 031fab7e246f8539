//! Rock-Paper-Scissors-Plus Binary
//!
//! Plays one game against the bot in the terminal, refereed by Gemini.
//!
//! Reads GEMINI_API_KEY (and optionally GEMINI_MODEL, JUDGE_TIMEOUT)
//! from the environment or a `.env` file.

use rpsplus::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    log()?;
    let config = judge::Config::from_env();
    log::info!("starting game with {:?}", config);
    let judge = judge::Judge::new(judge::Gemini::new(config)?);
    let robot: players::Robot = players::Robot::default();
    gameroom::Room::new(judge, players::Terminal, robot, ROUNDS)
        .play()
        .await?;
    Ok(())
}
