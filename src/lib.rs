//! Rock-Paper-Scissors-Plus, refereed by a language model.
//!
//! The player types a move in free text, a bot picks a move at random,
//! and an external text-generation service interprets and judges the round.
pub mod game;
pub mod gameroom;
pub mod judge;
pub mod players;
pub mod prompt;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Rounds per game.
pub const ROUNDS: usize = 5;
/// Chance the bot spends its bomb on any round while it still holds one.
pub const BOMB_PROBABILITY: f64 = 0.2;
/// Inputs that end the game early (compared case-insensitively).
pub const QUIT_SIGNALS: [&str; 2] = ["quit", "exit"];

// ============================================================================
// JUDGE DEFAULTS
// ============================================================================
/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
/// Upper bound on a single judge request when `JUDGE_TIMEOUT` is unset.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);
/// Base URL of the generative language REST API.
pub const GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so that log lines stay out of the way of the game text.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (at, unit) = s.char_indices().last()?;
    let value = s[..at].parse::<u64>().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}
