use crate::DEFAULT_MODEL;
use crate::DEFAULT_TIMEOUT;
use std::time::Duration;

/// Connection settings for the judge, read once at startup.
///
/// A missing credential is not rejected here; the service reports it on
/// the first request, which the game treats like any other failed round.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    model: String,
    timeout: Duration,
}

impl Config {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            model,
            timeout,
        }
    }

    /// `GEMINI_API_KEY`, `GEMINI_MODEL`, and `JUDGE_TIMEOUT` (e.g. "30s").
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            log::warn!("GEMINI_API_KEY is not set; judge requests will be rejected");
            String::new()
        });
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| String::from(DEFAULT_MODEL));
        let timeout = std::env::var("JUDGE_TIMEOUT")
            .ok()
            .and_then(|s| {
                crate::parse_duration(&s)
                    .or_else(|| {
                        log::warn!("ignoring unparseable JUDGE_TIMEOUT {:?}", s);
                        None
                    })
            })
            .unwrap_or(DEFAULT_TIMEOUT);
        Self::new(api_key, model, timeout)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    pub fn model(&self) -> &str {
        &self.model
    }
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Keeps the credential out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
